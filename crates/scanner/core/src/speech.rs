//! Bounded history of spoken announcements.
use std::collections::VecDeque;

use crate::ports::SpeechSink;

/// Snapshot of a single announcement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MessageEntry {
    pub text: String,
    pub sequence: u64,
}

/// Circular buffer of announcements, oldest dropped first.
#[derive(Clone, Debug)]
pub struct MessageLog {
    entries: VecDeque<MessageEntry>,
    capacity: usize,
    next_sequence: u64,
}

impl MessageLog {
    pub const DEFAULT_CAPACITY: usize = 64;

    pub fn new(capacity: usize) -> Self {
        let bounded_capacity = capacity.max(1);
        Self {
            entries: VecDeque::with_capacity(bounded_capacity),
            capacity: bounded_capacity,
            next_sequence: 0,
        }
    }

    pub fn push_text(&mut self, message: impl Into<String>) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(MessageEntry {
            text: message.into(),
            sequence: self.next_sequence,
        });
        self.next_sequence += 1;
    }

    /// Most recent announcement, if any.
    pub fn last(&self) -> Option<&str> {
        self.entries.back().map(|entry| entry.text.as_str())
    }

    pub fn recent(&self, limit: usize) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter().rev().take(limit)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MessageEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Total announcements ever pushed, including evicted ones.
    pub fn total(&self) -> u64 {
        self.next_sequence
    }
}

impl Default for MessageLog {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

impl SpeechSink for MessageLog {
    fn say(&mut self, text: &str) {
        self.push_text(text);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn evicts_oldest_when_full() {
        let mut log = MessageLog::new(2);
        log.say("one");
        log.say("two");
        log.say("three");
        let texts: Vec<_> = log.iter().map(|entry| entry.text.as_str()).collect();
        assert_eq!(texts, vec!["two", "three"]);
        assert_eq!(log.last(), Some("three"));
        assert_eq!(log.total(), 3);
    }

    #[test]
    fn zero_capacity_is_bumped_to_one() {
        let mut log = MessageLog::new(0);
        log.say("a");
        log.say("b");
        assert_eq!(log.len(), 1);
        assert_eq!(log.recent(5).next().map(|entry| entry.sequence), Some(1));
    }
}
