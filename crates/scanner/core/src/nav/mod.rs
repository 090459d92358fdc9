//! Navigation state machine over scan results.
//!
//! Rescan policy per command:
//!
//! | Command             | Rescan                                   |
//! |---------------------|------------------------------------------|
//! | `ChangeCategory`    | always, every subcategory                |
//! | `ChangeSubcategory` | only when no subcategory map is cached   |
//! | `ChangeGroup`       | always, current (sub)category only       |
//! | `ChangeItem`        | never                                    |
//! | `AnnounceDistance`  | never                                    |
//! | `MoveCursorToItem`  | never                                    |
//!
//! Item steps never rescan so the list the user is walking cannot reorder
//! underneath them.
pub mod announce;
mod command;
mod state;

pub use command::NavCommand;
pub use state::{NavigationState, wrap_index};

use strum::EnumCount;

use crate::classify::Category;
use crate::config::NavigatorConfig;
use crate::env::EntitySource;
use crate::geometry::Bearing;
use crate::ports::{CursorProvider, SpeechSink};
use crate::scan::Scanner;

/// Owns navigation state and drives scans, cursor moves and speech.
pub struct Navigator<S, C, K> {
    source: S,
    cursor: C,
    speech: K,
    scanner: Scanner,
    config: NavigatorConfig,
    state: NavigationState,
}

impl<S, C, K> Navigator<S, C, K>
where
    S: EntitySource,
    C: CursorProvider,
    K: SpeechSink,
{
    pub fn new(source: S, cursor: C, speech: K) -> Self {
        Self::with_config(source, cursor, speech, NavigatorConfig::default())
    }

    pub fn with_config(source: S, cursor: C, speech: K, config: NavigatorConfig) -> Self {
        Self {
            source,
            cursor,
            speech,
            scanner: Scanner::new(config.metrics),
            config,
            state: NavigationState::new(),
        }
    }

    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    pub fn config(&self) -> &NavigatorConfig {
        &self.config
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Mutable world access. Cached results stay as they are until the next rescan.
    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn cursor(&self) -> &C {
        &self.cursor
    }

    pub fn cursor_mut(&mut self) -> &mut C {
        &mut self.cursor
    }

    pub fn speech(&self) -> &K {
        &self.speech
    }

    pub fn speech_mut(&mut self) -> &mut K {
        &mut self.speech
    }

    /// Dispatches a command.
    pub fn execute(&mut self, command: NavCommand) {
        tracing::trace!(?command, "executing navigation command");
        match command {
            NavCommand::ChangeCategory(direction) => self.change_category(direction),
            NavCommand::ChangeSubcategory(direction) => self.change_subcategory(direction),
            NavCommand::ChangeGroup(direction) => self.change_group(direction),
            NavCommand::ChangeItem(direction) => self.change_item(direction),
            NavCommand::AnnounceDistance => self.announce_distance(),
            NavCommand::MoveCursorToItem => self.move_cursor_to_item(),
        }
    }

    /// Moves to the next or previous category and rescans it.
    ///
    /// Subcategorized categories land on their first non-empty subcategory.
    pub fn change_category(&mut self, direction: i32) {
        let next = wrap_index(self.state.category.index(), direction, Category::COUNT);
        let category = Category::from_index(next).unwrap_or_default();
        self.state.enter_category(category);
        tracing::info!(%category, "category changed");

        let cursor = self.cursor.cursor();
        if category.has_subcategories() {
            let map = self
                .scanner
                .scan_with_subcategories(&self.source, category, cursor);
            let first = map.first_non_empty();
            self.state.subcategories = Some(map);

            let Some(subcategory) = first else {
                self.say(category.empty_message());
                return;
            };
            self.state.subcategory = subcategory;
        } else {
            self.state.result = Some(self.scanner.scan_category(&self.source, category, cursor));
        }

        let line = match self.state.current_group() {
            Some(group) => announce::category_line(
                category,
                category.subcategory_name(self.state.subcategory),
                group,
                self.state.item,
            ),
            None => category.empty_message().to_owned(),
        };
        self.say(&line);
    }

    /// Steps through subcategories, skipping empty ones.
    ///
    /// Gives up after one full lap and leaves the subcategory unchanged.
    pub fn change_subcategory(&mut self, direction: i32) {
        let category = self.state.category;
        if !category.has_subcategories() {
            self.say(category.exhausted_message());
            return;
        }

        if self.state.subcategories.is_none() {
            let cursor = self.cursor.cursor();
            self.state.subcategories = Some(self.scanner.scan_with_subcategories(
                &self.source,
                category,
                cursor,
            ));
        }

        let count = category.subcategory_count();
        let prior = self.state.subcategory;
        let found = self.state.subcategories.as_ref().and_then(|map| {
            let mut index = prior;
            (0..count).find_map(|_| {
                index = wrap_index(index, direction, count);
                (!map.is_empty_at(index)).then_some(index)
            })
        });

        let Some(subcategory) = found else {
            self.state.subcategory = prior;
            tracing::debug!(%category, "every subcategory is empty");
            self.say(category.exhausted_message());
            return;
        };

        self.state.subcategory = subcategory;
        self.state.reset_position();
        let name = category.subcategory_name(subcategory).unwrap_or_default();
        let line = match self.state.current_group() {
            Some(group) => announce::subcategory_line(name, group, self.state.item),
            None => category.empty_message().to_owned(),
        };
        self.say(&line);
    }

    /// Rescans the current (sub)category and steps to the next or previous group.
    pub fn change_group(&mut self, direction: i32) {
        self.rescan_current();

        let Some(count) = self
            .state
            .current_result()
            .map(|result| result.len())
            .filter(|&count| count > 0)
        else {
            self.say(self.state.category.empty_message());
            return;
        };

        self.state.group = wrap_index(self.state.group, direction, count);
        self.state.item = 0;
        let line = match self.state.current_group() {
            Some(group) => announce::position_line(group, self.state.item),
            None => self.state.category.empty_message().to_owned(),
        };
        self.say(&line);
    }

    /// Steps within the current group without rescanning.
    pub fn change_item(&mut self, direction: i32) {
        let Some(count) = self
            .state
            .current_group()
            .map(|group| group.len())
            .filter(|&count| count > 0)
        else {
            self.say(self.state.category.empty_message());
            return;
        };

        self.state.item = wrap_index(self.state.item, direction, count);
        let mut line = announce::item_line(self.state.item, count);
        if self.config.announce_distance_on_item
            && let Some(distance) = self.distance_to_current()
        {
            line.push_str(", ");
            line.push_str(&distance);
        }
        self.say(&line);
    }

    /// Speaks distance and compass direction from the cursor to the current item.
    pub fn announce_distance(&mut self) {
        match self.distance_to_current() {
            Some(line) => self.say(&line),
            None => self.say(self.state.category.empty_message()),
        }
    }

    /// Puts the map cursor on the current item.
    pub fn move_cursor_to_item(&mut self) {
        let Some((group, item)) = self.state.current_item() else {
            self.say(self.state.category.empty_message());
            return;
        };
        let line = announce::moved_line(group);
        let target = item.position;
        self.cursor.set_cursor(target);
        tracing::debug!(%target, "cursor moved to item");
        self.say(&line);
    }

    fn rescan_current(&mut self) {
        let category = self.state.category;
        let cursor = self.cursor.cursor();

        if !category.has_subcategories() {
            self.state.result = Some(self.scanner.scan_category(&self.source, category, cursor));
            return;
        }

        let subcategory = self.state.subcategory;
        match self.state.subcategories.as_mut() {
            Some(map) => {
                let fresh =
                    self.scanner
                        .scan_subcategory(&self.source, category, subcategory, cursor);
                map.replace(subcategory, fresh);
            }
            None => {
                self.state.subcategories = Some(self.scanner.scan_with_subcategories(
                    &self.source,
                    category,
                    cursor,
                ));
            }
        }
    }

    /// Measured from the live cursor, unlike the scan-time item distance.
    fn distance_to_current(&self) -> Option<String> {
        let (_, item) = self.state.current_item()?;
        let cursor = self.cursor.cursor();
        let metric = self.scanner.metrics().for_category(self.state.category);
        let distance = metric.distance(cursor, item.position);
        Some(announce::distance_line(
            distance,
            Bearing::between(cursor, item.position),
        ))
    }

    fn say(&mut self, text: &str) {
        tracing::debug!(text, "announce");
        self.speech.say(text);
    }
}
