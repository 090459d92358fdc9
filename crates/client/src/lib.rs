//! Terminal harness for the scanner.
//!
//! Reads keys in raw mode, turns them into navigation commands and prints
//! every announcement on its own line so a screen reader picks it up.
//! Diagnostics go to a per-session log file, never to stdout.

mod app;
mod config;
mod input;
pub mod logging;
mod speech;
pub mod terminal;

pub use app::ScannerApp;
pub use config::ClientConfig;
pub use input::{InputHandler, KeyAction};
pub use speech::ConsoleSpeech;
