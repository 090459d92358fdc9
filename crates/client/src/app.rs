//! Composition root and key loop.
use std::io::{self, Stdout, Write};
use std::path::PathBuf;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use scanner_content::{ConfigLoader, WorldLoader};
use scanner_core::{
    CursorProvider, CursorState, NavigatorConfig, Navigator, Position, SpeechSink, WorldSnapshot,
};

use crate::config::ClientConfig;
use crate::input::{InputHandler, KeyAction};
use crate::speech::ConsoleSpeech;
use crate::terminal::RawModeGuard;

const DEMO_WORLD: &str = include_str!("../data/demo.ron");

type ConsoleNavigator<W> = Navigator<WorldSnapshot, CursorState, ConsoleSpeech<W>>;

pub struct ScannerApp<W: Write = Stdout> {
    navigator: ConsoleNavigator<W>,
    input: InputHandler,
    world_path: Option<PathBuf>,
}

impl ScannerApp<Stdout> {
    /// Loads world and navigator settings and wires speech to stdout.
    pub fn build(config: ClientConfig) -> Result<Self> {
        Self::with_output(config, io::stdout())
    }
}

impl<W: Write> ScannerApp<W> {
    pub fn with_output(config: ClientConfig, out: W) -> Result<Self> {
        let world = match &config.world_path {
            Some(path) => WorldLoader::load(path)?,
            None => {
                tracing::info!("SCANNER_WORLD not set, using the demo world");
                WorldLoader::parse(DEMO_WORLD)?
            }
        };
        let navigator_config = match &config.config_path {
            Some(path) => ConfigLoader::load(path)?,
            None => NavigatorConfig::default(),
        };
        tracing::debug!(?navigator_config, "navigator configured");

        let start = map_center(&world);
        let navigator = Navigator::with_config(
            world,
            CursorState::new(start),
            ConsoleSpeech::new(out, config.history_capacity),
            navigator_config,
        );

        Ok(Self {
            navigator,
            input: InputHandler::new(),
            world_path: config.world_path,
        })
    }

    /// Runs the raw-mode key loop until the user quits.
    pub fn run(mut self) -> Result<()> {
        let _guard = RawModeGuard::enable()?;
        self.say("Scanner ready. Page up and page down change category, q quits.");

        loop {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if self.apply(self.input.handle_key(key)) {
                        break;
                    }
                }
                _ => {}
            }
        }

        tracing::info!(
            announcements = self.navigator.speech().history().total(),
            "scanner client exiting"
        );
        Ok(())
    }

    /// Applies one key action. Returns `true` when the loop should stop.
    pub fn apply(&mut self, action: KeyAction) -> bool {
        match action {
            KeyAction::Quit => return true,
            KeyAction::Navigate(command) => self.navigator.execute(command),
            KeyAction::MoveCursor { dx, dy } => self.move_cursor(dx, dy),
            KeyAction::Reload => self.reload(),
            KeyAction::None => {}
        }
        false
    }

    pub fn navigator(&self) -> &ConsoleNavigator<W> {
        &self.navigator
    }

    fn move_cursor(&mut self, dx: i32, dy: i32) {
        let dimensions = self.navigator.source().dimensions;
        self.navigator.cursor_mut().move_by(dx, dy, dimensions);
        let position = self.navigator.cursor().cursor();
        self.say(&position.to_string());
    }

    /// Swaps in a fresh snapshot. Cached results refresh on the next rescan.
    fn reload(&mut self) {
        let Some(path) = self.world_path.clone() else {
            self.say("No world file to reload");
            return;
        };

        match WorldLoader::load(&path) {
            Ok(world) => {
                let dimensions = world.dimensions;
                *self.navigator.source_mut() = world;
                let cursor = self.navigator.cursor().cursor();
                self.navigator
                    .cursor_mut()
                    .set_cursor(dimensions.clamp(cursor));
                self.say("World reloaded");
            }
            Err(error) => {
                tracing::warn!(%error, "world reload failed");
                self.say("Reload failed");
            }
        }
    }

    fn say(&mut self, text: &str) {
        self.navigator.speech_mut().say(text);
    }
}

fn map_center(world: &WorldSnapshot) -> Position {
    let dimensions = world.dimensions;
    dimensions.clamp(Position::new(
        (dimensions.width / 2) as i32,
        (dimensions.height / 2) as i32,
    ))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use scanner_core::NavCommand;

    use super::*;

    fn demo_app() -> ScannerApp<Vec<u8>> {
        ScannerApp::with_output(ClientConfig::default(), Vec::new()).unwrap()
    }

    fn last(app: &ScannerApp<Vec<u8>>) -> &str {
        app.navigator().speech().history().last().unwrap_or_default()
    }

    #[test]
    fn demo_world_starts_at_map_center() {
        let app = demo_app();
        assert_eq!(app.navigator().cursor().cursor(), Position::new(20, 15));
    }

    #[test]
    fn navigation_keys_reach_the_navigator() {
        let mut app = demo_app();
        assert!(!app.apply(KeyAction::Navigate(NavCommand::ChangeCategory(-1))));
        assert_eq!(last(&app), "Buildings, Essential, Main Hearth, 1 of 1");

        app.apply(KeyAction::Navigate(NavCommand::ChangeGroup(1)));
        assert_eq!(last(&app), "Small Warehouse, 1 of 1");

        let printed = String::from_utf8(app.navigator().speech().output().clone()).unwrap();
        assert!(printed.ends_with("Small Warehouse, 1 of 1\r\n"));
    }

    #[test]
    fn demo_fog_hides_the_copper_vein() {
        let mut app = demo_app();
        app.apply(KeyAction::Navigate(NavCommand::ChangeCategory(1)));
        let names: Vec<String> = app
            .navigator()
            .state()
            .subcategory_map()
            .unwrap()
            .get(1)
            .unwrap()
            .iter()
            .map(|group| group.display_name.clone())
            .collect();
        assert_eq!(names, vec!["Geyser"]);
    }

    #[test]
    fn cursor_moves_are_clamped_and_spoken() {
        let mut app = demo_app();
        app.apply(KeyAction::MoveCursor { dx: 1, dy: 0 });
        assert_eq!(last(&app), "(21, 15)");

        for _ in 0..40 {
            app.apply(KeyAction::MoveCursor { dx: 0, dy: 1 });
        }
        assert_eq!(app.navigator().cursor().cursor(), Position::new(21, 29));
    }

    #[test]
    fn cursor_moves_on_a_world_without_fields() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(dimensions: (10, 10), unavailable: [fields])").unwrap();
        let config = ClientConfig {
            world_path: Some(file.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let mut app = ScannerApp::with_output(config, Vec::new()).unwrap();
        assert_eq!(app.navigator().cursor().cursor(), Position::new(5, 5));

        app.apply(KeyAction::MoveCursor { dx: 1, dy: 0 });
        assert_eq!(app.navigator().cursor().cursor(), Position::new(6, 5));
        assert_eq!(last(&app), "(6, 5)");
    }

    #[test]
    fn quit_stops_the_loop() {
        let mut app = demo_app();
        assert!(app.apply(KeyAction::Quit));
        assert!(!app.apply(KeyAction::None));
    }

    #[test]
    fn reload_without_a_world_file_is_announced() {
        let mut app = demo_app();
        app.apply(KeyAction::Reload);
        assert_eq!(last(&app), "No world file to reload");
    }

    #[test]
    fn reload_picks_up_file_changes() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(dimensions: (10, 10))").unwrap();
        let config = ClientConfig {
            world_path: Some(file.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let mut app = ScannerApp::with_output(config, Vec::new()).unwrap();
        app.apply(KeyAction::Navigate(NavCommand::ChangeCategory(-1)));
        assert_eq!(last(&app), "No buildings");

        std::fs::write(
            file.path(),
            r#"(dimensions: (10, 10), buildings: [(at: (6, 5), name: "Hearth", type_name: "Hearth")])"#,
        )
        .unwrap();
        app.apply(KeyAction::Reload);
        assert_eq!(last(&app), "World reloaded");

        app.apply(KeyAction::Navigate(NavCommand::ChangeGroup(1)));
        assert_eq!(last(&app), "Hearth, 1 of 1");
    }

    #[test]
    fn failed_reload_keeps_the_old_world() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "(dimensions: (10, 10))").unwrap();
        let config = ClientConfig {
            world_path: Some(file.path().to_path_buf()),
            ..ClientConfig::default()
        };
        let mut app = ScannerApp::with_output(config, Vec::new()).unwrap();

        std::fs::write(file.path(), "not ron").unwrap();
        app.apply(KeyAction::Reload);
        assert_eq!(last(&app), "Reload failed");
        assert_eq!(app.navigator().source().dimensions.width, 10);
    }
}
