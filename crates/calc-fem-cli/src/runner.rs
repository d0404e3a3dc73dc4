//! Headless page session
//!
//! A [`Session`] is one page load: the mock calculator page, a fresh
//! calculation, and the theme preference read from the storage file.

use calc_fem::theme::Theme;
use calc_fem::wasm::{Dispatcher, Keypad, MockDom};
use tracing::{debug, info};

use crate::config::{CliConfig, OutputFormat};
use crate::error::{CliError, CliResult};
use crate::output::{render_json, render_text, PageReport};
use crate::storage::JsonFileStorage;

/// Prefix shared by the theme toggle zone ids
const TOGGLE_PREFIX: &str = "toggle-";

/// One headless page load
#[derive(Debug)]
pub struct Session {
    dispatcher: Dispatcher<MockDom, JsonFileStorage>,
}

impl Session {
    /// Loads the page over the given storage
    pub fn open(storage: JsonFileStorage) -> Self {
        let mut dispatcher = Dispatcher::with_storage(storage);
        let theme = dispatcher.init();
        info!(%theme, "page loaded");
        Self { dispatcher }
    }

    /// Loads the page over the configured storage file
    pub fn from_config(config: &CliConfig) -> CliResult<Self> {
        let path = config.resolve_storage_path()?;
        Ok(Self::open(JsonFileStorage::open(path)?))
    }

    /// Clicks each token in order
    pub fn press<S: AsRef<str>>(&mut self, tokens: &[S]) -> CliResult<()> {
        for token in tokens {
            let id = resolve_token(self.dispatcher.keypad(), token.as_ref())?;
            debug!(token = token.as_ref(), %id, "press");
            self.dispatcher.click(&id)?;
        }
        Ok(())
    }

    /// Selects a theme by its identifier
    pub fn select_theme(&mut self, raw: &str) -> CliResult<Theme> {
        let theme: Theme = raw.trim().parse()?;
        self.dispatcher.apply_theme(theme);
        Ok(theme)
    }

    /// The active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.dispatcher.theme()
    }

    /// The page as it is now, including both display regions
    pub fn page_report(&mut self) -> PageReport {
        PageReport::with_display(self.dispatcher.theme(), self.dispatcher.render())
    }

    /// The page being driven
    #[must_use]
    pub fn dom(&self) -> &MockDom {
        self.dispatcher.surface()
    }
}

/// Maps a token to a page element id
///
/// Accepts button ids, button labels (case-insensitive) and theme toggle ids.
pub fn resolve_token(keypad: &Keypad, token: &str) -> CliResult<String> {
    let token = token.trim();
    if let Some(button) = keypad.find_button_by_id(token) {
        return Ok(button.id.clone());
    }
    if token.starts_with(TOGGLE_PREFIX) {
        return Ok(token.to_string());
    }
    keypad
        .find_button_by_label(token)
        .map(|button| button.id.clone())
        .ok_or_else(|| CliError::invalid_argument(format!("no button matches {token:?}")))
}

/// Runs `press`
pub fn run_press(config: &CliConfig, tokens: &[String]) -> CliResult<()> {
    let mut session = Session::from_config(config)?;
    session.press(tokens)?;
    emit(config, &session.page_report())
}

/// Runs `theme`
pub fn run_theme(config: &CliConfig, theme: Option<&str>) -> CliResult<()> {
    let mut session = Session::from_config(config)?;
    let theme = match theme {
        Some(raw) => session.select_theme(raw)?,
        None => session.theme(),
    };
    emit(config, &PageReport::theme_only(theme))
}

fn emit(config: &CliConfig, report: &PageReport) -> CliResult<()> {
    if config.verbosity.is_quiet() {
        return Ok(());
    }
    match config.format {
        OutputFormat::Text => print!("{}", render_text(report)),
        OutputFormat::Json => println!("{}", render_json(report)?),
    }
    Ok(())
}
