//! Click dispatcher
//!
//! Owns the single [`CalculatorState`] for a page session and routes every
//! click to it, re-rendering both display regions afterwards. The surface
//! and the theme storage are type parameters so the same dispatcher drives
//! the mock page, the headless CLI and the browser.

use tracing::debug;

use crate::core::{render_display, CalcError, CalcResult, CalculatorState, RenderedDisplay};
use crate::theme::{MemoryStorage, Theme, ThemeStorage, ThemeSwitcher};
use crate::wasm::dom::{DisplayRegion, DomEvent, DomSurface, MockDom};
use crate::wasm::keypad::{require_button, ControlKind, Keypad, KeypadAction};

/// Prefix of the theme toggle zone ids (`toggle-1` .. `toggle-3`)
const TOGGLE_ID_PREFIX: &str = "toggle-";

/// Routes clicks to the calculator and renders the result
#[derive(Debug)]
pub struct Dispatcher<D, S> {
    state: CalculatorState,
    themes: ThemeSwitcher<S>,
    keypad: Keypad,
    surface: D,
}

/// Dispatcher over the in-memory page and storage
pub type MockDispatcher = Dispatcher<MockDom, MemoryStorage>;

impl<D: DomSurface, S: ThemeStorage> Dispatcher<D, S> {
    /// Creates a dispatcher with an empty calculation
    pub fn new(surface: D, storage: S) -> Self {
        Self {
            state: CalculatorState::new(),
            themes: ThemeSwitcher::new(storage),
            keypad: Keypad::new(),
            surface,
        }
    }

    /// Applies the stored theme and draws the empty display
    pub fn init(&mut self) -> Theme {
        let theme = self.themes.initial_theme();
        self.apply_theme(theme);
        self.render();
        theme
    }

    /// Performs one keypad action and re-renders
    pub fn dispatch(&mut self, action: KeypadAction) -> RenderedDisplay {
        debug!(?action, "dispatch");
        match action {
            KeypadAction::Digit(_) | KeypadAction::Decimal => {
                if let Some(token) = action.input_token() {
                    self.state.append_digit(token);
                }
            }
            KeypadAction::Operator(op) => self.state.choose_operation(op),
            KeypadAction::Delete => self.state.delete_last(),
            KeypadAction::Reset => self.state.reset(),
            KeypadAction::Equals => self.state.compute(),
        }
        self.render()
    }

    /// Handles a click on a keypad button or theme toggle zone by id
    ///
    /// Unknown ids leave the calculation and the page untouched.
    pub fn handle_click(&mut self, element_id: &str) -> CalcResult<()> {
        if let Some(raw) = element_id.strip_prefix(TOGGLE_ID_PREFIX) {
            let theme = raw
                .parse()
                .map_err(|_| CalcError::unknown_control(element_id))?;
            self.apply_theme(theme);
            return Ok(());
        }
        let action = require_button(&self.keypad, element_id)?.action;
        self.dispatch(action);
        Ok(())
    }

    /// Handles a control identified by its kind and visible label
    pub fn handle_control(&mut self, kind: ControlKind, label: &str) -> CalcResult<()> {
        let action = KeypadAction::from_control(kind, label)?;
        self.dispatch(action);
        Ok(())
    }

    /// Applies a theme from a raw `data-section` value
    ///
    /// Values other than `1`, `2`, `3` are ignored.
    pub fn select_theme(&mut self, raw: &str) -> Option<Theme> {
        match raw.parse::<Theme>() {
            Ok(theme) => {
                self.apply_theme(theme);
                Some(theme)
            }
            Err(e) => {
                debug!(error = %e, "theme selection ignored");
                None
            }
        }
    }

    /// Applies a theme to the page and persists it
    pub fn apply_theme(&mut self, theme: Theme) {
        self.surface.apply_theme(theme);
        self.themes.select(theme);
    }

    /// Writes both display regions from the current state
    pub fn render(&mut self) -> RenderedDisplay {
        let display = render_display(&self.state);
        self.surface
            .set_display_text(DisplayRegion::Previous, &display.previous);
        self.surface
            .set_display_text(DisplayRegion::Current, &display.current);
        display
    }

    /// The running calculation
    #[must_use]
    pub fn state(&self) -> &CalculatorState {
        &self.state
    }

    /// The active theme
    #[must_use]
    pub fn theme(&self) -> Theme {
        self.themes.current()
    }

    /// The keypad layout
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The page being rendered into
    #[must_use]
    pub fn surface(&self) -> &D {
        &self.surface
    }

    /// Mutable access to the page
    pub fn surface_mut(&mut self) -> &mut D {
        &mut self.surface
    }

    /// Splits the dispatcher into its surface and storage
    pub fn into_parts(self) -> (D, S) {
        (self.surface, self.themes.into_storage())
    }
}

impl<S: ThemeStorage> Dispatcher<MockDom, S> {
    /// Creates a dispatcher over a fresh mock calculator page
    pub fn with_storage(storage: S) -> Self {
        let mut dom = MockDom::calculator();
        dom.dispatch_event(DomEvent::Load);
        Self::new(dom, storage)
    }

    /// Simulates a click: records the event, then handles it
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        self.surface.dispatch_event(DomEvent::click(element_id));
        self.handle_click(element_id)
    }

    /// Text currently shown in a display region
    #[must_use]
    pub fn display_text(&self, region: DisplayRegion) -> &str {
        self.surface.display_text(region)
    }
}

impl Default for MockDispatcher {
    fn default() -> Self {
        Self::with_storage(MemoryStorage::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Operation;
    use crate::theme::THEME_STORAGE_KEY;

    fn started() -> MockDispatcher {
        let mut dispatcher = MockDispatcher::default();
        dispatcher.init();
        dispatcher
    }

    fn click_all(dispatcher: &mut MockDispatcher, ids: &[&str]) {
        for id in ids {
            dispatcher.click(id).unwrap();
        }
    }

    // ===== Initialisation =====

    #[test]
    fn test_init_applies_default_theme() {
        let dispatcher = started();
        assert_eq!(dispatcher.theme(), Theme::One);
        assert_eq!(dispatcher.surface().theme_attribute(), Some("1"));
        assert_eq!(dispatcher.surface().toggle_classes(), ["left"]);
    }

    #[test]
    fn test_init_applies_stored_theme() {
        let storage = MemoryStorage::with_item(THEME_STORAGE_KEY, "3");
        let mut dispatcher = MockDispatcher::with_storage(storage);
        assert_eq!(dispatcher.init(), Theme::Three);
        assert_eq!(dispatcher.surface().toggle_classes(), ["right"]);
    }

    #[test]
    fn test_init_renders_empty_display() {
        let dispatcher = started();
        assert_eq!(dispatcher.display_text(DisplayRegion::Previous), "");
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "");
        assert_eq!(dispatcher.surface().event_history(), &[DomEvent::Load]);
    }

    // ===== Keypad clicks =====

    #[test]
    fn test_click_digits_render_grouped() {
        let mut dispatcher = started();
        click_all(
            &mut dispatcher,
            &["btn-1", "btn-2", "btn-3", "btn-4", "btn-decimal", "btn-5"],
        );
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "1,234.5");
    }

    #[test]
    fn test_click_operator_shows_previous() {
        let mut dispatcher = started();
        click_all(&mut dispatcher, &["btn-5", "btn-times"]);
        assert_eq!(dispatcher.display_text(DisplayRegion::Previous), "5 *");
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "");
    }

    #[test]
    fn test_click_equals() {
        let mut dispatcher = started();
        click_all(&mut dispatcher, &["btn-5", "btn-plus", "btn-3", "btn-equals"]);
        assert_eq!(dispatcher.display_text(DisplayRegion::Previous), "");
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "8");
        assert_eq!(dispatcher.state().current_operand(), "8");
    }

    #[test]
    fn test_click_chain() {
        let mut dispatcher = started();
        click_all(
            &mut dispatcher,
            &["btn-5", "btn-plus", "btn-3", "btn-plus", "btn-2"],
        );
        assert_eq!(dispatcher.display_text(DisplayRegion::Previous), "8 +");
        dispatcher.click("btn-equals").unwrap();
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "10");
    }

    #[test]
    fn test_click_delete_and_reset() {
        let mut dispatcher = started();
        click_all(&mut dispatcher, &["btn-9", "btn-8", "btn-del"]);
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "9");
        click_all(&mut dispatcher, &["btn-minus", "btn-1", "btn-reset"]);
        assert_eq!(dispatcher.state(), &CalculatorState::new());
        assert_eq!(dispatcher.display_text(DisplayRegion::Previous), "");
    }

    #[test]
    fn test_click_divide_by_zero() {
        let mut dispatcher = started();
        click_all(&mut dispatcher, &["btn-5", "btn-divide", "btn-0", "btn-equals"]);
        assert_eq!(dispatcher.state().current_operand(), "Infinity");
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "");
    }

    #[test]
    fn test_click_unknown_id_is_rejected() {
        let mut dispatcher = started();
        dispatcher.click("btn-7").unwrap();
        assert_eq!(
            dispatcher.click("btn-power"),
            Err(CalcError::unknown_control("btn-power"))
        );
        assert_eq!(dispatcher.state().current_operand(), "7");
    }

    #[test]
    fn test_clicks_are_recorded() {
        let mut dispatcher = started();
        click_all(&mut dispatcher, &["btn-1", "toggle-2"]);
        assert_eq!(
            dispatcher.surface().event_history(),
            &[
                DomEvent::Load,
                DomEvent::click("btn-1"),
                DomEvent::click("toggle-2")
            ]
        );
    }

    // ===== Control resolution =====

    #[test]
    fn test_handle_control_by_label() {
        let mut dispatcher = started();
        dispatcher.handle_control(ControlKind::Number, "6").unwrap();
        dispatcher.handle_control(ControlKind::Operation, "x").unwrap();
        dispatcher.handle_control(ControlKind::Number, "7").unwrap();
        dispatcher.handle_control(ControlKind::Equals, "=").unwrap();
        assert_eq!(dispatcher.display_text(DisplayRegion::Current), "42");
    }

    #[test]
    fn test_handle_control_rejects_bad_label() {
        let mut dispatcher = started();
        assert!(dispatcher.handle_control(ControlKind::Number, "ab").is_err());
        assert_eq!(dispatcher.state(), &CalculatorState::new());
    }

    #[test]
    fn test_dispatch_returns_display() {
        let mut dispatcher = started();
        dispatcher.dispatch(KeypadAction::Digit(4));
        let display = dispatcher.dispatch(KeypadAction::Operator(Operation::Subtract));
        assert_eq!(display.previous, "4 -");
        assert_eq!(display.current, "");
    }

    // ===== Theme =====

    #[test]
    fn test_click_toggle_switches_and_persists() {
        let mut dispatcher = started();
        dispatcher.click("toggle-2").unwrap();
        assert_eq!(dispatcher.theme(), Theme::Two);
        assert_eq!(dispatcher.surface().theme_attribute(), Some("2"));
        assert_eq!(dispatcher.surface().toggle_classes(), ["center"]);

        let (_, storage) = dispatcher.into_parts();
        assert_eq!(
            storage.get_item(THEME_STORAGE_KEY).unwrap().as_deref(),
            Some("2")
        );
    }

    #[test]
    fn test_click_unknown_toggle() {
        let mut dispatcher = started();
        assert!(dispatcher.click("toggle-4").is_err());
        assert_eq!(dispatcher.theme(), Theme::One);
    }

    #[test]
    fn test_theme_does_not_touch_calculation() {
        let mut dispatcher = started();
        click_all(&mut dispatcher, &["btn-3", "btn-plus", "toggle-3"]);
        assert_eq!(dispatcher.state().previous_operand(), "3");
        assert_eq!(dispatcher.display_text(DisplayRegion::Previous), "3 +");
    }

    #[test]
    fn test_select_theme_ignores_unknown() {
        let mut dispatcher = started();
        assert_eq!(dispatcher.select_theme("3"), Some(Theme::Three));
        assert_eq!(dispatcher.select_theme("dark"), None);
        assert_eq!(dispatcher.theme(), Theme::Three);
    }

    #[test]
    fn test_theme_survives_new_session() {
        let mut first = started();
        first.click("toggle-3").unwrap();
        let (_, storage) = first.into_parts();

        let mut second = MockDispatcher::with_storage(storage);
        assert_eq!(second.init(), Theme::Three);
    }
}
