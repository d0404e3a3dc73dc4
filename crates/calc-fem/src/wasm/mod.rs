//! Page frontend
//!
//! The dispatcher, keypad and mock page are always compiled so the full
//! click-to-render path can be tested natively; the `web-sys` bindings are
//! behind the `wasm` feature.

#[cfg(feature = "wasm")]
mod browser;
mod dispatcher;
mod dom;
mod keypad;

#[cfg(feature = "wasm")]
pub use browser::{mount, BrowserSurface, LocalStorage, SharedDispatcher};
pub use dispatcher::{Dispatcher, MockDispatcher};
pub use dom::{
    toggle_section_id, DisplayRegion, DomElement, DomEvent, DomSurface, MockDom,
    THEME_ATTRIBUTE, TOGGLE_SWITCH_ID,
};
pub use keypad::{ControlKind, Keypad, KeypadAction, KeypadButtonDef};
