//! calc-fem - a two-operand calculator with a three-theme page
//!
//! The crate is split the same way the page is:
//!
//! - [`core`]: the operand state machine and display formatting
//! - [`theme`]: the persisted theme preference
//! - [`wasm`]: keypad, click dispatcher, mock page, and (feature `wasm`)
//!   the browser bindings
//!
//! # Example
//!
//! ```rust
//! use calc_fem::prelude::*;
//!
//! let mut dispatcher = MockDispatcher::default();
//! dispatcher.init();
//!
//! for id in ["btn-1", "btn-2", "btn-3", "btn-4", "btn-plus", "btn-1", "btn-equals"] {
//!     dispatcher.click(id).unwrap();
//! }
//! assert_eq!(dispatcher.display_text(DisplayRegion::Current), "1,235");
//! assert_eq!(dispatcher.theme(), Theme::One);
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod theme;
pub mod wasm;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        format_display_number, render_display, CalcError, CalcResult, CalculatorState,
        InputToken, Operation, Phase, RenderedDisplay,
    };
    pub use crate::theme::{
        MemoryStorage, Theme, ThemeStorage, ThemeSwitcher, ToggleIndicator, THEME_STORAGE_KEY,
    };
    pub use crate::wasm::{
        ControlKind, DisplayRegion, Dispatcher, DomSurface, Keypad, KeypadAction, MockDispatcher,
        MockDom,
    };
}
