//! calc-fem CLI Library
//!
//! Drives the calculator page headlessly: button presses go through the
//! same dispatcher the browser uses, rendered into a mock page, with the
//! theme preference persisted to a JSON file.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)] // Error types are self-documenting

mod commands;
mod config;
mod error;
pub mod logging;
mod output;
pub mod runner;
pub mod storage;

pub use commands::{Cli, ColorArg, Commands, FormatArg, PressArgs, ThemeArgs};
pub use config::{CliConfig, ColorChoice, OutputFormat, Verbosity};
pub use error::{CliError, CliResult};
pub use output::{render_json, render_text, PageReport};
pub use runner::{resolve_token, run_press, run_theme, Session};
pub use storage::JsonFileStorage;
