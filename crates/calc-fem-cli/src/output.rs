//! Result rendering for the terminal

use calc_fem::core::RenderedDisplay;
use calc_fem::theme::{Theme, ToggleIndicator};
use console::style;
use serde::Serialize;

use crate::error::CliResult;

/// What the page shows after a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageReport {
    /// Display regions; absent for theme-only commands
    #[serde(flatten)]
    pub display: Option<RenderedDisplay>,
    /// Active theme
    pub theme: Theme,
    /// Toggle switch position
    pub indicator: ToggleIndicator,
}

impl PageReport {
    /// Report for a theme with no display
    #[must_use]
    pub fn theme_only(theme: Theme) -> Self {
        Self {
            display: None,
            theme,
            indicator: theme.indicator(),
        }
    }

    /// Report for a theme and both display regions
    #[must_use]
    pub fn with_display(theme: Theme, display: RenderedDisplay) -> Self {
        Self {
            display: Some(display),
            ..Self::theme_only(theme)
        }
    }
}

/// Renders a report as aligned `label: value` lines
#[must_use]
pub fn render_text(report: &PageReport) -> String {
    let mut out = String::new();
    if let Some(display) = &report.display {
        out.push_str(&format!(
            "{} {}\n",
            style("previous:").dim(),
            style(&display.previous).cyan()
        ));
        out.push_str(&format!(
            "{}  {}\n",
            style("current:").dim(),
            style(&display.current).bold()
        ));
    }
    out.push_str(&format!(
        "{}    {} ({})\n",
        style("theme:").dim(),
        style(report.theme).green(),
        report.indicator.class_name()
    ));
    out
}

/// Renders a report as a JSON object
pub fn render_json(report: &PageReport) -> CliResult<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
