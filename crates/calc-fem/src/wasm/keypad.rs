//! Calculator keypad
//!
//! Layout:
//! ```text
//! [ 7 ] [ 8 ] [ 9 ] [ DEL ]
//! [ 4 ] [ 5 ] [ 6 ] [  +  ]
//! [ 1 ] [ 2 ] [ 3 ] [  -  ]
//! [ . ] [ 0 ] [ / ] [  x  ]
//! [   RESET   ] [    =    ]
//! ```
//!
//! Buttons are tagged with a data attribute naming their kind, and the page
//! wiring dispatches on that kind plus the button's visible label.

use crate::core::{CalcError, CalcResult, InputToken, Operation};
use crate::wasm::dom::DomElement;

/// Kind of control, mirrored by a data attribute on the button
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    /// Digit or decimal point (`data-number`)
    Number,
    /// Arithmetic operator (`data-operation`)
    Operation,
    /// Delete last character (`data-del`)
    Delete,
    /// Reset everything (`data-reset`)
    Reset,
    /// Compute (`data-equals`)
    Equals,
}

impl ControlKind {
    /// All control kinds
    pub const ALL: [Self; 5] = [
        Self::Number,
        Self::Operation,
        Self::Delete,
        Self::Reset,
        Self::Equals,
    ];

    /// Data attribute carried by buttons of this kind
    #[must_use]
    pub const fn data_attribute(&self) -> &'static str {
        match self {
            Self::Number => "data-number",
            Self::Operation => "data-operation",
            Self::Delete => "data-del",
            Self::Reset => "data-reset",
            Self::Equals => "data-equals",
        }
    }

    /// CSS selector matching buttons of this kind
    #[must_use]
    pub fn selector(&self) -> String {
        format!("[{}]", self.data_attribute())
    }
}

/// Actions that keypad buttons can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeypadAction {
    /// Insert a digit (0-9)
    Digit(u8),
    /// Insert a decimal point
    Decimal,
    /// Choose an operator
    Operator(Operation),
    /// Delete the last character
    Delete,
    /// Clear everything
    Reset,
    /// Compute the pending operation
    Equals,
}

impl KeypadAction {
    /// Resolves a control from its kind and visible label
    ///
    /// Number labels must be a single digit or `.`; operator labels use the
    /// keypad glyphs, so `x` means multiply.
    pub fn from_control(kind: ControlKind, label: &str) -> CalcResult<Self> {
        match kind {
            ControlKind::Number => Ok(match InputToken::parse(label.trim())? {
                InputToken::Digit(d) => Self::Digit(d),
                InputToken::Decimal => Self::Decimal,
            }),
            ControlKind::Operation => label.parse().map(Self::Operator),
            ControlKind::Delete => Ok(Self::Delete),
            ControlKind::Reset => Ok(Self::Reset),
            ControlKind::Equals => Ok(Self::Equals),
        }
    }

    /// Returns the kind of control that performs this action
    #[must_use]
    pub const fn kind(&self) -> ControlKind {
        match self {
            Self::Digit(_) | Self::Decimal => ControlKind::Number,
            Self::Operator(_) => ControlKind::Operation,
            Self::Delete => ControlKind::Delete,
            Self::Reset => ControlKind::Reset,
            Self::Equals => ControlKind::Equals,
        }
    }

    /// Returns the input token for digit and decimal actions
    #[must_use]
    pub const fn input_token(&self) -> Option<InputToken> {
        match self {
            Self::Digit(d) => Some(InputToken::Digit(*d)),
            Self::Decimal => Some(InputToken::Decimal),
            _ => None,
        }
    }

    /// Returns the button label for this action
    #[must_use]
    pub fn label(&self) -> String {
        match self {
            Self::Digit(d) => d.to_string(),
            Self::Decimal => ".".to_string(),
            Self::Operator(op) => op.glyph().to_string(),
            Self::Delete => "DEL".to_string(),
            Self::Reset => "RESET".to_string(),
            Self::Equals => "=".to_string(),
        }
    }
}

/// A single keypad button definition
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButtonDef {
    /// The action this button performs
    pub action: KeypadAction,
    /// The DOM element ID for this button
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
    /// Number of columns covered
    pub span: usize,
}

impl KeypadButtonDef {
    /// Creates a single-column button definition
    #[must_use]
    pub fn new(action: KeypadAction, row: usize, col: usize) -> Self {
        Self::spanning(action, row, col, 1)
    }

    /// Creates a button covering `span` columns
    #[must_use]
    pub fn spanning(action: KeypadAction, row: usize, col: usize, span: usize) -> Self {
        let id = match action {
            KeypadAction::Digit(d) => format!("btn-{d}"),
            KeypadAction::Decimal => "btn-decimal".to_string(),
            KeypadAction::Operator(op) => format!("btn-{}", op_name(op)),
            KeypadAction::Delete => "btn-del".to_string(),
            KeypadAction::Reset => "btn-reset".to_string(),
            KeypadAction::Equals => "btn-equals".to_string(),
        };
        Self {
            action,
            id,
            row,
            col,
            span,
        }
    }

    /// True when this button covers grid cell (`row`, `col`)
    #[must_use]
    pub fn covers(&self, row: usize, col: usize) -> bool {
        self.row == row && (self.col..self.col + self.span).contains(&col)
    }
}

/// Returns a name for an operator (for element IDs)
const fn op_name(op: Operation) -> &'static str {
    match op {
        Operation::Add => "plus",
        Operation::Subtract => "minus",
        Operation::Multiply => "times",
        Operation::Divide => "divide",
    }
}

/// Keypad layout definition
#[derive(Debug, Clone)]
pub struct Keypad {
    /// Button definitions
    buttons: Vec<KeypadButtonDef>,
    /// Number of columns
    cols: usize,
    /// Number of rows
    rows: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 7 8 9 DEL
            KeypadButtonDef::new(KeypadAction::Digit(7), 0, 0),
            KeypadButtonDef::new(KeypadAction::Digit(8), 0, 1),
            KeypadButtonDef::new(KeypadAction::Digit(9), 0, 2),
            KeypadButtonDef::new(KeypadAction::Delete, 0, 3),
            // Row 1: 4 5 6 +
            KeypadButtonDef::new(KeypadAction::Digit(4), 1, 0),
            KeypadButtonDef::new(KeypadAction::Digit(5), 1, 1),
            KeypadButtonDef::new(KeypadAction::Digit(6), 1, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Add), 1, 3),
            // Row 2: 1 2 3 -
            KeypadButtonDef::new(KeypadAction::Digit(1), 2, 0),
            KeypadButtonDef::new(KeypadAction::Digit(2), 2, 1),
            KeypadButtonDef::new(KeypadAction::Digit(3), 2, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Subtract), 2, 3),
            // Row 3: . 0 / x
            KeypadButtonDef::new(KeypadAction::Decimal, 3, 0),
            KeypadButtonDef::new(KeypadAction::Digit(0), 3, 1),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Divide), 3, 2),
            KeypadButtonDef::new(KeypadAction::Operator(Operation::Multiply), 3, 3),
            // Row 4: RESET =
            KeypadButtonDef::spanning(KeypadAction::Reset, 4, 0, 2),
            KeypadButtonDef::spanning(KeypadAction::Equals, 4, 2, 2),
        ];

        Self {
            buttons,
            cols: 4,
            rows: 5,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Gets all button definitions
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButtonDef] {
        &self.buttons
    }

    /// Gets the button covering a grid cell
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButtonDef> {
        if row >= self.rows || col >= self.cols {
            return None;
        }
        self.buttons.iter().find(|b| b.covers(row, col))
    }

    /// Finds a button by element ID
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButtonDef> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds a button by its visible label (case-insensitive)
    #[must_use]
    pub fn find_button_by_label(&self, label: &str) -> Option<&KeypadButtonDef> {
        self.buttons
            .iter()
            .find(|b| b.action.label().eq_ignore_ascii_case(label))
    }

    /// Creates DOM elements for all keypad buttons
    pub fn create_dom_elements(&self) -> Vec<DomElement> {
        self.buttons
            .iter()
            .map(|btn| {
                DomElement::new("button")
                    .with_id(&btn.id)
                    .with_text(&btn.action.label())
                    .with_class("keypad__btn")
                    .with_class(&format!("keypad-row-{}", btn.row))
                    .with_class(&format!("keypad-col-{}", btn.col))
                    .with_attr(btn.action.kind().data_attribute(), "")
            })
            .collect()
    }

    /// Creates a keypad container element with all buttons
    #[must_use]
    pub fn create_keypad_element(&self) -> DomElement {
        self.create_dom_elements()
            .into_iter()
            .fold(
                DomElement::new("div").with_id("calc-keypad").with_class("keypad"),
                DomElement::with_child,
            )
    }

    /// Processes a button click event and returns the action
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<KeypadAction> {
        self.find_button_by_id(element_id).map(|btn| btn.action)
    }
}

/// Resolves a raw control id into an error when it is not a keypad button
pub fn require_button<'a>(keypad: &'a Keypad, id: &str) -> CalcResult<&'a KeypadButtonDef> {
    keypad
        .find_button_by_id(id)
        .ok_or_else(|| CalcError::unknown_control(id))
}
