//! DOM surface for the calculator page
//!
//! [`DomSurface`] is everything the dispatcher needs from a page: two text
//! regions, a theme attribute on the document root, and the toggle knob
//! classes. [`MockDom`] implements it in memory so the whole click-to-render
//! path runs without a browser.

use std::collections::HashMap;

use crate::theme::{Theme, ToggleIndicator};
use crate::wasm::keypad::Keypad;

/// Id of the toggle switch element
pub const TOGGLE_SWITCH_ID: &str = "toggle-switch";

/// Attribute on the document root that selects the stylesheet theme
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// One of the two read-only display regions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayRegion {
    /// Previous operand and pending operator
    Previous,
    /// Operand under entry
    Current,
}

impl DisplayRegion {
    /// Element id in the mock page
    #[must_use]
    pub const fn element_id(&self) -> &'static str {
        match self {
            Self::Previous => "previous-operand",
            Self::Current => "current-operand",
        }
    }

    /// CSS selector in the real page
    #[must_use]
    pub const fn selector(&self) -> &'static str {
        match self {
            Self::Previous => "[data-previous-operand]",
            Self::Current => "[data-current-operand]",
        }
    }
}

/// Something the calculator can render into
pub trait DomSurface {
    /// Replaces the text of a display region
    fn set_display_text(&mut self, region: DisplayRegion, text: &str);

    /// Sets an attribute on the document root
    fn set_root_attribute(&mut self, name: &str, value: &str);

    /// Removes `remove` classes from the toggle switch, then adds `add`
    fn set_toggle_class(&mut self, add: &str, remove: &[&str]);

    /// Applies a theme: root attribute plus the matching knob position
    fn apply_theme(&mut self, theme: Theme) {
        let all: Vec<&str> = ToggleIndicator::ALL
            .iter()
            .map(ToggleIndicator::class_name)
            .collect();
        self.set_root_attribute(THEME_ATTRIBUTE, theme.as_str());
        self.set_toggle_class(theme.indicator().class_name(), &all);
    }
}

/// Represents a DOM element for testing
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomElement {
    /// Element ID
    pub id: String,
    /// Element tag name
    pub tag: String,
    /// Text content
    pub text_content: String,
    /// Element attributes
    pub attributes: HashMap<String, String>,
    /// CSS classes
    pub classes: Vec<String>,
    /// Child elements
    pub children: Vec<DomElement>,
}

impl Default for DomElement {
    fn default() -> Self {
        Self::new("div")
    }
}

impl DomElement {
    /// Creates a new DOM element with the given tag
    #[must_use]
    pub fn new(tag: &str) -> Self {
        Self {
            id: String::new(),
            tag: tag.to_string(),
            text_content: String::new(),
            attributes: HashMap::new(),
            classes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Creates an element with an ID
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    /// Sets the text content
    #[must_use]
    pub fn with_text(mut self, text: &str) -> Self {
        self.text_content = text.to_string();
        self
    }

    /// Adds a class
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.push(class.to_string());
        self
    }

    /// Sets an attribute
    #[must_use]
    pub fn with_attr(mut self, key: &str, value: &str) -> Self {
        self.attributes.insert(key.to_string(), value.to_string());
        self
    }

    /// Adds a child element
    #[must_use]
    pub fn with_child(mut self, child: DomElement) -> Self {
        self.children.push(child);
        self
    }

    /// Sets text content
    pub fn set_text(&mut self, text: &str) {
        self.text_content = text.to_string();
    }

    /// Adds a class once
    pub fn add_class(&mut self, class: &str) {
        if !self.has_class(class) {
            self.classes.push(class.to_string());
        }
    }

    /// Removes a class
    pub fn remove_class(&mut self, class: &str) {
        self.classes.retain(|c| c != class);
    }

    /// Checks if element has a class
    #[must_use]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// Gets an attribute value
    #[must_use]
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    /// Sets an attribute value
    pub fn set_attr(&mut self, key: &str, value: &str) {
        self.attributes.insert(key.to_string(), value.to_string());
    }
}

/// Events the mock page records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DomEvent {
    /// Page finished loading
    Load,
    /// Click event on an element
    Click {
        /// The ID of the clicked element
        element_id: String,
    },
}

impl DomEvent {
    /// Creates a click event
    #[must_use]
    pub fn click(element_id: &str) -> Self {
        Self::Click {
            element_id: element_id.to_string(),
        }
    }
}

/// In-memory calculator page
#[derive(Debug)]
pub struct MockDom {
    /// Document root (`<html>`); carries only the theme attribute
    root: DomElement,
    /// Elements by ID for quick lookup
    elements: HashMap<String, DomElement>,
    /// Event history for verification
    event_history: Vec<DomEvent>,
}

impl Default for MockDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MockDom {
    /// Creates an empty page
    #[must_use]
    pub fn new() -> Self {
        Self {
            root: DomElement::new("html").with_id("root"),
            elements: HashMap::new(),
            event_history: Vec::new(),
        }
    }

    /// Creates the calculator page: displays, theme toggle and keypad
    #[must_use]
    pub fn calculator() -> Self {
        let mut dom = Self::new();

        let previous = DomElement::new("div")
            .with_id(DisplayRegion::Previous.element_id())
            .with_class("screen__previous")
            .with_attr("data-previous-operand", "");
        let current = DomElement::new("div")
            .with_id(DisplayRegion::Current.element_id())
            .with_class("screen__current")
            .with_attr("data-current-operand", "");

        let switch = DomElement::new("span")
            .with_id(TOGGLE_SWITCH_ID)
            .with_class("toggle__switch");
        let toggle = DomElement::new("div").with_id("toggle").with_class("toggle");

        dom.register_element(toggle);
        dom.register_element(switch);
        for theme in Theme::ALL {
            dom.register_element(
                DomElement::new("span")
                    .with_id(&toggle_section_id(theme))
                    .with_class("toggle__section")
                    .with_attr("data-section", theme.as_str())
                    .with_text(theme.as_str()),
            );
        }
        dom.register_element(previous);
        dom.register_element(current);

        // Buttons live in the registry; the container is kept without copies.
        let mut keypad = Keypad::new().create_keypad_element();
        for button in std::mem::take(&mut keypad.children) {
            dom.register_element(button);
        }
        dom.register_element(keypad);

        dom
    }

    /// The document root
    #[must_use]
    pub fn root(&self) -> &DomElement {
        &self.root
    }

    /// Registers an element for ID lookup
    pub fn register_element(&mut self, element: DomElement) {
        if !element.id.is_empty() {
            self.elements.insert(element.id.clone(), element);
        }
    }

    /// Gets an element by ID
    #[must_use]
    pub fn get_element(&self, id: &str) -> Option<&DomElement> {
        self.elements.get(id)
    }

    /// Gets a mutable element by ID
    pub fn get_element_mut(&mut self, id: &str) -> Option<&mut DomElement> {
        self.elements.get_mut(id)
    }

    /// Records an event
    pub fn dispatch_event(&mut self, event: DomEvent) {
        self.event_history.push(event);
    }

    /// Gets the event history
    #[must_use]
    pub fn event_history(&self) -> &[DomEvent] {
        &self.event_history
    }

    /// Clears event history
    pub fn clear_event_history(&mut self) {
        self.event_history.clear();
    }

    /// Updates element text by ID
    pub fn set_element_text(&mut self, id: &str, text: &str) {
        if let Some(elem) = self.elements.get_mut(id) {
            elem.set_text(text);
        }
    }

    /// Gets element text by ID
    #[must_use]
    pub fn get_element_text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text_content.as_str())
    }

    /// Text shown in a display region
    #[must_use]
    pub fn display_text(&self, region: DisplayRegion) -> &str {
        self.get_element_text(region.element_id()).unwrap_or_default()
    }

    /// Current `data-theme` of the document root
    #[must_use]
    pub fn theme_attribute(&self) -> Option<&str> {
        self.root.get_attr(THEME_ATTRIBUTE)
    }

    /// Indicator classes currently on the toggle switch
    #[must_use]
    pub fn toggle_classes(&self) -> Vec<&str> {
        self.get_element(TOGGLE_SWITCH_ID)
            .map(|e| {
                e.classes
                    .iter()
                    .map(String::as_str)
                    .filter(|c| ToggleIndicator::ALL.iter().any(|i| i.class_name() == *c))
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl DomSurface for MockDom {
    fn set_display_text(&mut self, region: DisplayRegion, text: &str) {
        self.set_element_text(region.element_id(), text);
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        self.root.set_attr(name, value);
    }

    fn set_toggle_class(&mut self, add: &str, remove: &[&str]) {
        if let Some(switch) = self.elements.get_mut(TOGGLE_SWITCH_ID) {
            for class in remove {
                switch.remove_class(class);
            }
            switch.add_class(add);
        }
    }
}

/// Element id of the toggle zone for a theme
#[must_use]
pub fn toggle_section_id(theme: Theme) -> String {
    format!("toggle-{}", theme.as_str())
}
