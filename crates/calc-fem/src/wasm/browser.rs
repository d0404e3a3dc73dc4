//! Browser bindings
//!
//! Looks up the calculator page by its data attributes, attaches one click
//! listener per control, and keeps a single [`Dispatcher`] alive inside
//! those listeners for the rest of the page session.

// This module is already gated behind the `wasm` feature in mod.rs

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{console, Document, Element, HtmlElement, Storage, Window};

use crate::core::{CalcError, CalcResult};
use crate::theme::ThemeStorage;
use crate::wasm::dispatcher::Dispatcher;
use crate::wasm::dom::{DisplayRegion, DomSurface, TOGGLE_SWITCH_ID};
use crate::wasm::keypad::ControlKind;

/// Selector of the three theme toggle zones
const TOGGLE_SECTION_SELECTOR: &str = ".toggle__section";

/// Dispatcher shared by every click listener on the page
pub type SharedDispatcher = Rc<RefCell<Dispatcher<BrowserSurface, LocalStorage>>>;

/// The live page
#[derive(Debug)]
pub struct BrowserSurface {
    document: Document,
    previous: Option<HtmlElement>,
    current: Option<HtmlElement>,
    toggle_switch: Option<Element>,
}

impl BrowserSurface {
    /// Resolves the display regions and toggle switch once
    #[must_use]
    pub fn new(document: Document) -> Self {
        let previous = query_html(&document, DisplayRegion::Previous.selector());
        let current = query_html(&document, DisplayRegion::Current.selector());
        let toggle_switch = document.get_element_by_id(TOGGLE_SWITCH_ID);
        Self {
            document,
            previous,
            current,
            toggle_switch,
        }
    }
}

impl DomSurface for BrowserSurface {
    fn set_display_text(&mut self, region: DisplayRegion, text: &str) {
        let target = match region {
            DisplayRegion::Previous => self.previous.as_ref(),
            DisplayRegion::Current => self.current.as_ref(),
        };
        if let Some(element) = target {
            element.set_inner_text(text);
        }
    }

    fn set_root_attribute(&mut self, name: &str, value: &str) {
        let Some(root) = self.document.document_element() else {
            return;
        };
        if let Err(e) = root.set_attribute(name, value) {
            console_warn(&format!("failed to set root attribute {name}: {e:?}"));
        }
    }

    fn set_toggle_class(&mut self, add: &str, remove: &[&str]) {
        let Some(switch) = &self.toggle_switch else {
            return;
        };
        let classes = switch.class_list();
        for class in remove {
            if let Err(e) = classes.remove_1(class) {
                console_warn(&format!("failed to remove toggle class {class}: {e:?}"));
            }
        }
        if let Err(e) = classes.add_1(add) {
            console_warn(&format!("failed to add toggle class {add}: {e:?}"));
        }
    }
}

/// `window.localStorage`, when the browser allows it
#[derive(Debug)]
pub struct LocalStorage {
    storage: Option<Storage>,
}

impl LocalStorage {
    /// Opens local storage for a window
    #[must_use]
    pub fn from_window(window: &Window) -> Self {
        Self {
            storage: window.local_storage().ok().flatten(),
        }
    }
}

impl ThemeStorage for LocalStorage {
    fn get_item(&self, key: &str) -> CalcResult<Option<String>> {
        match &self.storage {
            Some(storage) => storage.get_item(key).map_err(js_error),
            None => Ok(None),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> CalcResult<()> {
        match &self.storage {
            Some(storage) => storage.set_item(key, value).map_err(js_error),
            None => Err(CalcError::storage("localStorage unavailable")),
        }
    }
}

/// Builds the dispatcher for `window` and wires every control
pub fn mount(window: &Window) -> Result<SharedDispatcher, JsValue> {
    let document = window
        .document()
        .ok_or_else(|| JsValue::from_str("no document"))?;

    let mut dispatcher = Dispatcher::new(
        BrowserSurface::new(document.clone()),
        LocalStorage::from_window(window),
    );
    dispatcher.init();
    let shared = Rc::new(RefCell::new(dispatcher));

    wire_controls(&document, &shared)?;
    wire_theme_toggle(&document, &shared)?;
    Ok(shared)
}

fn wire_controls(document: &Document, dispatcher: &SharedDispatcher) -> Result<(), JsValue> {
    for kind in ControlKind::ALL {
        for element in query_all(document, &kind.selector())? {
            let button = element.clone();
            let dispatcher = Rc::clone(dispatcher);
            let handler = Closure::<dyn FnMut()>::new(move || {
                let label = button.inner_text();
                if let Err(e) = dispatcher.borrow_mut().handle_control(kind, &label) {
                    console_warn(&ignored_click_message(kind, &e));
                }
            });
            element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
            // Listeners live as long as the page.
            handler.forget();
        }
    }
    Ok(())
}

fn wire_theme_toggle(document: &Document, dispatcher: &SharedDispatcher) -> Result<(), JsValue> {
    for element in query_all(document, TOGGLE_SECTION_SELECTOR)? {
        let section = element.clone();
        let dispatcher = Rc::clone(dispatcher);
        let handler = Closure::<dyn FnMut()>::new(move || {
            if let Some(raw) = section.get_attribute("data-section") {
                dispatcher.borrow_mut().select_theme(&raw);
            }
        });
        element.add_event_listener_with_callback("click", handler.as_ref().unchecked_ref())?;
        handler.forget();
    }
    Ok(())
}

fn query_html(document: &Document, selector: &str) -> Option<HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|e| e.dyn_into::<HtmlElement>().ok())
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<HtmlElement>, JsValue> {
    let nodes = document.query_selector_all(selector)?;
    Ok((0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<HtmlElement>().ok())
        .collect())
}

// Page warnings go to the devtools console.
fn console_warn(message: &str) {
    console::warn_1(&JsValue::from_str(message));
}

fn ignored_click_message(kind: ControlKind, error: &CalcError) -> String {
    format!("calc-fem: {} click ignored: {error}", kind.data_attribute())
}

fn js_error(value: JsValue) -> CalcError {
    CalcError::storage(value.as_string().unwrap_or_else(|| format!("{value:?}")))
}

/// Initialize the calculator in the browser
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let dispatcher = mount(&window)?;

    let theme = dispatcher.borrow().theme();
    console::log_1(&format!("calc-fem initialized (theme {theme})").into());
    Ok(())
}
