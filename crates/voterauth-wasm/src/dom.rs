//! DOM lookup and mutation helpers
//!
//! Field visual state is projected here: the valid/invalid classes and
//! colors, the lazily created `<id>-error` message element, and the submit
//! control's enabled/busy state.

use chrono::NaiveDate;
use voterauth_form::{BusyControl, FieldOutcome};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement,
    HtmlSelectElement, ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

const VALID_CLASS: &str = "is-valid";
const INVALID_CLASS: &str = "is-invalid";
const VALID_BORDER: &str = "#28a745";
const INVALID_BORDER: &str = "#dc3545";
const VALID_SHADOW: &str = "0 0 0 0.2rem rgba(40, 167, 69, 0.25)";
const INVALID_SHADOW: &str = "0 0 0 0.2rem rgba(220, 53, 69, 0.25)";

pub fn document() -> Result<Document, JsValue> {
    web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| JsValue::from_str("no document available"))
}

/// Today's date from the browser clock.
pub fn today() -> NaiveDate {
    let now = js_sys::Date::new_0();
    NaiveDate::from_ymd_opt(
        now.get_full_year() as i32,
        now.get_month() + 1,
        now.get_date(),
    )
    .unwrap_or_default()
}

pub fn field_element(document: &Document, id: &str) -> Option<HtmlElement> {
    document
        .get_element_by_id(id)
        .and_then(|el| el.dyn_into::<HtmlElement>().ok())
}

/// Current value of an input or select field, by id.
pub fn field_value(document: &Document, id: &str) -> Option<String> {
    field_element(document, id).and_then(|el| field_value_of(&el))
}

pub fn field_value_of(field: &HtmlElement) -> Option<String> {
    if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
        return Some(input.value());
    }
    if let Some(select) = field.dyn_ref::<HtmlSelectElement>() {
        return Some(select.value());
    }
    None
}

/// First element matching any of the selectors, as an input.
pub fn query_input(scope: &Element, selectors: &[&str]) -> Option<HtmlInputElement> {
    selectors
        .iter()
        .find_map(|selector| scope.query_selector(selector).ok().flatten())
        .and_then(|el| el.dyn_into::<HtmlInputElement>().ok())
}

/// Project a validation outcome onto a field: valid/invalid class and
/// colors, custom validity, and the adjacent inline message element.
pub fn mark_field(
    document: &Document,
    field: &HtmlElement,
    outcome: &FieldOutcome,
) -> Result<(), JsValue> {
    let error_el = ensure_error_element(document, field)?;
    let classes = field.class_list();
    classes.remove_2(VALID_CLASS, INVALID_CLASS)?;
    let style = field.style();
    style.remove_property("border-color")?;
    style.remove_property("box-shadow")?;

    match outcome {
        FieldOutcome::Valid => {
            classes.add_1(VALID_CLASS)?;
            style.set_property("border-color", VALID_BORDER)?;
            style.set_property("box-shadow", VALID_SHADOW)?;
            if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
                input.set_custom_validity("");
            }
            error_el.style().set_property("display", "none")?;
            error_el.set_text_content(None);
        }
        FieldOutcome::Invalid(message) => {
            classes.add_1(INVALID_CLASS)?;
            style.set_property("border-color", INVALID_BORDER)?;
            style.set_property("box-shadow", INVALID_SHADOW)?;
            if let Some(input) = field.dyn_ref::<HtmlInputElement>() {
                input.set_custom_validity(message);
            }
            error_el.set_text_content(Some(message));
            error_el.style().set_property("display", "block")?;
        }
    }
    Ok(())
}

/// The `<id>-error` element next to a field, created on first use.
fn ensure_error_element(document: &Document, field: &HtmlElement) -> Result<HtmlElement, JsValue> {
    let error_id = format!("{}-error", field.id());
    if let Some(existing) = document.get_element_by_id(&error_id) {
        return existing.dyn_into::<HtmlElement>().map_err(JsValue::from);
    }

    let error_el: HtmlElement = document.create_element("div")?.dyn_into()?;
    error_el.set_id(&error_id);
    error_el.set_class_name("error-message");
    let style = error_el.style();
    style.set_property("color", INVALID_BORDER)?;
    style.set_property("font-size", "12px")?;
    style.set_property("margin-top", "5px")?;
    style.set_property("display", "none")?;

    if let Some(parent) = field.parent_node() {
        parent.insert_before(&error_el, field.next_sibling().as_ref())?;
    }
    Ok(error_el)
}

pub fn scroll_and_focus(field: &HtmlElement) {
    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    options.set_block(ScrollLogicalPosition::Center);
    field.scroll_into_view_with_scroll_into_view_options(&options);
    let _ = field.focus();
}

pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

pub fn navigate(target: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(err) = window.location().set_href(target) {
            web_sys::console::error_1(&err);
        }
    }
}

/// The submit button (or submit input) of a form.
pub struct SubmitControl {
    element: HtmlElement,
}

impl SubmitControl {
    pub fn find(form: &Element) -> Option<Self> {
        form.query_selector("button[type='submit'], input[type='submit']")
            .ok()
            .flatten()
            .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            .map(|element| Self { element })
    }

    /// Project whole-form validity onto the control: enabled and full
    /// opacity when the form passes, dimmed and inert otherwise.
    pub fn set_form_valid(&self, valid: bool) {
        self.set_enabled(valid);
        let style = self.element.style();
        let _ = style.set_property("opacity", if valid { "1" } else { "0.6" });
        let _ = style.set_property("cursor", if valid { "pointer" } else { "not-allowed" });
    }
}

impl BusyControl for SubmitControl {
    fn label(&self) -> String {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else {
            self.element.text_content().unwrap_or_default()
        }
    }

    fn set_label(&self, label: &str) {
        if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_value(label);
        } else {
            self.element.set_text_content(Some(label));
        }
    }

    fn set_enabled(&self, enabled: bool) {
        if let Some(button) = self.element.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(!enabled);
        } else if let Some(input) = self.element.dyn_ref::<HtmlInputElement>() {
            input.set_disabled(!enabled);
        }
    }
}
