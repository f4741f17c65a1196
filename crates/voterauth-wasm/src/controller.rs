//! Page controller: element resolution, event wiring, submission driving
//!
//! Owns the fixed element ids of the auth page. Wiring attaches long-lived
//! closures (`Closure::forget`), so the controller lives for the page.

use std::cell::Cell;
use std::rc::Rc;

use voterauth_form::rules::{CONFIRM_PASSWORD_FIELD, DOB_FIELD, DOB_FORMAT, PASSWORD_FIELD};
use voterauth_form::{
    eligibility_cutoff, first_invalid, form_is_valid, is_adult, login, register, rules::rule_for,
    validate_form, BusyGuard, FieldRule, FormValues, Panel, RuleContext,
};
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::spawn_local;
use web_sys::{console, Document, Element, Event, HtmlElement};

use crate::{dom, fetch};

const DOB_WARNING_ID: &str = "dobWarning";

/// The fixed elements the page must provide.
struct PageElements {
    tab_sign_in: HtmlElement,
    tab_register: HtmlElement,
    signin_form: HtmlElement,
    register_form: HtmlElement,
    form_title: HtmlElement,
    form_subtitle: HtmlElement,
    toggle_text: HtmlElement,
}

impl PageElements {
    /// Resolve all required ids, logging every one that is missing.
    fn resolve(document: &Document) -> Option<Self> {
        let mut missing = Vec::new();
        let mut required = |id: &'static str| {
            let found = dom::field_element(document, id);
            if found.is_none() {
                missing.push(id);
            }
            found
        };

        let tab_sign_in = required("tabSignIn");
        let tab_register = required("tabRegister");
        let signin_form = required("signinForm");
        let register_form = required("registerForm");
        let form_title = required("formTitle");
        let form_subtitle = required("formSubtitle");
        let toggle_text = required("toggleText");

        if !missing.is_empty() {
            console::error_1(
                &format!("auth page elements missing: {}", missing.join(", ")).into(),
            );
            return None;
        }

        Some(Self {
            tab_sign_in: tab_sign_in?,
            tab_register: tab_register?,
            signin_form: signin_form?,
            register_form: register_form?,
            form_title: form_title?,
            form_subtitle: form_subtitle?,
            toggle_text: toggle_text?,
        })
    }
}

pub struct Controller {
    document: Document,
    elements: PageElements,
    current: Cell<Panel>,
}

#[derive(Clone, Copy)]
enum TabAction {
    Show(Panel),
    Toggle,
}

/// Resolve the page and wire every handler. A page without the auth
/// elements logs and mounts nothing.
pub fn mount() -> Result<(), JsValue> {
    let document = dom::document()?;
    let Some(elements) = PageElements::resolve(&document) else {
        return Ok(());
    };

    let controller = Rc::new(Controller {
        document,
        elements,
        current: Cell::new(Panel::initial()),
    });

    Controller::wire_tabs(&controller)?;
    Controller::wire_dob(&controller)?;
    Controller::wire_validation(&controller)?;
    Controller::wire_login_submit(&controller)?;
    Controller::wire_register_submit(&controller)?;

    // Force the initial state
    controller.switch_to(Panel::initial())?;
    controller.refresh_submit_state();
    console::log_1(&"auth page mounted".into());
    Ok(())
}

impl Controller {
    fn context(&self) -> RuleContext {
        RuleContext::with_password(
            dom::today(),
            dom::field_value(&self.document, PASSWORD_FIELD).unwrap_or_default(),
        )
    }

    fn snapshot_values(&self) -> FormValues {
        let mut values = FormValues::new();
        for rule in voterauth_form::REGISTRATION_RULES {
            if let Some(value) = dom::field_value(&self.document, rule.id) {
                values.insert(rule.id, &value);
            }
        }
        values
    }

    /// Make `panel` the visible one and swap the header/toggle copy.
    fn switch_to(&self, panel: Panel) -> Result<(), JsValue> {
        let e = &self.elements;
        let (show, hide, active_tab, inactive_tab) = match panel {
            Panel::SignIn => (
                &e.signin_form,
                &e.register_form,
                &e.tab_sign_in,
                &e.tab_register,
            ),
            Panel::Register => (
                &e.register_form,
                &e.signin_form,
                &e.tab_register,
                &e.tab_sign_in,
            ),
        };

        show.style().set_property("display", "block")?;
        hide.style().set_property("display", "none")?;
        active_tab.class_list().add_1("active")?;
        inactive_tab.class_list().remove_1("active")?;

        let labels = panel.labels();
        e.form_title.set_text_content(Some(labels.title));
        e.form_subtitle.set_text_content(Some(labels.subtitle));
        e.toggle_text.set_text_content(Some(labels.toggle));

        self.current.set(panel);
        Ok(())
    }

    fn switch_or_log(&self, panel: Panel) {
        if let Err(err) = self.switch_to(panel) {
            console::warn_1(&err);
        }
    }

    fn wire_tabs(this: &Rc<Self>) -> Result<(), JsValue> {
        let targets: [(&HtmlElement, TabAction); 3] = [
            (&this.elements.tab_sign_in, TabAction::Show(Panel::SignIn)),
            (&this.elements.tab_register, TabAction::Show(Panel::Register)),
            (&this.elements.toggle_text, TabAction::Toggle),
        ];
        for (element, action) in targets {
            let controller = Rc::clone(this);
            let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                let panel = match action {
                    TabAction::Show(panel) => panel,
                    TabAction::Toggle => controller.current.get().other(),
                };
                controller.switch_or_log(panel);
            });
            element.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
            closure.forget();
        }
        Ok(())
    }

    /// Cap the date input at the latest eligible date of birth and keep the
    /// standing under-18 warning in sync.
    fn wire_dob(this: &Rc<Self>) -> Result<(), JsValue> {
        let Some(dob) = dom::field_element(&this.document, DOB_FIELD) else {
            return Ok(());
        };

        let cutoff = eligibility_cutoff(dom::today());
        dob.set_attribute("max", &cutoff.format(DOB_FORMAT).to_string())?;

        let controller = Rc::clone(this);
        let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
            let value = dom::field_value(&controller.document, DOB_FIELD).unwrap_or_default();
            let eligible = is_adult(&value, dom::today());
            if let Some(warning) = dom::field_element(&controller.document, DOB_WARNING_ID) {
                let display = if eligible { "none" } else { "block" };
                if let Err(err) = warning.style().set_property("display", display) {
                    console::warn_1(&err);
                }
            }
        });
        dob.add_event_listener_with_callback("change", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    /// Blur validation for every ruled field, live re-validation for the
    /// password pair, and submit-state refresh on any change.
    fn wire_validation(this: &Rc<Self>) -> Result<(), JsValue> {
        for rule in voterauth_form::REGISTRATION_RULES {
            let Some(field) = dom::field_element(&this.document, rule.id) else {
                continue;
            };

            {
                let controller = Rc::clone(this);
                let rule = *rule;
                let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    controller.validate_and_mark(&rule);
                });
                field.add_event_listener_with_callback("blur", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }

            if rule.id == PASSWORD_FIELD || rule.id == CONFIRM_PASSWORD_FIELD {
                let controller = Rc::clone(this);
                let rule = *rule;
                let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    controller.validate_and_mark(&rule);
                    // A password keystroke re-validates the confirmation live
                    if rule.id == PASSWORD_FIELD {
                        if let Some(confirm) = rule_for(CONFIRM_PASSWORD_FIELD) {
                            controller.validate_and_mark(confirm);
                        }
                    }
                });
                field
                    .add_event_listener_with_callback("input", closure.as_ref().unchecked_ref())?;
                closure.forget();
            }

            for event in ["input", "change"] {
                let controller = Rc::clone(this);
                let closure = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
                    controller.refresh_submit_state();
                });
                field.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())?;
                closure.forget();
            }
        }
        Ok(())
    }

    /// Evaluate one rule against the field's current value and project the
    /// outcome. Empty fields stay unmarked (except the date field, whose
    /// empty value is a real failure).
    fn validate_and_mark(&self, rule: &FieldRule) {
        let Some(field) = dom::field_element(&self.document, rule.id) else {
            return;
        };
        let value = dom::field_value_of(&field).unwrap_or_default();
        let trimmed = value.trim();
        if trimmed.is_empty() && rule.id != DOB_FIELD {
            return;
        }
        let outcome = rule.evaluate(trimmed, &self.context());
        if let Err(err) = dom::mark_field(&self.document, &field, &outcome) {
            console::warn_1(&err);
        }
    }

    /// Whole-form validity, projected onto the register submit control.
    fn refresh_submit_state(&self) {
        let form: &Element = self.elements.register_form.as_ref();
        let Some(control) = dom::SubmitControl::find(form) else {
            return;
        };
        let values = self.snapshot_values();
        let ctx = RuleContext::from_values(&values, dom::today());
        control.set_form_valid(form_is_valid(&values, &ctx));
    }

    fn wire_login_submit(this: &Rc<Self>) -> Result<(), JsValue> {
        let controller = Rc::clone(this);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            controller.submit_login();
        });
        this.elements
            .signin_form
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn submit_login(&self) {
        let form: &Element = self.elements.signin_form.as_ref();
        let voter_input = dom::query_input(
            form,
            &["#voterId", "input[name='voter_id']", "input[type='text']"],
        );
        let password_input = dom::query_input(
            form,
            &["#password", "input[name='password']", "input[type='password']"],
        );
        let (Some(voter_input), Some(password_input)) = (voter_input, password_input) else {
            console::error_1(&"could not find login form inputs".into());
            dom::alert(login::MISSING_INPUTS);
            return;
        };

        let request = match login::Credentials::new(&voter_input.value(), &password_input.value())
            .validate()
        {
            Ok(request) => request,
            Err(err) => {
                dom::alert(&login::alert_message(&err));
                return;
            }
        };

        let guard = dom::SubmitControl::find(form)
            .map(|control| BusyGuard::engage(control, login::BUSY_LABEL));
        let csrf = fetch::csrf_token(&self.document);

        spawn_local(async move {
            let result = match fetch::post_form(
                login::LOGIN_URL,
                request.form_entries(),
                csrf.as_deref(),
            )
            .await
            {
                Ok(reply) => login::interpret_reply(&reply),
                Err(err) => Err(err),
            };
            // Restore the control before navigating or alerting
            drop(guard);

            match result {
                Ok(target) => {
                    console::log_1(&"login successful, redirecting".into());
                    dom::navigate(target);
                }
                Err(err) => {
                    console::error_1(&format!("login failed: {err}").into());
                    dom::alert(&login::alert_message(&err));
                }
            }
        });
    }

    fn wire_register_submit(this: &Rc<Self>) -> Result<(), JsValue> {
        let controller = Rc::clone(this);
        let closure = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
            event.prevent_default();
            Controller::submit_register(&controller);
        });
        this.elements
            .register_form
            .add_event_listener_with_callback("submit", closure.as_ref().unchecked_ref())?;
        closure.forget();
        Ok(())
    }

    fn submit_register(this: &Rc<Self>) {
        let values = this.snapshot_values();
        let ctx = RuleContext::from_values(&values, dom::today());
        let reports = validate_form(&values, &ctx);

        // One final pass marks every field
        for report in &reports {
            if let Some(field) = dom::field_element(&this.document, report.rule.id) {
                if let Err(err) = dom::mark_field(&this.document, &field, &report.outcome) {
                    console::warn_1(&err);
                }
            }
        }

        if let Some(failed) = first_invalid(&reports) {
            if let Some(field) = dom::field_element(&this.document, failed.rule.id) {
                dom::scroll_and_focus(&field);
            }
            return;
        }

        let form: &Element = this.elements.register_form.as_ref();
        let guard = dom::SubmitControl::find(form)
            .map(|control| BusyGuard::engage(control, register::BUSY_LABEL));
        let csrf = fetch::csrf_token(&this.document);
        let controller = Rc::clone(this);

        spawn_local(async move {
            let result = match fetch::post_form(
                register::REGISTER_URL,
                values.entries(),
                csrf.as_deref(),
            )
            .await
            {
                Ok(reply) => register::interpret_reply(&reply),
                Err(err) => Err(err),
            };
            drop(guard);

            match result {
                Ok(message) => {
                    dom::alert(message);
                    controller.switch_or_log(Panel::SignIn);
                }
                Err(err) => {
                    console::error_1(&format!("registration failed: {err}").into());
                    dom::alert(&register::alert_message(&err));
                }
            }
        });
    }
}
