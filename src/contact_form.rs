use std::cell::RefCell;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

use folio_core::{SubmitGate, SubmitOutcome};
use gloo::events::{EventListener, EventListenerOptions};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys::{Element, FormData, Headers, HtmlButtonElement, HtmlFormElement, RequestInit, Response};

use crate::dom;
use crate::notify;

const FORM_ID: &str = "contact-form";
const SUBMIT_BUTTON_SELECTOR: &str = "button[type=\"submit\"]";
const SUBMIT_LABEL_SELECTOR: &str = ".submit-text";
const LOADING_LABEL_SELECTOR: &str = ".loading-text";
const HIDDEN: &str = "hidden";
const LOADING: &str = "loading";

pub(crate) type SubmitFuture = Pin<Box<dyn Future<Output = SubmitOutcome>>>;

/// Delivers the contact form somewhere. Never retries.
pub(crate) trait ContactTransport {
    fn submit(&self, form: FormData) -> SubmitFuture;
}

pub(crate) struct FetchTransport {
    endpoint: String,
}

impl FetchTransport {
    pub(crate) fn new(endpoint: String) -> Self {
        Self { endpoint }
    }
}

impl ContactTransport for FetchTransport {
    fn submit(&self, form: FormData) -> SubmitFuture {
        let endpoint = self.endpoint.clone();
        Box::pin(async move {
            match post_form(&endpoint, &form).await {
                Ok(response) => SubmitOutcome::from_status(response.ok(), response.status()),
                Err(err) => SubmitOutcome::Failed {
                    reason: dom::js_err(err),
                },
            }
        })
    }
}

async fn post_form(endpoint: &str, form: &FormData) -> Result<Response, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("missing window"))?;
    let headers = Headers::new()?;
    headers.set("Accept", "application/json")?;
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_headers(&headers);
    init.set_body(form);
    let value = JsFuture::from(window.fetch_with_str_and_init(endpoint, &init)).await?;
    value.dyn_into::<Response>()
}

pub(crate) struct ContactForm {
    form: HtmlFormElement,
    transport: Rc<dyn ContactTransport>,
    gate: RefCell<SubmitGate>,
    listener: RefCell<Option<EventListener>>,
}

impl ContactForm {
    pub(crate) fn install(transport: Rc<dyn ContactTransport>) -> Option<Rc<Self>> {
        let form = dom::element_by_id(FORM_ID)?
            .dyn_into::<HtmlFormElement>()
            .ok()?;
        Some(Self::attach(form, transport))
    }

    pub(crate) fn attach(form: HtmlFormElement, transport: Rc<dyn ContactTransport>) -> Rc<Self> {
        let contact = Rc::new(Self {
            form,
            transport,
            gate: RefCell::new(SubmitGate::default()),
            listener: RefCell::new(None),
        });
        let handler = Rc::clone(&contact);
        let listener = EventListener::new_with_options(
            &contact.form,
            "submit",
            EventListenerOptions::enable_prevent_default(),
            move |event| {
                event.prevent_default();
                let handler = Rc::clone(&handler);
                spawn_local(async move {
                    if handler.submit().await.is_none() {
                        gloo::console::log!("contact form: submit ignored, one already in flight");
                    }
                });
            },
        );
        *contact.listener.borrow_mut() = Some(listener);
        contact
    }

    /// Returns `None` when a submission is already in flight.
    pub(crate) async fn submit(&self) -> Option<SubmitOutcome> {
        if !self.gate.borrow_mut().begin() {
            return None;
        }
        let outcome = {
            let _restore = self.submit_button().map(BusyButton::engage);
            let outcome = match FormData::new_with_form(&self.form) {
                Ok(data) => self.transport.submit(data).await,
                Err(err) => SubmitOutcome::Failed {
                    reason: dom::js_err(err),
                },
            };
            self.report(&outcome);
            outcome
        };
        self.gate.borrow_mut().finish();
        Some(outcome)
    }

    fn report(&self, outcome: &SubmitOutcome) {
        match outcome {
            SubmitOutcome::Sent => self.form.reset(),
            SubmitOutcome::Rejected { status } => {
                gloo::console::warn!("contact form rejected, status", *status);
            }
            SubmitOutcome::Failed { reason } => {
                gloo::console::warn!("contact form failed", reason.clone());
            }
        }
        let (message, kind) = outcome.notice();
        notify::show_notification(message, kind);
    }

    fn submit_button(&self) -> Option<HtmlButtonElement> {
        dom::query_within(&self.form, SUBMIT_BUTTON_SELECTOR)?
            .dyn_into::<HtmlButtonElement>()
            .ok()
    }
}

/// Loading state of the submit button. Dropping it puts the button back the
/// way it was found, whichever way the submission ended.
struct BusyButton {
    button: HtmlButtonElement,
    was_disabled: bool,
    labels: Vec<(Element, bool)>,
}

impl BusyButton {
    fn engage(button: HtmlButtonElement) -> Self {
        let mut labels = Vec::new();
        if let Some(label) = dom::query_within(&button, SUBMIT_LABEL_SELECTOR) {
            let was_hidden = dom::has_class(&label, HIDDEN);
            dom::add_class(&label, HIDDEN);
            labels.push((label, was_hidden));
        }
        if let Some(label) = dom::query_within(&button, LOADING_LABEL_SELECTOR) {
            let was_hidden = dom::has_class(&label, HIDDEN);
            dom::remove_class(&label, HIDDEN);
            labels.push((label, was_hidden));
        }
        let was_disabled = button.disabled();
        button.set_disabled(true);
        dom::add_class(&button, LOADING);
        Self {
            button,
            was_disabled,
            labels,
        }
    }
}

impl Drop for BusyButton {
    fn drop(&mut self) {
        for (label, was_hidden) in &self.labels {
            if *was_hidden {
                dom::add_class(label, HIDDEN);
            } else {
                dom::remove_class(label, HIDDEN);
            }
        }
        self.button.set_disabled(self.was_disabled);
        dom::remove_class(&self.button, LOADING);
    }
}
