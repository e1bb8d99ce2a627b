//! Binds the page's events to the workflow controller, once, at start-up

use std::future::Future;
use std::rc::Rc;

use legal_client_core::{ApiClient, Controller};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, Event};

use crate::dom::{DomView, DOCUMENT_TYPE_ID};
use crate::fetch::FetchTransport;

pub type WebController = Controller<FetchTransport, DomView>;

pub const GENERATION_FORM_ID: &str = "generation-form";
pub const RESEARCH_FORM_ID: &str = "research-form";
pub const CHAT_FORM_ID: &str = "chat-form";

/// Build the controller for the current page and wire its handlers
pub fn mount() -> Result<Rc<WebController>, JsValue> {
    let view = DomView::new()?;
    let host = web_sys::window()
        .ok_or("No window")?
        .location()
        .hostname()?;

    let config = legal_client_core::resolve(&host);
    web_sys::console::log_1(
        &format!(
            "API Config: {} mode, backend {}",
            config.environment(),
            config.base_url()
        )
        .into(),
    );

    let document = view.document().clone();
    let controller = Rc::new(Controller::new(
        ApiClient::new(config, FetchTransport),
        view,
    ));

    bind(&document, &controller)?;
    web_sys::console::log_1(&"Legal assistant initialized".into());
    Ok(controller)
}

fn bind(document: &Document, controller: &Rc<WebController>) -> Result<(), JsValue> {
    let on_change = {
        let controller = Rc::clone(controller);
        Closure::<dyn FnMut(Event)>::new(move |_event: Event| controller.document_type_changed())
    };
    element(document, DOCUMENT_TYPE_ID)?
        .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())?;
    on_change.forget();

    on_submit(document, GENERATION_FORM_ID, controller, |c| async move {
        let _ = c.generate_document().await;
    })?;
    on_submit(document, RESEARCH_FORM_ID, controller, |c| async move {
        let _ = c.legal_search().await;
    })?;
    on_submit(document, CHAT_FORM_ID, controller, |c| async move {
        let _ = c.send_chat().await;
    })?;

    Ok(())
}

/// Run `handler` as a local task on every submit of `form_id`
///
/// Outcomes are already rendered by the workflows, so results are dropped.
fn on_submit<F, Fut>(
    document: &Document,
    form_id: &str,
    controller: &Rc<WebController>,
    handler: F,
) -> Result<(), JsValue>
where
    F: Fn(Rc<WebController>) -> Fut + 'static,
    Fut: Future<Output = ()> + 'static,
{
    let controller = Rc::clone(controller);
    let callback = Closure::<dyn FnMut(Event)>::new(move |event: Event| {
        event.prevent_default();
        spawn_local(handler(Rc::clone(&controller)));
    });

    element(document, form_id)?
        .add_event_listener_with_callback("submit", callback.as_ref().unchecked_ref())?;
    callback.forget();
    Ok(())
}

fn element(document: &Document, id: &str) -> Result<web_sys::Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}
