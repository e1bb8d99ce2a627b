//! DOM-backed [`View`] over the page's forms and result areas
//!
//! Element ids follow the page markup: each form has a `<prefix>-btn`
//! submit button, a `<prefix>-text` label and a `<prefix>-loading`
//! indicator; document field groups carry the `document-fields` class and
//! their inputs are named by backend parameter key.
//! Server text is always inserted as text content, never as markup.

use legal_client_core::render::{answer_paragraphs, score_line};
use legal_client_core::{ChatRole, DocumentKind, FieldSpec, Form, SearchResult, View};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{
    Document, Element, HtmlButtonElement, HtmlElement, HtmlInputElement, HtmlSelectElement,
    HtmlTextAreaElement, ScrollBehavior, ScrollIntoViewOptions, Window,
};

pub const DOCUMENT_TYPE_ID: &str = "type-document";
pub const QUESTION_ID: &str = "legal-question";
pub const CHAT_INPUT_ID: &str = "chat-input";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const GENERATED_DOCUMENT_ID: &str = "generated-document";
pub const GENERATION_RESULT_ID: &str = "generation-result";
pub const RESEARCH_ANSWER_ID: &str = "research-answer";
pub const RESEARCH_SOURCES_ID: &str = "research-sources";
pub const RESEARCH_RESULT_ID: &str = "research-result";
pub const DOCUMENT_FIELDS_CLASS: &str = "document-fields";

/// Ids of a form's submit button, label and busy indicator
pub fn busy_element_ids(form: Form) -> [String; 3] {
    let prefix = form.prefix();
    [
        format!("{}-btn", prefix),
        format!("{}-text", prefix),
        format!("{}-loading", prefix),
    ]
}

/// CSS classes of a transcript entry
pub fn message_class(role: ChatRole) -> &'static str {
    match role {
        ChatRole::User => "message user-message",
        ChatRole::Assistant => "message assistant-message",
    }
}

pub struct DomView {
    window: Window,
    document: Document,
}

impl DomView {
    /// # Errors
    /// Returns JsValue error if unable to access window or document
    pub fn new() -> Result<Self, JsValue> {
        let window =
            web_sys::window().ok_or_else(|| JsValue::from_str("No window object available"))?;
        let document = window
            .document()
            .ok_or_else(|| JsValue::from_str("No document object available"))?;
        Ok(Self { window, document })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Option<Element> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            web_sys::console::warn_1(&format!("Missing element #{}", id).into());
        }
        element
    }

    fn html_element(&self, id: &str) -> Option<HtmlElement> {
        self.element(id).and_then(|e| e.dyn_into::<HtmlElement>().ok())
    }

    /// Current value of an input, textarea or select
    fn value_of(&self, id: &str) -> String {
        let Some(element) = self.element(id) else {
            return String::new();
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.value()
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.value()
        } else if let Some(select) = element.dyn_ref::<HtmlSelectElement>() {
            select.value()
        } else {
            String::new()
        }
    }

    fn set_display(&self, id: &str, display: &str) {
        if let Some(element) = self.html_element(id) {
            set_display(&element, display);
        }
    }

    fn reveal_and_scroll(&self, id: &str) {
        let Some(element) = self.html_element(id) else {
            return;
        };
        set_display(&element, "block");

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        element.scroll_into_view_with_scroll_into_view_options(&options);
    }

    fn create(&self, tag: &str, class: &str, text: &str) -> Result<Element, JsValue> {
        let element = self.document.create_element(tag)?;
        if !class.is_empty() {
            element.set_class_name(class);
        }
        element.set_text_content(Some(text));
        Ok(element)
    }

    fn render_search_result(&self, result: &SearchResult) -> Result<(), JsValue> {
        if let Some(answer) = self.element(RESEARCH_ANSWER_ID) {
            answer.set_inner_html("");
            for paragraph in answer_paragraphs(&result.answer) {
                answer.append_child(&self.create("p", "", paragraph)?.into())?;
            }
        }

        if let Some(container) = self.element(RESEARCH_SOURCES_ID) {
            container.set_inner_html("");
            for source in &result.sources {
                let item = self.document.create_element("div")?;
                item.set_class_name("source-item");
                item.append_child(&self.create(
                    "div",
                    "source-header",
                    &format!("📄 {}", source.filename),
                )?.into())?;
                item.append_child(&self.create("div", "source-content", &source.excerpt)?.into())?;
                item.append_child(&self.create("div", "source-score", &score_line(source))?.into())?;
                container.append_child(&item)?;
            }
        }

        self.reveal_and_scroll(RESEARCH_RESULT_ID);
        Ok(())
    }

    fn render_chat_message(&self, role: ChatRole, content: &str) -> Result<(), JsValue> {
        let Some(messages) = self.element(CHAT_MESSAGES_ID) else {
            return Ok(());
        };

        let entry = self.document.create_element("div")?;
        entry.set_class_name(message_class(role));
        entry.append_child(&self.create("strong", "", &format!("{} :", role.label()))?.into())?;
        entry.append_child(&self.create("span", "", &format!(" {}", content))?.into())?;
        messages.append_child(&entry)?;

        messages.set_scroll_top(messages.scroll_height());
        Ok(())
    }
}

fn set_display(element: &HtmlElement, display: &str) {
    if let Err(e) = element.style().set_property("display", display) {
        web_sys::console::error_2(&"Failed to set display".into(), &e);
    }
}

fn report(result: Result<(), JsValue>) {
    if let Err(e) = result {
        web_sys::console::error_2(&"DOM update failed".into(), &e);
    }
}

impl View for DomView {
    fn selected_document_type(&self) -> String {
        self.value_of(DOCUMENT_TYPE_ID)
    }

    fn field_value(&self, field: &FieldSpec) -> String {
        self.value_of(field.markup_id())
    }

    fn search_question(&self) -> String {
        self.value_of(QUESTION_ID)
    }

    fn chat_input(&self) -> String {
        self.value_of(CHAT_INPUT_ID)
    }

    fn clear_chat_input(&self) {
        let Some(element) = self.element(CHAT_INPUT_ID) else {
            return;
        };
        if let Some(input) = element.dyn_ref::<HtmlInputElement>() {
            input.set_value("");
        } else if let Some(area) = element.dyn_ref::<HtmlTextAreaElement>() {
            area.set_value("");
        }
    }

    fn set_busy(&self, form: Form, busy: bool) {
        let [button, text, loading] = busy_element_ids(form);
        if let Some(button) = self
            .element(&button)
            .and_then(|e| e.dyn_into::<HtmlButtonElement>().ok())
        {
            button.set_disabled(busy);
        }
        self.set_display(&text, if busy { "none" } else { "inline" });
        self.set_display(&loading, if busy { "inline" } else { "none" });
    }

    fn show_error(&self, message: &str) {
        web_sys::console::error_1(&format!("Error: {}", message).into());
        if let Err(e) = self.window.alert_with_message(&format!("Error: {}", message)) {
            web_sys::console::error_2(&"Alert failed".into(), &e);
        }
    }

    fn show_fields_for(&self, kind: Option<DocumentKind>) {
        let groups = match self
            .document
            .query_selector_all(&format!(".{}", DOCUMENT_FIELDS_CLASS))
        {
            Ok(groups) => groups,
            Err(e) => {
                web_sys::console::error_2(&"Field lookup failed".into(), &e);
                return;
            }
        };

        for i in 0..groups.length() {
            if let Some(group) = groups.get(i).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                set_display(&group, "none");
            }
        }

        if let Some(kind) = kind {
            if let Some(group) = self
                .document
                .get_element_by_id(&kind.fields_group_id())
                .and_then(|e| e.dyn_into::<HtmlElement>().ok())
            {
                set_display(&group, "block");
            }
        }
    }

    fn show_document(&self, text: &str) {
        if let Some(output) = self.element(GENERATED_DOCUMENT_ID) {
            output.set_text_content(Some(text));
        }
        self.reveal_and_scroll(GENERATION_RESULT_ID);
    }

    fn show_search_result(&self, result: &SearchResult) {
        report(self.render_search_result(result));
    }

    fn append_chat_message(&self, role: ChatRole, content: &str) {
        report(self.render_chat_message(role, content));
    }
}
