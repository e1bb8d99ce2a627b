//! Test doubles: a scripted transport and a view that records everything

#![allow(dead_code)]

use std::cell::{Cell, RefCell};
use std::collections::{HashMap, VecDeque};

use async_trait::async_trait;
use legal_client_core::{
    resolve, ApiClient, ChatRole, ClientError, Controller, DocumentKind, FieldSpec, Form,
    HttpReply, SearchResult, Transport, View,
};
use serde_json::Value;

/// A request as seen by the transport
#[derive(Debug, Clone)]
pub struct Posted {
    pub url: String,
    pub body: Value,
}

/// Plays back queued replies in order; runs dry with a transport error
#[derive(Default)]
pub struct ScriptedTransport {
    replies: RefCell<VecDeque<Result<HttpReply, ClientError>>>,
    posted: RefCell<Vec<Posted>>,
}

impl ScriptedTransport {
    pub fn reply(self, status: u16, body: Value) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply::new(status, body.to_string())));
        self
    }

    pub fn reply_raw(self, status: u16, body: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Ok(HttpReply::new(status, body)));
        self
    }

    pub fn fail(self, message: &str) -> Self {
        self.replies
            .borrow_mut()
            .push_back(Err(ClientError::Transport(message.to_string())));
        self
    }

    pub fn posted(&self) -> Vec<Posted> {
        self.posted.borrow().clone()
    }
}

#[async_trait(?Send)]
impl Transport for ScriptedTransport {
    async fn post_json(&self, url: &str, body: String) -> Result<HttpReply, ClientError> {
        self.posted.borrow_mut().push(Posted {
            url: url.to_string(),
            body: serde_json::from_str(&body).expect("payload is JSON"),
        });
        self.replies
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(ClientError::Transport("no scripted reply".to_string())))
    }
}

/// Observable effects on the view, in order
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    Busy(Form, bool),
    Error(String),
    Fields(Option<DocumentKind>),
    Document(String),
    Search(SearchResult),
    Chat(ChatRole, String),
    ChatInputCleared,
}

#[derive(Default)]
pub struct RecordingView {
    pub document_type: RefCell<String>,
    pub fields: RefCell<HashMap<String, String>>,
    pub question: RefCell<String>,
    pub chat_input: RefCell<String>,
    events: RefCell<Vec<Event>>,
    busy: RefCell<HashMap<Form, bool>>,
    busy_transitions: Cell<usize>,
}

impl RecordingView {
    pub fn with_document_type(self, tag: &str) -> Self {
        *self.document_type.borrow_mut() = tag.to_string();
        self
    }

    pub fn with_field(self, id: &str, value: &str) -> Self {
        self.fields
            .borrow_mut()
            .insert(id.to_string(), value.to_string());
        self
    }

    pub fn with_question(self, question: &str) -> Self {
        *self.question.borrow_mut() = question.to_string();
        self
    }

    pub fn type_chat(&self, message: &str) {
        *self.chat_input.borrow_mut() = message.to_string();
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.borrow().clone()
    }

    pub fn errors(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Error(message) => Some(message),
                _ => None,
            })
            .collect()
    }

    pub fn documents(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Document(text) => Some(text),
                _ => None,
            })
            .collect()
    }

    pub fn transcript(&self) -> Vec<(ChatRole, String)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Chat(role, content) => Some((role, content)),
                _ => None,
            })
            .collect()
    }

    pub fn is_busy(&self, form: Form) -> bool {
        self.busy.borrow().get(&form).copied().unwrap_or(false)
    }

    pub fn busy_transitions(&self) -> usize {
        self.busy_transitions.get()
    }

    fn record(&self, event: Event) {
        self.events.borrow_mut().push(event);
    }
}

impl View for RecordingView {
    fn selected_document_type(&self) -> String {
        self.document_type.borrow().clone()
    }

    fn field_value(&self, field: &FieldSpec) -> String {
        self.fields
            .borrow()
            .get(field.form_id)
            .cloned()
            .unwrap_or_default()
    }

    fn search_question(&self) -> String {
        self.question.borrow().clone()
    }

    fn chat_input(&self) -> String {
        self.chat_input.borrow().clone()
    }

    fn clear_chat_input(&self) {
        self.chat_input.borrow_mut().clear();
        self.record(Event::ChatInputCleared);
    }

    fn set_busy(&self, form: Form, busy: bool) {
        self.busy.borrow_mut().insert(form, busy);
        self.busy_transitions.set(self.busy_transitions.get() + 1);
        self.record(Event::Busy(form, busy));
    }

    fn show_error(&self, message: &str) {
        self.record(Event::Error(message.to_string()));
    }

    fn show_fields_for(&self, kind: Option<DocumentKind>) {
        self.record(Event::Fields(kind));
    }

    fn show_document(&self, text: &str) {
        self.record(Event::Document(text.to_string()));
    }

    fn show_search_result(&self, result: &SearchResult) {
        self.record(Event::Search(result.clone()));
    }

    fn append_chat_message(&self, role: ChatRole, content: &str) {
        self.record(Event::Chat(role, content.to_string()));
    }
}

pub fn controller(
    host: &str,
    transport: ScriptedTransport,
    view: RecordingView,
) -> Controller<ScriptedTransport, RecordingView> {
    Controller::new(ApiClient::new(resolve(host), transport), view)
}
