//! Workflow controllers
//!
//! Each workflow reads its form, validates presence, calls the backend,
//! renders the outcome and releases the busy state on every exit path.
//! [`Controller`] bundles the three behind one handle a front-end can bind
//! to its events.

mod chat;
mod generation;
mod search;

pub use chat::ChatWorkflow;
pub use generation::{document_type_changed, generate_document};
pub use search::legal_search;

use crate::api::{ChatMessage, ChatResponse, DocumentGenerationResponse, SearchResult};
use crate::error::ClientError;
use crate::transport::{ApiClient, Transport};
use crate::view::View;

pub struct Controller<T, V> {
    client: ApiClient<T>,
    view: V,
    chat: ChatWorkflow,
}

impl<T: Transport, V: View> Controller<T, V> {
    pub fn new(client: ApiClient<T>, view: V) -> Self {
        Self {
            client,
            view,
            chat: ChatWorkflow::new(),
        }
    }

    pub fn client(&self) -> &ApiClient<T> {
        &self.client
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    /// Snapshot of the conversation history as last returned by the server
    pub fn chat_history(&self) -> Vec<ChatMessage> {
        self.chat.history()
    }

    pub async fn generate_document(&self) -> Result<DocumentGenerationResponse, ClientError> {
        generate_document(&self.client, &self.view).await
    }

    pub async fn legal_search(&self) -> Result<SearchResult, ClientError> {
        legal_search(&self.client, &self.view).await
    }

    /// `Ok(None)` when the input was blank and nothing was sent
    pub async fn send_chat(&self) -> Result<Option<ChatResponse>, ClientError> {
        self.chat.submit(&self.client, &self.view).await
    }

    pub fn document_type_changed(&self) {
        document_type_changed(&self.view)
    }
}
