use std::cell::RefCell;

use crate::api::{ChatMessage, ChatRequest, ChatResponse, ChatRole};
use crate::error::ClientError;
use crate::render::CHAT_APOLOGY;
use crate::transport::{ApiClient, Transport};
use crate::view::{BusyGuard, Form, View};

/// Chat turns plus the conversation history they share
///
/// The history is only ever read and written here. It is sent by value
/// with each message and overwritten by the server's copy on success.
#[derive(Debug, Default)]
pub struct ChatWorkflow {
    history: RefCell<Vec<ChatMessage>>,
}

impl ChatWorkflow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn history(&self) -> Vec<ChatMessage> {
        self.history.borrow().clone()
    }

    /// Send the chat input as the next turn
    ///
    /// A blank input is ignored without feedback. The user message is shown
    /// before the request goes out; a failed request adds an apology to the
    /// transcript and leaves the history untouched.
    pub async fn submit<T, V>(
        &self,
        client: &ApiClient<T>,
        view: &V,
    ) -> Result<Option<ChatResponse>, ClientError>
    where
        T: Transport,
        V: View + ?Sized,
    {
        let message = view.chat_input().trim().to_string();
        if message.is_empty() {
            return Ok(None);
        }

        view.append_chat_message(ChatRole::User, &message);
        view.clear_chat_input();

        let _busy = BusyGuard::acquire(view, Form::Chat);

        let request = ChatRequest {
            message,
            history: self.history(),
        };

        match client.chat(&request).await {
            Ok(response) => {
                view.append_chat_message(ChatRole::Assistant, &response.reply);
                *self.history.borrow_mut() = response.history.clone();
                Ok(Some(response))
            }
            Err(err) => {
                view.show_error(&format!("Chat error: {}", err));
                view.append_chat_message(ChatRole::Assistant, CHAT_APOLOGY);
                Err(err)
            }
        }
    }
}
