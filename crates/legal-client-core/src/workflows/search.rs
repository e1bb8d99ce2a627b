use crate::api::{LegalSearchRequest, SearchResult};
use crate::error::ClientError;
use crate::transport::{ApiClient, Transport};
use crate::view::{BusyGuard, Form, View};

/// Ask the backend a legal question and render the answer with its sources
pub async fn legal_search<T, V>(client: &ApiClient<T>, view: &V) -> Result<SearchResult, ClientError>
where
    T: Transport,
    V: View + ?Sized,
{
    let question = view.search_question().trim().to_string();
    if question.is_empty() {
        let err = ClientError::Validation("Please enter a legal question".to_string());
        view.show_error(&err.to_string());
        return Err(err);
    }

    let _busy = BusyGuard::acquire(view, Form::Search);

    match client.legal_search(&LegalSearchRequest::new(question)).await {
        Ok(result) => {
            view.show_search_result(&result);
            Ok(result)
        }
        Err(err) => {
            view.show_error(&format!("Search error: {}", err));
            Err(err)
        }
    }
}
