use crate::api::{DocumentGenerationRequest, DocumentGenerationResponse};
use crate::documents::DocumentKind;
use crate::error::ClientError;
use crate::transport::{ApiClient, Transport};
use crate::view::{BusyGuard, Form, View};

fn selected_kind<V: View + ?Sized>(view: &V) -> Result<DocumentKind, ClientError> {
    let selected = view.selected_document_type();
    if selected.trim().is_empty() {
        return Err(ClientError::Validation(
            "Please select a document type".to_string(),
        ));
    }
    DocumentKind::parse(&selected).ok_or_else(|| {
        ClientError::Validation(format!("Unsupported document type: {}", selected.trim()))
    })
}

/// Generate the selected document from the form fields
///
/// Nothing is sent when no (known) document type is selected. On failure
/// the previously rendered document, if any, stays on screen.
pub async fn generate_document<T, V>(
    client: &ApiClient<T>,
    view: &V,
) -> Result<DocumentGenerationResponse, ClientError>
where
    T: Transport,
    V: View + ?Sized,
{
    let kind = selected_kind(view).inspect_err(|err| view.show_error(&err.to_string()))?;

    let _busy = BusyGuard::acquire(view, Form::Generation);

    let request = DocumentGenerationRequest {
        document_type: kind,
        parameters: kind.collect_parameters(|field| view.field_value(field)),
    };

    match client.generate_document(&request).await {
        Ok(response) => {
            view.show_document(&response.generated_document);
            Ok(response)
        }
        Err(err) => {
            view.show_error(&format!("Generation error: {}", err));
            Err(err)
        }
    }
}

/// Reveal the field group matching the current selection
pub fn document_type_changed<V: View + ?Sized>(view: &V) {
    let kind = DocumentKind::parse(&view.selected_document_type());
    view.show_fields_for(kind);
}
