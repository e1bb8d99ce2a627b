//! The surface a front-end exposes to the workflows
//!
//! A [`View`] both reads the current form state and renders results. All
//! methods take `&self`: the DOM and the terminal are interior-mutable.

use crate::api::{ChatRole, SearchResult};
use crate::documents::{DocumentKind, FieldSpec};

/// Forms with a submit control and a busy indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Form {
    Generation,
    Search,
    Chat,
}

impl Form {
    /// Prefix of the element ids belonging to this form
    pub fn prefix(&self) -> &'static str {
        match self {
            Form::Generation => "generate",
            Form::Search => "research",
            Form::Chat => "chat",
        }
    }
}

pub trait View {
    // --- form state ---

    /// Raw value of the document-type selector, empty when nothing is selected
    fn selected_document_type(&self) -> String;

    /// Value of a document field input
    fn field_value(&self, field: &FieldSpec) -> String;

    fn search_question(&self) -> String;

    fn chat_input(&self) -> String;

    fn clear_chat_input(&self);

    // --- feedback ---

    /// Disable/enable the submit control and toggle the busy indicator
    fn set_busy(&self, form: Form, busy: bool);

    /// Blocking notification carrying a human-readable message
    fn show_error(&self, message: &str);

    /// Reveal only the field group of `kind` (none when `None`)
    fn show_fields_for(&self, kind: Option<DocumentKind>);

    // --- results ---

    fn show_document(&self, text: &str);

    fn show_search_result(&self, result: &SearchResult);

    fn append_chat_message(&self, role: ChatRole, content: &str);
}

/// Marks a form busy for as long as it lives
///
/// Dropping the guard restores the idle state, so every exit path of a
/// workflow (success, error, early return) releases the form.
pub struct BusyGuard<'a, V: View + ?Sized> {
    view: &'a V,
    form: Form,
}

impl<'a, V: View + ?Sized> BusyGuard<'a, V> {
    pub fn acquire(view: &'a V, form: Form) -> Self {
        view.set_busy(form, true);
        Self { view, form }
    }
}

impl<V: View + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.view.set_busy(self.form, false);
    }
}
