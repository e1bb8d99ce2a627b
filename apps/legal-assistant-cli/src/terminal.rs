//! Line-oriented [`View`] for the terminal
//!
//! Form state is filled from the command line before a workflow runs;
//! results go to `out`, notifications to `err`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::io::Write;

use legal_client_core::render::{answer_paragraphs, format_score};
use legal_client_core::{ChatRole, DocumentKind, FieldSpec, Form, SearchResult, View};

pub struct TerminalView<O: Write, E: Write> {
    document_type: RefCell<String>,
    fields: RefCell<HashMap<String, String>>,
    question: RefCell<String>,
    chat_input: RefCell<String>,
    out: RefCell<O>,
    err: RefCell<E>,
}

impl<O: Write, E: Write> TerminalView<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self {
            document_type: RefCell::new(String::new()),
            fields: RefCell::new(HashMap::new()),
            question: RefCell::new(String::new()),
            chat_input: RefCell::new(String::new()),
            out: RefCell::new(out),
            err: RefCell::new(err),
        }
    }

    pub fn select_document_type(&self, tag: &str) {
        *self.document_type.borrow_mut() = tag.to_string();
    }

    pub fn set_field(&self, id: &str, value: &str) {
        self.fields
            .borrow_mut()
            .insert(id.to_string(), value.to_string());
    }

    pub fn set_question(&self, question: &str) {
        *self.question.borrow_mut() = question.to_string();
    }

    pub fn type_chat(&self, message: &str) {
        *self.chat_input.borrow_mut() = message.to_string();
    }

    pub fn into_writers(self) -> (O, E) {
        (self.out.into_inner(), self.err.into_inner())
    }

    fn print(&self, line: &str) {
        if let Err(e) = writeln!(self.out.borrow_mut(), "{}", line) {
            tracing::warn!(error = %e, "Failed to write output");
        }
    }

    fn notify(&self, line: &str) {
        if let Err(e) = writeln!(self.err.borrow_mut(), "{}", line) {
            tracing::warn!(error = %e, "Failed to write notification");
        }
    }
}

impl<O: Write, E: Write> View for TerminalView<O, E> {
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
    }

    fn set_busy(&self, form: Form, busy: bool) {
        tracing::debug!(form = form.prefix(), busy, "Form state");
    }

    fn show_error(&self, message: &str) {
        self.notify(&format!("Error: {}", message));
    }

    fn show_fields_for(&self, kind: Option<DocumentKind>) {
        let Some(kind) = kind else {
            self.notify("Unknown document type. Choose one of: contract, formal_notice");
            return;
        };
        self.print(&format!("{} ({}):", kind.display_name(), kind.tag()));
        for field in kind.fields() {
            self.print(&format!("  --field {}=<{}>", field.form_id, field.label));
        }
    }

    fn show_document(&self, text: &str) {
        self.print(text);
    }

    fn show_search_result(&self, result: &SearchResult) {
        for paragraph in answer_paragraphs(&result.answer) {
            self.print(paragraph);
        }
        if result.sources.is_empty() {
            return;
        }
        self.print("");
        self.print("Sources:");
        for (index, source) in result.sources.iter().enumerate() {
            self.print(&format!(
                "  [{}] {} (relevance {})",
                index + 1,
                source.filename,
                format_score(source.relevance_score)
            ));
            self.print(&format!("      {}", source.excerpt));
        }
    }

    fn append_chat_message(&self, role: ChatRole, content: &str) {
        // The user's own line is already on screen
        if role == ChatRole::Assistant {
            self.print(&format!("{} : {}", role.label(), content));
        }
    }
}
