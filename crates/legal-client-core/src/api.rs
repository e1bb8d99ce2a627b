//! Request and response bodies exchanged with the backend
//!
//! Field names on the wire follow the backend (`type_document`,
//! `parametres`, `reponse`, ...); the Rust side uses descriptive names.

use serde::{Deserialize, Serialize};

use crate::documents::{DocumentKind, DocumentParameters};

// ============================================================================
// Document generation
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentGenerationRequest {
    #[serde(rename = "type_document")]
    pub document_type: DocumentKind,
    #[serde(rename = "parametres")]
    pub parameters: DocumentParameters,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentGenerationResponse {
    #[serde(rename = "document_genere")]
    pub generated_document: String,
    #[serde(rename = "type_document", default)]
    pub document_type: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Legal search
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegalSearchRequest {
    pub question: String,
    #[serde(rename = "contexte", default, skip_serializing_if = "Option::is_none")]
    pub context: Option<String>,
}

impl LegalSearchRequest {
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            context: None,
        }
    }
}

/// One retrieved passage backing a search answer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceDocument {
    #[serde(rename = "nom_fichier")]
    pub filename: String,
    #[serde(rename = "contenu")]
    pub excerpt: String,
    #[serde(rename = "score")]
    pub relevance_score: f64,
}

/// Answer to a legal question, sources kept in server order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    #[serde(rename = "reponse")]
    pub answer: String,
    pub sources: Vec<SourceDocument>,
    #[serde(default)]
    pub question: Option<String>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Chat
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

impl ChatRole {
    /// Speaker label shown in a transcript
    pub fn label(&self) -> &'static str {
        match self {
            ChatRole::User => "You",
            ChatRole::Assistant => "Assistant",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    #[serde(rename = "historique", default)]
    pub history: Vec<ChatMessage>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatResponse {
    #[serde(rename = "reponse")]
    pub reply: String,
    #[serde(rename = "historique")]
    pub history: Vec<ChatMessage>,
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
}

// ============================================================================
// Errors
// ============================================================================

/// Error body returned with a non-success status
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub detail: Option<String>,
}
