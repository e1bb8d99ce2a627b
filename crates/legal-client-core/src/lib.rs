//! Legal Assistant client core
//!
//! Platform-independent half of the legal assistant front-ends. Holds:
//! - Environment resolution (`config`)
//! - The JSON-over-HTTP transport client (`transport`)
//! - Wire types for the three backend endpoints (`api`)
//! - The document-type catalogue (`documents`)
//! - Workflow controllers driving a [`View`] (`workflows`)
//!
//! Front-ends (the wasm app, the CLI) only supply a [`Transport`] and a
//! [`View`]; everything else lives here so it can be tested natively.

pub mod api;
pub mod config;
pub mod documents;
pub mod error;
pub mod render;
pub mod transport;
pub mod view;
pub mod workflows;

pub use api::{
    ChatMessage, ChatRequest, ChatResponse, ChatRole, DocumentGenerationRequest,
    DocumentGenerationResponse, LegalSearchRequest, SearchResult, SourceDocument,
};
pub use config::{resolve, ApiConfig, ConfigSurface, Endpoint, Environment};
pub use documents::{DocumentKind, DocumentParameters, FieldSpec};
pub use error::{ClientError, ErrorKind};
pub use transport::{ApiClient, HttpReply, Transport};
pub use view::{BusyGuard, Form, View};
pub use workflows::{ChatWorkflow, Controller};
