//! Document types the backend can draft and the form fields each one needs

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Parameters sent with a generation request, keyed by backend name
pub type DocumentParameters = BTreeMap<String, String>;

/// One form input feeding a generation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    /// Short English id, used on the command line
    pub form_id: &'static str,
    /// Key under which the value is sent to the backend
    pub param_key: &'static str,
    pub label: &'static str,
}

impl FieldSpec {
    /// Id of the input in the page markup, which names inputs by backend key
    pub fn markup_id(&self) -> &'static str {
        self.param_key
    }
}

const CONTRACT_FIELDS: [FieldSpec; 5] = [
    FieldSpec { form_id: "employer", param_key: "employeur", label: "Employer" },
    FieldSpec { form_id: "employee", param_key: "employe", label: "Employee" },
    FieldSpec { form_id: "role", param_key: "poste", label: "Position" },
    FieldSpec { form_id: "salary", param_key: "salaire", label: "Monthly gross salary" },
    FieldSpec { form_id: "duration", param_key: "duree", label: "Duration" },
];

const FORMAL_NOTICE_FIELDS: [FieldSpec; 4] = [
    FieldSpec { form_id: "sender", param_key: "expediteur", label: "Sender" },
    FieldSpec { form_id: "recipient", param_key: "destinataire", label: "Recipient" },
    FieldSpec { form_id: "subject", param_key: "objet", label: "Subject" },
    FieldSpec { form_id: "deadline", param_key: "delai", label: "Deadline (days)" },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Employment contract
    #[serde(rename = "contrat")]
    Contract,
    /// Formal notice to perform an obligation
    #[serde(rename = "mise_en_demeure")]
    FormalNotice,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [DocumentKind::Contract, DocumentKind::FormalNotice];

    /// Parse a selection value; backend tags and English aliases are accepted
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "contrat" | "contract" => Some(DocumentKind::Contract),
            "mise_en_demeure" | "formal_notice" => Some(DocumentKind::FormalNotice),
            _ => None,
        }
    }

    /// Tag sent as `type_document`
    pub fn tag(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "contrat",
            DocumentKind::FormalNotice => "mise_en_demeure",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            DocumentKind::Contract => "Employment contract",
            DocumentKind::FormalNotice => "Formal notice",
        }
    }

    pub fn fields(&self) -> &'static [FieldSpec] {
        match self {
            DocumentKind::Contract => &CONTRACT_FIELDS,
            DocumentKind::FormalNotice => &FORMAL_NOTICE_FIELDS,
        }
    }

    /// Id of the element grouping this kind's inputs (`<tag>-fields`)
    pub fn fields_group_id(&self) -> String {
        format!("{}-fields", self.tag())
    }

    /// Build the parameters for this kind, reading each input through `read`
    ///
    /// Exactly the fields of this kind are present; values are taken as-is.
    pub fn collect_parameters<F>(&self, mut read: F) -> DocumentParameters
    where
        F: FnMut(&FieldSpec) -> String,
    {
        self.fields()
            .iter()
            .map(|field| (field.param_key.to_string(), read(field)))
            .collect()
    }
}

impl std::fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
