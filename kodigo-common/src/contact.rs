//! Contact form model
//!
//! The contact form does not submit anywhere. A valid message is encoded into
//! the query string of the confirmation page, which decodes it again to show
//! the sender what was "sent".

use std::fmt;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Minimum length of the message body, in characters
pub const MIN_MESSAGE_LEN: usize = 10;

/// The four fields of the contact form
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

/// Per-field validation messages; `None` means the field is fine
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactErrors {
    pub name: Option<String>,
    pub email: Option<String>,
    pub subject: Option<String>,
    pub message: Option<String>,
}

impl ContactErrors {
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.email.is_none()
            && self.subject.is_none()
            && self.message.is_none()
    }
}

fn email_pattern() -> &'static Regex {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL.get_or_init(|| {
        Regex::new(r"(?i)^[A-Z0-9._%+-]+@[A-Z0-9.-]+\.[A-Z]{2,}$").expect("email pattern is valid")
    })
}

impl ContactMessage {
    /// Check every field, collecting all problems at once
    pub fn validate(&self) -> Result<(), ContactErrors> {
        let mut errors = ContactErrors::default();

        if self.name.trim().is_empty() {
            errors.name = Some("El nombre es obligatorio".to_string());
        }

        if self.email.trim().is_empty() {
            errors.email = Some("El correo electrónico es obligatorio".to_string());
        } else if !email_pattern().is_match(self.email.trim()) {
            errors.email = Some("Correo electrónico inválido".to_string());
        }

        if self.subject.trim().is_empty() {
            errors.subject = Some("El asunto es obligatorio".to_string());
        }

        if self.message.trim().is_empty() {
            errors.message = Some("El mensaje es obligatorio".to_string());
        } else if self.message.chars().count() < MIN_MESSAGE_LEN {
            errors.message = Some(format!(
                "El mensaje debe tener al menos {MIN_MESSAGE_LEN} caracteres"
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Encode as `name=..&email=..&subject=..&message=..`
    pub fn to_query(&self) -> String {
        serde_urlencoded::to_string(self).unwrap_or_else(|e| {
            warn!("failed to encode contact message: {e}");
            String::new()
        })
    }

    /// Decode from a query string, with or without the leading `?`.
    ///
    /// Missing or malformed fields come back empty.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        serde_urlencoded::from_str(query).unwrap_or_else(|e| {
            warn!("failed to decode contact message: {e}");
            Self::default()
        })
    }

    /// Fields that have something to show, labelled for display
    pub fn filled_fields(&self) -> Vec<(&'static str, &str)> {
        [
            ("Nombre", self.name.as_str()),
            ("Email", self.email.as_str()),
            ("Asunto", self.subject.as_str()),
            ("Mensaje", self.message.as_str()),
        ]
        .into_iter()
        .filter(|(_, value)| !value.is_empty())
        .collect()
    }
}

// Route query segments are parsed and rendered through these two impls.
impl From<&str> for ContactMessage {
    fn from(query: &str) -> Self {
        Self::from_query(query)
    }
}

impl fmt::Display for ContactMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_query())
    }
}
