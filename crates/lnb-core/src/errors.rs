//! Errors raised while reading transcripts, side files and configurations.

use std::collections::BTreeMap;
use std::fmt::{self, Display};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// What went wrong and where: a stable code plus the offending tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Short kebab-case code such as `size-field` or `missing-marker`.
    pub code: String,
    /// Message shown to the user.
    pub message: String,
    /// Offending token, marker, line or coordinate, keyed by name.
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// How to produce input the grammar accepts, when known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl ErrorInfo {
    /// Payload with no context and no hint.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            context: BTreeMap::new(),
            hint: None,
        }
    }

    /// Records one offending value under `key`.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Attaches advice on fixing the input.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }
}

/// Canonical error type for parsing and reconstructing search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "family", content = "detail")]
pub enum LnbError {
    /// A size or generator token does not follow its family grammar.
    #[error("token error: {0}")]
    Token(ErrorInfo),
    /// A marker line required by the family grammar is absent.
    #[error("missing marker: {0}")]
    MissingMarker(ErrorInfo),
    /// A coordinate, level or matrix shape falls outside the point set.
    #[error("dimension error: {0}")]
    Dimension(ErrorInfo),
    /// Search configuration errors.
    #[error("config error: {0}")]
    Config(ErrorInfo),
    /// Serialization and schema errors.
    #[error("serde error: {0}")]
    Serde(ErrorInfo),
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code, self.message)?;
        let context = self
            .context
            .iter()
            .map(|(key, value)| format!("{key}={value}"))
            .collect::<Vec<_>>();
        if !context.is_empty() {
            write!(f, " [{}]", context.join(", "))?;
        }
        match &self.hint {
            Some(hint) => write!(f, " ({hint})"),
            None => Ok(()),
        }
    }
}

impl LnbError {
    /// Payload of any variant.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            LnbError::Token(info)
            | LnbError::MissingMarker(info)
            | LnbError::Dimension(info)
            | LnbError::Config(info)
            | LnbError::Serde(info) => info,
        }
    }

    /// Shorthand for a token error carrying the offending token.
    pub fn token(code: &str, message: impl Into<String>, token: &str) -> Self {
        LnbError::Token(ErrorInfo::new(code, message).with_context("token", token))
    }

    /// Shorthand for a missing marker error naming the marker text.
    pub fn missing_marker(marker: &str) -> Self {
        LnbError::MissingMarker(
            ErrorInfo::new("missing-marker", format!("no line containing `{marker}`"))
                .with_context("marker", marker),
        )
    }
}
