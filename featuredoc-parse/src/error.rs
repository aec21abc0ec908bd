use serde::{Deserialize, Serialize};

use crate::types::Span;

/// A diagnostic message produced during scanning.
///
/// Diagnostics are non-fatal: the scanner always completes and produces a
/// block sequence even when diagnostics are emitted. They flag the content
/// the dialect silently loses (dropped lines, unterminated constructs).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub span: Option<Span>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Info,
}
