// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Error types for document loading and saving.

use league_scheduler_domain::DomainError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading or writing documents.
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// The file could not be read or written.
    #[error("I/O error on '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid JSON or does not have the expected shape.
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A game date is not an ISO-8601 calendar date.
    #[error("Invalid date '{value}': {reason}")]
    InvalidDate { value: String, reason: String },

    /// The document violates a league or calendar rule.
    #[error("Domain violation: {0}")]
    Domain(#[from] DomainError),
}
