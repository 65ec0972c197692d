// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for Obscura.

use thiserror::Error;

/// Top-level error type for all Obscura operations.
#[derive(Debug, Error)]
pub enum ObscuraError {
    // -- Input / output --
    #[error("failed to read image {path}: {reason}")]
    ImageRead { path: String, reason: String },

    #[error("failed to decode image: {0}")]
    ImageDecode(String),

    #[error("failed to write image {path}: {reason}")]
    ImageWrite { path: String, reason: String },

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    // -- Transform chain --
    #[error("image processing failed: {0}")]
    Processing(String),

    // -- Configuration --
    #[error("invalid obfuscation parameters: {0}")]
    InvalidParams(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Coarse classification of an [`ObscuraError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source unreadable or undecodable, or destination unwritable.
    Io,
    /// Failure inside the fixed transform chain.
    Processing,
    /// Rejected parameters or a malformed parameter file.
    Config,
}

impl ObscuraError {
    /// Which side of the pipeline this error came from.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::ImageRead { .. } | Self::ImageDecode(_) | Self::ImageWrite { .. } | Self::Io(_) => {
                ErrorKind::Io
            }
            Self::Processing(_) => ErrorKind::Processing,
            Self::InvalidParams(_) | Self::Serialization(_) => ErrorKind::Config,
        }
    }
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, ObscuraError>;
