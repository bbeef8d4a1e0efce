// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Unified error types for DICOM Desk.

use thiserror::Error;

/// Top-level error type for all DICOM Desk operations.
#[derive(Debug, Error)]
pub enum DeskError {
    // -- Page host --
    #[error("element not found: {0}")]
    MissingElement(String),

    // -- Rendering --
    #[error("fragment rendering failed: {0}")]
    Render(String),

    // -- Configuration / persistence --
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("file I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias used throughout the codebase.
pub type Result<T> = std::result::Result<T, DeskError>;
