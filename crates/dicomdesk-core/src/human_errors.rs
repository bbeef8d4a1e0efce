// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Human-readable error messages for the settings and status areas of the UI.
//
// Every technical error is mapped to plain English with a clear suggestion.
// Severity drives how the UI presents it.

use crate::error::DeskError;

/// Severity of an error from the user's perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Retrying may help.
    Transient,
    /// User must change something (a setting, a file location).
    ActionRequired,
    /// Cannot be fixed from inside the app.
    Permanent,
}

/// A human-readable error with plain English message and actionable suggestion.
#[derive(Debug, Clone)]
pub struct HumanError {
    /// Plain English summary (shown as a heading).
    pub message: String,
    /// What the user should try (shown as body text).
    pub suggestion: String,
    /// Severity level (drives colour in UI).
    pub severity: Severity,
}

/// Convert a `DeskError` into a `HumanError`.
pub fn humanize_error(err: &DeskError) -> HumanError {
    match err {
        DeskError::MissingElement(id) => HumanError {
            message: "The services page is incomplete.".into(),
            suggestion: format!(
                "Check the panel settings: no element matches \"{id}\". Resetting to defaults usually fixes this."
            ),
            severity: Severity::ActionRequired,
        },

        DeskError::Render(_) => HumanError {
            message: "A service description could not be displayed.".into(),
            suggestion: "Please report this problem; it needs a fix in the app.".into(),
            severity: Severity::Permanent,
        },

        DeskError::Config(detail) => HumanError {
            message: "Those settings can't be used.".into(),
            suggestion: format!("Correct the highlighted value and save again. ({detail})"),
            severity: Severity::ActionRequired,
        },

        DeskError::Io(io_err) => match io_err.kind() {
            std::io::ErrorKind::NotFound => HumanError {
                message: "The settings file couldn't be found.".into(),
                suggestion: "Default settings are in use. Save your settings to create the file.".into(),
                severity: Severity::ActionRequired,
            },
            std::io::ErrorKind::PermissionDenied => HumanError {
                message: "The app doesn't have permission to use its settings file.".into(),
                suggestion: "Check the permissions of the DICOM Desk data folder.".into(),
                severity: Severity::ActionRequired,
            },
            _ => HumanError {
                message: "There was a problem reading or writing a file.".into(),
                suggestion: "Try again. If this keeps happening, your disk may be full.".into(),
                severity: Severity::Transient,
            },
        },

        DeskError::Serialization(_) => HumanError {
            message: "The settings file is damaged.".into(),
            suggestion: "Save your settings again to replace it.".into(),
            severity: Severity::ActionRequired,
        },
    }
}
