// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>

//! DICOM Desk — page host abstractions.
//!
//! The panel controller never touches a concrete document. It queries and
//! mutates elements through the traits in [`traits`], so the same controller
//! drives the desktop app's page model and the test pages.

pub mod memory;
pub mod traits;

pub use memory::InMemoryPage;
pub use traits::{ElementQuery, ElementMutation, PageHost};
