// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// DICOM Desk — service catalog and the controller that swaps the details panel.

pub mod catalog;
pub mod controller;
pub mod fragment;

pub use catalog::{CatalogEntry, ServiceCatalog};
pub use controller::{ClickOutcome, PanelController};
pub use fragment::render_fragment;
