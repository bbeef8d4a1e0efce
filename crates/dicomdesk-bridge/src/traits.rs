// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Host-agnostic trait definitions for the page the controller runs against.

use dicomdesk_core::error::Result;
use dicomdesk_core::types::{Display, ElementId};

/// Unified host that groups the element capabilities the controller needs.
pub trait PageHost: ElementQuery + ElementMutation {
    /// Human-readable host name (e.g. "in-memory page").
    fn host_name(&self) -> &str;
}

/// Read-only access to the page's elements.
pub trait ElementQuery {
    /// All elements carrying `class`, in document order.
    fn elements_with_class(&self, class: &str) -> Vec<ElementId>;

    /// The element whose `id` attribute equals `id`, if any.
    fn element_by_id(&self, id: &str) -> Option<ElementId>;

    /// Value of attribute `name` on `element`. `None` when either is absent.
    fn attribute(&self, element: ElementId, name: &str) -> Option<String>;

    /// Current inner HTML of `element`. `None` when it is absent.
    fn current_html(&self, element: ElementId) -> Option<String>;
}

/// Writes applied to page elements.
pub trait ElementMutation {
    /// Replace the element's children with `html`.
    fn set_inner_html(&mut self, element: ElementId, html: &str) -> Result<()>;

    /// Set the element's CSS `display`.
    fn set_display(&mut self, element: ElementId, display: Display) -> Result<()>;
}
