// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// In-memory page: an ordered list of elements with ids, classes, attributes,
// inner HTML and display state.
//
// The desktop app renders from this model and the controller writes to it.

use std::collections::BTreeMap;

use dicomdesk_core::error::{DeskError, Result};
use dicomdesk_core::types::{Display, ElementId};

use crate::traits::*;

/// One element of an [`InMemoryPage`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementSpec {
    pub id: Option<String>,
    pub classes: Vec<String>,
    pub attributes: BTreeMap<String, String>,
    pub inner_html: String,
    pub display: Display,
}

impl ElementSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// Page held entirely in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InMemoryPage {
    elements: Vec<ElementSpec>,
}

impl InMemoryPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element and return its handle.
    pub fn add_element(&mut self, spec: ElementSpec) -> ElementId {
        self.elements.push(spec);
        ElementId(self.elements.len() - 1)
    }

    pub fn element(&self, element: ElementId) -> Option<&ElementSpec> {
        self.elements.get(element.0)
    }

    /// Current inner HTML of `element`.
    pub fn inner_html(&self, element: ElementId) -> Option<&str> {
        self.element(element).map(|e| e.inner_html.as_str())
    }

    /// Current display state of `element`.
    pub fn display(&self, element: ElementId) -> Option<Display> {
        self.element(element).map(|e| e.display)
    }

    fn element_mut(&mut self, element: ElementId) -> Result<&mut ElementSpec> {
        self.elements
            .get_mut(element.0)
            .ok_or_else(|| DeskError::MissingElement(element.to_string()))
    }
}

impl PageHost for InMemoryPage {
    fn host_name(&self) -> &str {
        "in-memory page"
    }
}

impl ElementQuery for InMemoryPage {
    fn elements_with_class(&self, class: &str) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, e)| e.classes.iter().any(|c| c == class))
            .map(|(i, _)| ElementId(i))
            .collect()
    }

    fn element_by_id(&self, id: &str) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|e| e.id.as_deref() == Some(id))
            .map(ElementId)
    }

    fn attribute(&self, element: ElementId, name: &str) -> Option<String> {
        self.element(element)?.attributes.get(name).cloned()
    }

    fn current_html(&self, element: ElementId) -> Option<String> {
        self.inner_html(element).map(str::to_owned)
    }
}

impl ElementMutation for InMemoryPage {
    fn set_inner_html(&mut self, element: ElementId, html: &str) -> Result<()> {
        let target = self.element_mut(element)?;
        target.inner_html.clear();
        target.inner_html.push_str(html);
        Ok(())
    }

    fn set_display(&mut self, element: ElementId, state: Display) -> Result<()> {
        let target = self.element_mut(element)?;
        if target.display != state {
            tracing::trace!(%element, css = state.css_value(), "display changed");
        }
        target.display = state;
        Ok(())
    }
}
