// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Service panel controller.
//
// `attach` snapshots the cards present on the page and resolves the details
// panel once. `handle_click` then swaps the panel to the clicked card's
// fragment. Last click wins; clicks that resolve to nothing leave the panel
// exactly as it was.

use std::sync::Arc;

use tracing::{debug, info};

use dicomdesk_bridge::traits::PageHost;
use dicomdesk_core::config::PanelConfig;
use dicomdesk_core::error::{DeskError, Result};
use dicomdesk_core::types::{Display, ElementId, ServiceKind};

use crate::catalog::ServiceCatalog;

/// What a click did to the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// The panel now shows this service.
    Shown(ServiceKind),
    /// Nothing changed: unbound element, missing attribute, or an
    /// identifier the catalog does not know.
    Ignored,
}

#[derive(Debug, Clone)]
pub struct PanelController {
    catalog: Arc<ServiceCatalog>,
    cards: Vec<ElementId>,
    panel: ElementId,
    service_attribute: String,
}

impl PanelController {
    /// Bind to the cards currently on the page.
    ///
    /// Cards added to the host afterwards are not picked up. Fails with
    /// [`DeskError::MissingElement`] when the details panel is absent.
    pub fn attach<H: PageHost + ?Sized>(
        host: &H,
        catalog: Arc<ServiceCatalog>,
        config: &PanelConfig,
    ) -> Result<Self> {
        let panel = host
            .element_by_id(&config.details_panel_id)
            .ok_or_else(|| DeskError::MissingElement(config.details_panel_id.clone()))?;
        let cards = host.elements_with_class(&config.card_class);

        info!(
            host = host.host_name(),
            cards = cards.len(),
            services = catalog.len(),
            "service panel attached"
        );

        Ok(Self {
            catalog,
            cards,
            panel,
            service_attribute: config.service_attribute.clone(),
        })
    }

    /// Cards bound at attach time, in document order.
    pub fn bound_cards(&self) -> &[ElementId] {
        &self.cards
    }

    pub fn panel(&self) -> ElementId {
        self.panel
    }

    pub fn catalog(&self) -> &ServiceCatalog {
        &self.catalog
    }

    /// Show the fragment for `card`'s service in the details panel.
    pub fn handle_click<H: PageHost + ?Sized>(
        &self,
        host: &mut H,
        card: ElementId,
    ) -> Result<ClickOutcome> {
        if !self.cards.contains(&card) {
            return Ok(ClickOutcome::Ignored);
        }
        let Some(identifier) = host.attribute(card, &self.service_attribute) else {
            return Ok(ClickOutcome::Ignored);
        };
        let Some(found) = self.catalog.lookup(&identifier) else {
            return Ok(ClickOutcome::Ignored);
        };

        // Content and visibility change together or not at all.
        let previous = host.current_html(self.panel).unwrap_or_default();
        host.set_inner_html(self.panel, &found.fragment)?;
        if let Err(e) = host.set_display(self.panel, Display::Visible) {
            host.set_inner_html(self.panel, &previous)?;
            return Err(e);
        }

        debug!(service = %found.entry.kind, %card, "details panel switched");
        Ok(ClickOutcome::Shown(found.entry.kind))
    }
}
