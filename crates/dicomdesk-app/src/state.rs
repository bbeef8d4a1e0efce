// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Global application state — reactive signals for the Dioxus UI.
//
// The services page is modelled as an `InMemoryPage`: one element per card
// plus the details panel. The panel controller writes to that model and the
// UI renders from it.

use dicomdesk_bridge::memory::{ElementSpec, InMemoryPage};
use dicomdesk_bridge::traits::ElementQuery;
use dicomdesk_core::AppConfig;
use dicomdesk_core::config::PanelConfig;
use dicomdesk_core::human_errors::humanize_error;
use dicomdesk_core::types::{ElementId, ServiceKind};
use dicomdesk_panel::{ClickOutcome, PanelController};

use crate::services::app_services::AppServices;

/// A card as laid out on the services page.
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceCard {
    pub element: ElementId,
    pub kind: ServiceKind,
    pub title: &'static str,
    pub blurb: &'static str,
}

/// Shared state accessible to all pages via `use_context`.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Page model the controller is attached to.
    pub page: InMemoryPage,
    /// Cards in layout order.
    pub cards: Vec<ServiceCard>,
    /// `None` when attaching failed; see `status_message`.
    pub controller: Option<PanelController>,
    /// Selectors the page was laid out and attached with.
    pub layout: PanelConfig,
    /// Application settings as edited on the settings page. Changes apply on
    /// the next launch.
    pub config: AppConfig,
    /// Status message for user feedback.
    pub status_message: Option<String>,
}

impl AppState {
    /// Lay out the services page and attach the panel controller to it.
    pub fn new(svc: &AppServices) -> Self {
        let config = svc.config();
        let layout = config.panel.clone();
        let panel_config = &layout;

        let mut page = InMemoryPage::new();
        let cards = ServiceKind::ALL
            .into_iter()
            .map(|kind| {
                let (title, blurb) = card_text(kind);
                let element = page.add_element(
                    ElementSpec::new()
                        .with_class(panel_config.card_class.clone())
                        .with_attribute(panel_config.service_attribute.clone(), kind.identifier()),
                );
                ServiceCard {
                    element,
                    kind,
                    title,
                    blurb,
                }
            })
            .collect();
        page.add_element(ElementSpec::new().with_id(panel_config.details_panel_id.clone()));

        let (controller, status_message) =
            match PanelController::attach(&page, svc.catalog(), panel_config) {
                Ok(c) => (Some(c), None),
                Err(e) => {
                    tracing::error!(error = %e, "service panel unavailable");
                    (None, Some(humanize_error(&e).message))
                }
            };

        Self {
            page,
            cards,
            controller,
            layout,
            config,
            status_message,
        }
    }

    /// Forward a card click to the controller.
    pub fn click_card(&mut self, card: ElementId) {
        let Some(controller) = self.controller.as_ref() else {
            return;
        };
        match controller.handle_click(&mut self.page, card) {
            Ok(ClickOutcome::Shown(kind)) => {
                tracing::info!(service = %kind, "service selected");
                self.status_message = None;
            }
            Ok(ClickOutcome::Ignored) => {}
            Err(e) => {
                tracing::error!(error = %e, "details panel update failed");
                self.status_message = Some(humanize_error(&e).message);
            }
        }
    }

    /// Value of the service attribute on `card`'s element.
    pub fn card_service(&self, card: &ServiceCard) -> String {
        self.page
            .attribute(card.element, &self.layout.service_attribute)
            .unwrap_or_default()
    }

    /// Details panel HTML and CSS display value, if the panel exists.
    pub fn panel_view(&self) -> Option<(&str, &'static str)> {
        let panel = self.controller.as_ref()?.panel();
        let html = self.page.inner_html(panel)?;
        let display = self.page.display(panel)?;
        Some((html, display.css_value()))
    }
}

fn card_text(kind: ServiceKind) -> (&'static str, &'static str) {
    match kind {
        ServiceKind::ImageConversion => (
            "Image Conversion",
            "Turn DICOM slices into JPEG or PNG images.",
        ),
        ServiceKind::Segmentation => (
            "Segmentation",
            "Threshold a DICOM series into segmented slices.",
        ),
        ServiceKind::Model3d => ("3D Model", "Build an STL surface model from a DICOM series."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> (tempfile::TempDir, AppState) {
        let dir = tempfile::tempdir().unwrap();
        let svc = AppServices::init_in(dir.path().to_path_buf()).unwrap();
        (dir, AppState::new(&svc))
    }

    #[test]
    fn page_has_a_card_per_service_and_a_hidden_panel() {
        let (_dir, state) = state();
        assert_eq!(state.cards.len(), 3);
        assert_eq!(state.page.elements_with_class("card").len(), 3);
        assert_eq!(
            state.page.attribute(state.cards[2].element, "data-service").as_deref(),
            Some("model3D")
        );
        let (html, display) = state.panel_view().unwrap();
        assert_eq!(html, "");
        assert_eq!(display, "none");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn clicking_a_card_reveals_its_form() {
        let (_dir, mut state) = state();
        let seg = state.cards[1].element;
        state.click_card(seg);
        let (html, display) = state.panel_view().unwrap();
        assert!(html.contains("Segmentation Service"));
        assert_eq!(display, "block");
    }

    #[test]
    fn last_card_clicked_is_shown() {
        let (_dir, mut state) = state();
        let first = state.cards[0].element;
        let third = state.cards[2].element;
        state.click_card(first);
        state.click_card(third);
        let (html, _) = state.panel_view().unwrap();
        assert!(html.contains("3D Model Generator"));
        assert!(!html.contains("DICOM to Image Converter"));
    }

    #[test]
    fn unsaved_settings_do_not_change_the_laid_out_page() {
        let (_dir, mut state) = state();
        state.config.panel.card_class = "tile".into();
        state.config.panel.service_attribute = "data-kind".into();
        state.config.panel.details_panel_id = "elsewhere".into();

        assert_eq!(state.layout, PanelConfig::default());
        assert_eq!(state.card_service(&state.cards[0]), "image_conversion");

        let model = state.cards[2].element;
        state.click_card(model);
        let (html, display) = state.panel_view().unwrap();
        assert!(html.contains("3D Model Generator"));
        assert_eq!(display, "block");
    }
}
