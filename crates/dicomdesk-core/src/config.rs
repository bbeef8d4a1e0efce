// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Application configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{DeskError, Result};

/// How the controller finds its elements on the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PanelConfig {
    /// Class carried by every service card.
    pub card_class: String,
    /// Attribute holding a card's service identifier.
    pub service_attribute: String,
    /// Id of the shared details container.
    pub details_panel_id: String,
}

impl Default for PanelConfig {
    fn default() -> Self {
        Self {
            card_class: "card".into(),
            service_attribute: "data-service".into(),
            details_panel_id: "service-details".into(),
        }
    }
}

/// Inputs to the built-in service catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// Prefix for form actions, e.g. `http://localhost:5000`. Empty means
    /// same-origin paths such as `/service/segmentation`.
    pub endpoint_base: String,
}

/// Persistent application settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub panel: PanelConfig,
    pub catalog: CatalogConfig,
    /// Default `tracing` filter when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            panel: PanelConfig::default(),
            catalog: CatalogConfig::default(),
            log_filter: "info".into(),
        }
    }
}

impl AppConfig {
    /// Read a JSON config file.
    pub fn load(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&data)?;
        config.validate()?;
        Ok(config)
    }

    /// Write the config as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        self.validate()?;
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Reject selectors the controller could never match.
    pub fn validate(&self) -> Result<()> {
        let panel = &self.panel;
        for (field, value) in [
            ("panel.card_class", &panel.card_class),
            ("panel.service_attribute", &panel.service_attribute),
            ("panel.details_panel_id", &panel.details_panel_id),
        ] {
            if value.trim().is_empty() {
                return Err(DeskError::Config(format!("{field} must not be empty")));
            }
        }
        Ok(())
    }
}
