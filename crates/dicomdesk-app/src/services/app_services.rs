// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Central service layer — loads configuration, builds the service catalog
// once, and persists settings changes for the Dioxus UI.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dicomdesk_core::AppConfig;
use dicomdesk_core::error::{DeskError, Result};
use dicomdesk_panel::ServiceCatalog;
use tracing::{info, warn};

use super::data_dir;

const CONFIG_FILE: &str = "config.json";

/// Shared application services accessible from all Dioxus components via
/// `use_context::<AppServices>()`.
///
/// All fields are cheaply cloneable so the struct can move into closures.
#[derive(Clone)]
pub struct AppServices {
    catalog: Arc<ServiceCatalog>,
    data_dir: PathBuf,
    config: Arc<Mutex<AppConfig>>,
}

impl AppServices {
    /// Initialise services from the user's data directory. Call once at app
    /// startup.
    pub fn init() -> Result<Self> {
        Self::init_in(data_dir::data_dir())
    }

    /// Initialise services rooted at `dir`.
    pub fn init_in(dir: PathBuf) -> Result<Self> {
        info!(path = %dir.display(), "initialising app services");
        let config = load_config(&dir);
        Self::build(dir, config)
    }

    /// Defaults only, without touching the data directory's config file.
    pub fn fallback() -> Result<Self> {
        Self::build(data_dir::data_dir(), AppConfig::default())
    }

    fn build(dir: PathBuf, config: AppConfig) -> Result<Self> {
        let catalog = ServiceCatalog::builtin(&config.catalog)?;
        info!(services = catalog.len(), "service catalog built");
        Ok(Self {
            catalog: Arc::new(catalog),
            data_dir: dir,
            config: Arc::new(Mutex::new(config)),
        })
    }

    /// The catalog built at startup.
    pub fn catalog(&self) -> Arc<ServiceCatalog> {
        Arc::clone(&self.catalog)
    }

    // -- Config Persistence --------------------------------------------------

    /// Get a clone of the current config.
    pub fn config(&self) -> AppConfig {
        self.config.lock().expect("config lock poisoned").clone()
    }

    /// Validate, persist, then adopt `config`.
    ///
    /// The catalog keeps the endpoint base it was built with; a changed base
    /// takes effect on the next launch.
    pub fn save_config(&self, config: &AppConfig) -> Result<()> {
        config.save(&self.data_dir.join(CONFIG_FILE))?;
        *self.config.lock().expect("config lock poisoned") = config.clone();
        info!("settings saved");
        Ok(())
    }

    /// Path to the data directory.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

/// Log filter from the persisted config, read before the UI starts.
pub fn configured_log_filter() -> String {
    read_config(&data_dir::data_dir())
        .map(|c| c.log_filter)
        .unwrap_or_else(|_| AppConfig::default().log_filter)
}

fn read_config(dir: &Path) -> Result<AppConfig> {
    AppConfig::load(&dir.join(CONFIG_FILE))
}

fn load_config(dir: &Path) -> AppConfig {
    match read_config(dir) {
        Ok(config) => config,
        Err(DeskError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => AppConfig::default(),
        Err(e) => {
            warn!(error = %e, "config unreadable, using defaults");
            AppConfig::default()
        }
    }
}
