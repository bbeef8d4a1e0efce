// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Immutable service catalog: service identifier -> rendered details fragment.
//
// Built once at startup and shared behind an `Arc`; there is no way to mutate
// a catalog after construction.

use std::collections::HashMap;

use tracing::debug;

use dicomdesk_core::config::CatalogConfig;
use dicomdesk_core::error::Result;
use dicomdesk_core::types::{ServiceEntry, ServiceKind};

use crate::fragment::render_fragment;

/// A catalog entry with its pre-rendered fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    pub entry: ServiceEntry,
    pub fragment: String,
}

#[derive(Debug, Clone, Default)]
pub struct ServiceCatalog {
    entries: HashMap<ServiceKind, CatalogEntry>,
}

impl ServiceCatalog {
    /// The three built-in DICOM services.
    pub fn builtin(config: &CatalogConfig) -> Result<Self> {
        Self::from_entries(
            ServiceKind::ALL
                .into_iter()
                .map(|kind| ServiceEntry::builtin(kind, &config.endpoint_base)),
        )
    }

    /// Render and index `entries`. A later entry for the same kind replaces
    /// an earlier one.
    pub fn from_entries(entries: impl IntoIterator<Item = ServiceEntry>) -> Result<Self> {
        let mut map = HashMap::new();
        for entry in entries {
            let fragment = render_fragment(&entry)?;
            debug!(service = %entry.kind, bytes = fragment.len(), "fragment rendered");
            map.insert(entry.kind, CatalogEntry { entry, fragment });
        }
        Ok(Self { entries: map })
    }

    /// Look up a raw `data-service` value.
    pub fn lookup(&self, identifier: &str) -> Option<&CatalogEntry> {
        ServiceKind::from_identifier(identifier).and_then(|kind| self.get(kind))
    }

    pub fn get(&self, kind: ServiceKind) -> Option<&CatalogEntry> {
        self.entries.get(&kind)
    }

    /// Fragment for a raw identifier.
    pub fn fragment(&self, identifier: &str) -> Option<&str> {
        self.lookup(identifier).map(|e| e.fragment.as_str())
    }

    /// Entries in card order.
    pub fn entries(&self) -> impl Iterator<Item = &CatalogEntry> {
        ServiceKind::ALL.into_iter().filter_map(|kind| self.entries.get(&kind))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> ServiceCatalog {
        ServiceCatalog::builtin(&CatalogConfig::default()).unwrap()
    }

    #[test]
    fn builtin_has_every_service() {
        let catalog = catalog();
        assert_eq!(catalog.len(), 3);
        let kinds: Vec<_> = catalog.entries().map(|e| e.entry.kind).collect();
        assert_eq!(kinds, ServiceKind::ALL.to_vec());
    }

    #[test]
    fn lookup_by_identifier() {
        let catalog = catalog();
        let seg = catalog.lookup("segmentation").unwrap();
        assert_eq!(seg.entry.heading, "Segmentation Service");
        assert!(seg.fragment.contains(r#"action="/service/segmentation""#));

        assert_eq!(catalog.fragment("model3D"), catalog.fragment("3d_model"));
        assert!(catalog.fragment("unknown").is_none());
    }

    #[test]
    fn fragments_are_distinct() {
        let catalog = catalog();
        let a = catalog.fragment("image_conversion").unwrap();
        let b = catalog.fragment("segmentation").unwrap();
        let c = catalog.fragment("model3D").unwrap();
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn partial_catalog_omits_missing_kinds() {
        let catalog =
            ServiceCatalog::from_entries([ServiceEntry::builtin(ServiceKind::Segmentation, "")])
                .unwrap();
        assert_eq!(catalog.len(), 1);
        assert!(catalog.lookup("segmentation").is_some());
        assert!(catalog.lookup("image_conversion").is_none());
    }
}
