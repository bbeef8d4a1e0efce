// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Core domain types: offered services, their upload forms, and page handles.

use serde::{Deserialize, Serialize};

/// The closed set of services a card can select.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ServiceKind {
    /// DICOM series to standard image formats.
    ImageConversion,
    /// Threshold segmentation of a DICOM series.
    Segmentation,
    /// Surface mesh (STL) generation.
    Model3d,
}

impl ServiceKind {
    /// Every service, in the order cards are laid out.
    pub const ALL: [ServiceKind; 3] = [
        ServiceKind::ImageConversion,
        ServiceKind::Segmentation,
        ServiceKind::Model3d,
    ];

    /// Parse the value of a card's `data-service` attribute.
    ///
    /// The 3D generator is keyed `model3D` in the catalog while its endpoint
    /// slug is `3d_model`; both spellings select it. Anything else is `None`.
    pub fn from_identifier(id: &str) -> Option<Self> {
        match id {
            "image_conversion" => Some(Self::ImageConversion),
            "segmentation" => Some(Self::Segmentation),
            "model3D" | "3d_model" => Some(Self::Model3d),
            _ => None,
        }
    }

    /// Catalog key, as written into `data-service`.
    pub fn identifier(&self) -> &'static str {
        match self {
            Self::ImageConversion => "image_conversion",
            Self::Segmentation => "segmentation",
            Self::Model3d => "model3D",
        }
    }

    /// Path segment of the processing endpoint under `/service/`.
    pub fn endpoint_slug(&self) -> &'static str {
        match self {
            Self::ImageConversion => "image_conversion",
            Self::Segmentation => "segmentation",
            Self::Model3d => "3d_model",
        }
    }
}

impl std::fmt::Display for ServiceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

/// A multipart upload form posting one DICOM file to a service endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadForm {
    pub action: String,
    pub method: &'static str,
    pub enctype: &'static str,
    /// Name of the file input the server reads.
    pub field_name: &'static str,
    /// Extensions for the input's `accept` attribute.
    pub accept: &'static [&'static str],
    pub required: bool,
    pub submit_label: &'static str,
}

impl UploadForm {
    /// Standard DICOM upload form for `kind`, with `endpoint_base` prefixed to
    /// the action path.
    pub fn for_service(kind: ServiceKind, endpoint_base: &str) -> Self {
        let base = endpoint_base.trim_end_matches('/');
        Self {
            action: format!("{base}/service/{}", kind.endpoint_slug()),
            method: "POST",
            enctype: "multipart/form-data",
            field_name: "dicom_file",
            accept: &[".dcm", ".zip"],
            required: true,
            submit_label: match kind {
                ServiceKind::ImageConversion => "Convert",
                ServiceKind::Segmentation => "Segment",
                ServiceKind::Model3d => "Generate",
            },
        }
    }

    /// Value for the HTML `accept` attribute.
    pub fn accept_attr(&self) -> String {
        self.accept.join(",")
    }
}

/// Everything shown in the details panel for one service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceEntry {
    pub kind: ServiceKind,
    pub heading: &'static str,
    pub description: &'static str,
    pub form: UploadForm,
}

impl ServiceEntry {
    /// Built-in description of `kind`.
    pub fn builtin(kind: ServiceKind, endpoint_base: &str) -> Self {
        let (heading, description) = match kind {
            ServiceKind::ImageConversion => (
                "DICOM to Image Converter",
                "This tool converts a folder of DICOM files into standard image formats. Upload your folder and start the conversion process.",
            ),
            ServiceKind::Segmentation => (
                "Segmentation Service",
                "Apply segmentation to a folder of DICOM files, producing processed images.",
            ),
            ServiceKind::Model3d => (
                "3D Model Generator",
                "Generate a 3D model from DICOM files and view it in STL format.",
            ),
        };
        Self {
            kind,
            heading,
            description,
            form: UploadForm::for_service(kind, endpoint_base),
        }
    }
}

/// Visibility of a page element, mapped onto the CSS `display` property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Display {
    #[default]
    Hidden,
    Visible,
}

impl Display {
    /// CSS `display` value.
    pub fn css_value(&self) -> &'static str {
        match self {
            Self::Hidden => "none",
            Self::Visible => "block",
        }
    }
}

/// Opaque handle to an element owned by a page host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub usize);

impl std::fmt::Display for ElementId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identifiers_round_trip() {
        for kind in ServiceKind::ALL {
            assert_eq!(ServiceKind::from_identifier(kind.identifier()), Some(kind));
        }
    }

    #[test]
    fn endpoint_slug_is_an_alias_for_the_model_generator() {
        assert_eq!(ServiceKind::from_identifier("3d_model"), Some(ServiceKind::Model3d));
    }

    #[test]
    fn unknown_identifiers_are_rejected() {
        assert_eq!(ServiceKind::from_identifier("unknown"), None);
        assert_eq!(ServiceKind::from_identifier(""), None);
        // Matching is exact, like a JS object key lookup.
        assert_eq!(ServiceKind::from_identifier("Segmentation"), None);
        assert_eq!(ServiceKind::from_identifier("model3d"), None);
    }

    #[test]
    fn form_actions_follow_endpoint_slugs() {
        let form = UploadForm::for_service(ServiceKind::Model3d, "");
        assert_eq!(form.action, "/service/3d_model");
        assert_eq!(form.field_name, "dicom_file");
        assert_eq!(form.accept_attr(), ".dcm,.zip");
        assert!(form.required);
    }

    #[test]
    fn endpoint_base_trailing_slash_is_trimmed() {
        let form = UploadForm::for_service(ServiceKind::Segmentation, "http://localhost:5000/");
        assert_eq!(form.action, "http://localhost:5000/service/segmentation");
    }

    #[test]
    fn panel_starts_hidden() {
        assert_eq!(Display::default(), Display::Hidden);
        assert_eq!(Display::Visible.css_value(), "block");
    }
}
