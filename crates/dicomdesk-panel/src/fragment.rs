// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Server-side rendering of a service's details fragment: heading,
// description and upload form.

use dioxus::prelude::*;
use dioxus::ssr::Renderer;

use dicomdesk_core::error::{DeskError, Result};
use dicomdesk_core::types::ServiceEntry;

/// Render `entry` to the HTML placed inside the details panel.
pub fn render_fragment(entry: &ServiceEntry) -> Result<String> {
    let mut dom = VirtualDom::new_with_props(
        FragmentView,
        FragmentViewProps {
            entry: entry.clone(),
        },
    );
    dom.rebuild_in_place();

    let mut html = String::new();
    Renderer::new()
        .render_to(&mut html, &dom)
        .map_err(|e| DeskError::Render(format!("{}: {e}", entry.kind)))?;
    Ok(html)
}

#[component]
fn FragmentView(entry: ServiceEntry) -> Element {
    let heading = entry.heading;
    let description = entry.description;
    let action = entry.form.action.clone();
    let accept = entry.form.accept_attr();
    let submit_label = entry.form.submit_label;

    rsx! {
        h2 { "{heading}" }
        p { "{description}" }
        form {
            action: "{action}",
            method: entry.form.method,
            enctype: entry.form.enctype,
            input {
                r#type: "file",
                name: entry.form.field_name,
                accept: "{accept}",
                required: if entry.form.required { "required" },
            }
            button { r#type: "submit", "{submit_label}" }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dicomdesk_core::types::ServiceKind;

    #[test]
    fn image_conversion_fragment() {
        let entry = ServiceEntry::builtin(ServiceKind::ImageConversion, "");
        let html = render_fragment(&entry).unwrap();
        assert!(html.contains("<h2>DICOM to Image Converter</h2>"), "{html}");
        assert!(html.contains(r#"action="/service/image_conversion""#), "{html}");
        assert!(html.contains(r#"enctype="multipart/form-data""#), "{html}");
        assert!(html.contains(r#"name="dicom_file""#), "{html}");
        assert!(html.contains(r#"accept=".dcm,.zip""#), "{html}");
        assert!(html.contains(r#"required="required""#), "{html}");
        assert!(html.contains("Convert"), "{html}");
    }

    #[test]
    fn optional_upload_omits_required_attribute() {
        let mut entry = ServiceEntry::builtin(ServiceKind::Segmentation, "");
        entry.form.required = false;
        let html = render_fragment(&entry).unwrap();
        assert!(!html.contains("required"), "{html}");
        assert!(html.contains(r#"name="dicom_file""#), "{html}");
    }

    #[test]
    fn model_fragment_posts_to_slug_endpoint() {
        let entry = ServiceEntry::builtin(ServiceKind::Model3d, "");
        let html = render_fragment(&entry).unwrap();
        assert!(html.contains("<h2>3D Model Generator</h2>"), "{html}");
        assert!(html.contains(r#"action="/service/3d_model""#), "{html}");
    }

    #[test]
    fn endpoint_base_prefixes_action() {
        let entry = ServiceEntry::builtin(ServiceKind::Segmentation, "http://localhost:5000");
        let html = render_fragment(&entry).unwrap();
        assert!(
            html.contains(r#"action="http://localhost:5000/service/segmentation""#),
            "{html}"
        );
    }

    #[test]
    fn rendering_is_deterministic() {
        let entry = ServiceEntry::builtin(ServiceKind::Segmentation, "");
        assert_eq!(render_fragment(&entry).unwrap(), render_fragment(&entry).unwrap());
    }
}
