// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Settings page — persistent app configuration.

use dioxus::prelude::*;

use dicomdesk_core::AppConfig;
use dicomdesk_core::human_errors::{Severity, humanize_error};

use crate::services::app_services::AppServices;
use crate::state::AppState;

#[component]
pub fn Settings() -> Element {
    let mut state = use_context::<Signal<AppState>>();
    let svc = use_context::<AppServices>();
    let mut save_msg = use_signal(|| Option::<(String, &'static str)>::None);

    let data_dir = svc.data_dir().display().to_string();
    let version = env!("CARGO_PKG_VERSION");

    rsx! {
        div {
            h1 { "Settings" }

            section { style: "margin: 16px 0;",
                h3 { "Services" }
                TextRow {
                    label: "Server address (empty = same origin)",
                    value: state.read().config.catalog.endpoint_base.clone(),
                    on_change: move |v: String| { state.write().config.catalog.endpoint_base = v; },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Page" }
                TextRow {
                    label: "Card class",
                    value: state.read().config.panel.card_class.clone(),
                    on_change: move |v: String| { state.write().config.panel.card_class = v; },
                }
                TextRow {
                    label: "Service attribute",
                    value: state.read().config.panel.service_attribute.clone(),
                    on_change: move |v: String| { state.write().config.panel.service_attribute = v; },
                }
                TextRow {
                    label: "Details panel id",
                    value: state.read().config.panel.details_panel_id.clone(),
                    on_change: move |v: String| { state.write().config.panel.details_panel_id = v; },
                }
            }

            section { style: "margin: 16px 0;",
                h3 { "Logging" }
                TextRow {
                    label: "Log filter",
                    value: state.read().config.log_filter.clone(),
                    on_change: move |v: String| { state.write().config.log_filter = v; },
                }
            }

            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: none; background: #007aff; color: white; font-size: 16px; margin-top: 8px;",
                onclick: {
                    let svc = svc.clone();
                    move |_| {
                        let config = state.read().config.clone();
                        match svc.save_config(&config) {
                            Ok(()) => {
                                save_msg.set(Some((
                                    "Settings saved. They take effect the next time DICOM Desk starts.".into(),
                                    "#34c759",
                                )));
                            }
                            Err(e) => {
                                tracing::error!(error = %e, "failed to save settings");
                                let human = humanize_error(&e);
                                let colour = match human.severity {
                                    Severity::Transient => "#ff9500",
                                    Severity::ActionRequired | Severity::Permanent => "#ff3b30",
                                };
                                save_msg.set(Some((format!("{} {}", human.message, human.suggestion), colour)));
                            }
                        }
                    }
                },
                "Save Settings"
            }
            button {
                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid #ccc; background: white; font-size: 16px; margin-top: 8px;",
                onclick: move |_| {
                    state.write().config = AppConfig::default();
                    save_msg.set(None);
                },
                "Reset to Defaults"
            }
            if let Some((ref msg, colour)) = *save_msg.read() {
                p { style: "color: {colour}; font-size: 14px; text-align: center; margin-top: 8px;",
                    "{msg}"
                }
            }

            section { style: "margin: 24px 0;",
                h3 { "About" }
                p { style: "color: #666; font-size: 14px;",
                    "DICOM Desk v{version}"
                    br {}
                    "Settings folder: {data_dir}"
                    br {}
                    "PMPL-1.0-or-later"
                }
            }
        }
    }
}

#[component]
fn TextRow(label: &'static str, value: String, on_change: EventHandler<String>) -> Element {
    rsx! {
        div { style: "display: flex; justify-content: space-between; align-items: center; padding: 12px 0; border-bottom: 1px solid #f0f0f0;",
            span { "{label}" }
            input {
                r#type: "text",
                style: "width: 220px; padding: 4px 8px; border: 1px solid #ccc; border-radius: 4px;",
                value: "{value}",
                onchange: move |evt| {
                    on_change.call(evt.value());
                },
            }
        }
    }
}
