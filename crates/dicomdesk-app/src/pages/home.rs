// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Services page — service cards and the details panel with the upload form.

use dioxus::prelude::*;

use crate::state::AppState;

#[component]
pub fn Home() -> Element {
    let mut state = use_context::<Signal<AppState>>();

    let card_class = state.read().layout.card_class.clone();
    let panel_id = state.read().layout.details_panel_id.clone();

    rsx! {
        div {
            h1 { "DICOM Desk" }
            p { style: "color: #666;", "Choose a service, then upload a .dcm file or a .zip of a series." }

            div { style: "display: grid; grid-template-columns: repeat(3, 1fr); gap: 12px; margin: 24px 0;",
                for card in state.read().cards.iter() {
                    {
                        let element = card.element;
                        let service = state.read().card_service(card);
                        rsx! {
                            div {
                                key: "{card.kind}",
                                class: "{card_class}",
                                "data-service": "{service}",
                                style: "padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px; cursor: pointer; background: white;",
                                onclick: move |_| state.write().click_card(element),
                                strong { "{card.title}" }
                                p { style: "color: #666; font-size: 14px; margin: 4px 0 0;", "{card.blurb}" }
                            }
                        }
                    }
                }
            }

            if let Some((html, display)) = state.read().panel_view() {
                div {
                    id: "{panel_id}",
                    style: "display: {display}; padding: 16px; border: 1px solid #e0e0e0; border-radius: 12px;",
                    dangerous_inner_html: "{html}",
                }
            }

            if let Some(ref msg) = state.read().status_message {
                p { style: "color: #ff9500; font-size: 14px; margin-top: 12px;", "{msg}" }
            }
        }
    }
}
