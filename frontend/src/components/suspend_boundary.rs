use dioxus::prelude::*;

use crate::components::error_boundary::ComponentErrorBoundary;

#[component]
pub fn SuspendWrapper(children: Element) -> Element {
    rsx! {
        SuspenseBoundary {
            fallback: |_s: SuspenseContext| rsx! {
                div {
                    width: "100%",
                    min_height: "120px",
                    display: "flex",
                    align_items: "center",
                    justify_content: "center",
                    LoadingIndicator {}
                }
            },
            ComponentErrorBoundary {
                children
            }
        }
    }
}

#[component]
pub fn LoadingIndicator() -> Element {
    rsx! {
        div {
            style: "
                width: 48px;
                height: 48px;
                margin: 24px;
                border-radius: 50%;
                border: 4px solid #E5E7EB;
                border-top-color: #1D4ED8;
                animation: x-spin 0.8s linear infinite;
            ",
        }
    }
}
