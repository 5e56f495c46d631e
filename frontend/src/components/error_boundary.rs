//! Error boundary component for rendering failures.

use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn GlobalErrorBoundary(boundary_name: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: move |err: ErrorContext| {
                dioxus::logger::tracing::error!("Render error in {}: {:#?}", boundary_name, err);
                rsx! {
                    div {
                        style: "max-width: 720px; margin: 40px auto; padding: 24px; background: white; border: 1px solid #E5484D; border-radius: 10px;",
                        h1 {
                            style: "color: #E5484D; font-size: 32px; margin: 0 0 12px 0;",
                            "Algo deu errado",
                        }
                        p {
                            style: "color: #6B7280; font-size: 16px;",
                            "Seção: {boundary_name}"
                        }
                        Link {
                            to: Route::HomePage {},
                            style: "color: #1D4ED8; font-size: 18px;",
                            "Voltar para o início"
                        }
                        pre {
                            style: "color: #1C212D; background: #F5F6F8; padding: 10px; border-radius: 6px; margin-top: 16px; text-wrap: auto;",
                            "{err:#?}"
                        }
                    }
                }
            },
            children
        }
    }
}

#[component]
pub fn ComponentErrorBoundary(children: Element) -> Element {
    rsx! {
        ErrorBoundary {
            handle_error: |err: ErrorContext| {
                let error_txt = match err.error() {
                    Some(error) => format!("{:#?}", error.0),
                    None => "Erro desconhecido".to_string(),
                };
                rsx! {
                    ComponentErrorDisplay {
                        error_txt,
                        button {
                            style: "color: white; background: #1D4ED8; font-size: 16px; border: none; padding: 10px 18px; border-radius: 6px; margin: 12px; cursor: pointer;",
                            onclick: move |_| {
                                err.clear_errors();
                            },
                            "Tentar novamente"
                        }
                    }
                }
            },
            div {
                width: "100%",
                {children}
            }
        }
    }
}

#[component]
pub fn ComponentErrorDisplay(error_txt: ReadSignal<String>, children: Element) -> Element {
    rsx! {
        div {
            width: "100%",
            display: "flex",
            flex_direction: "column",
            align_items: "center",
            justify_content: "center",
            padding: "24px",

            h2 {
                style: "color: #E5484D; font-size: 22px; margin: 6px;",
                "Não foi possível carregar",
            }

            pre {
                style: "color: #7F1D1D; border: 1px solid #FCA5A5; padding: 10px; border-radius: 6px; margin: 6px; text-wrap: auto; max-width: 500px; max-height: 300px; overflow-y: auto;",
                "{error_txt}"
            }

            {children}
        }
    }
}
