//! Card layout shared by the sign in, sign up and password reset pages.

use dioxus::prelude::*;

pub const INPUT_STYLE: &str = "
    height: 42px;
    padding: 0 12px;
    font-size: 16px;
    border: 1px solid #D1D5DB;
    border-radius: 8px;
    outline: none;
";

#[component]
pub fn AuthForm(
    title: String,
    submit_label: String,
    busy: ReadSignal<bool>,
    error: ReadSignal<Option<String>>,
    on_submit: Callback<()>,
    children: Element,
    footer: Element,
) -> Element {
    let button_background = use_memo(move || if busy() { "#93A3C8" } else { "#1D4ED8" });
    rsx! {
        div {
            style: "display: flex; justify-content: center; padding: 40px 16px;",
            form {
                style: "
                    display: flex;
                    flex-direction: column;
                    gap: 14px;
                    width: 400px;
                    padding: 28px;
                    background: white;
                    border: 1px solid #E5E7EB;
                    border-radius: 16px;
                    box-shadow: 0 6px 16px rgba(0,0,0,0.06);
                ",
                onsubmit: move |event: FormEvent| {
                    event.prevent_default();
                    if !busy() {
                        on_submit.call(());
                    }
                },
                h1 { style: "font-size: 26px; font-weight: 500; margin: 0 0 6px 0;", "{title}" }

                {children}

                if let Some(message) = error() {
                    div {
                        style: "color: #B91C1C; background: #FEF2F2; border: 1px solid #FCA5A5; padding: 8px 10px; border-radius: 6px; font-size: 14px;",
                        "{message}"
                    }
                }

                button {
                    r#type: "submit",
                    disabled: busy(),
                    style: "
                        height: 44px;
                        font-size: 16px;
                        color: white;
                        background: {button_background()};
                        border: none;
                        border-radius: 8px;
                        cursor: pointer;
                    ",
                    "{submit_label}"
                }

                div { style: "font-size: 14px; color: #6B7280;", {footer} }
            }
        }
    }
}

#[component]
pub fn AuthField(label: String, input_type: String, mut value: Signal<String>, autocomplete: String) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 6px; font-size: 14px; color: #374151;",
            "{label}"
            input {
                r#type: "{input_type}",
                autocomplete: "{autocomplete}",
                style: INPUT_STYLE,
                value: "{value}",
                oninput: move |event: Event<FormData>| value.set(event.value()),
            }
        }
    }
}
