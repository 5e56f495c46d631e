//! Top navigation bar component.

use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdExitToApp, MdGavel, MdLock};
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::Icon;

use crate::components::error_boundary::GlobalErrorBoundary;
use crate::data_definitions::auth_session::use_auth_session;
use crate::data_definitions::menu::{menu_data, MenuItem};
use crate::routes::Route;

/// Shared navbar component.
#[component]
pub fn Navbar() -> Element {
    rsx! {
        div {
            id: "x-nav-container",
            style: "
                display: flex;
                flex-direction: column;
                width: 100%;
                min-height: 100vh;
            ",

            div {
                id: "x-nav-header",
                style: "
                    display: flex;
                    flex-direction: row;
                    align-items: center;
                    gap: 32px;
                    height: 64px;
                    padding: 0 32px;
                    background-color: #1C212D;
                    color: white;
                    flex-shrink: 0;
                ",

                NavbarLogo {}
                NavbarMenuLinks {}

                // empty space
                div { style: "flex-grow: 1;" }

                NavbarAccount {}
            }

            div {
                id: "x-page-container",
                style: "flex-grow: 1; min-height: 100px;",
                GlobalErrorBoundary {
                    boundary_name: "Navbar".to_string(),
                    Outlet::<Route> {}
                }
            }
        }
    }
}

#[component]
fn NavbarLogo() -> Element {
    rsx! {
        Link {
            to: Route::HomePage {},
            style: "display: flex; align-items: center; gap: 8px; color: white; text-decoration: none;",
            Icon { icon: MdGavel, style: "width: 28px; height: 28px; color: #F59E0B;" }
            span { style: "font-size: 22px; font-weight: 600;", "Play Leilões" }
        }
    }
}

#[component]
fn NavbarMenuLinks() -> Element {
    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 24px; align-items: center;",
            for item in menu_data() {
                MenuLink { key: "{item.id}", item }
            }
        }
    }
}

#[component]
fn MenuLink(item: MenuItem) -> Element {
    let secure = item.secure();
    rsx! {
        Link {
            to: item.route,
            new_tab: item.new_tab,
            style: "display: flex; align-items: center; gap: 4px; color: white; font-size: 16px; text-decoration: none;",
            "{item.title}"
            if secure {
                Icon { icon: MdLock, style: "width: 14px; height: 14px; color: rgba(255,255,255,0.7);" }
            }
        }
    }
}

#[component]
fn NavbarAccount() -> Element {
    let auth = use_auth_session();
    let user_name = use_memo(move || auth.session.read().as_ref().map(|session| session.name.clone()));

    let sign_out = move |_| {
        auth.set_session.call(None);
        navigator().push(Route::HomePage {});
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: row; gap: 16px; align-items: center; font-size: 15px;",
            if let Some(name) = user_name() {
                Icon { icon: MdPerson, style: "width: 22px; height: 22px; color: white;" }
                span { "{name}" }
                button {
                    style: "
                        display: flex;
                        align-items: center;
                        gap: 6px;
                        border: 1px solid rgba(255,255,255,0.5);
                        border-radius: 6px;
                        background: none;
                        color: white;
                        padding: 6px 10px;
                        cursor: pointer;
                    ",
                    onclick: sign_out,
                    Icon { icon: MdExitToApp, style: "width: 18px; height: 18px;" }
                    "Sair"
                }
            } else {
                Link {
                    to: Route::SignInPage {},
                    style: "color: white; text-decoration: none;",
                    "Entrar"
                }
                Link {
                    to: Route::SignUpPage {},
                    style: "color: #1C212D; background: #F59E0B; padding: 6px 12px; border-radius: 6px; text-decoration: none;",
                    "Criar conta"
                }
            }
        }
    }
}
