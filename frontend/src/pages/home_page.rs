use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdGavel, MdSearch};
use dioxus_free_icons::icons::md_social_icons::MdPerson;
use dioxus_free_icons::Icon;

use crate::data_definitions::auth_session::use_auth_session;
use crate::routes::Route;

/// Home page
#[component]
pub fn HomePage() -> Element {
    rsx! {
        Title { "Play Leilões - Início" }
        div {
            id: "x-home-container",
            style: "
                display: flex;
                flex-direction: column;
                gap: 20px;
                width: 100%;
                padding: 36px 40px;
                background: #F5F6F8;
                box-sizing: border-box;
            ",

            MainTitle {}
            SubText {}

            // Cards Row
            div {
                style: "
                    display: flex;
                    flex-direction: row;
                    gap: 20px;
                    flex-wrap: wrap;
                    align-items: stretch;
                    margin-top: 10px;
                ",
                ListingCard {}
                AccountCard {}
            }
        }
    }
}

#[component]
fn MainTitle() -> Element {
    rsx! {
        div {
            style: "
                display: flex;
                align-items: center;
                gap: 8px;
                color: #0F172A;
                font-size: 46px;
                font-weight: 500;
                letter-spacing: -0.02em;
            ",
            Icon { icon: MdGavel, style: "width: 46px; height: 46px; color: #F59E0B;" }
            span { "Bem-vindo ao" }
            span { style: "color: #1D4ED8;", "Play Leilões!" }
        }
    }
}

#[component]
fn SubText() -> Element {
    rsx! {
        div {
            style: "
                color: #111827;
                font-size: 26px;
                line-height: 1.6;
                max-width: 720px;
                font-weight: 500;
            ",
            "Encontre imóveis em leilão com os maiores descontos. Filtre por tipo, modalidade, preço, desconto e localização e acompanhe seus favoritos."
        }
    }
}

#[component]
fn ListingCard() -> Element {
    rsx! {
        div {
            id: "x-card-listing",
            style: "
                display: flex;
                flex-direction: column;
                gap: 14px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #1E3A8A 0%, #1D4ED8 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div { style: "font-size: 30px; font-weight: 500;", "Imóveis em leilão" }
            div {
                style: "font-size: 20px; font-weight: 500; line-height: 1.5; color: rgba(255,255,255,0.92);",
                "Veja a lista completa, ordenada pelo maior desconto na segunda praça."
            }
            div { style: "flex-grow: 1;" }
            Link {
                to: Route::auction_list_default(),
                style: "
                    display: flex;
                    align-items: center;
                    gap: 8px;
                    width: fit-content;
                    padding: 10px 18px;
                    border-radius: 9999px;
                    background: white;
                    color: #1E3A8A;
                    font-size: 16px;
                    text-decoration: none;
                ",
                Icon { icon: MdSearch, style: "width: 20px; height: 20px;" }
                "Ver imóveis"
            }
        }
    }
}

#[component]
fn AccountCard() -> Element {
    let auth = use_auth_session();
    let greeting = auth.session.read().as_ref().map(|session| session.name.clone());
    rsx! {
        div {
            id: "x-card-account",
            style: "
                display: flex;
                flex-direction: column;
                gap: 12px;
                width: 520px;
                min-height: 240px;
                border-radius: 22px;
                padding: 22px 22px 26px 22px;
                background: linear-gradient(135deg, #B45309 0%, #F59E0B 100%);
                color: white;
                box-shadow: 0 8px 24px rgba(0,0,0,0.12);
            ",
            div {
                style: "display: flex; align-items: center; gap: 8px; font-size: 26px; font-weight: 500;",
                Icon { icon: MdPerson, style: "width: 28px; height: 28px;" }
                if let Some(name) = greeting.clone() {
                    "Olá, {name}"
                } else {
                    "Sua conta"
                }
            }
            div {
                style: "font-size: 20px; font-weight: 500; line-height: 1.6; color: rgba(255,255,255,0.96);",
                if greeting.is_some() {
                    "Marque imóveis como favoritos e filtre apenas por eles na lista."
                } else {
                    "A lista de imóveis é exclusiva para usuários cadastrados. Crie sua conta gratuitamente."
                }
            }
            div { style: "flex-grow: 1;" }
            if greeting.is_none() {
                div {
                    style: "display: flex; flex-direction: row; gap: 12px;",
                    Link {
                        to: Route::SignUpPage {},
                        style: "padding: 10px 18px; border-radius: 9999px; background: white; color: #B45309; text-decoration: none;",
                        "Criar conta"
                    }
                    Link {
                        to: Route::SignInPage {},
                        style: "padding: 10px 18px; border-radius: 9999px; border: 1px solid white; color: white; text-decoration: none;",
                        "Entrar"
                    }
                }
            }
        }
    }
}
