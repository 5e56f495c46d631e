use common::format::{format_brl, format_date, format_percent};
use common::property::Property;
use dioxus::prelude::*;
use dioxus_free_icons::icons::md_image_icons::MdPhoto;
use dioxus_free_icons::Icon;

use crate::components::listing_components::favorite_button::FavoriteButton;

#[component]
pub fn PropertyCard(property: Property) -> Element {
    let place = [property.neighborhood.as_str(), property.city.as_str()]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(", ");
    let place = if property.state.is_empty() { place } else { format!("{place} - {}", property.state) };

    rsx! {
        div {
            class: "x-property-card",
            style: "
                display: flex;
                flex-direction: column;
                background: white;
                border: 1px solid #E5E7EB;
                border-radius: 14px;
                overflow: hidden;
                box-shadow: 0 6px 16px rgba(0,0,0,0.06);
            ",

            div {
                style: "position: relative; height: 180px; background: #E5E7EB;",
                if property.photo.is_empty() {
                    div {
                        style: "display: flex; align-items: center; justify-content: center; height: 100%; color: #9CA3AF;",
                        Icon { icon: MdPhoto, style: "width: 48px; height: 48px;" }
                    }
                } else {
                    img {
                        src: "{property.photo}",
                        alt: "{property.identification}",
                        style: "width: 100%; height: 100%; object-fit: cover;",
                    }
                }
                div {
                    style: "position: absolute; top: 10px; right: 10px;",
                    FavoriteButton { property_id: property.id.clone(), is_favorite: property.is_favorite }
                }
                span {
                    style: "
                        position: absolute;
                        left: 10px;
                        bottom: 10px;
                        padding: 2px 10px;
                        font-size: 13px;
                        color: white;
                        background: rgba(28, 33, 45, 0.8);
                        border-radius: 1000px;
                    ",
                    "{property.property_type}"
                }
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px; padding: 14px 16px 16px 16px;",
                div {
                    style: "font-size: 16px; font-weight: 600; color: #111827; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                    title: "{property.identification}",
                    "{property.identification}"
                }
                div { style: "font-size: 14px; color: #6B7280;", "{place}" }
                div {
                    style: "font-size: 14px; color: #374151;",
                    "Avaliação: "
                    strong { "{format_brl(property.appraisal_value)}" }
                }
                SaleRow {
                    title: "1ª Venda",
                    date: format_date(property.first_sale_date),
                    price: format_brl(property.first_sale_price),
                    discount: format_percent(property.first_sale_discount_percent),
                }
                SaleRow {
                    title: "2ª Venda",
                    date: format_date(property.second_sale_date),
                    price: format_brl(property.second_sale_price),
                    discount: format_percent(property.second_sale_discount_percent),
                }
            }
        }
    }
}

#[component]
fn SaleRow(title: String, date: String, price: String, discount: String) -> Element {
    rsx! {
        div {
            style: "
                display: grid;
                grid-template-columns: 70px 1fr auto;
                gap: 8px;
                align-items: baseline;
                padding-top: 8px;
                border-top: 1px solid #F3F4F6;
                font-size: 14px;
            ",
            span { style: "color: #6B7280;", "{title}" }
            div {
                style: "display: flex; flex-direction: column;",
                span { style: "font-weight: 600; color: #111827;", "{price}" }
                span { style: "font-size: 12px; color: #9CA3AF;", "{date}" }
            }
            span {
                style: "padding: 2px 8px; border-radius: 6px; background: #DCFCE7; color: #166534; font-size: 13px;",
                "-{discount}"
            }
        }
    }
}
