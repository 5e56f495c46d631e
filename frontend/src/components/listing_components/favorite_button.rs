use dioxus::prelude::*;
use dioxus_free_icons::icons::md_action_icons::{MdFavorite, MdFavoriteBorder};
use dioxus_free_icons::Icon;

use crate::pages::auction_list_page::ListingState;

#[component]
pub fn FavoriteButton(property_id: String, is_favorite: bool) -> Element {
    let state = use_context::<ListingState>();
    let label = if is_favorite { "Remover dos favoritos" } else { "Adicionar aos favoritos" };
    rsx! {
        button {
            style: "
                display: flex;
                align-items: center;
                justify-content: center;
                width: 36px;
                height: 36px;
                border: none;
                border-radius: 50%;
                background: white;
                box-shadow: 0 0 10px 0 rgba(0, 0, 0, 0.15);
                cursor: pointer;
            ",
            title: "{label}",
            "aria-label": "{label}",
            onclick: move |_| state.toggle_favorite.call(property_id.clone()),
            if is_favorite {
                Icon { icon: MdFavorite, style: "width: 20px; height: 20px; color: #E5484D;" }
            } else {
                Icon { icon: MdFavoriteBorder, style: "width: 20px; height: 20px; color: #6B7280;" }
            }
        }
    }
}
