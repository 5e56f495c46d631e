pub mod favorite_button;
pub mod pagination;
pub mod property_card;
pub mod property_grid;
pub mod search_box;
