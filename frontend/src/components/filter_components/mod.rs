pub mod filter_bar_view;
pub mod filter_chips_row;
pub mod filter_controls;
