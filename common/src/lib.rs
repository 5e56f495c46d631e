//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod listing_const;
pub mod filter_schema;
pub mod auction_filters;
pub mod selections;
pub mod query_codec;
pub mod filter_chips;
pub mod filter_bar;
pub mod listing_query;
pub mod fetch_generation;
pub mod query_location;
pub mod property;
pub mod auth;
pub mod format;
