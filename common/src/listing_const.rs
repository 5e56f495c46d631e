//! Listing pagination limits shared by the client and the listing API.

pub const PAGE_SIZE: u64 = 12;

pub const MAX_PAGE_SIZE: u64 = 100;

/// Value sent in `x-user-id` when nobody is signed in.
pub const ANONYMOUS_USER_ID: &str = "anon";

pub const USER_ID_HEADER: &str = "x-user-id";
