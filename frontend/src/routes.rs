use common::listing_query::ListingQuery;
use dioxus::prelude::*;

use crate::components::navbar::Navbar;

use crate::pages::home_page::HomePage;
use crate::pages::signin_page::SignInPage;
use crate::pages::signup_page::SignUpPage;
use crate::pages::forgot_password_page::ForgotPasswordPage;
use crate::pages::auction_list_page::AuctionListPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    HomePage {},


    #[route("/signin")]
    SignInPage {},

    #[route("/signup")]
    SignUpPage {},

    #[route("/forgot-password")]
    ForgotPasswordPage {},


    #[route("/auction-list?:..query")]
    AuctionListPage { query: ListingQuery },

}

impl Route {
    pub fn auction_list(query: ListingQuery) -> Self {
        Self::AuctionListPage { query }
    }

    /// Listing with no filters yet; the filter bar fills in the defaults.
    pub fn auction_list_default() -> Self {
        Self::auction_list(ListingQuery::default())
    }
}
