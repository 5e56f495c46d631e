pub mod home_page;
pub mod signin_page;
pub mod signup_page;
pub mod forgot_password_page;
pub mod auction_list_page;
