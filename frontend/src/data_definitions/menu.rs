use common::auth::is_protected_route;

use crate::routes::Route;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: u32,
    pub title: &'static str,
    pub route: Route,
    pub new_tab: bool,
}

impl MenuItem {
    /// Needs a signed-in user.
    pub fn secure(&self) -> bool {
        is_protected_route(&self.route.to_string())
    }
}

pub fn menu_data() -> Vec<MenuItem> {
    vec![
        MenuItem { id: 1, title: "Home", route: Route::HomePage {}, new_tab: false },
        MenuItem { id: 2, title: "Leilões", route: Route::auction_list_default(), new_tab: true },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_the_listing_is_secure() {
        let menu = menu_data();
        assert!(!menu[0].secure());
        assert!(menu[1].secure());
    }
}
