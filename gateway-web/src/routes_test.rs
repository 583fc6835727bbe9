//! Tests for the console routes
//!
//! Validates route paths, navigation labels and not-found handling.

#[cfg(test)]
mod tests {
    use crate::routes::MainRoute;
    use strum::IntoEnumIterator;
    use yew_router::Routable;

    #[test]
    fn test_route_paths() {
        assert_eq!(MainRoute::Home.to_path(), "/");
        assert_eq!(MainRoute::Login.to_path(), "/login");
        assert_eq!(MainRoute::RouterSettings.to_path(), "/settings/router");
        assert_eq!(MainRoute::NotFound.to_path(), "/404");
    }

    #[test]
    fn test_route_recognition() {
        assert_eq!(
            MainRoute::recognize("/settings/router"),
            Some(MainRoute::RouterSettings)
        );
        assert_eq!(MainRoute::recognize("/login"), Some(MainRoute::Login));
        assert_eq!(MainRoute::not_found_route(), Some(MainRoute::NotFound));
    }

    #[test]
    fn test_only_router_settings_is_in_navigation() {
        let labelled: Vec<(MainRoute, &str)> = MainRoute::iter()
            .filter_map(|route| route.nav_label().map(|label| (route, label)))
            .collect();
        assert_eq!(labelled, vec![(MainRoute::RouterSettings, "Router Settings")]);
    }
}
