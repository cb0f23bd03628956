//! Application routing configuration.

use dioxus::prelude::*;

use crate::views::{AppShell, CityView, Dashboard};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Dashboard {},

        // City detail pages carry their coordinates in the query string so a
        // reload does not need a fresh geocoding round trip.
        #[route("/city/:name?:lat&:lon")]
        CityView { name: String, lat: f64, lon: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn city_route_serializes_coordinates_as_query_params() {
        let route = Route::CityView {
            name: "Paris".to_string(),
            lat: 48.85,
            lon: 2.35,
        };
        assert_eq!(route.to_string(), "/city/Paris?lat=48.85&lon=2.35");
    }

    #[test]
    fn city_route_parses_back_from_path() {
        let route: Route = "/city/Paris?lat=48.85&lon=2.35"
            .parse()
            .expect("route should parse");
        assert_eq!(
            route,
            Route::CityView {
                name: "Paris".to_string(),
                lat: 48.85,
                lon: 2.35,
            }
        );
    }
}
