//! Restaurant detail page: lookup with brand fallback, menu and opening status.

use std::fmt;

use crate::catalog::{Catalog, FoodItem, Restaurant};
use crate::config::StoreConfig;

/// Outcome of resolving a restaurant route parameter
#[derive(Debug, Clone, PartialEq)]
pub enum Lookup<'a> {
    Found(&'a Restaurant),
    /// Nothing matched; the caller should navigate to this route
    Redirect(String),
}

/// Resolve `id` to a restaurant.
///
/// Tries the restaurant ids first, then treats `id` as a brand id and picks the
/// outlet linked to that brand (by `brandId`, then by name).
pub fn resolve<'a>(catalog: &'a Catalog, id: &str, not_found_route: &str) -> Lookup<'a> {
    if let Some(restaurant) = catalog.restaurant(id) {
        return Lookup::Found(restaurant);
    }

    if let Some(brand) = catalog.brand(id) {
        let outlet = catalog
            .restaurants
            .iter()
            .find(|r| r.brand_id.as_deref() == Some(id))
            .or_else(|| {
                catalog
                    .restaurants
                    .iter()
                    .find(|r| r.name.eq_ignore_ascii_case(&brand.name))
            });
        if let Some(restaurant) = outlet {
            tracing::debug!(brand = %brand.name, restaurant = %restaurant.id, "Resolved brand to restaurant");
            return Lookup::Found(restaurant);
        }
    }

    tracing::warn!(id, "Restaurant not found, redirecting");
    Lookup::Redirect(not_found_route.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpeningStatus {
    Open,
    Closed,
}

impl fmt::Display for OpeningStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpeningStatus::Open => write!(f, "Open now"),
            OpeningStatus::Closed => write!(f, "Closed now"),
        }
    }
}

/// Daily opening window, `[open_hour, close_hour)` in local time
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpeningHours {
    pub open_hour: u32,
    pub close_hour: u32,
}

impl Default for OpeningHours {
    fn default() -> Self {
        Self {
            open_hour: 10,
            close_hour: 23,
        }
    }
}

impl From<&StoreConfig> for OpeningHours {
    fn from(config: &StoreConfig) -> Self {
        Self {
            open_hour: config.open_hour,
            close_hour: config.close_hour,
        }
    }
}

impl OpeningHours {
    pub fn status_at(&self, hour: u32) -> OpeningStatus {
        if self.open_hour <= hour && hour < self.close_hour {
            OpeningStatus::Open
        } else {
            OpeningStatus::Closed
        }
    }

    /// e.g. "10am - 11pm (Today)"
    pub fn label(&self) -> String {
        format!(
            "{} - {} (Today)",
            format_hour(self.open_hour),
            format_hour(self.close_hour)
        )
    }
}

fn format_hour(hour: u32) -> String {
    let hour = hour % 24;
    let suffix = if hour < 12 { "am" } else { "pm" };
    let display = match hour % 12 {
        0 => 12,
        h => h,
    };
    format!("{}{}", display, suffix)
}

/// Everything shown on a restaurant page
#[derive(Debug, Clone, PartialEq)]
pub struct RestaurantPage<'a> {
    pub restaurant: &'a Restaurant,
    pub cuisine_line: String,
    pub location: String,
    pub status: OpeningStatus,
    pub hours: String,
    pub bookmarked: bool,
    pub menu: Vec<&'a FoodItem>,
}

impl<'a> RestaurantPage<'a> {
    pub const EMPTY_MENU: &'static str = "No food items available.";

    pub fn build(
        catalog: &'a Catalog,
        restaurant: &'a Restaurant,
        store: &StoreConfig,
        hour: u32,
        bookmarked: bool,
    ) -> Self {
        let hours = OpeningHours::from(store);
        let location = catalog
            .location
            .clone()
            .unwrap_or_else(|| store.location.clone());

        Self {
            restaurant,
            cuisine_line: restaurant.cuisine_line(),
            location,
            status: hours.status_at(hour),
            hours: hours.label(),
            bookmarked,
            menu: catalog.menu_for(restaurant),
        }
    }

    pub fn bookmark_label(&self) -> &'static str {
        if self.bookmarked {
            "Bookmarked"
        } else {
            "Bookmark"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        serde_json::from_str(
            r#"{
            "brands": [
                {"_id": "b1", "name": "Truffles"},
                {"_id": "b2", "name": "Empire"},
                {"_id": "b3", "name": "Ghost Kitchen"}
            ],
            "restaurants": [
                {"_id": "r1", "name": "Truffles Koramangala", "cuisine": ["Burger", "Cafe"], "brandId": "b1"},
                {"_id": "r2", "name": "EMPIRE", "cuisine": ["Kebab"]}
            ],
            "foods": [
                {"_id": "f1", "name": "All American", "cuisine": "Burger"},
                {"_id": "f2", "name": "Cold Coffee", "cuisine": "Cafe"},
                {"_id": "f3", "name": "Chicken Kebab", "cuisine": "Kebab"}
            ]
        }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_resolve_by_restaurant_id() {
        let catalog = catalog();
        let lookup = resolve(&catalog, "r2", "/not-found");
        assert!(matches!(lookup, Lookup::Found(r) if r.id == "r2"));
    }

    #[test]
    fn test_resolve_brand_by_link() {
        let catalog = catalog();
        let lookup = resolve(&catalog, "b1", "/not-found");
        assert!(matches!(lookup, Lookup::Found(r) if r.id == "r1"));
    }

    #[test]
    fn test_resolve_brand_by_name() {
        let catalog = catalog();
        let lookup = resolve(&catalog, "b2", "/not-found");
        assert!(matches!(lookup, Lookup::Found(r) if r.id == "r2"));
    }

    #[test]
    fn test_resolve_redirects_when_missing() {
        let catalog = catalog();
        assert_eq!(
            resolve(&catalog, "b3", "/not-found"),
            Lookup::Redirect("/not-found".to_string())
        );
        assert_eq!(
            resolve(&catalog, "nope", "/404"),
            Lookup::Redirect("/404".to_string())
        );
    }

    #[test]
    fn test_opening_status() {
        let hours = OpeningHours::default();
        assert_eq!(hours.status_at(9), OpeningStatus::Closed);
        assert_eq!(hours.status_at(10), OpeningStatus::Open);
        assert_eq!(hours.status_at(22), OpeningStatus::Open);
        assert_eq!(hours.status_at(23), OpeningStatus::Closed);
        assert_eq!(OpeningStatus::Open.to_string(), "Open now");
    }

    #[test]
    fn test_hours_label() {
        assert_eq!(OpeningHours::default().label(), "10am - 11pm (Today)");
        let late = OpeningHours {
            open_hour: 0,
            close_hour: 24,
        };
        assert_eq!(late.label(), "12am - 12am (Today)");
        let noon = OpeningHours {
            open_hour: 12,
            close_hour: 15,
        };
        assert_eq!(noon.label(), "12pm - 3pm (Today)");
    }

    #[test]
    fn test_build_page() {
        let catalog = catalog();
        let store = StoreConfig::default();
        let restaurant = catalog.restaurant("r1").unwrap();

        let page = RestaurantPage::build(&catalog, restaurant, &store, 12, true);

        assert_eq!(page.cuisine_line, "Burger, Cafe");
        assert_eq!(page.location, store.location);
        assert_eq!(page.status, OpeningStatus::Open);
        assert_eq!(page.bookmark_label(), "Bookmarked");
        let menu: Vec<&str> = page.menu.iter().map(|f| f.id.as_str()).collect();
        assert_eq!(menu, vec!["f1", "f2"]);
    }

    #[test]
    fn test_build_page_with_empty_menu() {
        let mut catalog = catalog();
        catalog.foods.clear();
        catalog.location = Some("mumbai".to_string());
        let store = StoreConfig::default();
        let restaurant = catalog.restaurant("r2").unwrap().clone();

        let page = RestaurantPage::build(&catalog, &restaurant, &store, 2, false);

        assert!(page.menu.is_empty());
        assert_eq!(page.location, "mumbai");
        assert_eq!(page.status, OpeningStatus::Closed);
        assert_eq!(page.bookmark_label(), "Bookmark");
    }
}
