use serde::{Deserialize, Serialize};

use crate::carousel::{Brand, CarouselItem, Dish};

/// A delivery restaurant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Restaurant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    /// Delivery rating
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(rename = "diningRating", default)]
    pub dining_rating: Option<f32>,
    #[serde(default)]
    pub cuisine: Vec<String>,
    /// Brand this outlet belongs to, if any
    #[serde(rename = "brandId", default, skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
}

/// A menu entry, matched to restaurants through its cuisine
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodItem {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    pub cuisine: String,
    #[serde(default)]
    pub price: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub img: Option<String>,
}

/// Everything the client browses, loaded in one piece
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub dishes: Vec<Dish>,
    #[serde(default)]
    pub brands: Vec<Brand>,
    #[serde(default)]
    pub restaurants: Vec<Restaurant>,
    #[serde(default)]
    pub foods: Vec<FoodItem>,
}

impl Restaurant {
    /// Check whether the restaurant serves a cuisine (case-insensitive)
    pub fn serves(&self, cuisine: &str) -> bool {
        self.cuisine.iter().any(|c| c.eq_ignore_ascii_case(cuisine))
    }

    /// Cuisine list as a single display line
    pub fn cuisine_line(&self) -> String {
        self.cuisine.join(", ")
    }
}

impl Catalog {
    /// Sequence for the dish carousel
    pub fn dish_carousel(&self) -> Vec<CarouselItem> {
        self.dishes.iter().cloned().map(CarouselItem::Dish).collect()
    }

    /// Sequence for the brand carousel
    pub fn brand_carousel(&self) -> Vec<CarouselItem> {
        self.brands.iter().cloned().map(CarouselItem::Brand).collect()
    }

    pub fn restaurant(&self, id: &str) -> Option<&Restaurant> {
        self.restaurants.iter().find(|r| r.id == id)
    }

    pub fn brand(&self, id: &str) -> Option<&Brand> {
        self.brands.iter().find(|b| b.id.as_deref() == Some(id))
    }

    /// Restaurants serving the cuisine a dish tile stands for
    pub fn restaurants_for_dish(&self, dish: &str) -> Vec<&Restaurant> {
        self.restaurants.iter().filter(|r| r.serves(dish)).collect()
    }

    /// Menu of a restaurant, in catalog order
    pub fn menu_for(&self, restaurant: &Restaurant) -> Vec<&FoodItem> {
        self.foods
            .iter()
            .filter(|food| restaurant.serves(&food.cuisine))
            .collect()
    }
}
