use serde::{Deserialize, Serialize};

/// A dish tile ("Inspiration for your first order")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dish {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// A brand tile ("Top brands for you")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Brand {
    #[serde(rename = "_id", default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Entry in a carousel sequence, tagged the same way the web client tags it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CarouselItem {
    #[serde(rename = "food")]
    Dish(Dish),
    #[serde(rename = "brand")]
    Brand(Brand),
}

/// Receiver for the side effects of clicking a carousel tile
pub trait CarouselHandler {
    /// A dish tile was clicked; `name` is the dish name
    fn select_dish(&mut self, name: &str);

    /// A brand tile was clicked
    fn brand_visited(&mut self, name: &str) {
        tracing::info!(brand = name, "Brand opened from carousel");
    }
}

/// What the caller should do after a click
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Activation {
    /// The selection was dispatched; stay on the current view
    Selected,
    /// Navigate to the given route
    Navigate(String),
}

/// Click behaviour of a tile
pub trait Activate {
    fn activate(&self, handler: &mut dyn CarouselHandler, collection: &str) -> Activation;
}

impl Dish {
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }
}

impl Brand {
    pub fn identity(&self) -> &str {
        self.id.as_deref().unwrap_or(&self.name)
    }

    /// Route of the brand's detail page, e.g. `/explore/<id>`
    pub fn link(&self, collection: &str) -> String {
        format!("/{}/{}", collection.trim_matches('/'), self.identity())
    }
}

impl Activate for Dish {
    fn activate(&self, handler: &mut dyn CarouselHandler, _collection: &str) -> Activation {
        handler.select_dish(&self.name);
        Activation::Selected
    }
}

impl Activate for Brand {
    fn activate(&self, handler: &mut dyn CarouselHandler, collection: &str) -> Activation {
        handler.brand_visited(&self.name);
        Activation::Navigate(self.link(collection))
    }
}

impl Activate for CarouselItem {
    fn activate(&self, handler: &mut dyn CarouselHandler, collection: &str) -> Activation {
        match self {
            CarouselItem::Dish(dish) => dish.activate(handler, collection),
            CarouselItem::Brand(brand) => brand.activate(handler, collection),
        }
    }
}

impl CarouselItem {
    /// Stable key: the id when present, otherwise the name
    pub fn identity(&self) -> &str {
        match self {
            CarouselItem::Dish(dish) => dish.identity(),
            CarouselItem::Brand(brand) => brand.identity(),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            CarouselItem::Dish(dish) => &dish.name,
            CarouselItem::Brand(brand) => &brand.name,
        }
    }

    pub fn img(&self) -> Option<&str> {
        match self {
            CarouselItem::Dish(dish) => dish.img.as_deref(),
            CarouselItem::Brand(brand) => brand.img.as_deref(),
        }
    }

    /// Navigation target, only brands have one
    pub fn link(&self, collection: &str) -> Option<String> {
        match self {
            CarouselItem::Dish(_) => None,
            CarouselItem::Brand(brand) => Some(brand.link(collection)),
        }
    }
}
