//! Windowed carousel over dish and brand tiles.
//!
//! - `window` - clamped sliding window and affordance predicates
//! - `item` - tile variants and their click behaviour
//!
//! [`Carousel`] ties both together: it owns the window, turns a sequence into
//! the list of tiles that should be shown, and routes clicks to a
//! [`CarouselHandler`].

pub mod item;
pub mod window;

pub use item::{Activate, Activation, Brand, CarouselHandler, CarouselItem, Dish};
pub use window::{CarouselWindow, WindowState};

use crate::config::CarouselConfig;

/// One tile ready for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUnit {
    /// Position in the full sequence
    pub index: usize,
    pub identity: String,
    pub name: String,
    pub img: Option<String>,
    /// Navigation target for brand tiles
    pub link: Option<String>,
}

/// Carousel controller: window state plus link settings
#[derive(Debug, Clone)]
pub struct Carousel {
    window: CarouselWindow,
    link_collection: String,
}

impl Default for Carousel {
    fn default() -> Self {
        Self::new(&CarouselConfig::default())
    }
}

impl Carousel {
    pub fn new(config: &CarouselConfig) -> Self {
        Self {
            window: CarouselWindow::new(config.window_size),
            link_collection: config.link_collection.clone(),
        }
    }

    pub fn window(&self) -> &CarouselWindow {
        &self.window
    }

    pub fn state(&self) -> WindowState {
        self.window.state()
    }

    pub fn step_back(&mut self) {
        self.window.step_back();
    }

    pub fn step_forward(&mut self, items: &[CarouselItem]) {
        self.window.step_forward(items.len());
    }

    pub fn show_back(&self) -> bool {
        self.window.show_back()
    }

    pub fn show_forward(&self, items: &[CarouselItem]) -> bool {
        self.window.show_forward(items.len())
    }

    /// Realign after the sequence was replaced by a shorter one
    pub fn clamp_to(&mut self, items: &[CarouselItem]) {
        self.window.clamp_to_len(items.len());
    }

    /// Visible tiles in sequence order
    pub fn render(&self, items: &[CarouselItem]) -> Vec<DisplayUnit> {
        let range = self.window.visible_range(items.len());
        items[range.clone()]
            .iter()
            .zip(range)
            .map(|(item, index)| DisplayUnit {
                index,
                identity: item.identity().to_string(),
                name: item.name().to_string(),
                img: item.img().map(str::to_string),
                link: item.link(&self.link_collection),
            })
            .collect()
    }

    /// Click the tile at `index`; hidden or out-of-range tiles ignore clicks
    pub fn activate(
        &self,
        items: &[CarouselItem],
        index: usize,
        handler: &mut dyn CarouselHandler,
    ) -> Option<Activation> {
        if !self.window.visible_range(items.len()).contains(&index) {
            tracing::debug!(index, "Ignoring click on hidden carousel tile");
            return None;
        }
        Some(items[index].activate(handler, &self.link_collection))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dishes(n: usize) -> Vec<CarouselItem> {
        (0..n)
            .map(|i| {
                CarouselItem::Dish(Dish {
                    id: Some(format!("d{i}")),
                    name: format!("Dish {i}"),
                    img: None,
                })
            })
            .collect()
    }

    #[derive(Default)]
    struct Selections(Vec<String>);

    impl CarouselHandler for Selections {
        fn select_dish(&mut self, name: &str) {
            self.0.push(name.to_string());
        }
    }

    #[test]
    fn test_render_initial_window() {
        let items = dishes(10);
        let carousel = Carousel::default();

        let units = carousel.render(&items);
        let indices: Vec<usize> = units.iter().map(|u| u.index).collect();
        assert_eq!(indices, vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(units[0].identity, "d0");
        assert!(units.iter().all(|u| u.link.is_none()));
    }

    #[test]
    fn test_render_after_step_forward() {
        let items = dishes(10);
        let mut carousel = Carousel::default();
        carousel.step_forward(&items);

        let units = carousel.render(&items);
        assert_eq!(units.first().map(|u| u.index), Some(1));
        assert_eq!(units.last().map(|u| u.index), Some(6));
    }

    #[test]
    fn test_render_empty_sequence() {
        let carousel = Carousel::default();
        assert!(carousel.render(&[]).is_empty());
        assert!(!carousel.show_back());
        assert!(!carousel.show_forward(&[]));
    }

    #[test]
    fn test_render_short_sequence_truncates() {
        let items = dishes(3);
        let carousel = Carousel::default();
        assert_eq!(carousel.state(), WindowState::new(0, 5));
        assert_eq!(carousel.render(&items).len(), 3);
        assert!(!carousel.show_forward(&items));
    }

    #[test]
    fn test_render_brand_links() {
        let items = vec![CarouselItem::Brand(Brand {
            id: Some("r1".to_string()),
            name: "Pizza Hut".to_string(),
            img: Some("hut.png".to_string()),
        })];
        let carousel = Carousel::default();

        let units = carousel.render(&items);
        assert_eq!(units[0].link.as_deref(), Some("/explore/r1"));
        assert_eq!(units[0].img.as_deref(), Some("hut.png"));
    }

    #[test]
    fn test_custom_link_collection() {
        let config = CarouselConfig {
            window_size: 2,
            link_collection: "brands".to_string(),
        };
        let items = vec![CarouselItem::Brand(Brand {
            id: None,
            name: "Subway".to_string(),
            img: None,
        })];
        let carousel = Carousel::new(&config);
        assert_eq!(
            carousel.render(&items)[0].link.as_deref(),
            Some("/brands/Subway")
        );
    }

    #[test]
    fn test_activate_visible_dish() {
        let items = dishes(10);
        let carousel = Carousel::default();
        let mut selections = Selections::default();

        let outcome = carousel.activate(&items, 2, &mut selections);
        assert_eq!(outcome, Some(Activation::Selected));
        assert_eq!(selections.0, vec!["Dish 2".to_string()]);
    }

    #[test]
    fn test_activate_hidden_tile_is_ignored() {
        let items = dishes(10);
        let carousel = Carousel::default();
        let mut selections = Selections::default();

        assert_eq!(carousel.activate(&items, 8, &mut selections), None);
        assert_eq!(carousel.activate(&items, 42, &mut selections), None);
        assert!(selections.0.is_empty());
    }

    #[test]
    fn test_activate_brand_navigates() {
        let items = vec![CarouselItem::Brand(Brand {
            id: Some("r1".to_string()),
            name: "Haldiram's".to_string(),
            img: None,
        })];
        let carousel = Carousel::default();
        let mut selections = Selections::default();

        let outcome = carousel.activate(&items, 0, &mut selections);
        assert_eq!(outcome, Some(Activation::Navigate("/explore/r1".to_string())));
        assert!(selections.0.is_empty());
    }

    #[test]
    fn test_clamp_after_sequence_replaced() {
        let long = dishes(10);
        let short = dishes(4);
        let mut carousel = Carousel::default();
        for _ in 0..4 {
            carousel.step_forward(&long);
        }
        assert!(carousel.render(&short).is_empty());
        assert!(carousel.show_back());

        carousel.clamp_to(&short);
        assert_eq!(carousel.render(&short).len(), 4);
    }
}
