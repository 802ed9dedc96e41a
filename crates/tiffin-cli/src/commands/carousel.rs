use anyhow::Result;
use clap::ValueEnum;

use tiffin_core::{
    carousel::{Activation, Carousel, CarouselHandler},
    catalog::{Catalog, CatalogSource},
    AppConfig,
};

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CarouselKind {
    /// "Inspiration for your first order"
    Dishes,
    /// "Top brands for you"
    Brands,
}

/// Records dish selections so they can be resolved against the catalog
#[derive(Default)]
struct SelectionRecorder {
    selected: Option<String>,
}

impl CarouselHandler for SelectionRecorder {
    fn select_dish(&mut self, name: &str) {
        self.selected = Some(name.to_string());
    }
}

pub async fn run(
    source: &impl CatalogSource,
    config: &AppConfig,
    kind: CarouselKind,
    forward: u32,
    back: u32,
    click: Option<usize>,
) -> Result<()> {
    let catalog = source.load().await?;
    let (title, items) = match kind {
        CarouselKind::Dishes => ("Inspiration for your first order", catalog.dish_carousel()),
        CarouselKind::Brands => ("Top brands for you", catalog.brand_carousel()),
    };

    let mut carousel = Carousel::new(&config.carousel);
    for _ in 0..forward {
        carousel.step_forward(&items);
    }
    for _ in 0..back {
        carousel.step_back();
    }

    println!("{}\n", title);

    let units = carousel.render(&items);
    if units.is_empty() {
        println!("  (nothing to show)");
        return Ok(());
    }

    if carousel.show_back() {
        println!("  <  back");
    }
    for unit in &units {
        match &unit.link {
            Some(link) => println!("  {:>3}. {}  -> {}", unit.index, unit.name, link),
            None => println!("  {:>3}. {}", unit.index, unit.name),
        }
    }
    if carousel.show_forward(&items) {
        println!("  >  forward");
    }
    println!(
        "\nShowing {}-{} of {}",
        units[0].index + 1,
        units[units.len() - 1].index + 1,
        items.len()
    );

    if let Some(index) = click {
        let mut recorder = SelectionRecorder::default();
        match carousel.activate(&items, index, &mut recorder) {
            None => println!("\nTile {} is not visible.", index),
            Some(Activation::Navigate(route)) => println!("\nOpening {}", route),
            Some(Activation::Selected) => {
                if let Some(dish) = recorder.selected {
                    print_restaurants_for(&catalog, &dish);
                }
            }
        }
    }

    Ok(())
}

fn print_restaurants_for(catalog: &Catalog, dish: &str) {
    let restaurants = catalog.restaurants_for_dish(dish);
    if restaurants.is_empty() {
        println!("\nNo restaurants serve {} yet.", dish);
        return;
    }

    println!("\nRestaurants serving {} ({}):", dish, restaurants.len());
    for restaurant in restaurants {
        let rating = restaurant
            .rating
            .map(|r| format!(" {:.1}*", r))
            .unwrap_or_default();
        println!("  {} - {}{}", restaurant.id, restaurant.name, rating);
    }
}
