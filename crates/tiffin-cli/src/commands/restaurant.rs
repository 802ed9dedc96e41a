use anyhow::Result;
use chrono::Timelike;

use tiffin_core::{
    bookmarks::BookmarkStore,
    catalog::CatalogSource,
    restaurant::{self, Lookup, RestaurantPage},
    AppConfig,
};

pub async fn run(
    source: &impl CatalogSource,
    config: &AppConfig,
    id: &str,
    user: Option<&str>,
) -> Result<()> {
    let catalog = source.load().await?;

    let restaurant = match restaurant::resolve(&catalog, id, &config.store.not_found_route) {
        Lookup::Found(restaurant) => restaurant,
        Lookup::Redirect(route) => {
            println!("Restaurant '{}' not found. Redirecting to {}", id, route);
            return Ok(());
        }
    };

    let bookmarked = match user {
        Some(user) => {
            BookmarkStore::new(config.bookmarks_path())
                .is_bookmarked(user, &restaurant.id)
                .await?
        }
        None => false,
    };

    let hour = chrono::Local::now().hour();
    let page = RestaurantPage::build(&catalog, restaurant, &config.store, hour, bookmarked);

    println!("{}", page.restaurant.name);
    let delivery = page
        .restaurant
        .rating
        .map(|r| format!("{:.1}*", r))
        .unwrap_or_else(|| "-".to_string());
    let dining = page
        .restaurant
        .dining_rating
        .map(|r| format!("{:.1}*", r))
        .unwrap_or_else(|| "-".to_string());
    println!("  Delivery {}  Dining {}", delivery, dining);
    println!("  {}", page.cuisine_line);
    println!("  {}", page.location);
    println!("  {} - {}", page.status, page.hours);
    if user.is_some() {
        println!("  [{}]", page.bookmark_label());
    }

    println!("\nOrder Online\n");
    if page.menu.is_empty() {
        println!("  {}", RestaurantPage::EMPTY_MENU);
    }
    for food in &page.menu {
        let price = food
            .price
            .map(|p| format!("  Rs {:.0}", p))
            .unwrap_or_default();
        println!("  {}{}", food.name, price);
        if let Some(description) = &food.description {
            println!("    {}", description);
        }
    }

    Ok(())
}
