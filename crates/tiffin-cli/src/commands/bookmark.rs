use anyhow::Result;

use tiffin_core::{
    bookmarks::{BookmarkChange, BookmarkStore},
    catalog::CatalogSource,
    restaurant::{self, Lookup},
    AppConfig, Error,
};

pub async fn run(
    source: &impl CatalogSource,
    config: &AppConfig,
    id: &str,
    user: &str,
    token: Option<&str>,
) -> Result<()> {
    let catalog = source.load().await?;

    let restaurant = match restaurant::resolve(&catalog, id, &config.store.not_found_route) {
        Lookup::Found(restaurant) => restaurant,
        Lookup::Redirect(_) => return Err(Error::RestaurantNotFound(id.to_string()).into()),
    };

    let store = BookmarkStore::new(config.bookmarks_path());
    match store.toggle(user, &restaurant.id, token).await {
        Ok(BookmarkChange::Added) => println!("Bookmarked {}", restaurant.name),
        Ok(BookmarkChange::Removed) => println!("Removed bookmark for {}", restaurant.name),
        Err(Error::LoginRequired) => {
            println!("Login Required");
            println!("Please log in to use the bookmark feature.");
            println!("\nPass --token or set TIFFIN_TOKEN.");
        }
        Err(e) => return Err(e.into()),
    }

    Ok(())
}
