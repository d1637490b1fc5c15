//! Menu page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use bebek_core::menu::{MenuSection, MenuSet, SAMBALS, SECTIONS, Sambal};
use bebek_core::Cart;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::routes::cart::CartView;
use crate::storage::{BrowserStorage, take_flash};

/// Set display data for templates.
#[derive(Clone)]
pub struct MenuSetView {
    pub id: i32,
    pub name: &'static str,
    pub portion: &'static str,
    pub price: String,
    pub includes: String,
    pub sambal: String,
    /// How many of this set are already in the cart.
    pub in_cart: u32,
}

impl MenuSetView {
    fn new(set: &MenuSet, cart: &Cart) -> Self {
        Self {
            id: set.id.as_i32(),
            name: set.name,
            portion: set.portion,
            price: set.price().to_string(),
            includes: set.includes.join(", "),
            sambal: set.sambal.join(" / "),
            in_cart: cart.quantity_of(set.id),
        }
    }
}

/// Section display data for templates.
#[derive(Clone)]
pub struct MenuSectionView {
    pub title: &'static str,
    pub tagline: &'static str,
    pub sets: Vec<MenuSetView>,
}

impl MenuSectionView {
    fn new(section: &MenuSection, cart: &Cart) -> Self {
        Self {
            title: section.title,
            tagline: section.tagline,
            sets: section
                .sets
                .iter()
                .map(|set| MenuSetView::new(set, cart))
                .collect(),
        }
    }
}

/// Menu page template.
#[derive(Template, WebTemplate)]
#[template(path = "menu.html")]
pub struct MenuTemplate {
    pub sections: Vec<MenuSectionView>,
    pub sambals: &'static [Sambal],
    pub cart: CartView,
    pub cart_count: u32,
    pub flash: Option<String>,
}

/// Display the menu with the cart panel.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    let storage = BrowserStorage::load(&session).await?;
    let cart = Cart::load(&storage);
    let flash = take_flash(&session).await;

    let view = CartView::from(&cart);
    Ok(MenuTemplate {
        sections: SECTIONS
            .iter()
            .map(|section| MenuSectionView::new(section, &cart))
            .collect(),
        sambals: SAMBALS,
        cart_count: view.item_count,
        cart: view,
        flash,
    })
}
