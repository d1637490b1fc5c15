//! Home page route handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use bebek_core::Cart;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::storage::BrowserStorage;

// =============================================================================
// Landing Content (static)
// =============================================================================

/// A featured dish card.
#[derive(Clone, Copy)]
pub struct FeaturedDish {
    pub title: &'static str,
    pub description: &'static str,
    pub image_url: &'static str,
}

/// A gallery photo.
#[derive(Clone, Copy)]
pub struct GalleryPhoto {
    pub image_url: &'static str,
    pub alt: &'static str,
}

/// A customer testimonial.
#[derive(Clone, Copy)]
pub struct Testimonial {
    pub name: &'static str,
    pub quote: &'static str,
    /// Star rating out of five.
    pub rating: u8,
}

impl Testimonial {
    /// Filled and empty stars, e.g. `★★★★☆`.
    #[must_use]
    pub fn stars(&self) -> String {
        let filled = usize::from(self.rating.min(5));
        "★".repeat(filled) + &"☆".repeat(5 - filled)
    }
}

pub const HERO_IMAGE_URL: &str =
    "https://images.unsplash.com/photo-1544025162-d76694265947?auto=format&fit=crop&w=1600&q=80&sat=-15";

pub const FEATURED_DISHES: &[FeaturedDish] = &[
    FeaturedDish {
        title: "BEBEK",
        description: "Crispy duck over warm rice with sambal ijo, lalapan, and kremesan.",
        image_url: "https://images.unsplash.com/photo-1627308595229-7830a5c91f9f?auto=format&fit=crop&w=1200&q=80&sat=-12",
    },
    FeaturedDish {
        title: "AYAM KAMPUNG",
        description: "Grilled kampung chicken finished with sambal matah, urap, and pandan rice.",
        image_url: "https://images.unsplash.com/photo-1551183053-bf91a1d81141?auto=format&fit=crop&w=1200&q=80&sat=-10",
    },
    FeaturedDish {
        title: "KELI / TALAPIA",
        description: "Spicy Manado-style rica-rica sauce over fried talapia or keli with lime.",
        image_url: "https://images.unsplash.com/photo-1608039829405-d38d22f6d6f3?auto=format&fit=crop&w=1200&q=80&sat=-15",
    },
];

pub const GALLERY: &[GalleryPhoto] = &[
    GalleryPhoto {
        image_url: "https://images.unsplash.com/photo-1543353071-873f17a7a088?auto=format&fit=crop&w=1200&q=80&sat=-12",
        alt: "Nasi Bebek complete with sambal ijo",
    },
    GalleryPhoto {
        image_url: "https://images.unsplash.com/photo-1589307004173-3c95204d00b3?auto=format&fit=crop&w=1200&q=80&sat=-12",
        alt: "Nasi Bebek sambal matah plating",
    },
    GalleryPhoto {
        image_url: "https://images.unsplash.com/photo-1470337458703-46ad1756a187?auto=format&fit=crop&w=1200&q=80&sat=-10",
        alt: "Close up of crispy duck skin and sambal terasi",
    },
];

pub const TESTIMONIALS: &[Testimonial] = &[
    Testimonial {
        name: "Sarah L.",
        quote: "The duck dishes at Bebeks are absolutely amazing! The flavors are authentic and the service is excellent.",
        rating: 5,
    },
    Testimonial {
        name: "Michael T.",
        quote: "Best Indonesian food I've had outside of Indonesia. The Bebek Special is a must-try for anyone visiting.",
        rating: 5,
    },
    Testimonial {
        name: "Jessica R.",
        quote: "Great atmosphere, friendly staff, and delicious food. I'll definitely be back for more!",
        rating: 4,
    },
    Testimonial {
        name: "Andre W.",
        quote: "We hosted a family dinner here and everyone loved the crispy duck and sambal. Truly memorable!",
        rating: 5,
    },
    Testimonial {
        name: "Olivia K.",
        quote: "The sambal matah transported me right back to Bali. Fresh ingredients and bold flavors.",
        rating: 5,
    },
    Testimonial {
        name: "Ravi P.",
        quote: "Even on a busy night the quality stays high. Crispy skin, juicy meat, and thoughtful sides.",
        rating: 4,
    },
];

/// Home page template.
#[derive(Template, WebTemplate)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub hero_image_url: &'static str,
    pub featured: &'static [FeaturedDish],
    pub gallery: &'static [GalleryPhoto],
    pub testimonials: &'static [Testimonial],
    pub cart_count: u32,
    pub flash: Option<String>,
}

/// Display the landing page.
#[instrument(skip(session))]
pub async fn home(session: Session) -> Result<impl IntoResponse> {
    let storage = BrowserStorage::load(&session).await?;
    let cart_count = Cart::load(&storage).totals().item_count;

    Ok(HomeTemplate {
        hero_image_url: HERO_IMAGE_URL,
        featured: FEATURED_DISHES,
        gallery: GALLERY,
        testimonials: TESTIMONIALS,
        cart_count,
        flash: None,
    })
}
