//! # Deck Catalog
//!
//! The compiled-in content tables: nine pages and three carousel
//! datasets. This is fixed configuration data, not something fetched at
//! runtime — the rest of the core treats it as an opaque table, so
//! swapping in a different portfolio only touches this file (and the
//! test fixtures, which mirror its shapes in miniature).

use crate::core::carousel::{Card, CarouselId, Category, Dataset, ImageRef};
use crate::core::page::PageId;

/// One top-level content section of the deck.
#[derive(Debug, Clone, Copy)]
pub struct PageContent {
    pub id: PageId,
    pub title: &'static str,
    pub body: &'static str,
    /// Carousel hosted on this page, if any.
    pub carousel: Option<CarouselId>,
}

/// The whole deck, pages in cycle order.
#[derive(Debug, Clone, Copy)]
pub struct Deck {
    pub title: &'static str,
    pub pages: &'static [PageContent],
}

impl Deck {
    pub fn page(&self, id: PageId) -> Option<&'static PageContent> {
        self.pages.iter().find(|p| p.id == id)
    }

    /// Carousel ids in deck order (the order preload walks them).
    pub fn carousel_ids(&self) -> Vec<CarouselId> {
        self.pages.iter().filter_map(|p| p.carousel).collect()
    }
}

/// The production deck.
pub fn deck() -> Deck {
    Deck {
        title: "Aperture Machining",
        pages: PAGES,
    }
}

/// Dataset for one of the deck's carousels.
pub fn dataset(id: CarouselId) -> Dataset {
    match id {
        CarouselId::Main => MAIN_DATASET,
        CarouselId::Wholesale => WHOLESALE_DATASET,
        CarouselId::Quoting => QUOTING_DATASET,
    }
}

const PAGES: &[PageContent] = &[
    PageContent {
        id: PageId::Home,
        title: "Precision parts, short runs, fast turnaround",
        body: "A small machine shop for aerospace prototyping and custom \
               tooling. Browse the pages with the digit keys or the page \
               curl; every section below is one keypress away.",
        carousel: None,
    },
    PageContent {
        id: PageId::Page(1),
        title: "Quoting",
        body: "Send a drawing, get a number. The gallery shows recent \
               quoted-and-delivered work.",
        carousel: Some(CarouselId::Quoting),
    },
    PageContent {
        id: PageId::Page(2),
        title: "Wholesale",
        body: "Batch production for storefronts and collaborations.",
        carousel: Some(CarouselId::Wholesale),
    },
    PageContent {
        id: PageId::Page(3),
        title: "Project gallery",
        body: "Selected one-off projects, by category.",
        carousel: Some(CarouselId::Main),
    },
    PageContent {
        id: PageId::Page(4),
        title: "Capabilities",
        body: "3- and 4-axis milling, turning, and fixture design. \
               Aluminum, brass, and engineering plastics; tolerances to \
               ±0.01 mm on request.",
        carousel: None,
    },
    PageContent {
        id: PageId::Page(5),
        title: "Materials",
        body: "Stocked: 6061 and 7075 aluminum, 360 brass, Delrin, and \
               PEEK. Exotic alloys sourced per job.",
        carousel: None,
    },
    PageContent {
        id: PageId::Page(6),
        title: "Lead times",
        body: "Prototype quantities typically ship within ten working \
               days of drawing approval.",
        carousel: None,
    },
    PageContent {
        id: PageId::Page(7),
        title: "Quality",
        body: "Every lot is inspected against the drawing; first articles \
               ship with a dimensional report.",
        carousel: None,
    },
    PageContent {
        id: PageId::Page(8),
        title: "Contact",
        body: "quotes@example.com — include material, quantity, and a \
               target date.",
        carousel: None,
    },
];

const MAIN_DATASET: Dataset = Dataset {
    categories: &[
        Category {
            key: "edge_mandrel",
            label: "Edge Mandrel",
            images: &[
                ImageRef { path: "parts/edge_mandrel/2.jpg", alt: "Edge mandrel 2" },
                ImageRef { path: "parts/edge_mandrel/4.jpg", alt: "Edge mandrel 4" },
                ImageRef { path: "parts/edge_mandrel/6.jpg", alt: "Edge mandrel 6" },
                ImageRef { path: "parts/edge_mandrel/7.jpg", alt: "Edge mandrel 7" },
                ImageRef { path: "parts/edge_mandrel/8.jpg", alt: "Edge mandrel 8" },
                ImageRef { path: "parts/edge_mandrel/9.jpg", alt: "Edge mandrel 9" },
            ],
            description: Card {
                title: "Edge Mandrel",
                body: "A composite-layup mandrel machined as a matched \
                       pair, ground to a shared reference edge.",
            },
        },
        Category {
            key: "wind_tunnel",
            label: "Wind Tunnel Model",
            images: &[
                ImageRef { path: "parts/wind_tunnel/1.jpg", alt: "Wind tunnel model 1" },
                ImageRef { path: "parts/wind_tunnel/2.jpg", alt: "Wind tunnel model 2" },
                ImageRef { path: "parts/wind_tunnel/3.jpg", alt: "Wind tunnel model 3" },
                ImageRef { path: "parts/wind_tunnel/4.jpg", alt: "Wind tunnel model 4" },
                ImageRef { path: "parts/wind_tunnel/5.jpg", alt: "Wind tunnel model 5" },
                ImageRef { path: "parts/wind_tunnel/6.jpg", alt: "Wind tunnel model 6" },
                ImageRef { path: "parts/wind_tunnel/7.jpg", alt: "Wind tunnel model 7" },
                ImageRef { path: "parts/wind_tunnel/8.jpg", alt: "Wind tunnel model 8" },
                ImageRef { path: "parts/wind_tunnel/9.jpg", alt: "Wind tunnel model 9" },
                ImageRef { path: "parts/wind_tunnel/10.jpg", alt: "Wind tunnel model 10" },
                ImageRef { path: "parts/wind_tunnel/11.jpg", alt: "Wind tunnel model 11" },
            ],
            description: Card {
                title: "Wind Tunnel Model",
                body: "Subscale test article in 7075, including the \
                       removable dagger nose and balance adapter.",
            },
        },
        Category {
            key: "misc_parts",
            label: "Misc Parts",
            images: &[
                ImageRef { path: "parts/misc/1.jpg", alt: "Misc part 1" },
                ImageRef { path: "parts/misc/2.jpg", alt: "Misc part 2" },
                ImageRef { path: "parts/misc/3.jpg", alt: "Misc part 3" },
                ImageRef { path: "parts/misc/4.jpg", alt: "Misc part 4" },
                ImageRef { path: "parts/misc/5.jpg", alt: "Misc part 5" },
                ImageRef { path: "parts/misc/6.jpg", alt: "Misc part 6" },
                ImageRef { path: "parts/misc/7.jpg", alt: "Misc part 7" },
            ],
            description: Card {
                title: "Misc Parts",
                body: "Assorted one-offs: jigs, adapters, and replacement \
                       parts for out-of-production equipment.",
            },
        },
    ],
};

const WHOLESALE_DATASET: Dataset = Dataset {
    categories: &[
        Category {
            key: "collaborations",
            label: "Collaborations",
            images: &[
                ImageRef { path: "wholesale/collaborations/1.jpg", alt: "Collaboration 1" },
                ImageRef { path: "wholesale/collaborations/2.jpg", alt: "Collaboration 2" },
                ImageRef { path: "wholesale/collaborations/3.jpg", alt: "Collaboration 3" },
                ImageRef { path: "wholesale/collaborations/4.jpg", alt: "Collaboration 4" },
                ImageRef { path: "wholesale/collaborations/5.jpg", alt: "Collaboration 5" },
                ImageRef { path: "wholesale/collaborations/6.jpg", alt: "Collaboration 6" },
                ImageRef { path: "wholesale/collaborations/7.jpg", alt: "Collaboration 7" },
                ImageRef { path: "wholesale/collaborations/8.jpg", alt: "Collaboration 8" },
                ImageRef { path: "wholesale/collaborations/9.jpg", alt: "Collaboration 9" },
            ],
            description: Card {
                title: "Collaborations",
                body: "Co-branded runs designed with partner studios.",
            },
        },
        Category {
            key: "online_retailers",
            label: "Online Retailers",
            images: &[
                ImageRef { path: "wholesale/retailers/1.png", alt: "Online retailer 1" },
                ImageRef { path: "wholesale/retailers/2.png", alt: "Online retailer 2" },
                ImageRef { path: "wholesale/retailers/3.png", alt: "Online retailer 3" },
            ],
            description: Card {
                title: "Online Retailers",
                body: "Stock items carried by our retail partners.",
            },
        },
    ],
};

const QUOTING_DATASET: Dataset = Dataset {
    categories: &[Category {
        key: "recent_work",
        label: "Recent Work",
        images: &[
            ImageRef { path: "quoting/1.jpg", alt: "Quoted job 1" },
            ImageRef { path: "quoting/2.jpg", alt: "Quoted job 2" },
            ImageRef { path: "quoting/3.jpg", alt: "Quoted job 3" },
            ImageRef { path: "quoting/4.jpg", alt: "Quoted job 4" },
        ],
        description: Card {
            title: "Recent Work",
            body: "A cross-section of jobs quoted and delivered in the \
                   last quarter.",
        },
    }],
};
