//! # Application State
//!
//! Core deck state for Vitrine. This module contains domain logic only -
//! no TUI-specific types. Presentation state lives in the `tui` module.
//!
//! ```text
//! App
//! ├── deck: Deck                    // pages + hosted carousels
//! ├── navigator: PageNavigator      // active page, transitions
//! ├── carousels: Vec<Carousel>      // independent engines, deck order
//! ├── viewport: ViewportClass       // compact vs wide behavior
//! ├── gesture: GestureThresholds    // swipe/breakpoint config
//! └── status_message: String        // status bar text
//! ```
//!
//! The original implementation kept each carousel's index and category in
//! module-level globals; here every carousel is an explicit instance and
//! all mutation flows through `App` methods called by the event loop.

use log::info;

use crate::core::carousel::{Carousel, CarouselId};
use crate::core::catalog::{self, Deck, PageContent};
use crate::core::config::{GestureThresholds, ResolvedConfig};
use crate::core::lazy::{self, ImageProbe};
use crate::core::page::{PageId, PageNavigator, ViewportClass};

pub struct App {
    pub deck: Deck,
    pub navigator: PageNavigator,
    carousels: Vec<Carousel>,
    pub viewport: ViewportClass,
    pub gesture: GestureThresholds,
    pub status_message: String,
}

impl App {
    /// Build the deck's state and warm the image cache: each carousel's
    /// first slide neighborhood, then the startup preload (first two
    /// images of every carousel in deck order).
    pub fn new(deck: Deck, config: &ResolvedConfig, probe: &dyn ImageProbe) -> Self {
        let mut carousels: Vec<Carousel> = deck
            .carousel_ids()
            .into_iter()
            .map(|id| Carousel::new(id, catalog::dataset(id), probe))
            .collect();
        lazy::initial_preload(&mut carousels, probe);
        info!(
            "deck \"{}\": {} pages, {} carousels",
            deck.title,
            deck.pages.len(),
            carousels.len()
        );

        Self {
            deck,
            navigator: PageNavigator::new(config.timing),
            carousels,
            viewport: config.viewport_override.unwrap_or(ViewportClass::Wide),
            gesture: config.gesture,
            status_message: String::new(),
        }
    }

    pub fn carousel(&self, id: CarouselId) -> Option<&Carousel> {
        self.carousels.iter().find(|c| c.id() == id)
    }

    pub fn carousel_mut(&mut self, id: CarouselId) -> Option<&mut Carousel> {
        self.carousels.iter_mut().find(|c| c.id() == id)
    }

    /// Content of the currently active page.
    pub fn active_page(&self) -> Option<&'static PageContent> {
        self.deck.page(self.navigator.active()?)
    }

    /// Carousel hosted on the active page, if any.
    pub fn visible_carousel_id(&self) -> Option<CarouselId> {
        self.active_page()?.carousel
    }

    pub fn visible_carousel_mut(&mut self) -> Option<&mut Carousel> {
        let id = self.visible_carousel_id()?;
        self.carousel_mut(id)
    }

    /// Content for a specific page id (used when drawing the exiting page
    /// of a transition).
    pub fn page(&self, id: PageId) -> Option<&'static PageContent> {
        self.deck.page(id)
    }
}
