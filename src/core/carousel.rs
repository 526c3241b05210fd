//! # Carousel Engine
//!
//! One engine instance per carousel (main projects, wholesale, quoting).
//! Each owns its current slide index, current category, and the derived
//! slide list: the category's images followed by one trailing
//! description card. Indices are cyclic in both directions.
//!
//! The three instances share no state. The render contract is exposed as
//! data (`track_offset_percent`, `dot_states`) so the adapter stays a
//! dumb projection and the properties stay testable without a terminal.

use log::warn;

use crate::core::lazy::{self, ImageProbe, LoadState};

/// Identifies one of the deck's carousels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CarouselId {
    Main,
    Wholesale,
    Quoting,
}

impl CarouselId {
    pub fn label(&self) -> &'static str {
        match self {
            CarouselId::Main => "projects",
            CarouselId::Wholesale => "wholesale",
            CarouselId::Quoting => "quoting",
        }
    }
}

/// A description card shown as the trailing slide of every category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pub title: &'static str,
    pub body: &'static str,
}

/// One catalog image: a path relative to the photo root plus alt text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRef {
    pub path: &'static str,
    pub alt: &'static str,
}

/// One tabbed image category.
#[derive(Debug, Clone, Copy)]
pub struct Category {
    pub key: &'static str,
    pub label: &'static str,
    pub images: &'static [ImageRef],
    pub description: Card,
}

/// A carousel's full dataset: its categories in tab order.
#[derive(Debug, Clone, Copy)]
pub struct Dataset {
    pub categories: &'static [Category],
}

impl Dataset {
    pub fn category(&self, key: &str) -> Option<&'static Category> {
        self.categories.iter().find(|c| c.key == key)
    }

    /// Whether this dataset shows category tabs at all (the quoting
    /// carousel has a single fixed slide set and no tab row).
    pub fn has_tabs(&self) -> bool {
        self.categories.len() > 1
    }
}

/// One slide in the track.
#[derive(Debug, Clone)]
pub enum Slide {
    Image {
        image: ImageRef,
        state: LoadState,
    },
    Card(Card),
}

impl Slide {
    pub fn is_image(&self) -> bool {
        matches!(self, Slide::Image { .. })
    }
}

pub struct Carousel {
    id: CarouselId,
    dataset: Dataset,
    category: &'static str,
    index: usize,
    slides: Vec<Slide>,
}

impl Carousel {
    /// Build a carousel on its dataset's first category. The first image
    /// is probed eagerly and a lazy pass warms index 0's neighbors.
    pub fn new(id: CarouselId, dataset: Dataset, probe: &dyn ImageProbe) -> Self {
        let category = dataset.categories.first().map(|c| c.key).unwrap_or("");
        let mut carousel = Self {
            id,
            dataset,
            category,
            index: 0,
            slides: Vec::new(),
        };
        carousel.rebuild(probe);
        lazy::load_adjacent(&mut carousel.slides, 0, probe);
        carousel
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Key of the active category (the active tab).
    pub fn category(&self) -> &'static str {
        self.category
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Mutable slide access for the lazy loader's warm-up passes.
    pub fn slides_mut(&mut self) -> &mut [Slide] {
        &mut self.slides
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.index)
    }

    /// Select a category tab. The key comes from the clicked tab's own
    /// payload, never from ambient event state. Unknown keys are a
    /// defensive no-op so a stale tab cannot wipe a live carousel.
    pub fn switch_category(&mut self, key: &str, probe: &dyn ImageProbe) {
        let Some(category) = self.dataset.category(key) else {
            warn!("{}: unknown category {key:?} ignored", self.id.label());
            return;
        };
        self.category = category.key;
        self.index = 0;
        self.rebuild(probe);
        lazy::load_adjacent(&mut self.slides, 0, probe);
    }

    /// Step one slide in either direction with cyclic wraparound, then
    /// warm the new neighborhood.
    pub fn move_by(&mut self, direction: isize, probe: &dyn ImageProbe) {
        let n = self.slides.len();
        if n == 0 {
            return; // track absent on this page
        }
        self.index = (self.index as isize + direction).rem_euclid(n as isize) as usize;
        lazy::load_adjacent(&mut self.slides, self.index, probe);
    }

    /// Absolute jump (indicator dot click). Dot hit rects only produce
    /// in-range indices, but the modulo keeps the index invariant
    /// unconditional anyway.
    pub fn go_to(&mut self, index: usize, probe: &dyn ImageProbe) {
        let n = self.slides.len();
        if n == 0 {
            return;
        }
        self.index = index % n;
        lazy::load_adjacent(&mut self.slides, self.index, probe);
    }

    /// Render contract: horizontal track translation in percent of the
    /// track width (`-index × 100`).
    pub fn track_offset_percent(&self) -> i32 {
        -(self.index as i32) * 100
    }

    /// Render contract: one bool per indicator dot, exactly one true.
    pub fn dot_states(&self) -> Vec<bool> {
        (0..self.slides.len()).map(|i| i == self.index).collect()
    }

    /// Rebuild the slide list for the active category: images in catalog
    /// order, then the description card. First image eager, rest
    /// deferred.
    fn rebuild(&mut self, probe: &dyn ImageProbe) {
        self.slides.clear();
        let Some(category) = self.dataset.category(self.category) else {
            return;
        };
        for image in category.images {
            self.slides.push(Slide::Image {
                image: *image,
                state: LoadState::Deferred,
            });
        }
        self.slides.push(Slide::Card(category.description));
        lazy::load_at(&mut self.slides, 0, probe);
    }
}
