//! # TUI Components
//!
//! All UI components for the terminal interface.
//!
//! Two patterns, as elsewhere in the codebase:
//!
//! - **Stateless, props-based**: `TitleBar` and the slide renderer take
//!   everything as data and draw it.
//! - **Projection with hit recording**: `CarouselView` and `PageView`
//!   render core state and record mouse-target rects (`CarouselHits`,
//!   `PageHits`) during the pass, which the event loop consults to
//!   dispatch clicks and to suppress page swipes inside carousel areas.
//!
//! Each component file co-locates its props, rendering, hit types, and
//! tests.

pub mod carousel;
pub mod page_view;
pub mod slide;
pub mod title_bar;

pub use carousel::{CarouselHits, CarouselView};
pub use page_view::{PageHits, PageView};
pub use title_bar::TitleBar;
