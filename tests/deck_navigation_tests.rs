//! End-to-end walk of the deck through the public library API: page
//! cycle, category switching, the lazy-load window, and gesture
//! classification, all against the production catalog.

use std::path::Path;
use std::time::{Duration, Instant};

use vitrine::core::carousel::{Carousel, Slide};
use vitrine::core::catalog;
use vitrine::core::config::{VitrineConfig, resolve};
use vitrine::core::gesture;
use vitrine::core::lazy::{FsProbe, ImageInfo, ImageProbe, ProbeError};
use vitrine::core::page::{Direction, PAGE_ORDER, PageId, PageNavigator, ViewportClass};
use vitrine::core::state::App;

/// Loads every path with fixed dimensions; the catalog's photo files are
/// not part of the test environment.
struct StubProbe;

impl ImageProbe for StubProbe {
    fn probe(&self, _path: &Path) -> Result<ImageInfo, ProbeError> {
        Ok(ImageInfo {
            width: 1600,
            height: 1200,
        })
    }
}

fn app() -> App {
    App::new(
        catalog::deck(),
        &resolve(&VitrineConfig::default(), None, None, None),
        &StubProbe,
    )
}

#[test]
fn full_page_cycle_returns_home_and_inverts() {
    let mut nav = PageNavigator::new(
        resolve(&VitrineConfig::default(), None, None, None).timing,
    );
    let mut now = Instant::now();
    nav.show(PageId::Home, Direction::Forward, ViewportClass::Wide, now);

    for expected in PAGE_ORDER.iter().cycle().skip(1).take(PAGE_ORDER.len()) {
        now += Duration::from_secs(1);
        nav.next(ViewportClass::Wide, now);
        assert_eq!(nav.active(), Some(*expected));
        nav.tick(now + Duration::from_secs(1));
    }
    assert_eq!(nav.active(), Some(PageId::Home));

    // previous() is the exact inverse at every position.
    for expected in PAGE_ORDER.iter().rev().cycle().take(PAGE_ORDER.len()) {
        now += Duration::from_secs(1);
        nav.previous(ViewportClass::Wide, now);
        assert_eq!(nav.active(), Some(*expected));
        nav.tick(now + Duration::from_secs(1));
    }
}

#[test]
fn every_category_of_every_carousel_keeps_the_count_invariant() {
    let mut app = app();
    for id in app.deck.carousel_ids() {
        let carousel = app.carousel_mut(id).expect("carousel");
        let categories: Vec<_> = carousel.dataset().categories.iter().collect();
        for category in categories {
            carousel.switch_category(category.key, &StubProbe);
            assert_eq!(
                carousel.slide_count(),
                category.images.len() + 1,
                "{id:?}/{}",
                category.key
            );
            assert_eq!(carousel.index(), 0);
            let dots = carousel.dot_states();
            assert_eq!(dots.iter().filter(|d| **d).count(), 1);
            assert!(dots[0]);
        }
    }
}

#[test]
fn walking_the_whole_track_loads_every_image_exactly_in_window_order() {
    let deck = catalog::deck();
    let mut carousel = Carousel::new(
        deck.carousel_ids()[0],
        catalog::dataset(deck.carousel_ids()[0]),
        &StubProbe,
    );
    let n = carousel.slide_count();
    for _ in 0..n {
        carousel.move_by(1, &StubProbe);
        assert!(carousel.index() < n);
        // The visible slide and both cyclic neighbors are always ready.
        let i = carousel.index();
        for j in [i, (i + 1) % n, (i + n - 1) % n] {
            if let Slide::Image { state, .. } = &carousel.slides()[j] {
                assert!(state.is_loaded(), "slide {j} around center {i}");
            }
        }
    }
    assert_eq!(carousel.index(), 0);
    assert!(
        carousel
            .slides()
            .iter()
            .all(|s| !matches!(s, Slide::Image { state, .. } if !state.is_loaded()))
    );
}

#[test]
fn gesture_thresholds_classify_as_documented() {
    // Carousel threshold 50: a -60/5 drag advances, 40/5 does nothing.
    assert_eq!(gesture::classify(-60, 5, 50), Some(gesture::Swipe::Next));
    assert_eq!(gesture::classify(40, 5, 50), None);
    // Page threshold 75: -80/0 turns the page.
    assert_eq!(gesture::classify(-80, 0, 75), Some(gesture::Swipe::Next));
    assert_eq!(gesture::classify(-80, -90, 75), None);
}

#[test]
fn fs_probe_against_real_files() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::create_dir_all(dir.path().join("parts")).expect("mkdir");
    image::RgbImage::new(32, 24)
        .save(dir.path().join("parts/real.jpg"))
        .expect("write jpeg");

    let probe = FsProbe::new(dir.path().to_path_buf());
    assert_eq!(
        probe.probe(Path::new("parts/real.jpg")).expect("probe"),
        ImageInfo {
            width: 32,
            height: 24
        }
    );
    assert!(probe.probe(Path::new("parts/none.jpg")).is_err());
}
