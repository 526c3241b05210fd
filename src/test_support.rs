//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use std::cell::Cell;
use std::path::Path;

use crate::core::carousel::{Card, Category, Dataset, ImageRef, Slide};
use crate::core::catalog;
use crate::core::config::{ResolvedConfig, resolve, VitrineConfig};
use crate::core::lazy::{ImageInfo, ImageProbe, LoadState, ProbeError};
use crate::core::state::App;

/// A probe that "loads" every path with fixed dimensions, no filesystem.
pub struct FixedProbe;

impl ImageProbe for FixedProbe {
    fn probe(&self, _path: &Path) -> Result<ImageInfo, ProbeError> {
        Ok(ImageInfo {
            width: 640,
            height: 480,
        })
    }
}

/// A probe that counts calls, optionally failing every one. Lets tests
/// assert idempotence (no re-probe of loaded slides).
#[derive(Default)]
pub struct CountingProbe {
    calls: Cell<usize>,
    fail: bool,
}

impl CountingProbe {
    pub fn failing() -> Self {
        Self {
            calls: Cell::new(0),
            fail: true,
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl ImageProbe for CountingProbe {
    fn probe(&self, path: &Path) -> Result<ImageInfo, ProbeError> {
        self.calls.set(self.calls.get() + 1);
        if self.fail {
            Err(ProbeError::NotFound(path.to_path_buf()))
        } else {
            Ok(ImageInfo {
                width: 100,
                height: 100,
            })
        }
    }
}

/// A miniature two-category dataset mirroring the catalog's shapes.
pub const FIXTURE_MAIN: Dataset = Dataset {
    categories: &[
        Category {
            key: "fixtures",
            label: "Fixtures",
            images: &[
                ImageRef { path: "fixtures/1.jpg", alt: "Fixture 1" },
                ImageRef { path: "fixtures/2.jpg", alt: "Fixture 2" },
                ImageRef { path: "fixtures/3.jpg", alt: "Fixture 3" },
                ImageRef { path: "fixtures/4.jpg", alt: "Fixture 4" },
            ],
            description: Card {
                title: "Fixtures",
                body: "Workholding fixtures for repeat jobs.",
            },
        },
        Category {
            key: "spares",
            label: "Spares",
            images: &[
                ImageRef { path: "spares/1.jpg", alt: "Spare 1" },
                ImageRef { path: "spares/2.jpg", alt: "Spare 2" },
            ],
            description: Card {
                title: "Spares",
                body: "Replacement parts machined to sample.",
            },
        },
    ],
};

/// `count` deferred image slides, no trailing card.
pub fn fixture_slides(count: usize) -> Vec<Slide> {
    const REFS: &[ImageRef] = &[
        ImageRef { path: "s/1.jpg", alt: "s1" },
        ImageRef { path: "s/2.jpg", alt: "s2" },
        ImageRef { path: "s/3.jpg", alt: "s3" },
        ImageRef { path: "s/4.jpg", alt: "s4" },
        ImageRef { path: "s/5.jpg", alt: "s5" },
        ImageRef { path: "s/6.jpg", alt: "s6" },
    ];
    REFS.iter()
        .take(count)
        .map(|image| Slide::Image {
            image: *image,
            state: LoadState::Deferred,
        })
        .collect()
}

/// Resolved defaults with nothing overridden.
pub fn test_config() -> ResolvedConfig {
    resolve(&VitrineConfig::default(), None, None, None)
}

/// Creates an App over the production deck with a FixedProbe.
pub fn test_app() -> App {
    App::new(catalog::deck(), &test_config(), &FixedProbe)
}
