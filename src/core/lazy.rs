//! # Lazy Image Loader
//!
//! Image slides start `Deferred` — the renderer never sees their path —
//! and are promoted to `Loaded` only when their slide becomes active or
//! sits one swipe away. This bounds disk/decode cost for large photo
//! sets while guaranteeing the visible slide and both cyclic neighbors
//! are always ready.
//!
//! Probing goes through the [`ImageProbe`] seam so the core never touches
//! the filesystem directly: the real probe reads image dimensions from
//! the file header, tests substitute a fixed one.

use std::fmt;
use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::core::carousel::{Carousel, Slide};

/// Basic metadata for a probed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageInfo {
    pub width: u32,
    pub height: u32,
}

/// Load status of one image slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// Path withheld from the renderer; nothing read yet.
    Deferred,
    Loaded(ImageInfo),
    /// Probe failed; rendered as a placeholder, never retried.
    Missing,
}

impl LoadState {
    pub fn is_loaded(&self) -> bool {
        matches!(self, LoadState::Loaded(_))
    }

    /// Whether a lazy pass still has work to do for this slide.
    pub fn is_deferred(&self) -> bool {
        matches!(self, LoadState::Deferred)
    }
}

#[derive(Debug)]
pub enum ProbeError {
    NotFound(PathBuf),
    Unreadable(PathBuf, String),
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProbeError::NotFound(p) => write!(f, "image not found: {}", p.display()),
            ProbeError::Unreadable(p, e) => write!(f, "unreadable image {}: {e}", p.display()),
        }
    }
}

impl std::error::Error for ProbeError {}

/// Source of image metadata. Implementations must be cheap enough to
/// call from the event loop.
pub trait ImageProbe {
    fn probe(&self, path: &Path) -> Result<ImageInfo, ProbeError>;
}

/// Filesystem probe: resolves catalog paths under the photo root and
/// reads dimensions from the header without decoding pixel data.
pub struct FsProbe {
    root: PathBuf,
}

impl FsProbe {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }
}

impl ImageProbe for FsProbe {
    fn probe(&self, path: &Path) -> Result<ImageInfo, ProbeError> {
        let full = self.root.join(path);
        if !full.exists() {
            return Err(ProbeError::NotFound(full));
        }
        let (width, height) = image::image_dimensions(&full)
            .map_err(|e| ProbeError::Unreadable(full, e.to_string()))?;
        Ok(ImageInfo { width, height })
    }
}

/// Promote the image slide at `index`, if still deferred. Idempotent:
/// already-loaded and missing slides are left untouched, as are cards.
pub fn load_at(slides: &mut [Slide], index: usize, probe: &dyn ImageProbe) {
    let Some(Slide::Image { image, state }) = slides.get_mut(index) else {
        return;
    };
    if !state.is_deferred() {
        return;
    }
    match probe.probe(Path::new(image.path)) {
        Ok(info) => {
            debug!("loaded {} ({}x{})", image.path, info.width, info.height);
            *state = LoadState::Loaded(info);
        }
        Err(e) => {
            warn!("{e}");
            *state = LoadState::Missing;
        }
    }
}

/// Warm the slide at `center` plus both cyclic neighbors — everything
/// reachable with one swipe.
pub fn load_adjacent(slides: &mut [Slide], center: usize, probe: &dyn ImageProbe) {
    let n = slides.len();
    if n == 0 {
        return;
    }
    load_at(slides, center % n, probe);
    load_at(slides, (center + 1) % n, probe);
    load_at(slides, (center + n - 1) % n, probe);
}

/// Startup warm-up, independent of adjacency: force the first two images
/// of every carousel (in deck order) to load so the opening pages render
/// without a stall.
pub fn initial_preload(carousels: &mut [Carousel], probe: &dyn ImageProbe) {
    for carousel in carousels {
        let slides = carousel.slides_mut();
        let image_indices: Vec<usize> = slides
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_image())
            .map(|(i, _)| i)
            .take(2)
            .collect();
        for index in image_indices {
            load_at(slides, index, probe);
        }
    }
}
