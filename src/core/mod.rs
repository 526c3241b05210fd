//! # Core Deck Logic
//!
//! This module contains Vitrine's presentation-state logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • pages & transitions  │
//!                    │  • carousel indices     │
//!                    │  • lazy image states    │
//!                    │  • swipe classification │
//!                    │                         │
//!                    │  No terminal I/O here.  │
//!                    └───────────┬─────────────┘
//!                                │
//!                                ▼
//!                         ┌────────────┐
//!                         │    TUI     │
//!                         │  Adapter   │
//!                         │ (ratatui)  │
//!                         └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — the whole deck's state in one place
//! - [`page`]: Page navigator — cyclic order and enter/exit transitions
//! - [`carousel`]: Per-carousel slide index, category, and render contract
//! - [`lazy`]: Deferred image probing around the active slide
//! - [`gesture`]: Press/release swipe classification
//! - [`catalog`]: The compiled-in deck and image datasets
//! - [`config`]: Timing, gesture, and asset configuration

pub mod carousel;
pub mod catalog;
pub mod config;
pub mod gesture;
pub mod lazy;
pub mod page;
pub mod state;
