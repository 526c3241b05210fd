//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the deck,
//! and translates keyboard/mouse events into core navigator and
//! carousel operations.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Animating** (a page transition in flight): draws every ~80ms so
//!   the exit slide reads smoothly.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Gesture routing
//!
//! Mouse press/release stand in for touch start/end. A press inside the
//! carousel container feeds the carousel detector only — the page-level
//! detector never sees gestures that start there, so one drag is never
//! interpreted twice. Page swipes are additionally disabled entirely on
//! wide viewports; there the page curl and keys do the turning.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info};
use std::io::stdout;
use std::time::Instant;

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;

use crate::core::catalog;
use crate::core::config::ResolvedConfig;
use crate::core::gesture::{Swipe, SwipeDetector};
use crate::core::lazy::{FsProbe, ImageProbe};
use crate::core::page::{Direction, PageId, ViewportClass};
use crate::core::state::App;
use crate::tui::event::{TuiEvent, cell_to_px, poll_event_timeout};

pub use crate::tui::components::PageHits;

/// TUI-specific presentation state (not part of core deck logic)
pub struct TuiState {
    /// Mouse-target rects from the last render pass.
    pub hits: PageHits,
    /// Cell where the current press started (None between gestures).
    press_cell: Option<(u16, u16)>,
    carousel_swipe: SwipeDetector,
    page_swipe: SwipeDetector,
    /// Vertical body scroll on the active page.
    pub page_scroll: u16,
}

impl TuiState {
    pub fn new(config: &ResolvedConfig) -> Self {
        Self {
            hits: PageHits::default(),
            press_cell: None,
            carousel_swipe: SwipeDetector::new(config.gesture.carousel_px),
            page_swipe: SwipeDetector::new(config.gesture.page_px),
            page_scroll: 0,
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let probe = FsProbe::new(config.photo_root.clone());
    let mut app = App::new(catalog::deck(), &config, &probe);
    let mut tui = TuiState::new(&config);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    // First activation: instant, no transition to animate.
    sync_viewport(&mut app, terminal.size()?.width, &config);
    app.navigator
        .show(config.start_page, Direction::Forward, app.viewport, Instant::now());

    let mut needs_redraw = true; // Force first frame
    loop {
        let now = Instant::now();

        if app.navigator.tick(now) {
            needs_redraw = true;
        }
        if app.navigator.take_scroll_reset() {
            tui.page_scroll = 0;
            needs_redraw = true;
        }

        let animating = app.navigator.transition().is_some();
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, now))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: short while a transition animates, long when idle
        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        if let Some(event) = poll_event_timeout(timeout) {
            needs_redraw = true;
            if matches!(event, TuiEvent::Resize) {
                sync_viewport(&mut app, terminal.size()?.width, &config);
                continue;
            }
            if handle_event(&mut app, &mut tui, &probe, event, Instant::now()) {
                break;
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Derive the layout class from the terminal width (unless the CLI
/// forced one).
fn sync_viewport(app: &mut App, columns: u16, config: &ResolvedConfig) {
    app.viewport = config.viewport_override.unwrap_or_else(|| {
        ViewportClass::from_width_px(
            columns as u32 * event::CELL_WIDTH_PX,
            app.gesture.wide_breakpoint_px,
        )
    });
}

/// Apply one input event. Returns true on quit.
fn handle_event(
    app: &mut App,
    tui: &mut TuiState,
    probe: &dyn ImageProbe,
    event: TuiEvent,
    now: Instant,
) -> bool {
    match event {
        TuiEvent::Quit => return true,
        TuiEvent::NextPage => app.navigator.next(app.viewport, now),
        TuiEvent::PrevPage => app.navigator.previous(app.viewport, now),
        TuiEvent::ShowHome => app.navigator.jump(PageId::Home, app.viewport, now),
        TuiEvent::ShowPage(n) => app.navigator.jump(PageId::Page(n), app.viewport, now),
        TuiEvent::NextSlide => move_visible_carousel(app, probe, 1),
        TuiEvent::PrevSlide => move_visible_carousel(app, probe, -1),
        TuiEvent::CycleTab => cycle_category(app, probe),
        TuiEvent::ScrollUp => tui.page_scroll = tui.page_scroll.saturating_sub(1),
        TuiEvent::ScrollDown => tui.page_scroll = tui.page_scroll.saturating_add(1),
        TuiEvent::MouseDown(col, row) => {
            tui.press_cell = Some((col, row));
            let (x, y) = cell_to_px(col, row);
            tui.carousel_swipe.press(x, y);
            tui.page_swipe.press(x, y);
        }
        TuiEvent::MouseUp(col, row) => handle_release(app, tui, probe, col, row, now),
        TuiEvent::Resize => {}
    }
    false
}

/// Complete a press/release pair: a same-cell release is a click on
/// whatever the hit map says is under it; anything longer is fed to
/// exactly one swipe detector.
fn handle_release(
    app: &mut App,
    tui: &mut TuiState,
    probe: &dyn ImageProbe,
    col: u16,
    row: u16,
    now: Instant,
) {
    let Some((press_col, press_row)) = tui.press_cell.take() else {
        return;
    };

    if (press_col, press_row) == (col, row) {
        tui.carousel_swipe.cancel();
        tui.page_swipe.cancel();
        handle_click(app, tui, probe, col, row, now);
        return;
    }

    let (x, y) = cell_to_px(col, row);
    if tui.hits.carousel.contains(press_col, press_row) {
        // Carousel gestures never double as page turns.
        tui.page_swipe.cancel();
        if let Some(swipe) = tui.carousel_swipe.release(x, y) {
            move_visible_carousel(app, probe, swipe.step());
        }
        return;
    }

    tui.carousel_swipe.cancel();
    if app.viewport == ViewportClass::Compact {
        match tui.page_swipe.release(x, y) {
            Some(Swipe::Next) => app.navigator.next(app.viewport, now),
            Some(Swipe::Previous) => app.navigator.previous(app.viewport, now),
            None => {}
        }
    } else {
        // No page swiping on wide viewports.
        tui.page_swipe.cancel();
    }
}

fn handle_click(
    app: &mut App,
    tui: &mut TuiState,
    probe: &dyn ImageProbe,
    col: u16,
    row: u16,
    now: Instant,
) {
    if let Some(key) = tui.hits.carousel.tab_at(col, row) {
        // The clicked tab's own key, never ambient state.
        if let Some(carousel) = app.visible_carousel_mut() {
            carousel.switch_category(key, probe);
            let label = carousel
                .dataset()
                .category(key)
                .map(|c| c.label)
                .unwrap_or(key);
            app.status_message = format!("category: {label}");
        }
        return;
    }
    if let Some(index) = tui.hits.carousel.dot_at(col, row) {
        if let Some(carousel) = app.visible_carousel_mut() {
            carousel.go_to(index, probe);
        }
        return;
    }
    if tui.hits.curl_at(col, row) {
        debug!("page curl clicked");
        app.navigator.next(app.viewport, now);
    }
}

fn move_visible_carousel(app: &mut App, probe: &dyn ImageProbe, step: isize) {
    if let Some(carousel) = app.visible_carousel_mut() {
        carousel.move_by(step, probe);
    }
}

/// Tab key: advance the visible carousel to its next category in tab
/// order, wrapping.
fn cycle_category(app: &mut App, probe: &dyn ImageProbe) {
    let Some(carousel) = app.visible_carousel_mut() else {
        return;
    };
    let categories = carousel.dataset().categories;
    if categories.len() < 2 {
        return;
    }
    let current = categories
        .iter()
        .position(|c| c.key == carousel.category())
        .unwrap_or(0);
    let key = categories[(current + 1) % categories.len()].key;
    carousel.switch_category(key, probe);
    let label = carousel
        .dataset()
        .category(key)
        .map(|c| c.label)
        .unwrap_or(key);
    app.status_message = format!("category: {label}");
}
