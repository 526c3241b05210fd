//! # Page Navigator
//!
//! Nine pages (`home`, `page-1` .. `page-8`) in a fixed cyclic order.
//! Each page moves through `Inactive → Active → Exiting → Inactive`;
//! at most one page is Active at a time and at most one is Exiting.
//!
//! Transitions never sleep. `show()` records a deadline and the event
//! loop calls [`PageNavigator::tick`] with an explicit `Instant`, which
//! is also how the tests drive expiry. A new `show()` while a prior exit
//! is still pending simply overwrites it — fire-and-forget, matching the
//! rapid-renavigation caveat in the concurrency model.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::config::TransitionTiming;

/// The fixed page cycle. Wraparound navigation indexes into this.
pub const PAGE_ORDER: [PageId; 9] = [
    PageId::Home,
    PageId::Page(1),
    PageId::Page(2),
    PageId::Page(3),
    PageId::Page(4),
    PageId::Page(5),
    PageId::Page(6),
    PageId::Page(7),
    PageId::Page(8),
];

/// Identifier of one top-level content section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageId {
    Home,
    /// Numbered page, 1..=8.
    Page(u8),
}

impl PageId {
    /// Position in [`PAGE_ORDER`].
    pub fn position(&self) -> usize {
        match self {
            PageId::Home => 0,
            PageId::Page(n) => *n as usize,
        }
    }

    /// The page after this one in the cycle (wraps to home after page-8).
    pub fn next(&self) -> PageId {
        PAGE_ORDER[(self.position() + 1) % PAGE_ORDER.len()]
    }

    /// The page before this one in the cycle.
    pub fn previous(&self) -> PageId {
        PAGE_ORDER[(self.position() + PAGE_ORDER.len() - 1) % PAGE_ORDER.len()]
    }

    /// Parse a CLI/config spelling: `home`, `page-3`, or a bare number.
    pub fn parse(s: &str) -> Option<PageId> {
        if s.eq_ignore_ascii_case("home") {
            return Some(PageId::Home);
        }
        let n: u8 = s.strip_prefix("page-").unwrap_or(s).parse().ok()?;
        (1..=8).contains(&n).then_some(PageId::Page(n))
    }

    pub fn label(&self) -> String {
        match self {
            PageId::Home => "home".to_string(),
            PageId::Page(n) => format!("page-{n}"),
        }
    }
}

/// Which visual side a transition enters/exits on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Layout class derived from the viewport width. Compact layouts get the
/// short transition plus a paint delay before the exit starts; wide
/// layouts start exit and entry together over the longer duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewportClass {
    Compact,
    Wide,
}

impl ViewportClass {
    /// Classify a viewport width in logical pixels against the breakpoint.
    pub fn from_width_px(width_px: u32, breakpoint_px: u32) -> ViewportClass {
        if width_px < breakpoint_px {
            ViewportClass::Compact
        } else {
            ViewportClass::Wide
        }
    }
}

/// An in-flight page exit: the old page slides off while the new one is
/// already Active underneath.
#[derive(Debug, Clone, Copy)]
pub struct Transition {
    pub from: PageId,
    pub direction: Direction,
    /// Before this instant the exiting page still sits in place
    /// (compact layouts wait one paint delay so the new page can lay out).
    pub exit_starts: Instant,
    /// When transient state is cleared and scroll resets.
    pub cleanup_at: Instant,
}

impl Transition {
    /// Exit animation progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Instant) -> f32 {
        if now < self.exit_starts {
            return 0.0;
        }
        let total = self.cleanup_at.saturating_duration_since(self.exit_starts);
        if total.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.exit_starts);
        (elapsed.as_secs_f32() / total.as_secs_f32()).min(1.0)
    }
}

pub struct PageNavigator {
    active: Option<PageId>,
    transition: Option<Transition>,
    timing: TransitionTiming,
    /// Set when a transition settles; the adapter consumes it to reset
    /// the page scroll position to the top.
    scroll_reset: bool,
}

impl PageNavigator {
    pub fn new(timing: TransitionTiming) -> Self {
        Self {
            active: None,
            transition: None,
            timing,
            scroll_reset: false,
        }
    }

    pub fn active(&self) -> Option<PageId> {
        self.active
    }

    pub fn transition(&self) -> Option<&Transition> {
        self.transition.as_ref()
    }

    /// Bring `target` in. With no page active yet this is an instant
    /// activation; otherwise the current page starts exiting toward the
    /// side chosen by `direction`. Same page → no-op.
    pub fn show(
        &mut self,
        target: PageId,
        direction: Direction,
        viewport: ViewportClass,
        now: Instant,
    ) {
        let Some(current) = self.active else {
            debug!("activating {} (no page active)", target.label());
            self.active = Some(target);
            self.scroll_reset = true;
            return;
        };
        if current == target {
            return;
        }

        let (delay, duration) = match viewport {
            ViewportClass::Compact => (
                Duration::from_millis(self.timing.paint_delay_ms),
                Duration::from_millis(self.timing.compact_ms),
            ),
            ViewportClass::Wide => (Duration::ZERO, Duration::from_millis(self.timing.wide_ms)),
        };
        let exit_starts = now + delay;
        debug!(
            "transition {} -> {} ({:?}, {:?})",
            current.label(),
            target.label(),
            direction,
            viewport
        );
        self.active = Some(target);
        self.transition = Some(Transition {
            from: current,
            direction,
            exit_starts,
            cleanup_at: exit_starts + duration,
        });
    }

    /// Navigate to the adjacent page in the cycle.
    pub fn next(&mut self, viewport: ViewportClass, now: Instant) {
        let target = self.active.unwrap_or(PageId::Home).next();
        self.show(target, Direction::Forward, viewport, now);
    }

    pub fn previous(&mut self, viewport: ViewportClass, now: Instant) {
        let target = self.active.unwrap_or(PageId::Home).previous();
        self.show(target, Direction::Backward, viewport, now);
    }

    /// Direct jump (the `data-page` entries). Direction falls out of the
    /// relative cycle positions so the slide matches reading order.
    pub fn jump(&mut self, target: PageId, viewport: ViewportClass, now: Instant) {
        let direction = match self.active {
            Some(current) if target.position() < current.position() => Direction::Backward,
            _ => Direction::Forward,
        };
        self.show(target, direction, viewport, now);
    }

    /// Expire a pending transition. Returns true when cleanup fired this
    /// call (the frame after which the exiting page is gone).
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.transition {
            Some(t) if now >= t.cleanup_at => {
                debug!("transition from {} settled", t.from.label());
                self.transition = None;
                self.scroll_reset = true;
                true
            }
            _ => false,
        }
    }

    /// Consume the pending scroll-to-top request, if any.
    pub fn take_scroll_reset(&mut self) -> bool {
        std::mem::take(&mut self.scroll_reset)
    }
}
