//! Frame composition: title bar, page area, key-hint footer, and the
//! page transition overlay. The exiting page is drawn over the freshly
//! activated one, clipped to a shrinking rect so it reads as sliding off
//! toward the side the gesture direction picked.

use std::time::Instant;

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Clear;

use crate::core::page::{Direction, Transition};
use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{PageView, TitleBar};

const KEY_HINTS: &str = "q quit · n/p page · 1-8/h jump · ←/→ slide · Tab category · drag to swipe";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, now: Instant) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, page_area, footer_area] = layout.areas(frame.area());

    tui.hits.clear();

    let Some(page) = app.active_page() else {
        return; // nothing rendered before the first show()
    };

    PageView {
        page,
        carousel: page.carousel.and_then(|id| app.carousel(id)),
        scroll: tui.page_scroll,
    }
    .render(frame, page_area, Some(&mut tui.hits));

    // Exiting page slides off above the active one.
    if let Some(t) = app.navigator.transition() {
        draw_exiting_page(frame, page_area, app, t, now);
    }

    let mut title_bar = TitleBar {
        deck_title: app.deck.title,
        page_label: format!(
            "{} {}/{}",
            page.id.label(),
            page.id.position() + 1,
            crate::core::page::PAGE_ORDER.len()
        ),
        status_message: app.status_message.clone(),
        next_hint: page.id.next().label(),
    };
    title_bar.render(frame, title_area);

    frame.render_widget(
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        footer_area,
    );
}

/// Clip rect for the exiting page at transition progress `p`: the page
/// keeps its trailing portion visible while the leading edge moves off
/// the chosen side.
fn exit_rect(area: Rect, direction: Direction, progress: f32) -> Option<Rect> {
    let offset = (progress * area.width as f32) as u16;
    let width = area.width.saturating_sub(offset);
    if width == 0 {
        return None;
    }
    let x = match direction {
        // Forward: the old page exits stage left.
        Direction::Forward => area.x,
        // Backward: it exits stage right.
        Direction::Backward => area.x + offset,
    };
    Some(Rect {
        x,
        y: area.y,
        width,
        height: area.height,
    })
}

fn draw_exiting_page(frame: &mut Frame, area: Rect, app: &App, t: &Transition, now: Instant) {
    let Some(page) = app.page(t.from) else {
        return;
    };
    let Some(rect) = exit_rect(area, t.direction, t.progress(now)) else {
        return;
    };
    frame.render_widget(Clear, rect);
    PageView {
        page,
        carousel: page.carousel.and_then(|id| app.carousel(id)),
        scroll: 0,
    }
    .render(frame, rect, None);
}
