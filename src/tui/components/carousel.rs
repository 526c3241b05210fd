//! # Carousel View
//!
//! Projects one carousel engine onto the terminal: category tabs (when
//! the dataset has more than one), the track showing the active slide,
//! and the indicator dot row. Tab and dot cells are recorded as hit
//! rects during rendering so the event loop can dispatch mouse clicks
//! back to `switch_category` / `go_to` with the element's own payload.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

use crate::core::carousel::Carousel;
use crate::tui::components::slide::render_slide;

/// Mouse targets recorded by the last render pass.
#[derive(Debug, Default)]
pub struct CarouselHits {
    /// The whole carousel container (gesture suppression boundary).
    pub area: Option<Rect>,
    /// One rect per category tab, carrying the tab's own key.
    pub tabs: Vec<(Rect, &'static str)>,
    /// One rect per indicator dot, carrying the slide index.
    pub dots: Vec<(Rect, usize)>,
}

impl CarouselHits {
    pub fn clear(&mut self) {
        self.area = None;
        self.tabs.clear();
        self.dots.clear();
    }

    pub fn contains(&self, col: u16, row: u16) -> bool {
        self.area
            .is_some_and(|a| a.contains(ratatui::layout::Position { x: col, y: row }))
    }

    pub fn tab_at(&self, col: u16, row: u16) -> Option<&'static str> {
        let pos = ratatui::layout::Position { x: col, y: row };
        self.tabs
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|(_, key)| *key)
    }

    pub fn dot_at(&self, col: u16, row: u16) -> Option<usize> {
        let pos = ratatui::layout::Position { x: col, y: row };
        self.dots
            .iter()
            .find(|(r, _)| r.contains(pos))
            .map(|(_, index)| *index)
    }
}

pub struct CarouselView<'a> {
    pub carousel: &'a Carousel,
}

impl<'a> CarouselView<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect, hits: &mut CarouselHits) {
        hits.area = Some(area);

        let has_tabs = self.carousel.dataset().has_tabs();
        let tab_height = if has_tabs { 1 } else { 0 };
        let [tab_area, track_area, dot_area] = Layout::vertical([
            Constraint::Length(tab_height),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .areas(area);

        if has_tabs {
            self.render_tabs(frame, tab_area, hits);
        }
        // The render contract drives slide selection: the visible slide
        // is the one the track translation puts in the frame.
        let visible = (-self.carousel.track_offset_percent() / 100) as usize;
        if let Some(slide) = self.carousel.slides().get(visible) {
            render_slide(frame, track_area, slide);
        }
        self.render_dots(frame, dot_area, hits);
    }

    fn render_tabs(&self, frame: &mut Frame, area: Rect, hits: &mut CarouselHits) {
        let mut spans = Vec::new();
        let mut x = area.x;
        for category in self.carousel.dataset().categories {
            let label = format!(" {} ", category.label);
            let width = label.width() as u16;
            let style = if category.key == self.carousel.category() {
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Yellow)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            hits.tabs.push((
                Rect {
                    x,
                    y: area.y,
                    width,
                    height: 1,
                },
                category.key,
            ));
            spans.push(Span::styled(label, style));
            spans.push(Span::raw(" "));
            x += width + 1;
        }
        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }

    fn render_dots(&self, frame: &mut Frame, area: Rect, hits: &mut CarouselHits) {
        let dots = self.carousel.dot_states();
        if dots.is_empty() {
            return;
        }
        // Dots are one cell wide with one cell of spacing, centered.
        let total = (dots.len() * 2 - 1) as u16;
        let start = area.x + area.width.saturating_sub(total) / 2;
        let mut spans = Vec::new();
        for (index, active) in dots.iter().enumerate() {
            if index > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if *active {
                Style::default().fg(Color::Yellow)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            spans.push(Span::styled(if *active { "●" } else { "○" }, style));
            hits.dots.push((
                Rect {
                    x: start + index as u16 * 2,
                    y: area.y,
                    width: 1,
                    height: 1,
                },
                index,
            ));
        }
        let dot_area = Rect {
            x: start,
            y: area.y,
            width: total.min(area.width),
            height: 1,
        };
        frame.render_widget(Paragraph::new(Line::from(spans)), dot_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel::CarouselId;
    use crate::test_support::{FIXTURE_MAIN, FixedProbe};
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(carousel: &Carousel) -> (String, CarouselHits) {
        let backend = TestBackend::new(60, 12);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = CarouselHits::default();
        terminal
            .draw(|f| CarouselView { carousel }.render(f, f.area(), &mut hits))
            .unwrap();
        let text = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        (text, hits)
    }

    #[test]
    fn test_renders_tabs_and_one_dot_per_slide() {
        let carousel = Carousel::new(CarouselId::Main, FIXTURE_MAIN, &FixedProbe);
        let (text, hits) = draw(&carousel);
        assert!(text.contains("Fixtures"));
        assert!(text.contains("Spares"));
        assert_eq!(hits.tabs.len(), 2);
        assert_eq!(hits.dots.len(), carousel.slide_count());
        assert_eq!(text.matches('●').count(), 1);
    }

    #[test]
    fn test_hit_lookup_round_trips() {
        let carousel = Carousel::new(CarouselId::Main, FIXTURE_MAIN, &FixedProbe);
        let (_, hits) = draw(&carousel);
        let (tab_rect, key) = hits.tabs[1];
        assert_eq!(hits.tab_at(tab_rect.x, tab_rect.y), Some(key));
        let (dot_rect, index) = hits.dots[3];
        assert_eq!(hits.dot_at(dot_rect.x, dot_rect.y), Some(index));
        assert!(hits.contains(0, 0));
    }

    #[test]
    fn test_visible_slide_follows_track_offset() {
        let mut carousel = Carousel::new(CarouselId::Main, FIXTURE_MAIN, &FixedProbe);
        carousel.go_to(4, &FixedProbe); // the description card
        let (text, _) = draw(&carousel);
        assert!(text.contains("Workholding fixtures"));
    }
}
