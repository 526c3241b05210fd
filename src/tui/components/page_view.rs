//! # Page View
//!
//! One top-level content section: title, body copy, the hosted carousel
//! (if any), and the page-curl affordance in the bottom-right corner
//! that advances to the next page on click.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

use crate::core::carousel::Carousel;
use crate::core::catalog::PageContent;
use crate::tui::components::carousel::{CarouselHits, CarouselView};

const CURL_HINT: &str = " next ▸ ";

/// Mouse targets recorded by the last page render.
#[derive(Debug, Default)]
pub struct PageHits {
    pub carousel: CarouselHits,
    /// The page-curl click target.
    pub curl: Option<Rect>,
}

impl PageHits {
    pub fn clear(&mut self) {
        self.carousel.clear();
        self.curl = None;
    }

    pub fn curl_at(&self, col: u16, row: u16) -> bool {
        self.curl
            .is_some_and(|r| r.contains(ratatui::layout::Position { x: col, y: row }))
    }
}

pub struct PageView<'a> {
    pub page: &'static PageContent,
    /// Engine hosted on this page, when the page has a carousel.
    pub carousel: Option<&'a Carousel>,
    /// Vertical body scroll (reset to top after every transition).
    pub scroll: u16,
}

impl<'a> PageView<'a> {
    /// Render into `area`. `hits` is only recorded for the interactive
    /// (active) page; the exiting page of a transition passes `None`.
    pub fn render(&self, frame: &mut Frame, area: Rect, mut hits: Option<&mut PageHits>) {
        // Carousel pages keep the copy short and give the rest of the
        // page to the track; plain pages are all copy.
        let (body_height, host_height) = if self.carousel.is_some() {
            (Constraint::Length(4), Constraint::Min(0))
        } else {
            (Constraint::Min(1), Constraint::Length(0))
        };
        let [title_area, body_area, host_area] =
            Layout::vertical([Constraint::Length(1), body_height, host_height]).areas(area);

        frame.render_widget(
            Span::styled(
                self.page.title,
                Style::default().add_modifier(Modifier::BOLD),
            ),
            title_area,
        );

        let width = body_area.width.saturating_sub(2).max(1) as usize;
        frame.render_widget(
            Paragraph::new(textwrap::fill(self.page.body, width)).scroll((self.scroll, 0)),
            body_area,
        );

        if let Some(carousel) = self.carousel {
            let view = CarouselView { carousel };
            match hits.as_deref_mut() {
                Some(h) => view.render(frame, host_area, &mut h.carousel),
                None => {
                    let mut scratch = CarouselHits::default();
                    view.render(frame, host_area, &mut scratch);
                }
            }
        }

        // Page curl: bottom-right corner, present on every page.
        let curl_width = CURL_HINT.chars().count() as u16;
        if area.width > curl_width && area.height > 0 {
            let curl_area = Rect {
                x: area.x + area.width - curl_width,
                y: area.y + area.height - 1,
                width: curl_width,
                height: 1,
            };
            frame.render_widget(
                Span::styled(CURL_HINT, Style::default().fg(Color::Cyan)),
                curl_area,
            );
            if let Some(h) = hits {
                h.curl = Some(curl_area);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::catalog;
    use crate::core::page::PageId;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_plain_page_renders_copy_and_curl() {
        let deck = catalog::deck();
        let page = deck.page(PageId::Page(4)).expect("page-4");
        let backend = TestBackend::new(60, 16);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut hits = PageHits::default();
        terminal
            .draw(|f| {
                PageView {
                    page,
                    carousel: None,
                    scroll: 0,
                }
                .render(f, f.area(), Some(&mut hits))
            })
            .unwrap();

        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Capabilities"));
        assert!(text.contains("next ▸"));

        let curl = hits.curl.expect("curl rect recorded");
        assert!(hits.curl_at(curl.x, curl.y));
        assert!(!hits.curl_at(0, 0));
        assert!(hits.carousel.area.is_none());
    }
}
