//! # Slide Renderer
//!
//! Draws one carousel slide: an image placeholder box (terminals don't
//! decode photos, so a loaded image shows its alt text and probed
//! dimensions) or the trailing description card.

use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use crate::core::carousel::Slide;
use crate::core::lazy::LoadState;

pub fn render_slide(frame: &mut Frame, area: Rect, slide: &Slide) {
    match slide {
        Slide::Image { image, state } => {
            let block = Block::bordered().title(image.alt);
            let lines: Vec<Line> = match state {
                LoadState::Loaded(info) => vec![
                    Line::from(Span::styled(
                        format!("{} × {} px", info.width, info.height),
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        image.path,
                        Style::default().fg(Color::DarkGray),
                    )),
                ],
                // Path withheld until the lazy loader promotes the slide.
                LoadState::Deferred => vec![Line::from(Span::styled(
                    "loading…",
                    Style::default().fg(Color::DarkGray),
                ))],
                LoadState::Missing => vec![Line::from(Span::styled(
                    "image unavailable",
                    Style::default().fg(Color::Red),
                ))],
            };
            let inner_height = area.height.saturating_sub(2);
            let pad = inner_height.saturating_sub(lines.len() as u16) / 2;
            let mut padded = vec![Line::default(); pad as usize];
            padded.extend(lines);
            frame.render_widget(
                Paragraph::new(padded)
                    .block(block)
                    .alignment(Alignment::Center),
                area,
            );
        }
        Slide::Card(card) => {
            let block = Block::bordered()
                .title(card.title)
                .title_style(Style::default().add_modifier(Modifier::BOLD));
            let width = area.width.saturating_sub(4).max(1) as usize;
            let body = textwrap::fill(card.body, width);
            frame.render_widget(
                Paragraph::new(body)
                    .block(block)
                    .alignment(Alignment::Center),
                area,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::carousel::{Card, ImageRef};
    use crate::core::lazy::ImageInfo;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn draw(slide: &Slide) -> String {
        let backend = TestBackend::new(40, 8);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| render_slide(f, f.area(), slide)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn test_loaded_image_shows_dimensions() {
        let text = draw(&Slide::Image {
            image: ImageRef {
                path: "parts/1.jpg",
                alt: "Part one",
            },
            state: LoadState::Loaded(ImageInfo {
                width: 640,
                height: 480,
            }),
        });
        assert!(text.contains("Part one"));
        assert!(text.contains("640 × 480 px"));
    }

    #[test]
    fn test_deferred_image_withholds_path() {
        let text = draw(&Slide::Image {
            image: ImageRef {
                path: "parts/secret.jpg",
                alt: "Pending",
            },
            state: LoadState::Deferred,
        });
        assert!(text.contains("loading"));
        assert!(!text.contains("secret"));
    }

    #[test]
    fn test_card_renders_title_and_body() {
        let text = draw(&Slide::Card(Card {
            title: "About",
            body: "Short body text.",
        }));
        assert!(text.contains("About"));
        assert!(text.contains("Short body text."));
    }
}
