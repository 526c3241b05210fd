//! # TitleBar Component
//!
//! Top status bar: deck title, active page position, transient status,
//! and the next-page hint (the keyboard twin of the page curl).
//!
//! Purely presentational — it receives all data as props and holds no
//! internal state, so the conditional formatting is trivially testable.

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::tui::component::Component;

/// Top status bar component.
///
/// # Props
///
/// - `deck_title`: The deck's display name
/// - `page_label`: Active page id and cycle position (e.g. "page-3 4/9")
/// - `status_message`: Transient status (e.g. "category: Wind Tunnel Model")
/// - `next_hint`: Label of the next page in the cycle
pub struct TitleBar {
    pub deck_title: &'static str,
    pub page_label: String,
    pub status_message: String,
    pub next_hint: String,
}

impl TitleBar {
    fn text(&self) -> String {
        if self.status_message.is_empty() {
            format!(
                "{} — {} | next: {}",
                self.deck_title, self.page_label, self.next_hint
            )
        } else {
            format!(
                "{} — {} | {} | next: {}",
                self.deck_title, self.page_label, self.status_message, self.next_hint
            )
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(
            Span::styled(self.text(), Style::default().fg(Color::Cyan)),
            area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_is_optional() {
        let mut bar = TitleBar {
            deck_title: "Aperture Machining",
            page_label: "home 1/9".to_string(),
            status_message: String::new(),
            next_hint: "page-1".to_string(),
        };
        assert_eq!(bar.text(), "Aperture Machining — home 1/9 | next: page-1");
        bar.status_message = "category: Spares".to_string();
        assert_eq!(
            bar.text(),
            "Aperture Machining — home 1/9 | category: Spares | next: page-1"
        );
    }
}
