//! Terminal input translation.
//!
//! Touch gestures have no terminal equivalent, so mouse press/release
//! stand in for touch start/end. Cell coordinates are mapped to logical
//! pixels at a fixed cell size so the configured swipe thresholds and
//! the viewport breakpoint keep their stated pixel values: at 8 px per
//! column the 768 px breakpoint lands on a 96-column terminal.

use crossterm::event::{self, Event, KeyCode, KeyModifiers, MouseButton, MouseEventKind};

/// Assumed width of one terminal cell in logical pixels.
pub const CELL_WIDTH_PX: u32 = 8;
/// Assumed height of one terminal cell in logical pixels.
pub const CELL_HEIGHT_PX: u32 = 16;

/// TUI-specific input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TuiEvent {
    Quit,
    NextPage,
    PrevPage,
    /// Direct jump, the `data-page` entries (digit keys).
    ShowPage(u8),
    ShowHome,
    NextSlide,
    PrevSlide,
    /// Cycle the visible carousel's category tabs.
    CycleTab,
    ScrollUp,
    ScrollDown,
    /// Left button pressed at (col, row) — touch start.
    MouseDown(u16, u16),
    /// Left button released at (col, row) — touch end.
    MouseUp(u16, u16),
    Resize,
}

/// Convert a cell position to logical pixel coordinates.
pub fn cell_to_px(col: u16, row: u16) -> (i32, i32) {
    (
        col as i32 * CELL_WIDTH_PX as i32,
        row as i32 * CELL_HEIGHT_PX as i32,
    )
}

/// Poll for an event with the given timeout.
pub fn poll_event_timeout(timeout: std::time::Duration) -> Option<TuiEvent> {
    if event::poll(timeout).unwrap() {
        match event::read().unwrap() {
            Event::Key(key_event) => {
                log::debug!(
                    "Key event: {:?} with modifiers {:?}",
                    key_event.code,
                    key_event.modifiers
                );
                match (key_event.modifiers, key_event.code) {
                    (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(TuiEvent::Quit),
                    (_, KeyCode::Char('n')) | (_, KeyCode::PageDown) => Some(TuiEvent::NextPage),
                    (_, KeyCode::Char('p')) | (_, KeyCode::PageUp) => Some(TuiEvent::PrevPage),
                    (_, KeyCode::Char('h')) | (_, KeyCode::Char('0')) => Some(TuiEvent::ShowHome),
                    (_, KeyCode::Char(c @ '1'..='8')) => {
                        Some(TuiEvent::ShowPage(c as u8 - b'0'))
                    }
                    (_, KeyCode::Right) => Some(TuiEvent::NextSlide),
                    (_, KeyCode::Left) => Some(TuiEvent::PrevSlide),
                    (_, KeyCode::Tab) => Some(TuiEvent::CycleTab),
                    (_, KeyCode::Up) => Some(TuiEvent::ScrollUp),
                    (_, KeyCode::Down) => Some(TuiEvent::ScrollDown),
                    _ => None,
                }
            }
            Event::Mouse(mouse_event) => match mouse_event.kind {
                MouseEventKind::Down(MouseButton::Left) => {
                    Some(TuiEvent::MouseDown(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::Up(MouseButton::Left) => {
                    Some(TuiEvent::MouseUp(mouse_event.column, mouse_event.row))
                }
                MouseEventKind::ScrollUp => Some(TuiEvent::ScrollUp),
                MouseEventKind::ScrollDown => Some(TuiEvent::ScrollDown),
                _ => None,
            },
            Event::Resize(_, _) => Some(TuiEvent::Resize),
            _ => None,
        }
    } else {
        None
    }
}
