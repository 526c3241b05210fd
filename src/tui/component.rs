use ratatui::layout::Rect;
use ratatui::Frame;

/// A props-based UI component.
///
/// Components receive everything they draw as struct fields and render
/// into a given `Rect`. `render` takes `&mut self` so a component can
/// update presentation caches during the pass; components that also
/// record mouse-target rects (the carousel and page views) take their
/// hit-map as an explicit parameter instead of implementing this trait.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}
