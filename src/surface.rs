use crate::colour::Colour;
use crate::measure::{Measure, TextExtent};
use crate::units::Pt;
use crate::LayoutError;
use id_arena::{Arena, Id};

/// A piece of text placed on the surface: the text, its font size and
/// colour, and the baseline origin of its first glyph
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub size: Pt,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// The drawing half of the rendering collaborator. A surface can measure
/// text (so the layout engine can populate its width cache through it) and
/// accept placed spans, returning a handle per span so provisional draws can
/// be taken back with [Surface::remove].
pub trait Surface: Measure {
    type Handle: Copy;

    fn draw(&mut self, span: SpanLayout) -> Self::Handle;
    fn remove(&mut self, handle: Self::Handle);
}

/// A [Surface] that records every drawn span instead of rasterizing
/// anything, delegating measurement to the wrapped [Measure]. Useful for
/// tests, demos, and any caller that wants to inspect or forward the draw
/// commands a layout produced.
pub struct RecordingSurface<M> {
    measurer: M,
    spans: Arena<SpanLayout>,
    order: Vec<Id<SpanLayout>>,
}

impl<M> RecordingSurface<M> {
    pub fn new(measurer: M) -> RecordingSurface<M> {
        RecordingSurface {
            measurer,
            spans: Arena::new(),
            order: Vec::new(),
        }
    }

    pub fn measurer(&self) -> &M {
        &self.measurer
    }

    /// The spans currently on the surface, in draw order. Removed spans do
    /// not appear; their arena slots are simply no longer referenced.
    pub fn spans(&self) -> impl Iterator<Item = &SpanLayout> {
        self.order.iter().map(|&id| &self.spans[id])
    }

    pub fn get(&self, handle: Id<SpanLayout>) -> Option<&SpanLayout> {
        self.order
            .contains(&handle)
            .then(|| &self.spans[handle])
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

impl<M: Measure> Measure for RecordingSurface<M> {
    fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError> {
        self.measurer.measure(text, size)
    }
}

impl<M: Measure> Surface for RecordingSurface<M> {
    type Handle = Id<SpanLayout>;

    fn draw(&mut self, span: SpanLayout) -> Id<SpanLayout> {
        let id = self.spans.alloc(span);
        self.order.push(id);
        id
    }

    fn remove(&mut self, handle: Id<SpanLayout>) {
        self.order.retain(|&id| id != handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::measure::HeuristicMetrics;

    fn span(text: &str) -> SpanLayout {
        SpanLayout {
            text: text.to_string(),
            size: Pt(10.0),
            colour: colours::BLACK,
            coords: (Pt(0.0), Pt(0.0)),
        }
    }

    #[test]
    fn draw_records_in_order() {
        let mut surface = RecordingSurface::new(HeuristicMetrics::default());
        surface.draw(span("one"));
        surface.draw(span("two"));
        let texts: Vec<&str> = surface.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["one", "two"]);
    }

    #[test]
    fn remove_drops_the_span() {
        let mut surface = RecordingSurface::new(HeuristicMetrics::default());
        let first = surface.draw(span("one"));
        surface.draw(span("two"));
        surface.remove(first);
        assert_eq!(surface.len(), 1);
        assert!(surface.get(first).is_none());
        let texts: Vec<&str> = surface.spans().map(|s| s.text.as_str()).collect();
        assert_eq!(texts, vec!["two"]);
    }
}
