use crate::error::LayoutError;
use crate::measure::Measure;
use crate::units::Pt;
use std::collections::HashMap;

/// Measured metrics for one font size: the line height, the width of a
/// single space, and the width of every word measured so far
struct SizeMetrics {
    line_height: Pt,
    space: Pt,
    words: HashMap<String, Pt>,
}

/// The word-width and line-height cache. Keyed by the font size's bit
/// pattern (extendable to a font family identity later); populated lazily
/// through the injected [Measure] on first use and never invalidated;
/// fonts are immutable inputs for the lifetime of the layout engine.
#[derive(Default)]
pub struct MetricsCache {
    sizes: HashMap<u32, SizeMetrics>,
}

impl MetricsCache {
    pub fn new() -> MetricsCache {
        MetricsCache::default()
    }

    fn size_metrics(
        &mut self,
        measurer: &impl Measure,
        size: Pt,
    ) -> Result<&mut SizeMetrics, LayoutError> {
        let key = size.0.to_bits();
        if !self.sizes.contains_key(&key) {
            let extent = measurer.measure(" ", size)?;
            self.sizes.insert(
                key,
                SizeMetrics {
                    line_height: extent.height,
                    space: extent.width,
                    words: HashMap::new(),
                },
            );
        }
        Ok(self
            .sizes
            .get_mut(&key)
            .expect("size metrics were just inserted"))
    }

    /// How much to advance downward per line at this size, before any extra
    /// paragraph spacing
    pub fn line_height(&mut self, measurer: &impl Measure, size: Pt) -> Result<Pt, LayoutError> {
        Ok(self.size_metrics(measurer, size)?.line_height)
    }

    /// The width of a single inter-word space at this size
    pub fn space_width(&mut self, measurer: &impl Measure, size: Pt) -> Result<Pt, LayoutError> {
        Ok(self.size_metrics(measurer, size)?.space)
    }

    /// The rendered width of a word at this size, measuring it on first use
    pub fn word_width(
        &mut self,
        measurer: &impl Measure,
        size: Pt,
        word: &str,
    ) -> Result<Pt, LayoutError> {
        let metrics = self.size_metrics(measurer, size)?;
        if let Some(&width) = metrics.words.get(word) {
            return Ok(width);
        }
        let width = measurer.measure(word, size)?.width;
        metrics.words.insert(word.to_string(), width);
        Ok(width)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::TextExtent;
    use std::cell::Cell;

    /// Counts measurement calls so the tests can observe cache hits
    struct CountingMeasurer {
        calls: Cell<usize>,
    }

    impl Measure for CountingMeasurer {
        fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError> {
            self.calls.set(self.calls.get() + 1);
            Ok(TextExtent {
                width: Pt(text.chars().count() as f32),
                height: size,
            })
        }
    }

    #[test]
    fn word_widths_are_measured_once() {
        let measurer = CountingMeasurer {
            calls: Cell::new(0),
        };
        let mut cache = MetricsCache::new();
        let first = cache.word_width(&measurer, Pt(10.0), "hello").unwrap();
        let calls_after_first = measurer.calls.get();
        let second = cache.word_width(&measurer, Pt(10.0), "hello").unwrap();
        assert_eq!(first, second);
        assert_eq!(measurer.calls.get(), calls_after_first);
    }

    #[test]
    fn sizes_are_cached_independently() {
        let measurer = CountingMeasurer {
            calls: Cell::new(0),
        };
        let mut cache = MetricsCache::new();
        assert_eq!(cache.line_height(&measurer, Pt(10.0)).unwrap(), Pt(10.0));
        assert_eq!(cache.line_height(&measurer, Pt(20.0)).unwrap(), Pt(20.0));
        assert_eq!(cache.space_width(&measurer, Pt(10.0)).unwrap(), Pt(1.0));
    }
}
