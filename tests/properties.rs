//! Property tests for the wrapper and the border merge.
//!
//! Border rectangles are drawn from a dyadic grid (multiples of 0.25) so
//! every `min`/`max`/`±` the merge performs is exact in `f32` and results
//! can be compared with `==`.

use paraflow::layout::{wrap, BorderSet, LineWidths, MetricsCache};
use paraflow::{LayoutError, Measure, Pt, TextExtent};
use proptest::prelude::*;

/// Two units per character, spaces included, one unit tall
struct CharMeasurer;

impl Measure for CharMeasurer {
    fn measure(&self, text: &str, _size: Pt) -> Result<TextExtent, LayoutError> {
        Ok(TextExtent {
            width: Pt(text.chars().count() as f32 * 2.0),
            height: Pt(1.0),
        })
    }
}

fn grid() -> impl Strategy<Value = f32> {
    (0u32..=40).prop_map(|v| v as f32 * 0.25)
}

prop_compose! {
    /// An allowed rectangle on the dyadic grid, x ordered, y in any order
    fn allowed_rect()(a in grid(), b in grid(), y1 in grid(), y2 in grid()) -> (f32, f32, f32, f32) {
        (a.min(b), a.max(b), y1, y2)
    }
}

fn words() -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec("[a-z]{1,8}", 0..20)
}

proptest! {
    #[test]
    fn merge_order_does_not_matter(r1 in allowed_rect(), r2 in allowed_rect()) {
        let mut forward = BorderSet::page(Pt(0.0), Pt(10.0));
        forward.merge(Pt(r1.0), Pt(r1.1), Pt(r1.2), Pt(r1.3));
        forward.merge(Pt(r2.0), Pt(r2.1), Pt(r2.2), Pt(r2.3));

        let mut reverse = BorderSet::page(Pt(0.0), Pt(10.0));
        reverse.merge(Pt(r2.0), Pt(r2.1), Pt(r2.2), Pt(r2.3));
        reverse.merge(Pt(r1.0), Pt(r1.1), Pt(r1.2), Pt(r1.3));

        // band boundaries may be subdivided differently, but the usable
        // span at any position must agree; sample the whole grid
        for step in 0..=41 {
            let y = Pt(step as f32 * 0.25 - 0.125);
            let a = forward.band_at(y);
            let b = reverse.band_at(y);
            prop_assert_eq!((a.left, a.width), (b.left, b.width), "at y = {}", y);
        }
    }

    #[test]
    fn merging_only_adds_boundaries(r1 in allowed_rect(), r2 in allowed_rect()) {
        let mut borders = BorderSet::page(Pt(0.0), Pt(10.0));
        borders.merge(Pt(r1.0), Pt(r1.1), Pt(r1.2), Pt(r1.3));
        let before: Vec<Option<Pt>> = borders.bands().iter().map(|b| b.limit).collect();

        borders.merge(Pt(r2.0), Pt(r2.1), Pt(r2.2), Pt(r2.3));
        let after: Vec<Option<Pt>> = borders.bands().iter().map(|b| b.limit).collect();

        for limit in before {
            prop_assert!(after.contains(&limit), "boundary {:?} disappeared", limit);
        }
    }

    #[test]
    fn merged_borders_keep_their_shape(r1 in allowed_rect(), r2 in allowed_rect()) {
        let mut borders = BorderSet::page(Pt(0.0), Pt(10.0));
        borders.merge(Pt(r1.0), Pt(r1.1), Pt(r1.2), Pt(r1.3));
        borders.merge(Pt(r2.0), Pt(r2.1), Pt(r2.2), Pt(r2.3));

        let bands = borders.bands();
        prop_assert!(bands.last().unwrap().limit.is_none(), "list must end with the sentinel");
        prop_assert_eq!(
            bands.iter().filter(|b| b.limit.is_none()).count(),
            1,
            "exactly one sentinel"
        );
        for pair in bands.windows(2) {
            if let (Some(upper), Some(lower)) = (pair[0].limit, pair[1].limit) {
                prop_assert!(upper > lower, "limits must strictly decrease");
            }
        }
    }

    #[test]
    fn wrapped_words_are_preserved_in_order(words in words(), width in 5.0f32..60.0) {
        let text = words.join(" ");
        let mut cache = MetricsCache::new();
        let lines = wrap(&text, &LineWidths::Uniform(Pt(width)), Pt(10.0), &mut cache, &CharMeasurer)
            .unwrap();

        let rejoined: Vec<String> = lines.iter().flat_map(|l| l.words.clone()).collect();
        prop_assert_eq!(rejoined, words);
    }

    #[test]
    fn multi_word_lines_stay_within_their_columns(words in words(), width in 5.0f32..60.0) {
        let text = words.join(" ");
        let mut cache = MetricsCache::new();
        let lines = wrap(&text, &LineWidths::Uniform(Pt(width)), Pt(10.0), &mut cache, &CharMeasurer)
            .unwrap();

        for line in &lines {
            // a single unsplittable word may exceed its column; nothing else may
            if line.words.len() >= 2 {
                prop_assert!(line.width <= line.column, "line {:?} overflows", line.text());
            }
        }
    }

    #[test]
    fn wrapping_twice_yields_identical_lines(words in words(), width in 5.0f32..60.0) {
        let text = words.join(" ");
        let mut cache = MetricsCache::new();
        let widths = LineWidths::Uniform(Pt(width));
        let first = wrap(&text, &widths, Pt(10.0), &mut cache, &CharMeasurer).unwrap();
        let second = wrap(&text, &widths, Pt(10.0), &mut cache, &CharMeasurer).unwrap();
        prop_assert_eq!(first, second);
    }
}
