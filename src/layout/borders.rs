use crate::units::Pt;
use log::{debug, trace};

/// One vertical band of the page. Reading a border list top to bottom, a
/// band states that text may occupy `[left, left + width]` horizontally
/// until the vertical position `limit`, after which the next band applies.
/// `limit: None` is the sentinel: the band covers the remainder of the page
/// and terminates the list.
///
/// A band's `width` can end up zero or negative after obstacle
/// intersection; such a band is unwritable and is reported when a non-empty
/// line lands in it, never silently drawn.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Band {
    pub limit: Option<Pt>,
    pub left: Pt,
    pub width: Pt,
}

impl Band {
    pub fn right(&self) -> Pt {
        self.left + self.width
    }

    pub fn is_writable(&self) -> bool {
        self.width > Pt(0.0)
    }
}

/// An ordered, vertically partitioned description of the usable horizontal
/// span per band, top to bottom. Starts as one sentinel band covering a
/// whole column; each obstacle is folded in with [BorderSet::merge].
///
/// Invariants: exactly one sentinel, at the end; finite limits strictly
/// decrease down the list; merging only ever subdivides bands, so the set
/// of limits grows monotonically.
#[derive(Debug, Clone, PartialEq)]
pub struct BorderSet {
    bands: Vec<Band>,
}

impl BorderSet {
    /// A border set with a single sentinel band spanning the column
    pub fn page(left: Pt, width: Pt) -> BorderSet {
        BorderSet {
            bands: vec![Band {
                limit: None,
                left,
                width,
            }],
        }
    }

    pub fn bands(&self) -> &[Band] {
        &self.bands
    }

    /// Intersect the border list with an allowed rectangle
    /// `[x_left, x_right] × [y_bottom, y_top]`. Bands entirely above or
    /// below the rectangle pass through unchanged; bands it covers are
    /// split at `y_top`/`y_bottom` where those are not already boundaries,
    /// and the covered stretch keeps only the part of its span inside
    /// `[x_left, x_right]`. Split points become permanent boundaries for
    /// subsequent merges; the list only grows finer.
    pub fn merge(&mut self, x_left: Pt, x_right: Pt, y_top: Pt, y_bottom: Pt) {
        let (y_top, y_bottom) = if y_top < y_bottom {
            (y_bottom, y_top)
        } else {
            (y_top, y_bottom)
        };
        if y_top == y_bottom {
            return;
        }

        let mut merged: Vec<Band> = Vec::with_capacity(self.bands.len() + 2);
        // each band covers the half-open interval (limit, upper], where
        // upper is the previous band's limit (infinite for the first band)
        let mut upper = f32::INFINITY;
        for band in &self.bands {
            let lower = band.limit.map_or(f32::NEG_INFINITY, |limit| limit.0);

            if lower >= y_top.0 || upper <= y_bottom.0 {
                // entirely above or entirely below the rectangle
                merged.push(*band);
                upper = lower;
                continue;
            }

            if upper > y_top.0 {
                // the stretch above the rectangle keeps its span
                merged.push(Band {
                    limit: Some(y_top),
                    ..*band
                });
            }

            // the covered stretch is clamped to the allowed span; the clamp
            // can leave a zero or negative width, which is kept and
            // reported at use, not here
            let left = band.left.max(x_left);
            let right = band.right().min(x_right);
            merged.push(Band {
                limit: if lower >= y_bottom.0 {
                    band.limit
                } else {
                    Some(y_bottom)
                },
                left,
                width: right - left,
            });

            if lower < y_bottom.0 {
                // the stretch below the rectangle keeps its span, and the
                // sentinel stays the sentinel
                merged.push(*band);
            }

            upper = lower;
        }

        trace!(
            "merged allowed rectangle [{x_left}, {x_right}] x [{y_bottom}, {y_top}]: {} band(s)",
            merged.len()
        );
        self.bands = merged;
    }

    /// The index of the band containing the vertical position `y`. A band
    /// covers positions strictly above its limit, down from the previous
    /// band's limit inclusive.
    pub fn band_index_at(&self, y: Pt) -> usize {
        self.bands
            .iter()
            .position(|band| band.limit.map_or(true, |limit| y > limit))
            .expect("border list ends with a sentinel")
    }

    pub fn band_at(&self, y: Pt) -> &Band {
        &self.bands[self.band_index_at(y)]
    }

    /// Per-line `(left, width)` lanes for baselines starting at `top` and
    /// stepping down by `step`, emitted until the sentinel band is reached.
    /// Below the last finite limit the span is constant, so repeating the
    /// final lane (as [LineWidths](crate::layout::LineWidths) does) is
    /// exact.
    pub fn lane_widths(&self, top: Pt, step: Pt) -> Vec<(Pt, Pt)> {
        let last = self.bands.len() - 1;
        let mut lanes = Vec::new();
        let mut y = top;
        loop {
            let index = self.band_index_at(y);
            let band = &self.bands[index];
            lanes.push((band.left, band.width));
            if index == last || step <= Pt(0.0) {
                break;
            }
            y -= step;
        }
        lanes
    }
}

/// A user-facing avoidance specification: an x limit and the vertical range
/// (in either order) it applies to. Whether the avoided half-plane is left
/// or right of `x` is conveyed by which argument the spec is passed as.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct AvoidSpec {
    pub x: Pt,
    pub ys: (Pt, Pt),
}

impl AvoidSpec {
    pub fn new(x: Pt, ys: (Pt, Pt)) -> AvoidSpec {
        AvoidSpec { x, ys }
    }

    fn ordered_ys(&self) -> (Pt, Pt) {
        let (y1, y2) = self.ys;
        if y2 < y1 {
            (y2, y1)
        } else {
            (y1, y2)
        }
    }
}

impl From<(f32, (f32, f32))> for AvoidSpec {
    fn from((x, (y1, y2)): (f32, (f32, f32))) -> AvoidSpec {
        AvoidSpec::new(Pt(x), (Pt(y1), Pt(y2)))
    }
}

/// Fold avoidance specifications into a [BorderSet] over a column.
///
/// Each spec contributes an allowed rectangle: avoid-left-of `x` allows
/// `[x, column_right]`, avoid-right-of `x` allows `[column_left, x]`, both
/// over the vertical range `[y1 - line_height, y2]`: baselines within one
/// line height above the obstacle's bottom edge carry glyphs into it, so
/// the pad shifts the exclusion down by one line. Only the intersection of
/// the allowed rectangles is writable.
pub fn resolve_avoids(
    column_left: Pt,
    column_width: Pt,
    line_height: Pt,
    avoid_left_of: &[AvoidSpec],
    avoid_right_of: &[AvoidSpec],
) -> BorderSet {
    let column_right = column_left + column_width;
    let mut borders = BorderSet::page(column_left, column_width);

    for spec in avoid_left_of {
        let (y1, y2) = spec.ordered_ys();
        borders.merge(spec.x, column_right, y2, y1 - line_height);
    }
    for spec in avoid_right_of {
        let (y1, y2) = spec.ordered_ys();
        borders.merge(column_left, spec.x, y2, y1 - line_height);
    }

    debug!(
        "resolved {} avoidance spec(s) into {} band(s)",
        avoid_left_of.len() + avoid_right_of.len(),
        borders.bands().len()
    );
    borders
}
