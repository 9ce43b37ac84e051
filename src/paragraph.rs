use crate::colour::{colours, Colour};
use crate::error::LayoutError;
use crate::layout::{
    normalize, resolve_avoids, wrap, AvoidSpec, LineWidths, MetricsCache, WrappedLine,
};
use crate::measure::Measure;
use crate::surface::{SpanLayout, Surface};
use crate::units::Pt;
use log::debug;
use std::str::FromStr;

/// How each line is justified within its column
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum Justify {
    #[default]
    Left,
    Right,
    Center,
    /// Spread every line except the last to exactly fill its column; a
    /// single-word line cannot be stretched and falls back to left
    Full,
}

impl FromStr for Justify {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Justify, LayoutError> {
        match s {
            "left" => Ok(Justify::Left),
            "right" => Ok(Justify::Right),
            "center" => Ok(Justify::Center),
            "full" => Ok(Justify::Full),
            other => Err(LayoutError::InvalidJustification(other.to_string())),
        }
    }
}

/// Where the anchor x sits relative to the paragraph's column
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum HAlign {
    #[default]
    Left,
    Center,
    Right,
}

impl FromStr for HAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<HAlign, LayoutError> {
        match s {
            "left" => Ok(HAlign::Left),
            "center" => Ok(HAlign::Center),
            "right" => Ok(HAlign::Right),
            other => Err(LayoutError::InvalidAlignment {
                value: other.to_string(),
                expected: "'left', 'center', or 'right'",
            }),
        }
    }
}

/// Where the anchor y sits relative to the paragraph's lines
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum VAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

impl FromStr for VAlign {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<VAlign, LayoutError> {
        match s {
            "top" => Ok(VAlign::Top),
            "center" => Ok(VAlign::Center),
            "bottom" => Ok(VAlign::Bottom),
            other => Err(LayoutError::InvalidAlignment {
                value: other.to_string(),
                expected: "'top', 'center', or 'bottom'",
            }),
        }
    }
}

/// The writer's standing defaults; any of them can be overridden per call
/// through [WriteOptions]
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ParagraphStyle {
    /// Column width
    pub width: Pt,
    /// Extra inter-line gap as a fraction of the line height (0.0 is
    /// single-spaced)
    pub spacing: f32,
    /// Font size
    pub size: Pt,
    /// Draw colour
    pub colour: Colour,
}

impl Default for ParagraphStyle {
    fn default() -> ParagraphStyle {
        ParagraphStyle {
            width: Pt(1.0),
            spacing: 1.0,
            size: Pt(10.0),
            colour: colours::BLACK,
        }
    }
}

/// Per-call layout options. `width`, `spacing`, `size`, and `colour`
/// override the writer's [ParagraphStyle] when set.
#[derive(Debug, Clone, PartialEq)]
pub struct WriteOptions {
    pub width: Option<Pt>,
    pub spacing: Option<f32>,
    pub size: Option<Pt>,
    pub colour: Option<Colour>,
    pub justify: Justify,
    pub halign: HAlign,
    pub valign: VAlign,
    /// Keep the text's own newlines as hard line breaks and skip wrapping
    /// entirely (there is a speed advantage to this case)
    pub keep_lines: bool,
    /// Collapse whitespace runs to single spaces during normalization
    pub collapse_whitespace: bool,
    /// Keep text out of the half-plane left of `x` between `y1` and `y2`
    pub avoid_left_of: Vec<AvoidSpec>,
    /// Keep text out of the half-plane right of `x` between `y1` and `y2`
    pub avoid_right_of: Vec<AvoidSpec>,
}

impl Default for WriteOptions {
    fn default() -> WriteOptions {
        WriteOptions {
            width: None,
            spacing: None,
            size: None,
            colour: None,
            justify: Justify::default(),
            halign: HAlign::default(),
            valign: VAlign::default(),
            keep_lines: false,
            collapse_whitespace: true,
            avoid_left_of: Vec::new(),
            avoid_right_of: Vec::new(),
        }
    }
}

/// One laid-out line: its words and text, the baseline origin of its first
/// glyph, its measured (unstretched) width, and, under full justification,
/// the extra gap to add to each word's advance when drawing
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedLine {
    pub text: String,
    pub words: Vec<String>,
    pub origin: (Pt, Pt),
    pub width: Pt,
    /// `Some(gap)` when the line is stretched: the advance between
    /// consecutive word origins is the word's width plus `gap` (the gap
    /// replaces the ordinary inter-word space)
    pub word_gap: Option<Pt>,
}

/// A line as resolved for placement, before justification. Wrapped lines
/// join their words with single spaces; kept lines preserve their raw text.
struct LaidLine {
    text: String,
    words: Vec<String>,
    width: Pt,
}

impl From<WrappedLine> for LaidLine {
    fn from(line: WrappedLine) -> LaidLine {
        LaidLine {
            text: line.text(),
            width: line.width,
            words: line.words,
        }
    }
}

/// Lays paragraphs out on a [Surface].
///
/// The writer owns the surface and the word-width cache; the cache persists
/// across calls for the writer's lifetime (one drawing surface, one
/// caller), while borders and wrapped lines are rebuilt per call: wrapping
/// depends on widths, which depend on the call's obstacles.
pub struct ParagraphWriter<S: Surface> {
    surface: S,
    style: ParagraphStyle,
    cache: MetricsCache,
}

impl<S: Surface> ParagraphWriter<S> {
    pub fn new(surface: S) -> ParagraphWriter<S> {
        ParagraphWriter::with_style(surface, ParagraphStyle::default())
    }

    pub fn with_style(surface: S, style: ParagraphStyle) -> ParagraphWriter<S> {
        ParagraphWriter {
            surface,
            style,
            cache: MetricsCache::new(),
        }
    }

    pub fn style(&self) -> &ParagraphStyle {
        &self.style
    }

    pub fn style_mut(&mut self) -> &mut ParagraphStyle {
        &mut self.style
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Lay `text` out as a paragraph anchored at `xy`, without drawing
    /// anything. Returns the placed lines in top-to-bottom order.
    ///
    /// The first baseline sits one line height below the anchor for
    /// [VAlign::Top]; [VAlign::Bottom] lands the last baseline on the
    /// anchor; [VAlign::Center] splits the difference. Lines advance
    /// downward by `(1 + spacing) × line_height` regardless of per-line
    /// width variation.
    pub fn place(
        &mut self,
        text: &str,
        xy: (Pt, Pt),
        opts: &WriteOptions,
    ) -> Result<Vec<PlacedLine>, LayoutError> {
        let width = opts.width.unwrap_or(self.style.width);
        let spacing = opts.spacing.unwrap_or(self.style.spacing);
        let size = opts.size.unwrap_or(self.style.size);

        let height = self.cache.line_height(&self.surface, size)?;
        let delta = height * (1.0 + spacing);

        let normalized = normalize(text, opts.collapse_whitespace);
        let mut lines: Vec<LaidLine> = if opts.keep_lines {
            let mut kept = Vec::new();
            for line in hard_lines(text, opts.collapse_whitespace) {
                let width = self.surface.measure(&line, size)?.width;
                kept.push(LaidLine {
                    words: line.split_whitespace().map(String::from).collect(),
                    text: line,
                    width,
                });
            }
            kept
        } else {
            let wrapped = wrap(
                &normalized,
                &LineWidths::Uniform(width),
                size,
                &mut self.cache,
                &self.surface,
            )?;
            wrapped.into_iter().map(LaidLine::from).collect()
        };

        // anchoring uses the initial line count; the obstacle-driven
        // re-wrap below does not move the anchor
        let n_lines = lines.len() as f32;
        let mut yy = xy.1;
        match opts.valign {
            VAlign::Top => yy -= height,
            VAlign::Bottom => yy += delta * (n_lines - 1.0),
            VAlign::Center => yy += (delta * (n_lines - 1.0) - height) / 2.0,
        }
        let mut xx = xy.0;
        match opts.halign {
            HAlign::Left => {}
            HAlign::Right => xx -= width,
            HAlign::Center => xx -= width / 2.0,
        }

        let lanes: Option<Vec<(Pt, Pt)>> =
            if opts.avoid_left_of.is_empty() && opts.avoid_right_of.is_empty() {
                None
            } else {
                let borders = resolve_avoids(
                    xx,
                    width,
                    height,
                    &opts.avoid_left_of,
                    &opts.avoid_right_of,
                );
                let per_line = borders.lane_widths(yy, delta);
                if !opts.keep_lines {
                    // word breaks depend on the now-variable widths, so
                    // wrapping is re-run from scratch against them
                    let widths =
                        LineWidths::PerLine(per_line.iter().map(|&(_, w)| w).collect());
                    let wrapped =
                        wrap(&normalized, &widths, size, &mut self.cache, &self.surface)?;
                    lines = wrapped.into_iter().map(LaidLine::from).collect();
                }
                Some(per_line)
            };

        let last = lines.len() - 1;
        let mut placed = Vec::with_capacity(lines.len());
        let mut y = yy;
        for (i, line) in lines.iter().enumerate() {
            let (lane_left, lane_width) = match &lanes {
                Some(lanes) => lanes[i.min(lanes.len() - 1)],
                None => (xx, width),
            };
            if !line.text.is_empty() && lane_width <= Pt(0.0) {
                return Err(LayoutError::Infeasible {
                    line: i,
                    width: lane_width.0,
                });
            }

            let (x, word_gap) = match opts.justify {
                Justify::Left => (lane_left, None),
                Justify::Right => (lane_left + lane_width - line.width, None),
                Justify::Center => (lane_left + (lane_width - line.width) / 2.0, None),
                Justify::Full => {
                    if i < last && line.words.len() >= 2 {
                        let mut words_width = Pt(0.0);
                        for word in &line.words {
                            words_width +=
                                self.cache.word_width(&self.surface, size, word)?;
                        }
                        let gap = (lane_width - words_width) / (line.words.len() as f32 - 1.0);
                        (lane_left, Some(gap))
                    } else {
                        // the last line, and lines that cannot stretch,
                        // sit flush left
                        (lane_left, None)
                    }
                }
            };

            placed.push(PlacedLine {
                text: line.text.clone(),
                words: line.words.clone(),
                origin: (x, y),
                width: line.width,
                word_gap,
            });
            y -= delta;
        }

        debug!(
            "placed {} line(s) anchored at ({}, {})",
            placed.len(),
            xy.0,
            xy.1
        );
        Ok(placed)
    }

    /// Lay `text` out as a paragraph anchored at `xy` and draw it,
    /// returning the surface's handle for every drawn span.
    ///
    /// The entire placement is computed before the first draw call, so a
    /// failing call draws nothing.
    pub fn write(
        &mut self,
        text: &str,
        xy: (Pt, Pt),
        opts: &WriteOptions,
    ) -> Result<Vec<S::Handle>, LayoutError> {
        let size = opts.size.unwrap_or(self.style.size);
        let colour = opts.colour.unwrap_or(self.style.colour);
        let placed = self.place(text, xy, opts)?;

        let mut handles = Vec::with_capacity(placed.len());
        for line in &placed {
            if line.text.is_empty() {
                continue;
            }
            match line.word_gap {
                None => {
                    handles.push(self.surface.draw(SpanLayout {
                        text: line.text.clone(),
                        size,
                        colour,
                        coords: line.origin,
                    }));
                }
                Some(gap) => {
                    let mut x = line.origin.0;
                    for word in &line.words {
                        let advance = self.cache.word_width(&self.surface, size, word)?;
                        handles.push(self.surface.draw(SpanLayout {
                            text: word.clone(),
                            size,
                            colour,
                            coords: (x, line.origin.1),
                        }));
                        x += advance + gap;
                    }
                }
            }
        }

        debug!("wrote {} line(s) as {} span(s)", placed.len(), handles.len());
        Ok(handles)
    }
}

/// Split text on its own newlines, leaving each line unwrapped. With
/// whitespace collapsing enabled each line is tidied like wrapped text;
/// without it, interior runs survive verbatim.
fn hard_lines(text: &str, collapse_whitespace: bool) -> Vec<String> {
    let text = text.replace("\r\n", "\n").replace('\r', "\n");
    text.split('\n')
        .map(|line| {
            if collapse_whitespace {
                line.split_whitespace().collect::<Vec<_>>().join(" ")
            } else {
                line.to_string()
            }
        })
        .collect()
}
