use crate::error::LayoutError;
use crate::layout::cache::MetricsCache;
use crate::measure::Measure;
use crate::units::Pt;

/// The column width(s) a paragraph is wrapped against. A single width
/// applies to every line; a per-line sequence (which must be non-empty)
/// applies in order, with the last value repeating once the sequence is
/// exhausted.
#[derive(Debug, Clone, PartialEq)]
pub enum LineWidths {
    Uniform(Pt),
    PerLine(Vec<Pt>),
}

impl LineWidths {
    /// The maximum width for the line at `index`
    pub fn get(&self, index: usize) -> Pt {
        match self {
            LineWidths::Uniform(width) => *width,
            LineWidths::PerLine(widths) => widths[index.min(widths.len() - 1)],
        }
    }
}

impl From<Pt> for LineWidths {
    fn from(width: Pt) -> LineWidths {
        LineWidths::Uniform(width)
    }
}

impl From<Vec<Pt>> for LineWidths {
    fn from(widths: Vec<Pt>) -> LineWidths {
        LineWidths::PerLine(widths)
    }
}

/// One wrapped line: its words in order, its accumulated rendered width
/// (word widths plus single inter-word spaces), and the column width it was
/// wrapped against
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedLine {
    pub words: Vec<String>,
    pub width: Pt,
    pub column: Pt,
}

impl WrappedLine {
    /// The line's text, words joined by single spaces
    pub fn text(&self) -> String {
        self.words.join(" ")
    }
}

/// Collapse newlines into spaces and optionally collapse whitespace runs,
/// trimming the ends. This is the pre-wrap normalization; hard line breaks
/// only survive through the keep-lines path, which does not call this.
pub fn normalize(text: &str, collapse_whitespace: bool) -> String {
    let text = text.replace("\r\n", "\n").replace('\r', "\n").replace('\n', " ");
    if collapse_whitespace {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    } else {
        text.trim().to_string()
    }
}

/// Greedily wrap normalized text into lines no wider than the width given
/// for each line position.
///
/// A line accumulates words while `accumulated + space + next_word` stays
/// within the current maximum; it may exactly fill the column, and breaks
/// only when the next word would push it strictly over. Closing a line
/// advances the width cursor. A single word wider than its (positive)
/// column is placed alone on its own line (there is no hyphenation), but a
/// word that lands on a line whose width is zero or negative has nowhere to
/// go at all and fails with [LayoutError::Infeasible].
///
/// Empty input produces exactly one empty line, never zero lines.
pub fn wrap(
    text: &str,
    widths: &LineWidths,
    size: Pt,
    cache: &mut MetricsCache,
    measurer: &impl Measure,
) -> Result<Vec<WrappedLine>, LayoutError> {
    let words = text.split_whitespace();
    let space = cache.space_width(measurer, size)?;

    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut line: Vec<String> = Vec::new();
    let mut line_width = Pt(0.0);
    let mut max = widths.get(0);

    for word in words {
        let word_width = cache.word_width(measurer, size, word)?;

        if !line.is_empty() && line_width + space + word_width > max {
            lines.push(WrappedLine {
                words: std::mem::take(&mut line),
                width: line_width,
                column: max,
            });
            line_width = Pt(0.0);
            max = widths.get(lines.len());
        }

        if line.is_empty() {
            if max <= Pt(0.0) {
                return Err(LayoutError::Infeasible {
                    line: lines.len(),
                    width: max.0,
                });
            }
            if word_width > max {
                // too wide to ever fit: the word gets the line to itself
                lines.push(WrappedLine {
                    words: vec![word.to_string()],
                    width: word_width,
                    column: max,
                });
                max = widths.get(lines.len());
                continue;
            }
            line_width = word_width;
        } else {
            line_width += space + word_width;
        }
        line.push(word.to_string());
    }

    // the trailing line, unless an oversized final word already closed it;
    // empty input still produces its one empty line
    if !line.is_empty() || lines.is_empty() {
        lines.push(WrappedLine {
            words: line,
            width: line_width,
            column: max,
        });
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measure::TextExtent;
    use std::collections::HashMap;

    /// Word widths from a lookup table; anything not listed is two units
    /// per character. Spaces are two units, lines are one unit tall.
    struct TableMeasurer(HashMap<&'static str, f32>);

    impl TableMeasurer {
        fn empty() -> TableMeasurer {
            TableMeasurer(HashMap::new())
        }
    }

    impl Measure for TableMeasurer {
        fn measure(&self, text: &str, size: Pt) -> Result<TextExtent, LayoutError> {
            let _ = size;
            let width = self
                .0
                .get(text)
                .copied()
                .unwrap_or_else(|| text.chars().count() as f32 * 2.0);
            Ok(TextExtent {
                width: Pt(width),
                height: Pt(1.0),
            })
        }
    }

    fn wrap_with(
        measurer: &TableMeasurer,
        text: &str,
        widths: impl Into<LineWidths>,
    ) -> Result<Vec<WrappedLine>, LayoutError> {
        let mut cache = MetricsCache::new();
        wrap(text, &widths.into(), Pt(10.0), &mut cache, measurer)
    }

    fn texts(lines: &[WrappedLine]) -> Vec<String> {
        lines.iter().map(|l| l.text()).collect()
    }

    #[test]
    fn greedy_accumulation_breaks_at_the_next_word() {
        // alpha+space+beta exactly fills the column; gamma starts line two
        let measurer = TableMeasurer(HashMap::from([
            ("alpha", 10.0),
            ("beta", 8.0),
            ("gamma", 12.0),
            ("delta", 9.0),
        ]));
        let lines = wrap_with(&measurer, "alpha beta gamma delta", Pt(20.0)).unwrap();
        assert_eq!(texts(&lines), vec!["alpha beta", "gamma", "delta"]);
        assert_eq!(lines[0].width, Pt(20.0));
        assert_eq!(lines[1].width, Pt(12.0));
        assert_eq!(lines[2].width, Pt(9.0));
    }

    #[test]
    fn empty_input_yields_one_empty_line() {
        let measurer = TableMeasurer::empty();
        let lines = wrap_with(&measurer, "", Pt(20.0)).unwrap();
        assert_eq!(lines.len(), 1);
        assert!(lines[0].words.is_empty());
        assert_eq!(lines[0].width, Pt(0.0));
    }

    #[test]
    fn oversized_word_gets_its_own_line() {
        let measurer = TableMeasurer::empty();
        // "abcdefgh" is 16 wide against a 10-wide column
        let lines = wrap_with(&measurer, "ab abcdefgh cd", Pt(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["ab", "abcdefgh", "cd"]);
        assert_eq!(lines[1].width, Pt(16.0));
    }

    #[test]
    fn oversized_final_word_leaves_no_trailing_empty_line() {
        let measurer = TableMeasurer::empty();
        let lines = wrap_with(&measurer, "ab abcdefgh", Pt(10.0)).unwrap();
        assert_eq!(texts(&lines), vec!["ab", "abcdefgh"]);
    }

    #[test]
    fn lines_stay_within_their_columns() {
        let measurer = TableMeasurer::empty();
        let text = "one two three four five six seven eight nine ten";
        let lines = wrap_with(&measurer, text, Pt(24.0)).unwrap();
        for line in &lines {
            assert!(line.width <= line.column, "line {:?} overflows", line.text());
        }
    }

    #[test]
    fn per_line_widths_repeat_the_last_value() {
        let measurer = TableMeasurer::empty();
        // words are 6 wide; columns: 6, then 14 for every later line
        let text = "aaa bbb ccc ddd eee";
        let lines = wrap_with(&measurer, text, vec![Pt(6.0), Pt(14.0)]).unwrap();
        assert_eq!(texts(&lines), vec!["aaa", "bbb ccc", "ddd eee"]);
        assert_eq!(lines[0].column, Pt(6.0));
        assert_eq!(lines[1].column, Pt(14.0));
        assert_eq!(lines[2].column, Pt(14.0));
    }

    #[test]
    fn words_are_preserved_in_order() {
        let measurer = TableMeasurer::empty();
        let text = "the quick brown fox jumps over the lazy dog";
        let lines = wrap_with(&measurer, text, Pt(20.0)).unwrap();
        let rejoined: Vec<String> = lines.iter().flat_map(|l| l.words.clone()).collect();
        let original: Vec<String> = text.split_whitespace().map(String::from).collect();
        assert_eq!(rejoined, original);
    }

    #[test]
    fn wrapping_is_idempotent() {
        let measurer = TableMeasurer::empty();
        let text = "pack my box with five dozen liquor jugs";
        let first = wrap_with(&measurer, text, Pt(30.0)).unwrap();
        let second = wrap_with(&measurer, text, Pt(30.0)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn unwritable_column_is_reported() {
        let measurer = TableMeasurer::empty();
        let result = wrap_with(&measurer, "aa bb cc", vec![Pt(4.0), Pt(0.0)]);
        match result {
            Err(LayoutError::Infeasible { line, .. }) => assert_eq!(line, 1),
            other => panic!("expected Infeasible, got {:?}", other),
        }
    }

    #[test]
    fn normalize_collapses_runs_and_newlines() {
        assert_eq!(normalize("  a\nb\r\nc   d  ", true), "a b c d");
        assert_eq!(normalize("a\nb  c", false), "a b  c");
    }
}
