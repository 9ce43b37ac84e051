//! The geometric core: word wrapping, obstacle borders, and the metrics
//! cache that feeds them.
//!
//! These pieces are usable on their own for callers composing custom
//! pipelines, but most users want [ParagraphWriter](crate::ParagraphWriter),
//! which drives them in order: obstacle specs are resolved into a
//! [BorderSet], the border set yields per-line lane widths, and
//! [wrap] is re-run against those widths. Wrapping is a pure function of
//! (text, widths), so it is recomputed from scratch whenever the widths
//! change.

mod borders;
mod cache;
mod wrap;

pub use borders::*;
pub use cache::*;
pub use wrap::*;
