//! Wrap, justify, and flow paragraph text around obstacles on a 2-D canvas.
//!
//! The crate does no rendering of its own: measurement and drawing are
//! collaborator traits ([Measure] and [Surface]), and the layout engine
//! turns raw text plus avoidance rectangles into placed spans through them.
//!
//! # Example
//!
//! ```
//! use paraflow::layout::AvoidSpec;
//! use paraflow::{
//!     HeuristicMetrics, ParagraphStyle, ParagraphWriter, Pt, RecordingSurface, WriteOptions,
//! };
//!
//! let surface = RecordingSurface::new(HeuristicMetrics::default());
//! let mut writer = ParagraphWriter::with_style(
//!     surface,
//!     ParagraphStyle {
//!         width: Pt(200.0),
//!         spacing: 0.25,
//!         size: Pt(12.0),
//!         ..ParagraphStyle::default()
//!     },
//! );
//!
//! let opts = WriteOptions {
//!     avoid_left_of: vec![AvoidSpec::from((80.0, (160.0, 220.0)))],
//!     ..WriteOptions::default()
//! };
//! writer
//!     .write("text flows around the avoided region", (Pt(0.0), Pt(240.0)), &opts)
//!     .expect("layout is feasible");
//! assert!(!writer.surface().is_empty());
//! ```

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

/// The geometric core: wrapping, borders, and the metrics cache
pub mod layout;

mod measure;
pub use measure::*;

mod paragraph;
pub use paragraph::*;

mod surface;
pub use surface::*;

mod units;
pub use units::*;
