//! Fitting names into panels and tiling panels onto pages.
//!
//! Layout happens in three steps, each usable on its own:
//!
//! - [`fit_lines`](crate::layout::fit_lines) finds the largest one- or two-line
//!   rendering of a piece of text within a width
//! - [`Panel::render`](crate::layout::Panel::render) places a footer and a fitted
//!   name inside one nametag's bounds, flat or folded into a tent card
//! - [`compose_pages`](crate::layout::compose_pages) tiles one panel per name onto
//!   as many pages as a [`PageGrid`](crate::layout::PageGrid) needs
//!
//! All measuring goes through a [`TextMeasure`](crate::TextMeasure), usually the
//! [`Document`](crate::Document) the pages will be written into.
//!
//! # Example
//!
//! ```
//! use nametag_gen::{Document, Face, Pt};
//! use nametag_gen::layout::{compose_pages, fit_lines, PageGrid, PanelStyle, SizeRange};
//! use nametag_gen::pagesize::PaperSize;
//!
//! let mut doc = Document::new();
//!
//! let layout = fit_lines(&doc, "Ada Lovelace", Face::Bold, Pt(300.0), SizeRange::new(96, 18));
//! assert_eq!(layout.line_count(), 1);
//!
//! let grid = PageGrid::for_style(PanelStyle::Flat, None, None, PaperSize::Letter.landscape());
//! let pages = compose_pages(&doc, &["Ada Lovelace", "Bob Smith"], "INFO 5410", &grid, PanelStyle::Flat, true);
//! for page in pages {
//!     doc.add_page(page);
//! }
//! assert_eq!(doc.page_count(), 1);
//! ```

mod fit;
mod grid;
mod margins;
mod panel;
mod tent;

pub use fit::*;
pub use grid::*;
pub use margins::*;
pub use panel::*;
pub use tent::*;
