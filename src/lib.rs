//! Printable nametags and fold-able tent cards from a CSV class roster.
//!
//! The quickest route is [generate], which reads a roster, fits every name into
//! its panel and writes the PDF:
//!
//! ```no_run
//! use nametag_gen::{generate, NametagConfig, TentStyle};
//!
//! let mut config = NametagConfig::new("students.csv");
//! config.tent = Some(TentStyle::Tri);
//! let summary = generate(&config).expect("can generate nametags");
//! println!("{} pages", summary.pages);
//! ```
//!
//! The pieces are public too: [roster] for reading names, [layout] for fitting
//! text and tiling panels, and [Document] for writing the pages out.

mod colour;
pub use colour::*;

mod config;
pub use config::*;

mod content;

mod document;
pub use document::*;

mod font;
pub use font::*;

mod generate;
pub use generate::*;

mod info;
pub use info::*;

/// Fitting names into panels and tiling panels onto pages
pub mod layout;

mod page;
pub use page::*;

pub mod pagesize;

mod rect;
pub use rect::*;

pub(crate) mod refs;

/// Reading display names from roster CSV files
pub mod roster;
pub use roster::DisplayName;

mod transform;
pub use transform::*;

mod units;
pub use units::*;

mod error;
pub use error::*;

/// Re-export PDF-writer functionality, mostly for custom [pdf_writer::Content] generation
pub use pdf_writer;
