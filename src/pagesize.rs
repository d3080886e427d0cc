//! Paper sizes nametag sheets can be printed on.
//!
//! All sizes are provided in portrait orientation (width, height) where width ≤ height.
//! Use the [`PageOrientation`](crate::pagesize::PageOrientation) trait to convert between
//! portrait and landscape; sheets are always laid out landscape.
//!
//! ```
//! use nametag_gen::pagesize::{PageOrientation, PaperSize, A4};
//!
//! let landscape = A4.landscape();
//! assert_eq!(PaperSize::A4.landscape(), landscape);
//! ```

use crate::units::*;
use clap::ValueEnum;

/// Page dimensions as (width, height) in points.
pub type PageSize = (Pt, Pt);

pub const LETTER: PageSize = (Pt(8.5 * 72.0), Pt(11.0 * 72.0));
pub const A4: PageSize = (Pt(210.0 * 72.0 / 25.4), Pt(297.0 * 72.0 / 25.4));

/// Convert page sizes between portrait and landscape orientations.
pub trait PageOrientation {
    /// Returns the size in portrait orientation (width ≤ height).
    fn portrait(self) -> Self;
    /// Returns the size in landscape orientation (width ≥ height).
    fn landscape(self) -> Self;
}

impl PageOrientation for PageSize {
    fn portrait(self) -> Self {
        if self.0 <= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }

    fn landscape(self) -> PageSize {
        if self.0 >= self.1 {
            self
        } else {
            (self.1, self.0)
        }
    }
}

/// The paper a sheet of nametags is printed on
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum PaperSize {
    #[default]
    Letter,
    A4,
}

impl PaperSize {
    pub fn size(self) -> PageSize {
        match self {
            PaperSize::Letter => LETTER,
            PaperSize::A4 => A4,
        }
    }

    /// The landscape dimensions every sheet is rendered at
    pub fn landscape(self) -> PageSize {
        self.size().landscape()
    }
}
