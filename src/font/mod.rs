//! The two typefaces nametags are set in, and how text is measured in them.
//!
//! Every document carries exactly two faces: [Face::Regular] for footers and
//! flap labels, and [Face::Bold] for names. By default these are the PDF
//! standard Helvetica faces, which need no embedding; either may be replaced
//! by a TrueType / OpenType font which is then embedded in its entirety.

mod standard;
mod truetype;

pub use standard::*;
pub use truetype::*;

use crate::{refs::ObjectReferences, NametagError, Pt};
use id_arena::Id;
use pdf_writer::Pdf;

/// The role a piece of text plays, which decides the font it is set in
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Face {
    Regular,
    Bold,
}

/// A font that can measure, encode and write itself into a PDF
pub enum Font {
    Standard(StandardFont),
    TrueType(TrueTypeFont),
}

impl Font {
    /// The built-in standard font used for `face` when no replacement is given
    pub fn standard(face: Face) -> Font {
        Font::Standard(StandardFont::for_face(face))
    }

    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, NametagError> {
        Ok(Font::TrueType(TrueTypeFont::load(bytes)?))
    }

    /// Calculate the width of a given string of text given the font size. Characters the
    /// font cannot encode are measured as the replacement glyph they will be drawn as.
    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        match self {
            Font::Standard(font) => font.width_of_text(text, size),
            Font::TrueType(font) => font.width_of_text(text, size),
        }
    }

    /// Encode text into the byte string shown by a `Tj` operator
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Font::Standard(font) => font.encode(text),
            Font::TrueType(font) => font.encode(text),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Font::Standard(font) => font.base_font().to_string(),
            Font::TrueType(font) => font.name(),
        }
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, id: Id<Font>, writer: &mut Pdf) {
        match self {
            Font::Standard(font) => font.write(refs, id.index(), writer),
            Font::TrueType(font) => font.write(refs, id.index(), writer),
        }
    }
}

/// Which registered font each [Face] resolves to within a document
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct FontSet {
    pub regular: Id<Font>,
    pub bold: Id<Font>,
}

impl FontSet {
    pub fn id(&self, face: Face) -> Id<Font> {
        match face {
            Face::Regular => self.regular,
            Face::Bold => self.bold,
        }
    }
}

/// Measures rendered text widths. Layout only ever talks to fonts through this
/// trait, so it can be driven by a [Document](crate::Document) or by fixed metrics.
pub trait TextMeasure {
    /// The width of `text` set in `face` at `size`
    fn text_width(&self, text: &str, face: Face, size: Pt) -> Pt;
}
