use super::Face;
use crate::refs::{ObjectReferences, RefType};
use crate::units::Pt;
use pdf_writer::{Name, Pdf};

/// One of the PDF standard 14 fonts. Viewers supply these themselves, so nothing is
/// embedded; text is encoded with WinAnsiEncoding and measured with the metrics below.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum StandardFont {
    Helvetica,
    HelveticaBold,
}

// advance widths in 1/1000 em for codes 0x20..=0x7E
#[rustfmt::skip]
const HELVETICA_ASCII: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 278, 278, 584, 584, 584, 556,
    1015, 667, 667, 722, 722, 667, 611, 778, 722, 278, 500, 667, 556, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 278, 278, 278, 469, 556,
    333, 556, 556, 500, 556, 556, 278, 556, 556, 222, 222, 500, 222, 833, 556, 556,
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, 500, 334, 260, 334, 584,
];

#[rustfmt::skip]
const HELVETICA_BOLD_ASCII: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, 389, 584, 278, 333, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 556, 556, 556, 333, 333, 584, 584, 584, 611,
    975, 722, 722, 722, 722, 667, 611, 778, 722, 278, 556, 722, 611, 833, 722, 778,
    667, 778, 722, 667, 611, 722, 667, 944, 667, 667, 611, 333, 278, 333, 584, 556,
    333, 556, 611, 556, 611, 556, 333, 611, 611, 278, 278, 556, 278, 889, 611, 611,
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, 500, 389, 280, 389, 584,
];

// codes 0xA0..=0xFF, which WinAnsi shares with Latin-1
#[rustfmt::skip]
const HELVETICA_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 260, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 556, 537, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    667, 667, 667, 667, 667, 667, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 500, 556, 556, 556, 556, 278, 278, 278, 278,
    556, 556, 556, 556, 556, 556, 556, 584, 611, 556, 556, 556, 556, 500, 556, 500,
];

#[rustfmt::skip]
const HELVETICA_BOLD_LATIN1: [u16; 96] = [
    278, 333, 556, 556, 556, 556, 280, 556, 333, 737, 370, 556, 584, 333, 737, 333,
    400, 584, 333, 333, 333, 611, 556, 278, 333, 333, 365, 556, 834, 834, 834, 611,
    722, 722, 722, 722, 722, 722, 1000, 722, 667, 667, 667, 667, 278, 278, 278, 278,
    722, 722, 778, 778, 778, 778, 778, 584, 778, 722, 722, 722, 722, 667, 667, 611,
    556, 556, 556, 556, 556, 556, 889, 556, 556, 556, 556, 556, 278, 278, 278, 278,
    611, 611, 611, 611, 611, 611, 611, 584, 611, 611, 611, 611, 611, 556, 611, 556,
];

/// Map a character onto its WinAnsiEncoding code, if it has one
fn winansi_code(ch: char) -> Option<u8> {
    match ch {
        ' '..='~' | '\u{A0}'..='\u{FF}' => Some(ch as u8),
        '€' => Some(0x80),
        '…' => Some(0x85),
        'Š' => Some(0x8A),
        'Œ' => Some(0x8C),
        'Ž' => Some(0x8E),
        '‘' => Some(0x91),
        '’' => Some(0x92),
        '“' => Some(0x93),
        '”' => Some(0x94),
        '•' => Some(0x95),
        '–' => Some(0x96),
        '—' => Some(0x97),
        'š' => Some(0x9A),
        'œ' => Some(0x9C),
        'ž' => Some(0x9E),
        'Ÿ' => Some(0x9F),
        _ => None,
    }
}

impl StandardFont {
    pub fn for_face(face: Face) -> StandardFont {
        match face {
            Face::Regular => StandardFont::Helvetica,
            Face::Bold => StandardFont::HelveticaBold,
        }
    }

    /// The PostScript name viewers resolve the font by
    pub fn base_font(&self) -> &'static str {
        match self {
            StandardFont::Helvetica => "Helvetica",
            StandardFont::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn code_width(&self, code: u8) -> u16 {
        let bold = *self == StandardFont::HelveticaBold;
        match code {
            0x20..=0x7E => {
                let table = if bold {
                    &HELVETICA_BOLD_ASCII
                } else {
                    &HELVETICA_ASCII
                };
                table[(code - 0x20) as usize]
            }
            0xA0..=0xFF => {
                let table = if bold {
                    &HELVETICA_BOLD_LATIN1
                } else {
                    &HELVETICA_LATIN1
                };
                table[(code - 0xA0) as usize]
            }
            0x80 => 556,
            0x85 | 0x8C | 0x97 => 1000,
            0x8A => 667,
            0x8E => 611,
            0x91 | 0x92 => {
                if bold {
                    278
                } else {
                    222
                }
            }
            0x93 | 0x94 => {
                if bold {
                    500
                } else {
                    333
                }
            }
            0x95 => 350,
            0x96 => 556,
            0x9A => {
                if bold {
                    556
                } else {
                    500
                }
            }
            0x9C => 944,
            0x9E => 500,
            0x9F => 667,
            _ => self.code_width(b'?'),
        }
    }

    /// Encode text with WinAnsiEncoding, substituting `?` for anything it cannot express
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .map(|ch| winansi_code(ch).unwrap_or(b'?'))
            .collect()
    }

    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let units: u32 = self
            .encode(text)
            .into_iter()
            .map(|code| self.code_width(code) as u32)
            .sum();
        size * units as f32 / 1000.0
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let id = refs.gen(RefType::Font(font_index));
        writer
            .type1_font(id)
            .base_font(Name(self.base_font().as_bytes()))
            .encoding_predefined(Name(b"WinAnsiEncoding"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_widths_follow_the_metrics_table() {
        let font = StandardFont::Helvetica;
        // A(667) + d(556) + a(556)
        assert_eq!(font.width_of_text("Ada", Pt(1000.0)), Pt(1779.0));
        assert_eq!(font.width_of_text("", Pt(12.0)), Pt(0.0));
    }

    #[test]
    fn accented_letters_encode_as_latin1() {
        let font = StandardFont::HelveticaBold;
        assert_eq!(font.encode("José"), vec![b'J', b'o', b's', 0xE9]);
        assert_eq!(font.encode("Łukasz")[0], b'?');
        assert_eq!(
            font.width_of_text("Ł", Pt(1000.0)),
            font.width_of_text("?", Pt(1000.0))
        );
    }

    #[test]
    fn winansi_extras_are_measured() {
        let font = StandardFont::Helvetica;
        assert_eq!(font.encode("O’Neil")[1], 0x92);
        assert_eq!(font.width_of_text("’", Pt(1000.0)), Pt(222.0));
    }
}
