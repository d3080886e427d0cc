use crate::{
    refs::{ObjectReferences, RefType},
    NametagError, Pt,
};
use owned_ttf_parser::{AsFaceRef, Face, GlyphId, OwnedFace};
use pdf_writer::{
    types::{CidFontType, FontFlags, SystemInfo},
    Filter, Finish, Name, Pdf, Ref, Str,
};
use std::collections::HashMap;

/// A parsed TrueType / OpenType font. The font is embedded in its entirety in the
/// generated PDF as a CID-keyed font, so large fonts will dramatically increase the
/// size of the output.
pub struct TrueTypeFont {
    pub face: OwnedFace,
}

impl TrueTypeFont {
    pub fn load(bytes: Vec<u8>) -> Result<TrueTypeFont, NametagError> {
        let face = OwnedFace::from_vec(bytes, 0)?;
        Ok(TrueTypeFont { face })
    }

    fn face(&self) -> &Face<'_> {
        self.face.as_face_ref()
    }

    /// Obtain the full name of the font, if it declares one
    pub fn name(&self) -> String {
        self.name_entry(owned_ttf_parser::name_id::FULL_NAME)
            .unwrap_or_else(|| "EmbeddedFont".to_string())
    }

    fn name_entry(&self, name_id: u16) -> Option<String> {
        self.face()
            .names()
            .into_iter()
            .find(|name| name.name_id == name_id && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// The glyph drawn for `ch`: its own glyph, else U+FFFD, else `?`, else `.notdef`
    fn glyph(&self, ch: char) -> GlyphId {
        let face = self.face();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
            .unwrap_or(GlyphId(0))
    }

    pub fn width_of_text(&self, text: &str, size: Pt) -> Pt {
        let face = self.face();
        let scaling = size / face.units_per_em() as f32;
        text.chars()
            .map(|ch| scaling * face.glyph_hor_advance(self.glyph(ch)).unwrap_or_default() as f32)
            .sum()
    }

    /// Glyph ids as big-endian pairs, matching the Identity-H encoding
    pub fn encode(&self, text: &str) -> Vec<u8> {
        text.chars()
            .flat_map(|ch| self.glyph(ch).0.to_be_bytes())
            .collect()
    }

    /// Every glyph reachable through a unicode cmap subtable, with the first
    /// character that maps to it
    fn glyph_chars(&self) -> HashMap<u16, char> {
        let mut map: HashMap<u16, char> = HashMap::new();
        let Some(cmap) = self.face().tables().cmap else {
            return map;
        };

        for subtable in cmap.subtables.into_iter().filter(|table| table.is_unicode()) {
            subtable.codepoints(|codepoint: u32| {
                if let Ok(ch) = char::try_from(codepoint) {
                    if let Some(index) = subtable.glyph_index(codepoint).filter(|index| index.0 > 0)
                    {
                        map.entry(index.0).or_insert(ch);
                    }
                }
            });
        }

        map
    }

    /// Advance widths in 1/1000 em, sorted by glyph id
    fn glyph_widths(&self) -> Vec<(u16, f32)> {
        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let mut widths: Vec<(u16, f32)> = self
            .glyph_chars()
            .into_keys()
            .filter_map(|gid| {
                face.glyph_hor_advance(GlyphId(gid))
                    .map(|advance| (gid, advance as f32 * scaling))
            })
            .collect();
        widths.sort_by_key(|&(gid, _)| gid);
        widths
    }

    fn write_cid(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) -> Ref {
        let font_descriptor_id = self.write_descriptor(refs, font_index, writer);
        let widths = self.glyph_widths();

        let id = refs.gen(RefType::CidFont(font_index));
        let mut cid_font = writer.cid_font(id);
        cid_font.subtype(CidFontType::Type2);
        cid_font.base_font(Name(format!("F{font_index}").as_bytes()));
        cid_font.system_info(SystemInfo {
            registry: Str(b"Adobe"),
            ordering: Str(b"Identity"),
            supplement: 0,
        });
        cid_font.font_descriptor(font_descriptor_id);

        // group runs of consecutive glyph ids into single width arrays
        let mut runs: Vec<(u16, Vec<f32>)> = Vec::new();
        for (gid, width) in widths {
            match runs.last_mut() {
                Some((start, run)) if *start as usize + run.len() == gid as usize => {
                    run.push(width)
                }
                _ => runs.push((gid, vec![width])),
            }
        }

        let mut cid_widths = cid_font.widths();
        for (start, run) in runs {
            cid_widths.consecutive(start, run);
        }
        cid_widths.finish();

        cid_font.default_width(1000.0);
        cid_font.cid_to_gid_map_predefined(Name(b"Identity"));

        id
    }

    fn write_descriptor(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let font_data_id = refs.gen(RefType::FontData(font_index));
        writer
            .stream(font_data_id, self.face.as_slice())
            .pair(Name(b"Length1"), self.face.as_slice().len() as i32);

        let face = self.face();
        let scaling = 1000.0 / face.units_per_em() as f32;
        let widths = self.glyph_widths();
        let max_width = widths.iter().map(|&(_, w)| w).fold(0.0, f32::max);
        let avg_width = if widths.is_empty() {
            0.0
        } else {
            widths.iter().map(|&(_, w)| w).sum::<f32>() / widths.len() as f32
        };
        let bbox = face.global_bounding_box();

        let name = self.name();
        let family = self
            .name_entry(owned_ttf_parser::name_id::FAMILY)
            .unwrap_or_else(|| name.clone());

        let id = refs.gen(RefType::FontDescriptor(font_index));
        let mut descriptor = writer.font_descriptor(id);
        descriptor.name(Name(name.as_bytes()));
        descriptor.family(Str(family.as_bytes()));
        descriptor.weight(face.weight().to_number());

        let mut flags = FontFlags::SYMBOLIC;
        if face.is_monospaced() {
            flags.set(FontFlags::FIXED_PITCH, true);
        }
        if face.is_italic() {
            flags.set(FontFlags::ITALIC, true);
        }
        descriptor.flags(flags);

        descriptor.bbox(pdf_writer::Rect {
            x1: bbox.x_min as f32 * scaling,
            y1: bbox.y_min as f32 * scaling,
            x2: bbox.x_max as f32 * scaling,
            y2: bbox.y_max as f32 * scaling,
        });
        descriptor.italic_angle(if face.is_italic() { -12.0 } else { 0.0 });
        descriptor.ascent(face.ascender() as f32 * scaling);
        descriptor.descent(face.descender() as f32 * scaling);
        descriptor.leading(face.line_gap() as f32 * scaling);
        let cap_height = face
            .capital_height()
            .map(|h| h as f32 * scaling)
            .unwrap_or(face.ascender() as f32 * scaling);
        descriptor.cap_height(cap_height);
        descriptor.x_height(
            face.x_height()
                .map(|h| h as f32 * scaling)
                .unwrap_or(cap_height),
        );
        // TrueType carries no stem width; 80 is the customary estimate
        descriptor.stem_v(80.0);
        descriptor.avg_width(avg_width);
        descriptor.max_width(max_width);
        descriptor.missing_width(max_width);
        descriptor.font_file2(font_data_id);

        id
    }

    fn write_to_unicode(
        &self,
        refs: &mut ObjectReferences,
        font_index: usize,
        writer: &mut Pdf,
    ) -> Ref {
        let id = refs.gen(RefType::ToUnicode(font_index));

        let mut map = String::from(
            "/CIDInit /ProcSet findresource begin\n\
             12 dict begin\n\
             begincmap\n\
             /CIDSystemInfo\n\
             << /Registry (Adobe)\n\
             /Ordering (UCS) /Supplement 0 >> def\n\
             /CMapName /Adobe-Identity-UCS def\n\
             /CMapType 2 def\n\
             1 begincodespacerange\n\
             <0000> <FFFF>\n\
             endcodespacerange\n",
        );

        let mut ids: Vec<(u16, char)> = self.glyph_chars().into_iter().collect();
        ids.sort_by_key(|&(id, _)| id);

        // bfchar blocks hold at most 100 entries
        for block in ids.chunks(100) {
            map.push_str(&format!("{} beginbfchar\n", block.len()));
            for &(id, ch) in block {
                let mut utf16 = [0u16; 2];
                let units: String = ch
                    .encode_utf16(&mut utf16)
                    .iter()
                    .map(|unit| format!("{unit:04x}"))
                    .collect();
                map.push_str(&format!("<{id:04x}> <{units}>\n"));
            }
            map.push_str("endbfchar\n");
        }

        map.push_str("endcmap CMapName currentdict /CMap defineresource pop end end\n");

        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            map.as_bytes(),
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        id
    }

    pub(crate) fn write(&self, refs: &mut ObjectReferences, font_index: usize, writer: &mut Pdf) {
        let font_id = refs.gen(RefType::Font(font_index));
        let cid_font_id = self.write_cid(refs, font_index, writer);
        let to_unicode_id = self.write_to_unicode(refs, font_index, writer);

        let mut font = writer.type0_font(font_id);
        font.base_font(Name(format!("F{font_index}").as_bytes()));
        font.encoding_predefined(Name(b"Identity-H"));
        font.descendant_font(cid_font_id);
        font.to_unicode(to_unicode_id);
    }
}
