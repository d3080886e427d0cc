//! Replacement TrueType faces: measuring, encoding and embedding a real font.
//!
//! The fixture is DejaVu Sans Condensed Bold, see `fixtures/DejaVu-LICENSE.txt`.

use nametag_gen::layout::{compose_pages, fit_lines, PageGrid, PanelStyle, SizeRange};
use nametag_gen::pagesize::PaperSize;
use nametag_gen::{generate, Document, Face, Font, NametagConfig, Pt, TentStyle, TextMeasure};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const DEJAVU_BOLD: &[u8] = include_bytes!("fixtures/DejaVuSansCondensed-Bold.ttf");

fn fixture_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("DejaVuSansCondensed-Bold.ttf")
}

fn dejavu() -> Font {
    Font::load(DEJAVU_BOLD.to_vec()).expect("fixture is a valid font")
}

#[test]
fn loads_as_an_embedded_font() {
    let font = dejavu();
    assert!(matches!(font, Font::TrueType(_)));
    assert!(font.name().contains("DejaVu"));
}

#[test]
fn widths_grow_with_size() {
    let font = dejavu();
    let small = font.width_of_text("Żółć Ωmega", Pt(10.0));
    let large = font.width_of_text("Żółć Ωmega", Pt(20.0));
    assert!(small > Pt(10.0));
    assert!(large > small);
    assert!((*large - *small * 2.0).abs() < 1e-2);
    assert_eq!(font.width_of_text("", Pt(10.0)), Pt(0.0));
}

#[test]
fn missing_characters_use_the_replacement_glyph() {
    let font = dejavu();
    // plane 16 private use, which no DejaVu face covers
    let missing = "\u{10FFFD}";
    let replacement = font.encode("\u{FFFD}");
    assert_eq!(replacement.len(), 2);
    assert_ne!(replacement, vec![0, 0]);
    assert_eq!(font.encode(missing), replacement);
    assert_eq!(
        font.width_of_text(missing, Pt(12.0)),
        font.width_of_text("\u{FFFD}", Pt(12.0))
    );

    // text around it keeps its own glyphs
    let encoded = font.encode("A\u{10FFFD}B");
    assert_eq!(encoded.len(), 6);
    assert_eq!(&encoded[2..4], replacement.as_slice());
    assert_eq!(&encoded[0..2], font.encode("A").as_slice());
}

#[test]
fn documents_measure_with_the_replacement_face() {
    let doc = Document::with_fonts(Font::standard(Face::Regular), dejavu());
    assert_eq!(
        doc.text_width("Ada Lovelace", Face::Bold, Pt(24.0)),
        dejavu().width_of_text("Ada Lovelace", Pt(24.0))
    );

    let layout = fit_lines(&doc, "Żółć Ωmega", Face::Bold, Pt(300.0), SizeRange::new(84, 18));
    assert_eq!(layout.line_count(), 1);
    assert!(doc.text_width("Żółć Ωmega", Face::Bold, layout.size) <= Pt(300.0));
}

#[test]
fn embedded_fonts_are_written_as_cid_fonts() {
    let mut doc = Document::with_fonts(Font::standard(Face::Regular), dejavu());
    let grid = PageGrid::for_style(PanelStyle::TentTri, None, None, PaperSize::Letter.landscape());
    let pages = compose_pages(&doc, &["Żółć Ωmega"], "INFO 5410", &grid, PanelStyle::TentTri, true);
    for page in pages {
        doc.add_page(page);
    }

    let mut out: Vec<u8> = Vec::new();
    doc.write(&mut out).expect("can write");
    let pdf = String::from_utf8_lossy(&out);
    assert!(pdf.starts_with("%PDF-"));
    assert!(pdf.contains("/Identity-H"));
    assert!(pdf.contains("/ToUnicode"));
    assert!(pdf.contains("/FontFile2"));
    assert!(pdf.contains("/Helvetica"));
}

#[test]
fn configured_font_files_are_embedded() {
    let dir = TempDir::new().unwrap();
    let roster = dir.path().join("students.csv");
    fs::write(&roster, "Full name\nAda Lovelace\n").unwrap();

    let mut config = NametagConfig::new(&roster);
    config.bold_font = Some(fixture_path());
    config.tent = Some(TentStyle::Bi);
    config.output = dir.path().join("nametags.pdf");

    let summary = generate(&config).unwrap();
    assert_eq!(summary.pages, 1);
    let pdf = String::from_utf8_lossy(&fs::read(&config.output).unwrap()).into_owned();
    assert!(pdf.contains("/Identity-H"));
}
