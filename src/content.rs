//! Rendering of laid-out page contents into PDF content stream operators.

use crate::colour::Colour;
use crate::document::Document;
use crate::page::{PageContents, PathLayout, Shape, SpanFont, SpanLayout, Stroke};
use std::io::Write;

/// Renders page contents to a PDF content stream. Transformed groups are wrapped
/// in a saved graphics state so their matrix never leaks into later contents.
#[allow(clippy::write_with_newline)]
pub(crate) fn render_contents(
    contents: &[PageContents],
    document: &Document,
) -> Result<Vec<u8>, std::io::Error> {
    let mut content: Vec<u8> = Vec::default();
    render_into(&mut content, contents, document)?;
    Ok(content)
}

#[allow(clippy::write_with_newline)]
fn render_into(
    content: &mut Vec<u8>,
    contents: &[PageContents],
    document: &Document,
) -> Result<(), std::io::Error> {
    for page_content in contents.iter() {
        match page_content {
            PageContents::Text(spans) => {
                render_text_spans(content, spans, document)?;
            }
            PageContents::Path(path) => {
                render_path(content, path)?;
            }
            PageContents::Transformed(t, inner) => {
                write!(content, "q\n")?;
                write!(
                    content,
                    "{} {} {} {} {} {} cm\n",
                    t.a, t.b, t.c, t.d, t.e, t.f
                )?;
                render_into(content, inner, document)?;
                write!(content, "Q\n")?;
            }
        }
    }
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn render_text_spans(
    content: &mut Vec<u8>,
    spans: &[SpanLayout],
    document: &Document,
) -> Result<(), std::io::Error> {
    let Some(first) = spans.first() else {
        return Ok(());
    };

    write!(content, "q\n")?;

    let mut current_font: SpanFont = first.font;
    let mut current_colour: Colour = first.colour;
    write_font(content, current_font, document)?;
    write_fill_colour(content, current_colour)?;

    for span in spans.iter() {
        if span.font != current_font {
            current_font = span.font;
            write_font(content, current_font, document)?;
        }
        if span.colour != current_colour {
            current_colour = span.colour;
            write_fill_colour(content, current_colour)?;
        }

        write!(content, "BT\n")?;
        write!(content, "{} {} Td\n", *span.coords.0, *span.coords.1)?;
        write!(content, "<")?;
        for byte in document.font(span.font.face).encode(&span.text) {
            write!(content, "{byte:02x}")?;
        }
        write!(content, "> Tj\n")?;
        write!(content, "ET\n")?;
    }

    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_font(
    content: &mut Vec<u8>,
    font: SpanFont,
    document: &Document,
) -> Result<(), std::io::Error> {
    write!(
        content,
        "/F{} {} Tf\n",
        document.faces.id(font.face).index(),
        *font.size
    )
}

#[allow(clippy::write_with_newline)]
fn render_path(content: &mut Vec<u8>, path: &PathLayout) -> Result<(), std::io::Error> {
    write!(content, "q\n")?;
    write_stroke(content, &path.stroke)?;
    match path.shape {
        Shape::Rect(rect) => write!(
            content,
            "{} {} {} {} re\n",
            *rect.x1,
            *rect.y1,
            *rect.width(),
            *rect.height()
        )?,
        Shape::Line { from, to } => {
            write!(content, "{} {} m\n", *from.0, *from.1)?;
            write!(content, "{} {} l\n", *to.0, *to.1)?;
        }
    }
    write!(content, "S\n")?;
    write!(content, "Q\n")?;
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_stroke(content: &mut Vec<u8>, stroke: &Stroke) -> Result<(), std::io::Error> {
    write!(content, "{} w\n", *stroke.width)?;
    match stroke.colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} RG\n")?,
        Colour::Grey { g } => write!(content, "{g} G\n")?,
    }
    if let Some((on, off)) = stroke.dash {
        write!(content, "[{} {}] 0 d\n", *on, *off)?;
    }
    Ok(())
}

#[allow(clippy::write_with_newline)]
fn write_fill_colour(content: &mut Vec<u8>, colour: Colour) -> Result<(), std::io::Error> {
    match colour {
        Colour::RGB { r, g, b } => write!(content, "{r} {g} {b} rg\n"),
        Colour::Grey { g } => write!(content, "{g} g\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colour::colours;
    use crate::font::Face;
    use crate::page::Stroke;
    use crate::rect::Rect;
    use crate::transform::Transform;
    use crate::units::Pt;

    fn render(contents: &[PageContents]) -> String {
        let document = Document::new();
        String::from_utf8(render_contents(contents, &document).expect("renders"))
            .expect("content streams here are ascii")
    }

    #[test]
    fn text_is_hex_encoded_in_its_face() {
        let out = render(&[PageContents::Text(vec![SpanLayout {
            text: "Ada".to_string(),
            font: SpanFont {
                face: Face::Bold,
                size: Pt(24.0),
            },
            colour: colours::BLACK,
            coords: (Pt(10.0), Pt(20.0)),
        }])]);
        assert!(out.contains("/F1 24 Tf\n"));
        assert!(out.contains("0 g\n"));
        assert!(out.contains("10 20 Td\n<416461> Tj\n"));
    }

    #[test]
    fn dashed_lines_set_and_scope_their_dash() {
        let out = render(&[PageContents::Path(PathLayout {
            shape: Shape::Line {
                from: (Pt(0.0), Pt(5.0)),
                to: (Pt(100.0), Pt(5.0)),
            },
            stroke: Stroke::dashed(Pt(0.6), Pt(3.0), Pt(3.0)),
        })]);
        assert_eq!(out, "q\n0.6 w\n0 G\n[3 3] 0 d\n0 5 m\n100 5 l\nS\nQ\n");
    }

    #[test]
    fn transformed_groups_are_wrapped_in_saved_state() {
        let outline = PageContents::Path(PathLayout {
            shape: Shape::Rect(Rect::sized(Pt(10.0), Pt(20.0))),
            stroke: Stroke {
                colour: Colour::new_rgb(1.0, 0.0, 0.0),
                ..Stroke::solid(Pt(1.0))
            },
        });
        let out = render(&[PageContents::Transformed(
            Transform::half_turn().with_translate(Pt(10.0), Pt(20.0)),
            vec![outline],
        )]);
        assert!(out.starts_with("q\n-1 0 0 -1 10 20 cm\nq\n1 w\n1 0 0 RG\n0 0 10 20 re\nS\nQ\n"));
        assert!(out.ends_with("Q\nQ\n"));
    }
}
