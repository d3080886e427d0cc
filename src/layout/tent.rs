//! Tent cards: a nametag region folded so the name stands up on a desk.
//!
//! A tri-fold tent splits its region into three equal bands, bottom to top: a
//! glue flap, the front face, and the back face. The back face carries the same
//! content as the front turned upside down, so both read upright once folded.
//! A bi-fold tent is a nametag over a flap of the same height.

use super::panel::{layout_panel, Panel, PanelMetrics};
use crate::colour::colours;
use crate::font::{Face, TextMeasure};
use crate::page::{PageContents, PathLayout, Shape, SpanFont, SpanLayout, Stroke};
use crate::rect::Rect;
use crate::transform::Transform;
use crate::units::Pt;

const FLAP_LABEL: &str = "Fold/Glue Flap";
const FOLD_WIDTH: Pt = Pt(0.6);
const FOLD_DASH: Pt = Pt(3.0);

fn fold_line(bounds: Rect, y: Pt) -> PageContents {
    PageContents::Path(PathLayout {
        shape: Shape::Line {
            from: (bounds.x1, y),
            to: (bounds.x2, y),
        },
        stroke: Stroke::dashed(FOLD_WIDTH, FOLD_DASH, FOLD_DASH),
    })
}

/// A grey label centred across `flap`, dropped `drop` below its middle
fn flap_label<M: TextMeasure>(measure: &M, flap: Rect, size: Pt, drop: Pt) -> PageContents {
    let width = measure.text_width(FLAP_LABEL, Face::Regular, size);
    let label = SpanLayout {
        text: FLAP_LABEL.to_string(),
        font: SpanFont {
            face: Face::Regular,
            size,
        },
        colour: colours::GREY,
        coords: ((flap.width() - width) / 2.0, flap.height() / 2.0 - drop),
    };
    PageContents::Transformed(
        Transform::translate(flap.x1, flap.y1),
        vec![PageContents::Text(vec![label])],
    )
}

/// Fold lines, front, back and flap of a tri-fold tent, in page coordinates
pub fn render_tri<M: TextMeasure>(measure: &M, panel: &Panel<'_>) -> Vec<PageContents> {
    let bounds = panel.bounds;
    let bands = bounds.split_rows(3);
    let (flap, front, back) = (bands[0], bands[1], bands[2]);

    let face = || {
        layout_panel(
            measure,
            front.width(),
            front.height(),
            panel.name,
            panel.footer,
            &PanelMetrics::tent(),
        )
        .into_contents()
    };

    vec![
        fold_line(bounds, front.y1),
        fold_line(bounds, back.y1),
        PageContents::Transformed(Transform::translate(front.x1, front.y1), face()),
        PageContents::Transformed(
            Transform::half_turn().with_translate(back.x2, back.y2),
            face(),
        ),
        flap_label(measure, flap, Pt(9.0), Pt(4.0)),
    ]
}

/// Fold line, nametag and flap of a bi-fold tent, in page coordinates
pub fn render_bi<M: TextMeasure>(measure: &M, panel: &Panel<'_>) -> Vec<PageContents> {
    let bounds = panel.bounds;
    let halves = bounds.split_rows(2);
    let (flap, top) = (halves[0], halves[1]);

    let face = layout_panel(
        measure,
        top.width(),
        top.height(),
        panel.name,
        panel.footer,
        &PanelMetrics::tent(),
    );

    vec![
        fold_line(bounds, top.y1),
        PageContents::Transformed(
            Transform::translate(top.x1, top.y1),
            face.into_contents(),
        ),
        flap_label(measure, flap, Pt(10.0), Pt(5.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::fit::tests::HalfEm;
    use crate::layout::panel::{border, PanelStyle};

    fn panel(style: PanelStyle) -> Panel<'static> {
        Panel {
            bounds: Rect::from_origin(Pt(0.0), Pt(0.0), Pt(396.0), Pt(612.0)),
            name: "Ada Lovelace",
            footer: "INFO 5410",
            style,
        }
    }

    fn transformed(content: &PageContents) -> (Transform, &Vec<PageContents>) {
        match content {
            PageContents::Transformed(t, inner) => (*t, inner),
            other => panic!("expected a transformed group, got {other:?}"),
        }
    }

    fn close(a: (Pt, Pt), b: (Pt, Pt)) -> bool {
        (*a.0 - *b.0).abs() < 1e-3 && (*a.1 - *b.1).abs() < 1e-3
    }

    #[test]
    fn tri_fold_back_face_mirrors_the_front() {
        let contents = panel(PanelStyle::TentTri).render(&HalfEm, true);
        assert_eq!(contents[0], border(panel(PanelStyle::TentTri).bounds));

        let (front_t, front) = transformed(&contents[3]);
        let (back_t, back) = transformed(&contents[4]);
        assert_eq!(front, back);

        // the centre of the local face lands on the centre of each band
        let centre = (Pt(198.0), Pt(102.0));
        assert!(close(front_t.apply(centre), (Pt(198.0), Pt(306.0))));
        assert!(close(back_t.apply(centre), (Pt(198.0), Pt(510.0))));

        // and the back is upside down: local "up" points down the page
        let (_, above) = back_t.apply((Pt(198.0), Pt(103.0)));
        assert!(above < Pt(510.0));
    }

    #[test]
    fn tri_fold_draws_dashed_folds_between_thirds() {
        let contents = panel(PanelStyle::TentTri).render(&HalfEm, false);
        let folds: Vec<(Pt, Stroke)> = contents
            .iter()
            .filter_map(|c| match c {
                PageContents::Path(PathLayout {
                    shape: Shape::Line { from, to },
                    stroke,
                }) => {
                    assert_eq!(from.1, to.1);
                    Some((from.1, *stroke))
                }
                _ => None,
            })
            .collect();
        assert_eq!(folds.len(), 2);
        assert_eq!(folds[0].0, Pt(204.0));
        assert_eq!(folds[1].0, Pt(408.0));
        assert_eq!(folds[0].1, Stroke::dashed(Pt(0.6), Pt(3.0), Pt(3.0)));
    }

    #[test]
    fn tent_faces_use_the_tent_padding() {
        let contents = panel(PanelStyle::TentTri).render(&HalfEm, false);
        let (_, front) = transformed(&contents[2]);
        match &front[0] {
            PageContents::Text(spans) => assert_eq!(spans[0].coords.1, Pt(0.18 * 72.0)),
            other => panic!("expected the footer, got {other:?}"),
        }
    }

    #[test]
    fn flap_label_is_grey_and_centred() {
        let contents = panel(PanelStyle::TentTri).render(&HalfEm, false);
        let spans: Vec<_> = contents
            .iter()
            .flat_map(|c| {
                let mut spans = Vec::new();
                c.for_each_span(&mut |s, t| spans.push((s.clone(), t)));
                spans
            })
            .filter(|(s, _)| s.text == FLAP_LABEL)
            .collect();
        assert_eq!(spans.len(), 1);
        let (label, transform) = &spans[0];
        assert_eq!(label.colour, colours::GREY);
        assert_eq!(label.font.size, Pt(9.0));
        // 14 chars * 0.5 * 9 = 63 wide
        let placed = transform.apply(label.coords);
        assert!(close(placed, (Pt(166.5), Pt(98.0))));
    }

    #[test]
    fn bi_fold_has_one_upright_face_over_a_flap() {
        let contents = panel(PanelStyle::TentBi).render(&HalfEm, false);
        assert_eq!(contents.len(), 3);
        match &contents[0] {
            PageContents::Path(PathLayout {
                shape: Shape::Line { from, .. },
                ..
            }) => assert_eq!(from.1, Pt(306.0)),
            other => panic!("expected the fold line, got {other:?}"),
        }
        let (t, _) = transformed(&contents[1]);
        assert_eq!(t, Transform::translate(Pt(0.0), Pt(306.0)));

        let (flap_t, flap) = transformed(&contents[2]);
        match &flap[0] {
            PageContents::Text(spans) => {
                assert_eq!(spans[0].font.size, Pt(10.0));
                assert!(close(flap_t.apply(spans[0].coords), (Pt(163.0), Pt(148.0))));
            }
            other => panic!("expected the flap label, got {other:?}"),
        }
    }
}
