use super::fit::{fit_lines, fit_single_line, LineLayout, SizeRange};
use super::margins::Margins;
use super::tent;
use crate::colour::colours;
use crate::font::{Face, TextMeasure};
use crate::page::{PageContents, PathLayout, Shape, SpanFont, SpanLayout, Stroke};
use crate::rect::Rect;
use crate::transform::Transform;
use crate::units::{In, Pt};

const FOOTER_SIZE: Pt = Pt(10.0);
const FOOTER_SIZES: SizeRange = SizeRange::new(14, 8);
const FLAT_NAME_SIZES: SizeRange = SizeRange::new(96, 18);
const TENT_NAME_SIZES: SizeRange = SizeRange::new(84, 18);
/// Extra space between stacked name lines, as a fraction of the font size
const LINE_GAP_RATIO: f32 = 0.15;
/// Smallest size the anti-overlap rescale may shrink a name to
const MIN_SCALED_NAME_SIZE: f32 = 14.0;
/// Name text never starts closer than this above the bottom of the name area
const NAME_FLOOR_OFFSET: Pt = Pt(4.0);
const BORDER_WIDTH: Pt = Pt(0.8);

/// How a nametag is cut and folded
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub enum PanelStyle {
    /// A single flat card
    #[default]
    Flat,
    /// Back, front and glue flap in equal thirds, folded into a triangular prism
    TentTri,
    /// Nametag over a flap in equal halves
    TentBi,
}

/// Padding and name sizes for one kind of name/footer region
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PanelMetrics {
    pub padding: Margins,
    /// Clear space between the top of the footer text and the name area
    pub footer_gap: Pt,
    pub name_sizes: SizeRange,
}

impl PanelMetrics {
    /// A full-size flat nametag
    pub fn flat() -> PanelMetrics {
        PanelMetrics {
            padding: Margins::symmetric(In(0.12), In(0.35)),
            footer_gap: In(0.20).into(),
            name_sizes: FLAT_NAME_SIZES,
        }
    }

    /// One face of a tent card
    pub fn tent() -> PanelMetrics {
        PanelMetrics {
            padding: Margins::symmetric(In(0.18), In(0.35)),
            footer_gap: In(0.20).into(),
            name_sizes: TENT_NAME_SIZES,
        }
    }
}

/// One nametag's region on a page together with what is printed on it
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Panel<'a> {
    pub bounds: Rect,
    pub name: &'a str,
    pub footer: &'a str,
    pub style: PanelStyle,
}

impl Panel<'_> {
    /// Lay out the panel in page coordinates
    pub fn render<M: TextMeasure>(&self, measure: &M, draw_border: bool) -> Vec<PageContents> {
        let mut contents = Vec::new();
        if draw_border {
            contents.push(border(self.bounds));
        }
        match self.style {
            PanelStyle::Flat => {
                let layout = layout_panel(
                    measure,
                    self.bounds.width(),
                    self.bounds.height(),
                    self.name,
                    self.footer,
                    &PanelMetrics::flat(),
                );
                contents.push(PageContents::Transformed(
                    Transform::translate(self.bounds.x1, self.bounds.y1),
                    layout.into_contents(),
                ));
            }
            PanelStyle::TentTri => contents.extend(tent::render_tri(measure, self)),
            PanelStyle::TentBi => contents.extend(tent::render_bi(measure, self)),
        }
        contents
    }
}

/// A cut guide outlining `bounds` exactly
pub fn border(bounds: Rect) -> PageContents {
    PageContents::Path(PathLayout {
        shape: Shape::Rect(bounds),
        stroke: Stroke::solid(BORDER_WIDTH),
    })
}

/// The footer and name of a panel, positioned relative to the panel's bottom-left
#[derive(Debug, Clone, PartialEq)]
pub struct PanelLayout {
    pub footer: SpanLayout,
    /// Name lines, top to bottom
    pub name: Vec<SpanLayout>,
    /// Bottom and top of the band the name is centred in
    pub name_area: (Pt, Pt),
}

impl PanelLayout {
    pub fn into_contents(self) -> Vec<PageContents> {
        vec![
            PageContents::Text(vec![self.footer]),
            PageContents::Text(self.name),
        ]
    }
}

/// The footer's size: the base size when it fits, otherwise the largest single-line
/// size that does, and the smallest size when nothing does
fn footer_size<M: TextMeasure>(measure: &M, footer: &str, available_width: Pt) -> Pt {
    if measure.text_width(footer, Face::Regular, FOOTER_SIZE) <= available_width {
        return FOOTER_SIZE;
    }
    fit_single_line(measure, footer, Face::Regular, available_width, FOOTER_SIZES)
        .unwrap_or(FOOTER_SIZES.min_size())
}

fn block_height(lines: usize, size: Pt) -> Pt {
    size * lines as f32 + size * LINE_GAP_RATIO * lines.saturating_sub(1) as f32
}

/// Lay out a name and footer inside a `width` x `height` region whose origin is its
/// bottom-left corner. The footer sits on the bottom padding; the name is fitted to
/// the padded width and centred in the band between the footer and the top padding.
pub fn layout_panel<M: TextMeasure>(
    measure: &M,
    width: Pt,
    height: Pt,
    name: &str,
    footer: &str,
    metrics: &PanelMetrics,
) -> PanelLayout {
    let available_width = metrics.padding.inner_width(width);

    let footer_size = footer_size(measure, footer, available_width);
    let footer_y = metrics.padding.bottom;
    let footer_width = measure.text_width(footer, Face::Regular, footer_size);
    let footer_span = SpanLayout {
        text: footer.to_string(),
        font: SpanFont {
            face: Face::Regular,
            size: footer_size,
        },
        colour: colours::BLACK,
        coords: ((width - footer_width) / 2.0, footer_y),
    };

    let name_area_top = height - metrics.padding.top;
    let name_area_bottom = footer_y + footer_size + metrics.footer_gap;
    let name_area_height = (name_area_top - name_area_bottom).max(Pt(0.0));

    let LineLayout { lines, mut size } =
        fit_lines(measure, name, Face::Bold, available_width, metrics.name_sizes);
    let mut total_height = block_height(lines.len(), size);
    if name_area_height > Pt(0.0) && total_height > name_area_height {
        let scale = name_area_height / total_height;
        size = Pt((*size * scale).floor().max(MIN_SCALED_NAME_SIZE));
        total_height = block_height(lines.len(), size);
    }

    let start_y = (name_area_bottom + NAME_FLOOR_OFFSET)
        .max(name_area_bottom + (name_area_height - total_height) / 2.0);
    let line_advance = size * (1.0 + LINE_GAP_RATIO);
    let line_count = lines.len();
    let name_spans = lines
        .into_iter()
        .enumerate()
        .map(|(i, line)| {
            let line_width = measure.text_width(&line, Face::Bold, size);
            SpanLayout {
                coords: (
                    (width - line_width) / 2.0,
                    start_y + line_advance * (line_count - 1 - i) as f32,
                ),
                text: line,
                font: SpanFont {
                    face: Face::Bold,
                    size,
                },
                colour: colours::BLACK,
            }
        })
        .collect();

    PanelLayout {
        footer: footer_span,
        name: name_spans,
        name_area: (name_area_bottom, name_area_top),
    }
}
