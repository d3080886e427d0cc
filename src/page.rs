use crate::colour::{colours, Colour};
use crate::content::render_contents;
use crate::document::Document;
use crate::font::Face;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::refs::{ObjectReferences, RefType};
use crate::transform::Transform;
use crate::units::Pt;
use crate::NametagError;
use pdf_writer::{Filter, Finish, Name, Pdf, Ref};

/// The face and size a span of text is set in
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct SpanFont {
    pub face: Face,
    pub size: Pt,
}

/// A single run of text, positioned by the start of its baseline
#[derive(Clone, PartialEq, Debug)]
pub struct SpanLayout {
    pub text: String,
    pub font: SpanFont,
    pub colour: Colour,
    pub coords: (Pt, Pt),
}

/// How a path's outline is painted
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Stroke {
    pub width: Pt,
    pub colour: Colour,
    /// Dash pattern as (on, off) lengths; solid when `None`
    pub dash: Option<(Pt, Pt)>,
}

impl Stroke {
    /// A solid black line of the given width
    pub fn solid(width: Pt) -> Stroke {
        Stroke {
            width,
            colour: colours::BLACK,
            dash: None,
        }
    }

    pub fn dashed(width: Pt, on: Pt, off: Pt) -> Stroke {
        Stroke {
            dash: Some((on, off)),
            ..Stroke::solid(width)
        }
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Shape {
    /// An unfilled rectangle outline
    Rect(Rect),
    Line { from: (Pt, Pt), to: (Pt, Pt) },
}

/// A stroked, never filled, path
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct PathLayout {
    pub shape: Shape,
    pub stroke: Stroke,
}

#[derive(Clone, PartialEq, Debug)]
pub enum PageContents {
    Text(Vec<SpanLayout>),
    Path(PathLayout),
    /// Contents laid out in their own coordinate frame, mapped onto the page by
    /// the transform
    Transformed(Transform, Vec<PageContents>),
}

impl PageContents {
    /// Visit every text span, descending into transformed groups. Each span is
    /// paired with the transform that places it on the page.
    pub fn for_each_span<F: FnMut(&SpanLayout, Transform)>(&self, f: &mut F) {
        self.visit_spans(Transform::identity(), f);
    }

    fn visit_spans<F: FnMut(&SpanLayout, Transform)>(&self, outer: Transform, f: &mut F) {
        match self {
            PageContents::Text(spans) => spans.iter().for_each(|span| f(span, outer)),
            PageContents::Path(_) => {}
            PageContents::Transformed(transform, contents) => {
                let inner = transform.then(outer);
                for content in contents.iter() {
                    content.visit_spans(inner, f);
                }
            }
        }
    }
}

/// A single sheet of paper
#[derive(Debug, Clone)]
pub struct Page {
    /// The size of the page
    pub media_box: Rect,
    /// The laid out contents, painted in order
    pub contents: Vec<PageContents>,
}

impl Page {
    pub fn new(size: PageSize) -> Page {
        Page {
            media_box: Rect::sized(size.0, size.1),
            contents: Vec::default(),
        }
    }

    pub fn width(&self) -> Pt {
        self.media_box.width()
    }

    pub fn height(&self) -> Pt {
        self.media_box.height()
    }

    /// Append contents to be painted over everything already on the page
    pub fn add_contents<I: IntoIterator<Item = PageContents>>(&mut self, contents: I) {
        self.contents.extend(contents);
    }

    /// All text on the page along with the transform that places it, in paint order
    pub fn spans(&self) -> Vec<(SpanLayout, Transform)> {
        let mut spans = Vec::new();
        for content in self.contents.iter() {
            content.for_each_span(&mut |span, transform| spans.push((span.clone(), transform)));
        }
        spans
    }

    pub(crate) fn write(
        &self,
        refs: &mut ObjectReferences,
        page_index: usize,
        page_tree_id: Ref,
        document: &Document,
        writer: &mut Pdf,
    ) -> Result<(), NametagError> {
        let id = refs
            .get(RefType::Page(page_index))
            .ok_or(NametagError::PageMissing(page_index))?;
        let content_id = refs.gen(RefType::ContentForPage(page_index));

        let mut page = writer.page(id);
        page.media_box(self.media_box.into());
        page.parent(page_tree_id);

        let mut resources = page.resources();
        let mut resource_fonts = resources.fonts();
        for (font_id, _) in document.fonts.iter() {
            if let Some(font_ref) = refs.get(RefType::Font(font_id.index())) {
                resource_fonts.pair(Name(format!("F{}", font_id.index()).as_bytes()), font_ref);
            }
        }
        resource_fonts.finish();
        resources.finish();

        page.contents(content_id);
        page.finish();

        let rendered = render_contents(&self.contents, document)?;
        let compressed = miniz_oxide::deflate::compress_to_vec_zlib(
            &rendered,
            miniz_oxide::deflate::CompressionLevel::DefaultCompression as u8,
        );
        writer
            .stream(content_id, compressed.as_slice())
            .filter(Filter::FlateDecode);

        Ok(())
    }
}
