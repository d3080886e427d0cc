use crate::{
    font::{Face, Font, FontSet, TextMeasure},
    info::Info,
    page::Page,
    refs::{ObjectReferences, RefType},
    NametagError, Pt,
};
use id_arena::{Arena, Id};
use pdf_writer::{Finish, Pdf, Ref};
use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

/// A document is the main object that stores all the contents of the PDF
/// then renders it out with a call to [Document::write]. It always carries
/// exactly one font per [Face].
pub struct Document {
    pub info: Option<Info>,
    pub pages: Arena<Page>,
    pub page_order: Vec<Id<Page>>,
    pub fonts: Arena<Font>,
    pub faces: FontSet,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// A document set in the standard Helvetica faces
    pub fn new() -> Document {
        Document::with_fonts(Font::standard(Face::Regular), Font::standard(Face::Bold))
    }

    /// A document whose regular and bold faces are the given fonts
    pub fn with_fonts(regular: Font, bold: Font) -> Document {
        let mut fonts = Arena::new();
        let faces = FontSet {
            regular: fonts.alloc(regular),
            bold: fonts.alloc(bold),
        };
        Document {
            info: None,
            pages: Arena::new(),
            page_order: Vec::new(),
            fonts,
            faces,
        }
    }

    /// Sets information about the document. If not provided, no information block will be
    /// written to the PDF
    pub fn set_info(&mut self, info: Info) {
        self.info = Some(info);
    }

    /// The font text in `face` is set in
    pub fn font(&self, face: Face) -> &Font {
        &self.fonts[self.faces.id(face)]
    }

    /// Add a page to the end of the document, returning its id
    pub fn add_page(&mut self, page: Page) -> Id<Page> {
        let id = self.pages.alloc(page);
        self.page_order.push(id);
        id
    }

    pub fn page_count(&self) -> usize {
        self.page_order.len()
    }

    /// Pages in document order
    pub fn pages(&self) -> impl Iterator<Item = &Page> + '_ {
        self.page_order.iter().filter_map(|id| self.pages.get(*id))
    }

    /// Write the entire document to the writer. The document is "rendered" in memory
    /// first, then written out in one go.
    pub fn write<W: Write>(self, mut w: W) -> Result<(), NametagError> {
        let mut refs = ObjectReferences::new();

        let catalog_id = refs.gen(RefType::Catalog);
        let page_tree_id = refs.gen(RefType::PageTree);

        let mut writer = Pdf::new();
        if let Some(info) = &self.info {
            info.write(&mut refs, &mut writer);
        }

        let page_refs: Vec<Ref> = (0..self.page_order.len())
            .map(|i| refs.gen(RefType::Page(i)))
            .collect();

        writer
            .pages(page_tree_id)
            .count(page_refs.len() as i32)
            .kids(page_refs);

        for (id, font) in self.fonts.iter() {
            font.write(&mut refs, id, &mut writer);
        }

        for (page_index, id) in self.page_order.iter().enumerate() {
            let page = self
                .pages
                .get(*id)
                .ok_or(NametagError::PageMissing(page_index))?;
            page.write(&mut refs, page_index, page_tree_id, &self, &mut writer)?;
        }

        let mut catalog = writer.catalog(catalog_id);
        catalog.pages(page_tree_id);
        catalog.finish();

        w.write_all(writer.finish().as_slice())?;
        w.flush().map_err(Into::into)
    }

    /// Write the document to a file, creating any missing parent directories. The
    /// file is closed when this returns, whether or not writing succeeded.
    pub fn write_to_path<P: AsRef<Path>>(self, path: P) -> Result<(), NametagError> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        let out = BufWriter::new(File::create(path)?);
        self.write(out)
    }
}

impl TextMeasure for Document {
    fn text_width(&self, text: &str, face: Face, size: Pt) -> Pt {
        self.font(face).width_of_text(text, size)
    }
}
