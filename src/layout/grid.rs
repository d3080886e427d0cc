use super::panel::{Panel, PanelStyle};
use crate::font::TextMeasure;
use crate::page::Page;
use crate::pagesize::PageSize;
use crate::rect::Rect;
use crate::units::Pt;

/// Rows and columns used when the caller does not override them
pub const DEFAULT_GRID: (u16, u16) = (2, 2);

/// How panels are tiled onto each page: `rows` x `cols` equal cells filled left to
/// right, top to bottom
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PageGrid {
    pub rows: u16,
    pub cols: u16,
    pub page_size: PageSize,
}

impl PageGrid {
    /// A grid of at least one row and one column
    pub fn new(rows: u16, cols: u16, page_size: PageSize) -> PageGrid {
        PageGrid {
            rows: rows.max(1),
            cols: cols.max(1),
            page_size,
        }
    }

    /// The grid for `style`, honouring any rows or columns the caller asked for. Tent
    /// cards fit two to a page unless either dimension was given: tri-folds side by
    /// side, bi-folds stacked.
    pub fn for_style(
        style: PanelStyle,
        rows: Option<u16>,
        cols: Option<u16>,
        page_size: PageSize,
    ) -> PageGrid {
        let (default_rows, default_cols) = match (style, rows, cols) {
            (PanelStyle::TentTri, None, None) => (1, 2),
            (PanelStyle::TentBi, None, None) => (2, 1),
            _ => DEFAULT_GRID,
        };
        PageGrid::new(
            rows.unwrap_or(default_rows),
            cols.unwrap_or(default_cols),
            page_size,
        )
    }

    pub fn panels_per_page(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Pages needed for `count` panels
    pub fn page_count(&self, count: usize) -> usize {
        count.div_ceil(self.panels_per_page())
    }

    pub fn panel_width(&self) -> Pt {
        self.page_size.0 / self.cols as f32
    }

    pub fn panel_height(&self) -> Pt {
        self.page_size.1 / self.rows as f32
    }

    /// The page index and page-space bounds of panel `index`
    pub fn slot(&self, index: usize) -> (usize, Rect) {
        let per_page = self.panels_per_page();
        let cell = index % per_page;
        let col = cell % self.cols as usize;
        let row = cell / self.cols as usize;

        let (width, height) = (self.panel_width(), self.panel_height());
        let x = width * col as f32;
        let y = self.page_size.1 - height * (row + 1) as f32;
        (index / per_page, Rect::from_origin(x, y, width, height))
    }
}

/// Lay out one panel per name, in order, onto as many pages as the grid needs.
/// Cells past the last name on the final page are left empty.
pub fn compose_pages<M: TextMeasure, S: AsRef<str>>(
    measure: &M,
    names: &[S],
    footer: &str,
    grid: &PageGrid,
    style: PanelStyle,
    draw_border: bool,
) -> Vec<Page> {
    let mut pages: Vec<Page> = Vec::with_capacity(grid.page_count(names.len()));
    for (i, name) in names.iter().enumerate() {
        if i % grid.panels_per_page() == 0 {
            pages.push(Page::new(grid.page_size));
        }
        let (_, bounds) = grid.slot(i);
        let panel = Panel {
            bounds,
            name: name.as_ref(),
            footer,
            style,
        };
        if let Some(page) = pages.last_mut() {
            page.add_contents(panel.render(measure, draw_border));
        }
    }

    tracing::info!(
        names = names.len(),
        pages = pages.len(),
        rows = grid.rows,
        cols = grid.cols,
        ?style,
        "composed pages"
    );
    pages
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::fit::tests::HalfEm;
    use crate::page::PageContents;
    use crate::pagesize::{PageOrientation, LETTER};

    fn letter_grid(rows: u16, cols: u16) -> PageGrid {
        PageGrid::new(rows, cols, LETTER.landscape())
    }

    #[test]
    fn slots_fill_left_to_right_top_to_bottom() {
        let grid = letter_grid(2, 2);
        assert_eq!(
            grid.slot(0),
            (0, Rect::from_origin(Pt(0.0), Pt(306.0), Pt(396.0), Pt(306.0)))
        );
        assert_eq!(
            grid.slot(1),
            (0, Rect::from_origin(Pt(396.0), Pt(306.0), Pt(396.0), Pt(306.0)))
        );
        assert_eq!(
            grid.slot(2),
            (0, Rect::from_origin(Pt(0.0), Pt(0.0), Pt(396.0), Pt(306.0)))
        );
        assert_eq!(
            grid.slot(5),
            (1, Rect::from_origin(Pt(396.0), Pt(306.0), Pt(396.0), Pt(306.0)))
        );
    }

    #[test]
    fn page_count_rounds_up() {
        let grid = letter_grid(2, 2);
        assert_eq!(grid.page_count(0), 0);
        assert_eq!(grid.page_count(1), 1);
        assert_eq!(grid.page_count(4), 1);
        assert_eq!(grid.page_count(5), 2);
        assert_eq!(letter_grid(3, 1).page_count(7), 3);
    }

    #[test]
    fn degenerate_grids_are_clamped() {
        let grid = letter_grid(0, 0);
        assert_eq!((grid.rows, grid.cols), (1, 1));
        assert_eq!(grid.panels_per_page(), 1);
    }

    #[test]
    fn tents_default_to_two_per_page() {
        let size = LETTER.landscape();
        let tri = PageGrid::for_style(PanelStyle::TentTri, None, None, size);
        assert_eq!((tri.rows, tri.cols), (1, 2));
        let bi = PageGrid::for_style(PanelStyle::TentBi, None, None, size);
        assert_eq!((bi.rows, bi.cols), (2, 1));
        let flat = PageGrid::for_style(PanelStyle::Flat, None, None, size);
        assert_eq!((flat.rows, flat.cols), DEFAULT_GRID);

        // any explicit dimension switches off the tent default
        let tri = PageGrid::for_style(PanelStyle::TentTri, Some(3), None, size);
        assert_eq!((tri.rows, tri.cols), (3, 2));
        let bi = PageGrid::for_style(PanelStyle::TentBi, None, Some(1), size);
        assert_eq!((bi.rows, bi.cols), (2, 1));
    }

    #[test]
    fn composes_one_panel_per_name_in_order() {
        let names: Vec<String> = (0..9).map(|i| format!("Name {i}")).collect();
        let grid = letter_grid(2, 2);
        let pages = compose_pages(&HalfEm, &names, "INFO 5410", &grid, PanelStyle::Flat, true);
        assert_eq!(pages.len(), grid.page_count(names.len()));
        assert_eq!(pages.len(), 3);

        let panels_on = |page: &Page| {
            page.contents
                .iter()
                .filter(|c| matches!(c, PageContents::Transformed(..)))
                .count()
        };
        assert_eq!(panels_on(&pages[0]), 4);
        assert_eq!(panels_on(&pages[1]), 4);
        assert_eq!(panels_on(&pages[2]), 1);

        let texts: Vec<String> = pages
            .iter()
            .flat_map(|page| page.spans())
            .map(|(span, _)| span.text)
            .filter(|text| text.starts_with("Name"))
            .collect();
        assert_eq!(texts, names);
    }

    #[test]
    fn pages_use_the_grid_page_size() {
        let grid = letter_grid(1, 1);
        let pages = compose_pages(&HalfEm, &["Ada"], "x", &grid, PanelStyle::TentBi, false);
        assert_eq!(pages.len(), 1);
        assert_eq!(pages[0].width(), Pt(792.0));
        assert_eq!(pages[0].height(), Pt(612.0));
    }

    #[test]
    fn no_names_make_no_pages() {
        let names: [&str; 0] = [];
        let pages = compose_pages(&HalfEm, &names, "x", &letter_grid(2, 2), PanelStyle::Flat, true);
        assert!(pages.is_empty());
    }
}
