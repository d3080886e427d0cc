use crate::{
    font::{Face, Font},
    layout::{PageGrid, PanelStyle},
    pagesize::PaperSize,
    NametagError,
};
use clap::ValueEnum;
use std::path::{Path, PathBuf};

pub const DEFAULT_OUTPUT: &str = "nametags.pdf";
pub const DEFAULT_FOOTER: &str = "INFO 5410, Urban Systems, Fall 2025";

/// The fold a tent card is printed for
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum TentStyle {
    /// Back, front and glue flap stacked in thirds
    #[default]
    Tri,
    /// Nametag over a glue flap
    Bi,
}

impl From<TentStyle> for PanelStyle {
    fn from(style: TentStyle) -> Self {
        match style {
            TentStyle::Tri => PanelStyle::TentTri,
            TentStyle::Bi => PanelStyle::TentBi,
        }
    }
}

/// Everything needed to turn a roster into a sheet of nametags
#[derive(Debug, Clone, PartialEq)]
pub struct NametagConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    /// Printed along the bottom of every nametag
    pub footer: String,
    pub paper: PaperSize,
    pub border: bool,
    /// Rows per page; [None] uses the default for the panel style
    pub rows: Option<u16>,
    /// Columns per page; [None] uses the default for the panel style
    pub cols: Option<u16>,
    /// Print tent cards of this style instead of flat nametags
    pub tent: Option<TentStyle>,
    pub preferred_names: Option<PathBuf>,
    /// A TrueType / OpenType font to use in place of Helvetica
    pub regular_font: Option<PathBuf>,
    /// A TrueType / OpenType font to use in place of Helvetica Bold
    pub bold_font: Option<PathBuf>,
}

impl Default for NametagConfig {
    fn default() -> Self {
        NametagConfig {
            input: PathBuf::new(),
            output: PathBuf::from(DEFAULT_OUTPUT),
            footer: DEFAULT_FOOTER.to_string(),
            paper: PaperSize::default(),
            border: true,
            rows: None,
            cols: None,
            tent: None,
            preferred_names: None,
            regular_font: None,
            bold_font: None,
        }
    }
}

impl NametagConfig {
    /// A default configuration reading the roster at `input`
    pub fn new<P: Into<PathBuf>>(input: P) -> NametagConfig {
        NametagConfig {
            input: input.into(),
            ..NametagConfig::default()
        }
    }

    pub fn style(&self) -> PanelStyle {
        self.tent.map(PanelStyle::from).unwrap_or_default()
    }

    /// The grid panels are laid out on, always on landscape paper
    pub fn grid(&self) -> PageGrid {
        PageGrid::for_style(self.style(), self.rows, self.cols, self.paper.landscape())
    }

    /// Catch configuration mistakes before any roster is read
    pub fn validate(&self) -> Result<(), NametagError> {
        match &self.preferred_names {
            Some(path) if !path.is_file() => Err(NametagError::PreferredNamesNotFound {
                path: path.clone(),
            }),
            _ => Ok(()),
        }
    }

    /// The font for `face`: the configured replacement if any, else the standard face
    pub fn load_font(&self, face: Face) -> Result<Font, NametagError> {
        let path = match face {
            Face::Regular => self.regular_font.as_deref(),
            Face::Bold => self.bold_font.as_deref(),
        };
        match path {
            Some(path) => load_font_file(path),
            None => Ok(Font::standard(face)),
        }
    }
}

fn load_font_file(path: &Path) -> Result<Font, NametagError> {
    let font = Font::load(std::fs::read(path)?)?;
    tracing::debug!(path = %path.display(), font = %font.name(), "loaded font");
    Ok(font)
}
