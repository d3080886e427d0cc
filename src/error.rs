use std::path::PathBuf;
use thiserror::Error;

/// All errors that the crate can generate. Text that does not fit its panel is
/// never an error; it is rendered best-effort instead.
#[derive(Error, Debug)]
pub enum NametagError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [csv] failed to read a roster or preferred-names file
    Csv(#[from] csv::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse a replacement font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error(
        "could not find a full name column in {}; make sure there is a column like 'Full name'",
        path.display()
    )]
    /// No header in the roster normalises to a recognised name column
    MissingNameColumn { path: PathBuf },

    #[error("no names found in {}", path.display())]
    /// The roster parsed but contained no usable names
    EmptyRoster { path: PathBuf },

    #[error("preferred names CSV not found: {}", path.display())]
    /// A preferred-names file was configured but does not exist
    PreferredNamesNotFound { path: PathBuf },

    #[error("page {0} is missing from the document")]
    /// The page order refers to a page that is not in the document
    PageMissing(usize),
}
