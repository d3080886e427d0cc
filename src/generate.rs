use crate::{
    config::NametagConfig,
    font::Face,
    info::Info,
    layout::compose_pages,
    roster::{load_preferred_names, load_roster},
    Document, NametagError,
};
use std::path::PathBuf;

/// What a call to [generate] produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    pub names: usize,
    pub pages: usize,
    pub output: PathBuf,
}

/// Read the roster named by `config` and write its nametags to `config.output`.
///
/// Configuration and roster errors are reported before the output file is
/// created, so a failed run never leaves an empty PDF behind.
pub fn generate(config: &NametagConfig) -> Result<GenerationSummary, NametagError> {
    config.validate()?;

    let preferred = config
        .preferred_names
        .as_deref()
        .map(load_preferred_names)
        .transpose()?;
    let names = load_roster(&config.input, preferred.as_ref())?;
    if names.is_empty() {
        return Err(NametagError::EmptyRoster {
            path: config.input.clone(),
        });
    }

    let mut doc = Document::with_fonts(
        config.load_font(Face::Regular)?,
        config.load_font(Face::Bold)?,
    );
    doc.set_info(Info::nametags());

    let grid = config.grid();
    let pages = compose_pages(
        &doc,
        &names,
        &config.footer,
        &grid,
        config.style(),
        config.border,
    );
    for page in pages {
        doc.add_page(page);
    }

    let summary = GenerationSummary {
        names: names.len(),
        pages: doc.page_count(),
        output: config.output.clone(),
    };
    doc.write_to_path(&config.output)?;
    tracing::info!(
        "wrote {} nametags to {}",
        summary.names,
        summary.output.display()
    );
    Ok(summary)
}
