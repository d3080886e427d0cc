use anyhow::{Context, Result};
use clap::Parser;
use nametag_gen::{generate, pagesize::PaperSize, NametagConfig, TentStyle, DEFAULT_FOOTER, DEFAULT_OUTPUT};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Generate printable nametags (4 per landscape page by default) from a CSV roster
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Path to the students CSV file; needs a column like "Full name"
    #[arg(value_name = "INPUT_CSV")]
    input: PathBuf,

    /// Output PDF path
    #[arg(short, long, default_value = DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Footer text printed on each nametag
    #[arg(long, default_value = DEFAULT_FOOTER)]
    footer: String,

    /// Paper size, always printed landscape
    #[arg(long, value_enum, default_value_t = PaperSize::Letter)]
    page_size: PaperSize,

    /// Disable the thin cut border around each nametag
    #[arg(long)]
    no_border: bool,

    /// Rows per page [default: 2, or 1 for tri-fold tents]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    rows: Option<u16>,

    /// Columns per page [default: 2, or 1 for bi-fold tents]
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    cols: Option<u16>,

    /// Generate tent cards, 2 per page unless --rows or --cols is given
    #[arg(long)]
    tent: bool,

    /// Tent style: back/front/flap in thirds, or nametag over flap
    #[arg(long, value_enum, default_value_t = TentStyle::Tri)]
    tent_style: TentStyle,

    /// CSV with columns 'netid,preferred_name' overriding names by email netid
    #[arg(long, value_name = "CSV")]
    preferred_names: Option<PathBuf>,

    /// TrueType / OpenType font replacing Helvetica for footers
    #[arg(long, value_name = "FONT")]
    regular_font: Option<PathBuf>,

    /// TrueType / OpenType font replacing Helvetica Bold for names
    #[arg(long, value_name = "FONT")]
    bold_font: Option<PathBuf>,
}

impl From<Args> for NametagConfig {
    fn from(args: Args) -> Self {
        NametagConfig {
            input: args.input,
            output: args.output,
            footer: args.footer,
            paper: args.page_size,
            border: !args.no_border,
            rows: args.rows,
            cols: args.cols,
            tent: args.tent.then_some(args.tent_style),
            preferred_names: args.preferred_names,
            regular_font: args.regular_font,
            bold_font: args.bold_font,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("nametag_gen=info,nametags=info")),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = NametagConfig::from(Args::parse());
    tracing::debug!(?config, "starting");

    generate(&config).with_context(|| {
        format!(
            "failed to generate nametags from {}",
            config.input.display()
        )
    })?;
    Ok(())
}
