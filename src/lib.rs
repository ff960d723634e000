pub mod config;
pub mod data;
pub mod error;
pub mod formatting;
pub mod load;
pub mod render;
pub mod wave;

use config::{Config, GlyphKind, RenderConfig};
use data::Sequence;
use error::*;
use load::text::TextLoader;

use clap::Parser;
use cli_log::info;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Draw a text timing diagram from edge sequences.
///
/// Each input line has the form `name | edges` where every edge character is
/// one of `-` (keep), `H`/`1`, `L`/`0`, `Z` or `B`.
#[derive(Parser, Debug)]
#[clap(version)]
pub struct Opts {
    /// Input file with sequences, read from stdin if omitted
    pub input: Option<PathBuf>,

    /// Write the diagram to this file instead of stdout
    #[clap(short, long)]
    pub output: Option<PathBuf>,

    /// Do not draw grid marks
    #[clap(short = 'G', long)]
    pub no_grid: bool,

    /// Do not draw the time axis
    #[clap(short = 'T', long)]
    pub no_time: bool,

    /// Use plain ASCII characters only
    #[clap(short = 'A', long)]
    pub ascii: bool,
}

impl Opts {
    /// Overlay command line switches on `config`.
    pub fn apply(&self, mut config: RenderConfig) -> RenderConfig {
        if self.no_grid {
            config.show_grid = false;
        }
        if self.no_time {
            config.show_time_axis = false;
        }
        if self.ascii {
            config.glyphs = GlyphKind::Ascii;
        }

        config
    }
}

/// Everything needed to produce one diagram.
pub struct Setup {
    pub sequences: Vec<Sequence>,
    pub render_config: RenderConfig,
    pub output: Option<PathBuf>,
}

/// Load and validate the input, and resolve the render configuration.
pub fn setup(opts: Opts, config: &Config) -> Result<Setup> {
    let loader = match &opts.input {
        Some(path) => TextLoader::open(path)?,
        None => TextLoader::new(io::stdin().lock())?,
    };
    let sequences = wave::load_all(&loader)?;
    let render_config = opts.apply(config.render_config());

    info!("{} sequences loaded, {:?}", sequences.len(), render_config);

    Ok(Setup {
        sequences,
        render_config,
        output: opts.output,
    })
}

/// Render into `out`.
pub fn run(setup: &Setup, out: &mut impl Write) -> Result<()> {
    render::render(&setup.sequences, &setup.render_config, out)
}

/// Render into the configured output file, or stdout.
pub fn run_to_output(setup: &Setup) -> Result<()> {
    match &setup.output {
        Some(path) => {
            let mut out = BufWriter::new(File::create(path)?);
            run(setup, &mut out)
        }

        None => {
            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            run(setup, &mut out)
        }
    }
}
