use std::io;
use std::path::PathBuf;

use ab_glyph::FontArc;
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use labelsheet::rendering::text;
use labelsheet::session::default_save_dir;
use labelsheet::{Session, SheetConfig};

#[derive(Parser, Debug)]
#[command(name = "labelsheet", version, about = "Generate printable, cuttable label sheets")]
struct Cli {
    /// Directory for generated sheets (skips the save location prompt)
    #[arg(long)]
    save_dir: Option<PathBuf>,

    /// TrueType/OpenType font to use instead of the bundled one
    #[arg(long)]
    font: Option<PathBuf>,

    #[arg(long, short, default_value = "warn")]
    log_level: String,
}

fn load_font(path: Option<&PathBuf>) -> Result<FontArc> {
    let font = match path {
        Some(p) => {
            let bytes = std::fs::read(p)
                .with_context(|| format!("failed to read font {}", p.display()))?;
            text::load_font(bytes).with_context(|| format!("failed to parse font {}", p.display()))?
        }
        None => text::embedded_font().context("failed to parse bundled font")?,
    };
    Ok(font)
}

fn run(cli: Cli) -> Result<()> {
    let config = SheetConfig::default();
    let font = load_font(cli.font.as_ref())?;

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), font, config.clone());

    let dir = match cli.save_dir {
        Some(dir) => dir,
        None => {
            let cwd = std::env::current_dir().context("failed to read working directory")?;
            session.prompt_save_dir(&default_save_dir(&cwd, &config))?
        }
    };

    let saved = session.run(&dir)?;
    info!("generated {} sheet(s) in {}", saved.len(), dir.display());
    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let env = env_logger::Env::default().default_filter_or(&cli.log_level);
    env_logger::Builder::from_env(env).init();

    if let Err(e) = run(cli) {
        eprintln!("labelsheet: {:#}", e);
        std::process::exit(1);
    }
}
