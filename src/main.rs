use std::{
  fs,
  path::{Path, PathBuf},
  process::ExitCode,
};

use clap::{Args, Parser, Subcommand};
use doctools::{
  diagrams,
  output::write_atomic,
  png::{encode_with, verify_chunks, EncodeOptions},
  toc::{rewrite_file, TocMarkers},
  Result,
};
use log::{error, info, LevelFilter};

/// Documentation helpers for ChapterForge.
#[derive(Debug, Parser)]
#[command(name = "doctools", version, about)]
struct Cli {
  /// More log output (-v info, -vv debug, -vvv trace). RUST_LOG overrides.
  #[arg(short, long, action = clap::ArgAction::Count, global = true)]
  verbose: u8,

  #[command(subcommand)]
  command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
  /// Render every documentation diagram as PNG.
  Diagrams(DiagramArgs),
  /// Regenerate the table of contents of a Markdown file in place.
  Toc(TocArgs),
}

#[derive(Debug, Args)]
struct DiagramArgs {
  /// Directory to write the PNG files into; created if missing.
  #[arg(long, default_value = "docs/diagrams")]
  out_dir: PathBuf,

  /// Zlib compression level, 0 through 10.
  #[arg(long, default_value_t = EncodeOptions::default().compression_level,
    value_parser = clap::value_parser!(u8).range(0..=10))]
  level: u8,

  /// Re-read each written file and verify its chunk framing.
  #[arg(long)]
  check: bool,
}

#[derive(Debug, Args)]
struct TocArgs {
  /// The Markdown file to update.
  #[arg(long, default_value = "README.md")]
  readme: PathBuf,

  /// Don't write anything; fail if the file is out of date.
  #[arg(long)]
  check: bool,

  /// Pattern for the line that opens the generated region.
  #[arg(long, default_value = TocMarkers::DEFAULT_START)]
  start_marker: String,

  /// Pattern for the line that closes the generated region.
  #[arg(long, default_value = TocMarkers::DEFAULT_END)]
  end_marker: String,
}

fn init_logging(verbose: u8) {
  let level = match verbose {
    0 => LevelFilter::Warn,
    1 => LevelFilter::Info,
    2 => LevelFilter::Debug,
    _ => LevelFilter::Trace,
  };
  env_logger::Builder::new().filter_level(level).parse_default_env().format_timestamp(None).init();
}

fn render_diagrams(args: &DiagramArgs) -> Result<()> {
  fs::create_dir_all(&args.out_dir)?;
  let options = EncodeOptions { compression_level: args.level };
  for diagram in diagrams::ALL {
    let canvas = (diagram.draw)()?;
    let path = args.out_dir.join(diagram.file_name);
    let bytes = encode_with(&canvas, options);
    write_atomic(&path, &bytes)?;
    if args.check {
      let ihdr = verify_chunks(&fs::read(&path)?)?;
      info!("{}: {}x{} ok", path.display(), ihdr.width, ihdr.height);
    }
    println!("Wrote {}", path.display());
  }
  Ok(())
}

fn update_toc(args: &TocArgs) -> Result<()> {
  let markers = TocMarkers::new(&args.start_marker, &args.end_marker)?;
  let path: &Path = &args.readme;
  if rewrite_file(path, &markers, args.check)? {
    println!("Updated {}", path.display());
  }
  Ok(())
}

fn main() -> ExitCode {
  let cli = Cli::parse();
  init_logging(cli.verbose);

  let outcome = match &cli.command {
    Command::Diagrams(args) => render_diagrams(args),
    Command::Toc(args) => update_toc(args),
  };
  match outcome {
    Ok(()) => ExitCode::SUCCESS,
    Err(e) => {
      error!("{e}");
      ExitCode::FAILURE
    }
  }
}
