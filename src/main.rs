use std::io::Read;
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use trapped_water::*;

/// Computes how much rain water a row of columns traps
#[derive(Parser, Debug)]
#[command(name = "trapped-water")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Comma-separated column heights, e.g. "0,4,0,0,0,6,0,6,4,0"
    heights: Option<String>,

    /// Read the heights from a file
    #[arg(short = 'f', long = "file", conflicts_with_all = ["heights", "stdin"])]
    file: Option<PathBuf>,

    /// Read the heights from standard input
    #[arg(long, conflicts_with = "heights")]
    stdin: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Skip the text diagram
    #[arg(long = "no-diagram")]
    no_diagram: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn input_text(&self) -> Result<String> {
        if let Some(heights) = &self.heights {
            return Ok(heights.clone());
        }
        if let Some(path) = &self.file {
            log::info!("Reading heights from {}", path.display());
            return Ok(std::fs::read_to_string(path)?);
        }
        if self.stdin {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            return Ok(text);
        }
        log::info!("No input given, using the default dataset");
        Ok(HeightList::default_dataset().to_text())
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

/// Stdout line for input with no usable heights; JSON mode keeps stdout empty.
fn empty_summary(json: bool) -> Option<&'static str> {
    (!json).then_some(report::EMPTY_SUMMARY)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let text = cli.input_text()?;
    let report = match evaluate(&text) {
        Evaluation::Computed(report) => report,
        Evaluation::Empty { .. } => {
            if let Some(summary) = empty_summary(cli.json) {
                println!("{}", summary);
            }
            eprintln!("Error: {}", WaterError::EmptyInput);
            std::process::exit(1);
        }
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    if let Some(warning) = report.warning() {
        eprintln!("Warning: {}", warning);
    }
    if !cli.no_diagram {
        print!(
            "{}",
            render_diagram(&report.elevations, &report.profile.water_at)
        );
        println!();
    }
    println!("{}", report.summary());
    println!("Water per position: {}", report.profile);

    Ok(())
}
