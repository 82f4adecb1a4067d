use std::path::PathBuf;

use clap::{Parser, Subcommand};
use utility_analysis::{ExpansionReport, OutputFormat, init_logging, load_request};

#[derive(Parser, Debug)]
#[command(name = "utility-analysis")]
#[command(about = "Validate and expand multi-parameter utility analysis requests")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, default_value = "warn", global = true)]
    log_level: String,

    /// Append logs to this file instead of stderr
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Check a request file and report how many configurations it describes
    Validate {
        /// Request file (.yaml, .yml or .json)
        request: PathBuf,
    },
    /// Print every configuration a request expands to
    Expand {
        /// Request file (.yaml, .yml or .json)
        request: PathBuf,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    init_logging(&args.log_level, args.log_file.as_deref())?;

    match args.command {
        Command::Validate { request } => {
            let options = load_request(&request)?;
            println!(
                "{}: ok ({} configuration(s))",
                request.display(),
                options.n_configurations()
            );
        }
        Command::Expand { request, format } => {
            let options = load_request(&request)?;
            let report = ExpansionReport::new(&options);
            print!("{}", report.render(format)?);
        }
    }

    Ok(())
}
