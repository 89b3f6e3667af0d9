//! Csvsum CLI - column selection and group-by/sum summaries for CSV files
//!
//! ```bash
//! csvsum headers input.csv                              # List columns
//! csvsum select input.csv --columns Product,Count       # Project columns by name
//! csvsum select input.csv --indices 2,0                 # Project columns by position
//! csvsum summarize input.csv -g Product -s Count        # Sum Count per Product
//! csvsum summarize input.csv --config request.json      # Request from JSON file
//! ```
//!
//! Logging goes to stderr. Set `CSVSUM_LOG` (also read from `.env`) to a
//! tracing filter such as `csvsum=debug`, or pass `-v`/`-vv`/`-vvv`.

use clap::{ArgAction, Parser, Subcommand};
use csvsum::{
    parse_bytes, select_by_indices, select_by_names, summarize, CsvSummary, RowMatrix,
    SummaryConfig,
};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Environment variable holding a tracing filter directive.
const LOG_ENV: &str = "CSVSUM_LOG";

#[derive(Parser)]
#[command(name = "csvsum")]
#[command(about = "Select columns and compute group-by/sum summaries of CSV files", long_about = None)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the header columns with their positions
    Headers {
        /// Input CSV file
        input: PathBuf,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,
    },

    /// Keep only the given columns, in the given order
    Select {
        /// Input CSV file
        input: PathBuf,

        /// Column names, comma separated
        #[arg(short, long, value_delimiter = ',', required_unless_present = "indices", conflicts_with = "indices")]
        columns: Vec<String>,

        /// Column positions (0-based), comma separated
        #[arg(short, long, value_delimiter = ',')]
        indices: Vec<usize>,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Sum numeric columns per distinct value of a group column
    Summarize {
        /// Input CSV file
        input: PathBuf,

        /// Column to group by
        #[arg(short, long)]
        group_by: Option<String>,

        /// Column to sum (repeat or comma separate for several)
        #[arg(short, long = "sum", value_delimiter = ',')]
        sum: Vec<String>,

        /// JSON request file: {"groupBy": "...", "sumBy": ["..."]}
        #[arg(long)]
        config: Option<PathBuf>,

        /// CSV delimiter (auto-detect if not specified)
        #[arg(short, long)]
        delimiter: Option<char>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() {
    // Load .env file (if present)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Headers { input, delimiter } => cmd_headers(&input, delimiter),

        Commands::Select {
            input,
            columns,
            indices,
            delimiter,
            output,
        } => cmd_select(&input, &columns, &indices, delimiter, output.as_deref()),

        Commands::Summarize {
            input,
            group_by,
            sum,
            config,
            delimiter,
            output,
        } => cmd_summarize(
            &input,
            group_by,
            sum,
            config.as_deref(),
            delimiter,
            output.as_deref(),
        ),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(verbose >= 2)
        .with_line_number(verbose >= 3)
        .init();

    debug!("csvsum started with verbosity level: {}", verbose);
}

fn load_matrix(input: &Path, delimiter: Option<char>) -> Result<RowMatrix, Box<dyn std::error::Error>> {
    let bytes = fs::read(input)?;
    let result = parse_bytes(&bytes, delimiter)?;

    info!(
        input = %input.display(),
        encoding = %result.encoding,
        delimiter = %format_delimiter(result.delimiter),
        rows = result.matrix.len(),
        "loaded CSV"
    );
    Ok(result.matrix)
}

fn cmd_headers(input: &Path, delimiter: Option<char>) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = load_matrix(input, delimiter)?;
    let headers = csvsum::headers_of(&matrix)?;

    for (i, name) in headers.iter().enumerate() {
        println!("{}\t{}", i, name);
    }
    Ok(())
}

fn cmd_select(
    input: &Path,
    columns: &[String],
    indices: &[usize],
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let matrix = load_matrix(input, delimiter)?;

    let selected = if columns.is_empty() {
        select_by_indices(&matrix, indices)?
    } else {
        select_by_names(&matrix, columns)?
    };
    info!(columns = selected.width(), "projected matrix");

    let mut writer = output_writer(output)?;
    for row in selected.rows() {
        writer.write_record(row)?;
    }
    writer.flush()?;
    Ok(())
}

fn cmd_summarize(
    input: &Path,
    group_by: Option<String>,
    sum: Vec<String>,
    config_path: Option<&Path>,
    delimiter: Option<char>,
    output: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => SummaryConfig::from_file(path)?,
        None => SummaryConfig::default(),
    }
    .merge(group_by, sum);
    debug!(?config, "summary request");

    let matrix = load_matrix(input, delimiter)?;
    let summary = summarize(&matrix, &config)?;
    info!(groups = summary.len(), "summary complete");

    let mut writer = output_writer(output)?;
    write_summary(&mut writer, &summary)?;
    writer.flush()?;
    Ok(())
}

fn write_summary<W: Write>(writer: &mut csv::Writer<W>, summary: &CsvSummary) -> csv::Result<()> {
    writer.write_record(summary.headers())?;

    for (key, sums) in summary.sorted_rows() {
        let record = std::iter::once(key.to_string()).chain(sums.iter().map(f64::to_string));
        writer.write_record(record)?;
    }
    Ok(())
}

fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "\\t".to_string(),
        c => c.to_string(),
    }
}

/// CSV writer targeting `path`, or stdout when no path is given.
fn output_writer(path: Option<&Path>) -> Result<csv::Writer<Box<dyn Write>>, Box<dyn std::error::Error>> {
    let sink: Box<dyn Write> = match path {
        Some(p) => {
            info!(path = %p.display(), "writing output");
            Box::new(fs::File::create(p)?)
        }
        None => Box::new(std::io::stdout()),
    };
    Ok(csv::Writer::from_writer(sink))
}
