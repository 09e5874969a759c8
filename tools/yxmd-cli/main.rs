use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;
use yxmd::prelude::*;

const DEFAULT_INPUT: &str = "data/sample_workflow.yxmd";
const DEFAULT_OUTPUT: &str = "parsed_workflow.json";

/// Inspect Alteryx .yxmd workflow files
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Default non-numeric positions to 0 instead of failing
    #[arg(long, global = true)]
    lenient: bool,

    /// Report dangling connections and duplicate tool ids on stderr
    #[arg(long, global = true)]
    validate: bool,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a summary of the workflow's tools and connections
    Summary {
        /// Path to the workflow file
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
    /// Write the extracted workflow as JSON
    Json {
        /// Path to the workflow file
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,

        /// Where to write the JSON document
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// Print the JSON to stdout instead of writing a file
        #[arg(long, conflicts_with = "output")]
        stdout: bool,
    },
    /// Print a per-tool report and workflow statistics
    Details {
        /// Path to the workflow file
        #[arg(default_value = DEFAULT_INPUT)]
        input: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        exit_with_error(&e.to_string());
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn run(cli: Cli) -> std::result::Result<(), WorkflowError> {
    let parser = if cli.lenient {
        WorkflowParser::builder().lenient_positions().build()
    } else {
        WorkflowParser::new()
    };

    match cli.command {
        Command::Summary { input } => {
            let workflow = load(&parser, &input, cli.validate)?;
            SummaryFormatter::print(&workflow);
        }
        Command::Json {
            input,
            output,
            stdout,
        } => {
            let workflow = load(&parser, &input, cli.validate)?;
            if stdout {
                println!("{}", to_json_string(&workflow)?);
            } else {
                write_json(&workflow, &output)?;
                println!("Workflow data saved to {}", output.display());
            }
        }
        Command::Details { input } => {
            let workflow = load(&parser, &input, cli.validate)?;
            SummaryFormatter::print(&workflow);
            println!();
            print!("{}", DetailFormatter::format(&workflow));
        }
    }

    Ok(())
}

fn load(
    parser: &WorkflowParser,
    input: &Path,
    run_validation: bool,
) -> std::result::Result<WorkflowDocument, WorkflowError> {
    info!("Loading workflow from '{}'", input.display());
    let workflow = parser.parse_file(input)?;
    debug!(
        version = %workflow.version,
        tools = workflow.tools.len(),
        connections = workflow.connections.len(),
        "Workflow loaded"
    );

    if run_validation {
        let issues = validate(&workflow);
        if issues.is_empty() {
            eprintln!("Validation: no issues found");
        } else {
            eprintln!("Validation: {} issue(s)", issues.len());
            for issue in &issues {
                eprintln!("  - {}", issue);
            }
        }
    }

    Ok(workflow)
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
