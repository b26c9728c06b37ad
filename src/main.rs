/*!
Main binary for jsonparse.
*/

use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser, Subcommand};
use clap_verbosity_flag::Verbosity;
use std::io::stdout;
use std::io::{self};
use std::{
    fs::{self},
    io::{IsTerminal, Read},
    path::PathBuf,
};

use jsonparse::{ParseOptions, commands, parse_with, utils};

/// Parse a JSON document and display the resulting value tree.
#[derive(Parser)]
#[command(name = "jp", version, about, long_about = None, disable_help_subcommand = true)]
struct Args {
    /// Optional subcommands
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(value_name = "FILE")]
    /// Optional path to JSON file. If omitted, reads from STDIN
    input: Option<PathBuf>,
    /// Fail on characters that start no token instead of skipping them
    #[arg(long, action = ArgAction::SetTrue)]
    strict: bool,
    /// Fail if anything follows the first complete value
    #[arg(long, action = ArgAction::SetTrue)]
    exact: bool,
    /// Maximum nesting depth of objects and arrays
    #[arg(long, value_name = "N", conflicts_with = "no_depth_limit")]
    max_depth: Option<usize>,
    /// Disable the nesting depth limit
    #[arg(long, action = ArgAction::SetTrue)]
    no_depth_limit: bool,
    /// JSON file with parse options; flags given on the command line win
    #[arg(long, value_name = "FILE")]
    options: Option<PathBuf>,
    /// Do not pretty-print the output, instead use compact
    #[arg(long, action = ArgAction::SetTrue)]
    compact: bool,
    /// Display depth of the input document
    #[arg(long, action = ArgAction::SetTrue)]
    depth: bool,
    /// Do not display the parsed value
    #[arg(short, long, action = ArgAction::SetTrue)]
    no_display: bool,
    #[command(flatten)]
    verbose: Verbosity,
}

/// Available subcommands for `jp`
#[derive(Subcommand)]
enum Commands {
    #[command(subcommand)]
    /// Generate additional documentation and/or completions
    Generate(GenerateCommand),
}

/// Generate shell completions and man page
#[derive(Subcommand)]
enum GenerateCommand {
    /// Generate shell completions for the given shell to stdout.
    Shell { shell: clap_complete::Shell },
    /// Generate a man page for jp to output directory if specified, else
    /// the current directory.
    Man {
        /// The output directory to write the man pages.
        #[clap(short, long)]
        output_dir: Option<PathBuf>,
    },
}

impl Args {
    /// Resolve the parse options: the options file (or defaults), then the
    /// command line flags on top.
    fn parse_options(&self) -> Result<ParseOptions> {
        let mut options = match &self.options {
            Some(path) => {
                let raw = fs::read_to_string(path).with_context(|| {
                    format!("Failed to read options file {}", path.display())
                })?;
                serde_json::from_str(&raw).with_context(|| {
                    format!("Invalid options file {}", path.display())
                })?
            }
            None => ParseOptions::default(),
        };

        if self.strict {
            options.strict = true;
        }
        if self.exact {
            options.require_full_consumption = true;
        }
        if let Some(limit) = self.max_depth {
            options.max_depth = Some(limit);
        }
        if self.no_depth_limit {
            options.max_depth = None;
        }

        log::debug!("using {options:?}");
        Ok(options)
    }
}

/// Entry point for main binary.
///
/// This parses the command line arguments and parses the input document. If
/// the input is piped in, it reads from STDIN. The value is printed to STDOUT,
/// with formatting determined by the command line arguments.
fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    match args.command {
        Some(Commands::Generate(ref cmd)) => match cmd {
            GenerateCommand::Shell { shell } => {
                let mut cmd = Args::command();
                commands::generate::generate_completions(
                    *shell,
                    &mut cmd,
                    &mut stdout().lock(),
                );
            }
            GenerateCommand::Man { output_dir } => {
                for path in commands::generate::generate_man_pages(
                    &Args::command(),
                    output_dir.clone(),
                )? {
                    println!("Generated: {}", path.display());
                }
            }
        },
        None => {
            let options = args.parse_options()?;

            // Read input content
            let input_content = if let Some(path) = &args.input {
                fs::read_to_string(path).with_context(|| {
                    format!("Failed to read file {}", path.display())
                })?
            } else {
                if io::stdin().is_terminal() {
                    // No piped input and no file specified
                    let mut cmd = Args::command();
                    return Ok(cmd.print_help()?);
                }
                let mut buffer = String::new();
                io::stdin().read_to_string(&mut buffer)?;
                buffer
            };

            let value = parse_with(&input_content, &options)
                .context("Failed to parse JSON")?;

            // Display depth
            if args.depth {
                println!("Depth: {}", value.depth());
            }

            if !args.no_display {
                if !stdout().is_terminal() {
                    colored::control::set_override(false);
                }
                utils::write_colored_value(
                    &mut stdout().lock(),
                    &value,
                    !args.compact,
                )?;
            }
        }
    }

    Ok(())
}
