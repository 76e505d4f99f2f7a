use std::cmp::Ordering;

use clap::{ArgAction, Parser, Subcommand};
use semrange::{ParseError, Range, Version};
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, EnvFilter};

#[derive(thiserror::Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    LibraryError(#[from] semrange::Error),

    #[error("Invalid log filter: {0}")]
    LogFilter(#[from] tracing_subscriber::filter::FromEnvError),
}

impl From<ParseError> for CliError {
    fn from(err: ParseError) -> Self {
        CliError::LibraryError(err.into())
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
struct Cli {
    /// Log more about what is being done. Repeat for more detail. `RUST_LOG` overrides this.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validates that a string is a SemVer version. Prints `true` and exits 0 if so, otherwise
    /// prints `false` and exits 1.
    Valid {
        /// The version string to validate
        version: String,

        /// Allow the minor and patch components to be omitted
        #[arg(short, long)]
        lenient: bool,
    },

    /// Compares two versions by SemVer precedence and prints `<`, `=`, or `>`.
    Compare {
        /// The left-hand version
        a: String,

        /// The right-hand version
        b: String,
    },

    /// Derives a range from the version at the head of `RANGE` and prints it.
    Range {
        /// A version, optionally preceded by `[` and/or `>=`
        range: String,
    },

    /// Checks whether the range derived from `RANGE` contains `VERSION`. Prints `true` and exits 0
    /// if so, otherwise prints `false` and exits 1.
    Contains {
        /// A version, optionally preceded by `[` and/or `>=`
        range: String,

        /// The version to look for
        version: String,
    },
}

type Output = (String, i32);

fn bool_output(value: bool) -> Output {
    if value {
        ("true".to_string(), 0)
    } else {
        ("false".to_string(), 1)
    }
}

fn default_log_level(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        _ => LevelFilter::DEBUG,
    }
}

/// `RUST_LOG` wins over `-v` when set. An unparseable `RUST_LOG` is an error.
fn log_filter(verbose: u8) -> Result<EnvFilter, CliError> {
    let filter = EnvFilter::builder()
        .with_default_directive(default_log_level(verbose).into())
        .from_env()?;
    Ok(filter)
}

fn init_logging(verbose: u8) -> Result<(), CliError> {
    let filter = log_filter(verbose)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let result = init_logging(cli.verbose).and_then(|_| do_work(cli));

    match result {
        Ok((output, exit_code)) => {
            println!("{output}");
            std::process::exit(exit_code);
        }
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(2);
        }
    }
}

fn do_work(cli: Cli) -> Result<Output, CliError> {
    debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Valid { version, lenient } => {
            let parsed = Version::parse(&version, !lenient);
            if let Err(err) = &parsed {
                info!(%err, "version is invalid");
            }
            Ok(bool_output(parsed.is_ok()))
        }
        Commands::Compare { a, b } => {
            let a: Version = a.parse()?;
            let b: Version = b.parse()?;
            let symbol = match a.cmp(&b) {
                Ordering::Less => "<",
                Ordering::Equal => "=",
                Ordering::Greater => ">",
            };
            Ok((symbol.to_string(), 0))
        }
        Commands::Range { range } => {
            let range = Range::parse(&range)?;
            Ok((range.to_string(), 0))
        }
        Commands::Contains { range, version } => {
            let range = Range::parse(&range)?;
            let version: Version = version.parse()?;
            info!(%range, %version, "checking containment");
            Ok(bool_output(range.contains(&version)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    fn run(args: &[&str]) -> Result<Output, CliError> {
        let cli = Cli::try_parse_from(args.iter().copied()).unwrap();
        do_work(cli)
    }

    #[rstest]
    #[case(&["semrange", "valid", "1.2.3-rc.1"], "true", 0)]
    #[case(&["semrange", "valid", "1.2"], "false", 1)]
    #[case(&["semrange", "valid", "--lenient", "1.2"], "true", 0)]
    #[case(&["semrange", "valid", "-l", "01.2"], "false", 1)]
    #[case(&["semrange", "compare", "1.0.0-alpha", "1.0.0"], "<", 0)]
    #[case(&["semrange", "compare", "1.0.0+a", "1.0.0+b"], "=", 0)]
    #[case(&["semrange", "compare", "2.0.0", "1.10.0"], ">", 0)]
    #[case(&["semrange", "range", "[>=1.2.0"], "[1.2.0-1.3.0]", 0)]
    #[case(&["semrange", "range", "0.0.0"], "[0.0.0]", 0)]
    #[case(&["semrange", "contains", "1.2.0", "1.2.9"], "true", 0)]
    #[case(&["semrange", "contains", "1.2.0", "1.3.0"], "false", 1)]
    #[case(&["semrange", "-v", "contains", "0", "99.0.0"], "true", 0)]
    fn test_commands(#[case] args: &[&str], #[case] output: &str, #[case] exit_code: i32) {
        let (actual_output, actual_exit_code) = run(args).unwrap();
        assert_eq!(output, actual_output);
        assert_eq!(exit_code, actual_exit_code);
    }

    #[rstest]
    #[case(&["semrange", "compare", "1.2", "1.2.0"])]
    #[case(&["semrange", "range", "latest"])]
    #[case(&["semrange", "contains", "1.2.0", "1.2.x"])]
    fn test_command_errors(#[case] args: &[&str]) {
        assert!(matches!(run(args), Err(CliError::LibraryError(_))));
    }

    #[test]
    fn test_verbose_count() {
        let cli = Cli::try_parse_from(["semrange", "-vv", "range", "1.0.0"]).unwrap();
        assert_eq!(2, cli.verbose);
    }

    #[rstest]
    #[case(0, LevelFilter::WARN)]
    #[case(1, LevelFilter::INFO)]
    #[case(2, LevelFilter::DEBUG)]
    #[case(5, LevelFilter::DEBUG)]
    fn test_default_log_level(#[case] verbose: u8, #[case] expected: LevelFilter) {
        assert_eq!(expected, default_log_level(verbose));
    }

    #[test]
    fn test_no_subcommand_shows_help() {
        assert!(Cli::try_parse_from(["semrange"]).is_err());
    }
}
