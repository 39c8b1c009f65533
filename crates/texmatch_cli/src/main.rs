//! Command-line entry point for `texmatch_core`.
//!
//! # Responsibility
//! - Provide a small executable to normalize, compare and rank expressions.
//! - Keep output deterministic for scripting and quick sanity checks.

use clap::{Args, Parser, Subcommand};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use texmatch_core::{
    default_log_level, init_logging, normalize_latex, ConfigError, ExpressionMatcher,
    LoggingError, ScorerConfig,
};

#[derive(Debug, Parser)]
#[command(name = "texmatch", version, about = "Fuzzy matching for LaTeX expressions")]
struct Cli {
    /// Absolute directory for rolling log files; logging is off when omitted.
    #[arg(long, global = true)]
    log_dir: Option<String>,
    /// Log level (trace|debug|info|warn|error); requires `--log-dir`.
    #[arg(long, global = true, requires = "log_dir")]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Print a health-check line and the core version.
    Ping,
    /// Print the normalized form of one expression.
    Normalize {
        #[arg(allow_hyphen_values = true)]
        expression: String,
    },
    /// Score two expressions against each other.
    Compare {
        #[arg(allow_hyphen_values = true)]
        left: String,
        #[arg(allow_hyphen_values = true)]
        right: String,
        #[command(flatten)]
        scoring: ScoringArgs,
        /// Exit with status 1 when the score is below this value.
        #[arg(long)]
        threshold: Option<f64>,
        /// Print the full report as JSON.
        #[arg(long)]
        json: bool,
    },
    /// Score candidates against a reference, best match first.
    Rank {
        #[arg(allow_hyphen_values = true)]
        reference: String,
        #[arg(required = true, allow_hyphen_values = true)]
        candidates: Vec<String>,
        #[command(flatten)]
        scoring: ScoringArgs,
    },
}

#[derive(Debug, Args)]
struct ScoringArgs {
    /// JSON file with scorer settings.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Overrides `ngram_size` from the config file.
    #[arg(long)]
    ngram_size: Option<usize>,
}

#[derive(Debug)]
enum CliError {
    Logging(LoggingError),
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseConfig {
        path: PathBuf,
        source: serde_json::Error,
    },
    InvalidConfig(ConfigError),
    Encode(serde_json::Error),
}

impl Display for CliError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(err) => write!(f, "{err}"),
            Self::ReadConfig { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::ParseConfig { path, source } => {
                write!(f, "invalid config `{}`: {source}", path.display())
            }
            Self::InvalidConfig(err) => write!(f, "invalid config: {err}"),
            Self::Encode(err) => write!(f, "failed to encode report: {err}"),
        }
    }
}

impl Error for CliError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(err) => Some(err),
            Self::ReadConfig { source, .. } => Some(source),
            Self::ParseConfig { source, .. } => Some(source),
            Self::InvalidConfig(err) => Some(err),
            Self::Encode(err) => Some(err),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode, CliError> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or_else(|| default_log_level());
        init_logging(level, log_dir).map_err(CliError::Logging)?;
    }

    match cli.command {
        Command::Ping => {
            println!("texmatch_core ping={}", texmatch_core::ping());
            println!("texmatch_core version={}", texmatch_core::core_version());
        }
        Command::Normalize { expression } => {
            println!("{}", normalize_latex(&expression));
        }
        Command::Compare {
            left,
            right,
            scoring,
            threshold,
            json,
        } => {
            let matcher = build_matcher(&scoring)?;
            let report = matcher.compare(&left, &right);
            if json {
                let encoded = serde_json::to_string_pretty(&report).map_err(CliError::Encode)?;
                println!("{encoded}");
            } else {
                println!("{:.4}", report.score);
            }

            if let Some(threshold) = threshold {
                let matched = report.meets(threshold);
                info!(
                    "event=threshold_checked module=cli status=ok threshold={} matched={}",
                    threshold, matched
                );
                if !matched {
                    return Ok(ExitCode::FAILURE);
                }
            }
        }
        Command::Rank {
            reference,
            candidates,
            scoring,
        } => {
            let matcher = build_matcher(&scoring)?;
            for ranked in matcher.rank_candidates(&reference, &candidates) {
                println!(
                    "{}\t{:.4}\t{}",
                    ranked.index, ranked.score, candidates[ranked.index]
                );
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn build_matcher(args: &ScoringArgs) -> Result<ExpressionMatcher, CliError> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => ScorerConfig::default(),
    };
    if let Some(ngram_size) = args.ngram_size {
        config.ngram_size = ngram_size;
    }
    ExpressionMatcher::try_new(config).map_err(CliError::InvalidConfig)
}

fn load_config(path: &Path) -> Result<ScorerConfig, CliError> {
    let raw = std::fs::read_to_string(path).map_err(|source| CliError::ReadConfig {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&raw).map_err(|source| CliError::ParseConfig {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::{Cli, Command};
    use clap::{CommandFactory, Parser};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn log_level_without_log_dir_is_rejected() {
        let err = Cli::try_parse_from(["texmatch", "--log-level", "debug", "ping"])
            .expect_err("log level alone should be rejected");
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }

    #[test]
    fn log_level_with_log_dir_is_accepted() {
        let cli = Cli::try_parse_from([
            "texmatch",
            "--log-dir",
            "/tmp/texmatch-logs",
            "--log-level",
            "debug",
            "ping",
        ])
        .expect("log level with log dir should parse");
        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        assert!(matches!(cli.command, Command::Ping));
    }
}
