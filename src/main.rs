use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use http_argument::{
    codec,
    log_info, log_warn,
    utils::{set_global_log_level, LogLevel},
    Argument, Arguments, Charset, Config,
};

#[derive(Parser)]
#[command(name = "http-argument", about = "Percent-encode and decode HTTP request arguments")]
struct Cli {
    /// JSON config file with default_charset, always_encoded and log_level
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Escape a single token
    Encode {
        text: String,
        #[arg(long)]
        charset: Option<String>,
    },
    /// Unescape a single token
    Decode {
        text: String,
        #[arg(long)]
        charset: Option<String>,
    },
    /// Build a query string from NAME=VALUE pairs
    Query {
        #[arg(required = true)]
        pairs: Vec<String>,
        #[arg(long)]
        charset: Option<String>,
        /// Pairs are already escaped and get decoded first
        #[arg(long)]
        pre_encoded: bool,
        /// Emit names and values without escaping them
        #[arg(long)]
        raw: bool,
    },
    /// Print the decoded pairs of a query string
    Parse {
        query: String,
        #[arg(long)]
        charset: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => Config::default(),
    };
    set_global_log_level(if cli.verbose { LogLevel::Debug } else { config.log_level });

    match cli.command {
        Command::Encode { text, charset } => {
            let charset = resolve_charset(&config, charset.as_deref())?;
            println!("{}", codec::encode(&text, charset));
        }
        Command::Decode { text, charset } => {
            let charset = resolve_charset(&config, charset.as_deref())?;
            let decoded = codec::decode(&text, charset).context("decoding input")?;
            println!("{}", decoded);
        }
        Command::Query {
            pairs,
            charset,
            pre_encoded,
            raw,
        } => {
            let label = charset.unwrap_or_else(|| config.default_charset.clone());
            let arguments = build_arguments(&pairs, &label, pre_encoded, skip_escaping(&config, raw))?;
            log_info!("Query", "built {} arguments using {}", arguments.len(), label);
            println!("{}", arguments.to_query_string());
        }
        Command::Parse { query, charset } => {
            let charset = resolve_charset(&config, charset.as_deref())?;
            let arguments = Arguments::parse_query(&query, charset).context("parsing query")?;
            for argument in &arguments {
                println!("{}\t{}", argument.name(), argument.value());
            }
        }
    }

    Ok(())
}

fn resolve_charset(config: &Config, label: Option<&str>) -> anyhow::Result<Charset> {
    let charset = match label {
        Some(label) => Charset::for_label(label)?,
        None => config.charset()?,
    };
    Ok(charset)
}

/// `--raw` wins, otherwise the config decides.
fn skip_escaping(config: &Config, raw: bool) -> bool {
    raw || !config.always_encoded
}

fn build_arguments(pairs: &[String], label: &str, pre_encoded: bool, raw: bool) -> anyhow::Result<Arguments> {
    let mut arguments = Arguments::new();

    for pair in pairs {
        let Some((name, value)) = pair.split_once('=') else {
            bail!("expected NAME=VALUE, got {:?}", pair);
        };
        let mut argument = match Argument::parse(name, value, pre_encoded, label) {
            Ok(argument) => argument,
            Err(err) if err.is_fatal() => return Err(err.into()),
            Err(err) => {
                log_warn!("Query", "skipping {:?}: {}", pair, err);
                continue;
            }
        };
        argument.set_always_encoded(!raw);
        arguments.push(argument);
    }

    Ok(arguments)
}
