//! Command-line access to the value predicates and projection helpers.
//!
//! Values are given as JSON literals, `@path` for a JSON file, or `-` for
//! stdin. Results are printed as JSON (`undefined` for an undefined result).
//! Predicate-style commands print `true`/`false` and exit with
//! [`exit_codes::FALSE`] when the answer is `false`.

use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use standard::exit_codes;
use standard::io::config::{DEFAULT_CONFIG_FILE, StandardConfig, load_config, write_config};
use standard::io::input::{read_json, read_value, render};
use standard::{
    Mapping, MatchOptions, Pattern, Predicate, Value, all_of_with, check, contains, define,
    derive, get, is_equivalent, is_similar, one_of_with, type_of,
};

#[derive(Parser)]
#[command(
    name = "standard",
    version,
    about = "Type predicates, safe defaults and store projection over JSON values"
)]
struct Cli {
    /// Config file (defaults to `standard.toml` in the working directory).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the type tag of a value.
    Type { value: String },
    /// Evaluate a named predicate (`email`, `day-of-week`, `unempty-array`, ...).
    Is {
        #[arg(value_parser = Predicate::from_str)]
        predicate: Predicate,
        value: String,
    },
    /// Print the value, or the fallback, or `[]`.
    Define {
        value: String,
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Print the value if it has the expected tag, otherwise a default.
    Check {
        value: String,
        /// Expected type tag (defaults to `array`).
        #[arg(long)]
        tag: Option<String>,
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Print the element at an index (negative counts from the end).
    #[command(allow_negative_numbers = true)]
    Get {
        sequence: String,
        index: String,
        #[arg(long)]
        fallback: Option<String>,
    },
    /// Case-insensitive substring or element containment.
    Contains { haystack: String, needle: String },
    /// Case-insensitive string equality.
    Equivalent { left: String, right: String },
    /// Like `equivalent`, with numbers compared by their decimal form.
    Similar { left: String, right: String },
    /// True if any candidate matches.
    OneOf(MatchArgs),
    /// True if every candidate matches.
    AllOf(MatchArgs),
    /// Project store fields through a mapping of output key to source path.
    Derive {
        #[arg(long)]
        mapping: String,
        #[arg(long)]
        store: String,
    },
    /// Write a default config file.
    InitConfig {
        /// Overwrite an existing file.
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Args)]
struct MatchArgs {
    value: String,
    /// Candidate compared as a plain string.
    #[arg(long = "literal")]
    literals: Vec<String>,
    /// Candidate pattern in `/source/flags` form.
    #[arg(long = "pattern")]
    patterns: Vec<String>,
    /// Compare plain-string candidates ignoring case.
    #[arg(long)]
    fold_case: bool,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // Usage errors share the INVALID code; `--help`/`--version` succeed.
            let code = if err.use_stderr() {
                exit_codes::INVALID
            } else {
                exit_codes::OK
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    let code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            exit_codes::INVALID
        }
    };
    std::process::exit(code);
}

fn run(cli: Cli) -> Result<i32> {
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));
    let config = match cli.command {
        Command::InitConfig { .. } => StandardConfig::default(),
        _ => load_config(&config_path)?,
    };
    standard::logging::init(&config.log_filter);
    tracing::debug!(
        path = %config_path.display(),
        log_filter = %config.log_filter,
        fold_case = config.matching.fold_case,
        "loaded config"
    );

    match cli.command {
        Command::Type { value } => {
            println!("{}", type_of(&read_value(&value)?));
            Ok(exit_codes::OK)
        }
        Command::Is { predicate, value } => {
            let value = read_value(&value)?;
            tracing::debug!(%predicate, tag = %value.tag(), "evaluating predicate");
            print_bool(predicate.evaluate(&value))
        }
        Command::Define { value, fallback } => {
            print_value(&define(read_value(&value)?, read_optional(fallback)?))
        }
        Command::Check {
            value,
            tag,
            fallback,
        } => print_value(&check(
            read_value(&value)?,
            tag.as_deref(),
            read_optional(fallback)?,
        )),
        Command::Get {
            sequence,
            index,
            fallback,
        } => print_value(&get(
            &read_value(&sequence)?,
            &read_value(&index)?,
            read_optional(fallback)?,
        )),
        Command::Contains { haystack, needle } => {
            print_bool(contains(&read_value(&haystack)?, &read_value(&needle)?))
        }
        Command::Equivalent { left, right } => {
            print_bool(is_equivalent(&read_value(&left)?, &read_value(&right)?))
        }
        Command::Similar { left, right } => {
            print_bool(is_similar(&read_value(&left)?, &read_value(&right)?))
        }
        Command::OneOf(args) => {
            let (value, candidates, options) = match_inputs(args, config.matching)?;
            print_bool(one_of_with(&value, &candidates, options))
        }
        Command::AllOf(args) => {
            let (value, candidates, options) = match_inputs(args, config.matching)?;
            print_bool(all_of_with(&value, &candidates, options))
        }
        Command::Derive { mapping, store } => {
            let mapping = Mapping::try_from(read_json(&mapping)?).context("read mapping")?;
            let store = read_value(&store)?;
            print_value(&derive(mapping).project(&store))
        }
        Command::InitConfig { force } => cmd_init_config(&config_path, force),
    }
}

fn cmd_init_config(path: &Path, force: bool) -> Result<i32> {
    if path.exists() && !force {
        bail!("{} already exists (use --force to overwrite)", path.display());
    }
    write_config(path, &StandardConfig::default())?;
    println!("{}", path.display());
    Ok(exit_codes::OK)
}

/// Build the `(value, candidates, options)` triple for `one-of`/`all-of`.
///
/// The value is taken verbatim as text. `--fold-case` overrides the config.
fn match_inputs(args: MatchArgs, configured: MatchOptions) -> Result<(Value, Value, MatchOptions)> {
    let mut candidates: Vec<Value> = args.literals.into_iter().map(Value::from).collect();
    for literal in &args.patterns {
        let pattern =
            Pattern::parse(literal).with_context(|| format!("parse pattern {}", literal))?;
        candidates.push(Value::RegExp(pattern));
    }
    let options = MatchOptions {
        fold_case: args.fold_case || configured.fold_case,
    };
    Ok((Value::from(args.value), Value::Array(candidates), options))
}

fn read_optional(arg: Option<String>) -> Result<Value> {
    match arg {
        Some(arg) => read_value(&arg),
        None => Ok(Value::Undefined),
    }
}

fn print_value(value: &Value) -> Result<i32> {
    println!("{}", render(value)?);
    Ok(exit_codes::OK)
}

fn print_bool(answer: bool) -> Result<i32> {
    println!("{}", answer);
    Ok(if answer {
        exit_codes::OK
    } else {
        exit_codes::FALSE
    })
}
