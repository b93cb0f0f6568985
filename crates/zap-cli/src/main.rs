use std::fs;
use std::io::{self, BufRead, Write};
use std::process;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use serde::Serialize;

use zap_core::dict::{parse_dictionary_toml, DictConfigError, DictError, SnippetIndex};
use zap_core::resolver;
use zap_session::{KeyEvent, ZapSession};

#[derive(Parser)]
#[command(name = "zap", about = "Snippet dictionary resolver")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse and index a dictionary, reporting its stats
    Check {
        /// Path to the dictionary TOML file
        dict_file: String,
    },

    /// Resolve a query against a dictionary
    Resolve {
        /// Path to the dictionary TOML file
        dict_file: String,
        /// Input text to resolve
        query: String,
        /// Print the forced-uppercase form
        #[arg(long)]
        shift: bool,
        /// Print every ranked candidate, not just the first
        #[arg(long)]
        all: bool,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Interactive line-oriented resolution on stdin
    Repl {
        /// Path to the dictionary TOML file
        dict_file: String,
    },
}

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Config(#[from] DictConfigError),
    #[error("{0}")]
    Dict(#[from] DictError),
    #[error("no match")]
    NoMatch,
}

fn main() {
    #[cfg(feature = "trace")]
    init_tracing();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Check { dict_file } => cmd_check(&dict_file),
        Command::Resolve {
            dict_file,
            query,
            shift,
            all,
            json,
        } => cmd_resolve(&dict_file, &query, shift, all, json),
        Command::Repl { dict_file } => cmd_repl(&dict_file),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}

#[cfg(feature = "trace")]
fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("zap_core=debug,zap_session=debug")
            }),
        )
        .init();
}

fn load_index(path: &str) -> Result<SnippetIndex, CliError> {
    let text = fs::read_to_string(path)?;
    let entries = parse_dictionary_toml(&text)?;
    Ok(SnippetIndex::build(entries)?)
}

fn cmd_check(dict_file: &str) -> Result<(), CliError> {
    let index = load_index(dict_file)?;
    println!("Entries: {}", index.len());
    println!("Names:   {}", index.name_count());
    println!("Tags:    {}", index.tag_count());
    println!("Chars:   {}", index.char_count());
    Ok(())
}

#[derive(Serialize)]
struct ResolveReport<'a> {
    query: &'a str,
    candidates: &'a [String],
    shifted: &'a [String],
}

fn cmd_resolve(
    dict_file: &str,
    query: &str,
    shift: bool,
    all: bool,
    json: bool,
) -> Result<(), CliError> {
    let index = load_index(dict_file)?;
    let resolution = resolver::resolve(query, &index);

    if json {
        let report = ResolveReport {
            query,
            candidates: &resolution.primary,
            shifted: &resolution.shifted,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&report).expect("report serializes")
        );
        return Ok(());
    }

    if resolution.is_empty() {
        return Err(CliError::NoMatch);
    }

    let list = if shift {
        &resolution.shifted
    } else {
        &resolution.primary
    };
    if all {
        for candidate in list {
            println!("{candidate}");
        }
    } else {
        println!("{}", list[0]);
    }
    Ok(())
}

fn cmd_repl(dict_file: &str) -> Result<(), CliError> {
    let index = Arc::new(load_index(dict_file)?);
    let mut session = ZapSession::new(index);

    let stdin = io::stdin();
    let mut out = io::stdout();
    writeln!(
        out,
        "type to resolve; :n/:p cycle, :s submit, :s! submit shifted, :b backspace, :c clear, :q quit"
    )?;

    for line in stdin.lock().lines() {
        let line = line?;
        match line.trim_end() {
            ":q" => break,
            ":n" => {
                session.handle_key(KeyEvent::CycleForward);
            }
            ":p" => {
                session.handle_key(KeyEvent::CycleBackward);
            }
            ":b" => {
                session.handle_key(KeyEvent::Backspace);
            }
            ":c" => {
                session.cancel();
            }
            ":s" | ":s!" => {
                let shifted = line.trim_end() == ":s!";
                match session.submit(shifted) {
                    Some(text) => {
                        writeln!(out, "{text}")?;
                        break;
                    }
                    None => writeln!(out, "(nothing to submit)")?,
                }
            }
            // A plain line replaces the input buffer, typed one char at a
            // time like the real input layer would.
            text => {
                session.cancel();
                for ch in text.chars() {
                    session.handle_key(KeyEvent::text(&ch.to_string()));
                }
            }
        }
        render_matches(&mut out, &session)?;
    }
    Ok(())
}

fn render_matches(out: &mut impl Write, session: &ZapSession) -> Result<(), io::Error> {
    let m = session.matches();
    if m.is_empty() {
        writeln!(out, "[{}] (no match)", session.input())?;
        return Ok(());
    }
    writeln!(out, "[{}]", session.input())?;
    for (i, candidate) in m.primary.iter().enumerate() {
        let marker = if i == m.selected { '>' } else { ' ' };
        writeln!(out, "{marker} {i}: {candidate}  (shift: {})", m.shifted[i])?;
    }
    Ok(())
}
