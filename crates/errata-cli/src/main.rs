use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde::Serialize;
use tokio::io::AsyncReadExt;

use errata_core::{Error, ErrorRecord, Outcome, RefExt, deferred};

/// A line that is not a JSON `{"code": .., "message": ..}` object.
const MALFORMED_RECORD: Error =
    Error::from_static("Record.Malformed", "Line is not a valid error record.");

/// The input file or stdin could not be read.
const INPUT_UNREADABLE: Error =
    Error::from_static("Input.Unreadable", "The input could not be read.");

#[derive(Debug, Parser)]
#[command(name = "errata", about = "Validate and query JSON-lines error catalogs")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Validate every record and print one report line per record.
    Check {
        /// Input file; stdin when omitted.
        path: Option<PathBuf>,
    },
    /// Print the first valid record with the given code.
    Find {
        code: String,
        /// Input file; stdin when omitted.
        path: Option<PathBuf>,
    },
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum LineReport {
    Accepted { line: usize, code: String },
    Rejected { line: usize, error: Error },
}

/// Parse one JSON line into an `Error`, keeping the reason for rejection as data.
fn parse_line(line: &str) -> Outcome<Error> {
    let record: ErrorRecord = match serde_json::from_str(line) {
        Ok(record) => record,
        Err(e) => {
            log::debug!("json decode: {e}");
            return Outcome::failure(MALFORMED_RECORD);
        }
    };
    Error::try_from(record).into()
}

/// Non-blank lines, numbered from 1.
fn records(contents: &str) -> impl Iterator<Item = (usize, &str)> {
    contents
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line.trim()))
        .filter(|(_, line)| !line.is_empty())
}

async fn read_input(path: Option<&Path>) -> Outcome<String> {
    let read = match path {
        Some(path) => tokio::fs::read_to_string(path).await,
        None => {
            let mut buf = String::new();
            tokio::io::stdin().read_to_string(&mut buf).await.map(|_| buf)
        }
    };

    match read {
        Ok(contents) => Outcome::success(contents),
        Err(e) => {
            log::error!("read input {:?}: {e}", path);
            Outcome::failure(INPUT_UNREADABLE)
        }
    }
}

async fn check(path: Option<PathBuf>) -> ExitCode {
    let contents = read_input(path.as_deref()).await;
    if contents.is_failure() {
        eprintln!("{}", contents.error());
        return ExitCode::FAILURE;
    }
    let contents = contents.unwrap();

    let mut rejected = 0usize;
    for (line, text) in records(&contents) {
        let parsed = parse_line(text);
        let report = if parsed.is_success() {
            LineReport::Accepted {
                line,
                code: parsed.unwrap().code(),
            }
        } else {
            rejected += 1;
            log::warn!("line {line} rejected: {}", parsed.error());
            LineReport::Rejected {
                line,
                error: parsed.to_error(),
            }
        };

        match serde_json::to_string(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => log::error!("json encode: {e}"),
        }
    }

    if rejected == 0 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// The first valid record whose code is `code`, or the read failure.
async fn find_record(code: &str, path: Option<&Path>) -> Outcome<Option<Error>> {
    let contents = read_input(path).await;
    if contents.is_failure() {
        return Outcome::failure(contents.to_error());
    }

    let found = deferred::present(contents.unwrap())
        .and_then(|contents| {
            records(&contents).find_map(|(_, text)| {
                parse_line(text)
                    .to_ref()
                    .when(|error| error.has_code(code))
                    .into_option()
            })
        })
        .await;
    Outcome::success(found)
}

async fn find(code: String, path: Option<PathBuf>) -> ExitCode {
    let found = find_record(&code, path.as_deref()).await;
    if found.is_failure() {
        eprintln!("{}", found.error());
        return ExitCode::FAILURE;
    }

    match found.unwrap().into_ref().map(ErrorRecord::from).into_option() {
        Some(record) => match serde_json::to_string(&record) {
            Ok(json) => {
                println!("{json}");
                ExitCode::SUCCESS
            }
            Err(e) => {
                log::error!("json encode: {e}");
                ExitCode::FAILURE
            }
        },
        None => {
            log::info!("no record with code {code}");
            ExitCode::FAILURE
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or("ERRATA_LOG", "warn")).init();

    let cli = Cli::parse();
    match cli.command {
        Command::Check { path } => check(path).await,
        Command::Find { code, path } => find(code, path).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_line_accepts_valid_record() {
        let parsed = parse_line(r#"{"code":"User.NotFound","message":"No such user."}"#);
        assert!(parsed.is_success());
        assert!(parsed.unwrap().has_code("User.NotFound"));
    }

    #[test]
    fn parse_line_rejects_malformed_json() {
        let parsed = parse_line("not json");
        assert_eq!(*parsed.error(), MALFORMED_RECORD);
    }

    #[test]
    fn parse_line_rejects_overlong_message() {
        let line = format!(r#"{{"code":"A","message":"{}"}}"#, "m".repeat(151));
        assert_eq!(*parse_line(&line).error(), Error::CAPACITY_EXCEEDED);
    }

    #[test]
    fn records_skip_blank_lines_and_keep_numbers() {
        let numbered: Vec<_> = records("a\n\n  \nb\n").collect();
        assert_eq!(numbered, vec![(1, "a"), (4, "b")]);
    }

    #[test]
    fn rejected_report_carries_the_error() {
        let report = LineReport::Rejected {
            line: 3,
            error: MALFORMED_RECORD,
        };
        let v = serde_json::to_value(&report).unwrap();
        assert_eq!(v["status"], "rejected");
        assert_eq!(v["line"], 3);
        assert_eq!(v["error"]["code"], "Record.Malformed");
    }

    #[tokio::test]
    async fn read_input_reports_missing_file() {
        let outcome = read_input(Some(Path::new("/definitely/not/here.jsonl"))).await;
        assert_eq!(*outcome.error(), INPUT_UNREADABLE);
    }

    #[tokio::test]
    async fn find_reports_unreadable_input_instead_of_no_match() {
        let found = find_record("User.NotFound", Some(Path::new("/definitely/not/here.jsonl"))).await;
        assert!(found.is_failure());
        assert_eq!(*found.error(), INPUT_UNREADABLE);
    }

    #[tokio::test]
    async fn find_returns_first_valid_match() {
        let path = std::env::temp_dir().join(format!("errata-find-{}.jsonl", std::process::id()));
        let catalog = concat!(
            "not json\n",
            r#"{"code":"User.NotFound","message":"first"}"#,
            "\n",
            r#"{"code":"User.NotFound","message":"second"}"#,
            "\n",
        );
        tokio::fs::write(&path, catalog).await.unwrap();

        let found = find_record("User.NotFound", Some(path.as_path())).await;
        let missing = find_record("User.Locked", Some(path.as_path())).await;
        tokio::fs::remove_file(&path).await.unwrap();

        assert_eq!(found.unwrap().map(|e| e.message()).as_deref(), Some("first"));
        assert!(missing.is_success());
        assert_eq!(missing.unwrap(), None);
    }
}
