use clap::{Parser, Subcommand, ValueEnum};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use workflowhub::catalog::{self, Snippet};
use workflowhub::error::{WorkflowError, WorkflowResult};
use workflowhub::{filename, transform};

#[derive(Parser)]
#[command(
    name = "workflowhub",
    version,
    about = "Markup transforms, filename builders, and the snippet catalog"
)]
struct Cli {
    /// Emit results as JSON instead of plain text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Pretty-print HTML, CSS, or JavaScript
    Fmt {
        #[arg(value_enum)]
        kind: Kind,
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Minify HTML, CSS, or JavaScript
    Minify {
        #[arg(value_enum)]
        kind: Kind,
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Fill empty icon spans and prefix matching headings with icons
    FixIcons {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Remove messy-HTML patterns and report each fix category
    Clean {
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Re-case plain text
    Case {
        #[arg(value_enum)]
        mode: CaseMode,
        /// Input file; stdin when omitted
        file: Option<PathBuf>,
    },
    /// Build a standardized PDF filename
    Filename {
        #[command(subcommand)]
        kind: FilenameKind,
    },
    /// Search a snippet catalog section
    Search {
        #[arg(value_enum)]
        section: Section,
        /// Substring to look for; everything when omitted
        query: Option<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Kind {
    Html,
    Css,
    Js,
}

#[derive(Clone, Copy, ValueEnum)]
enum CaseMode {
    Sentence,
    Lower,
    Upper,
    Capitalized,
    Alternating,
    Title,
    Inverse,
}

#[derive(Subcommand)]
enum FilenameKind {
    /// Course/training document: YYYY-MM-DD_course-name.pdf
    Course {
        /// Document date, YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Course name, any punctuation
        #[arg(long)]
        name: String,
    },
    /// Bulletin: YYYY-NN.pdf
    Bulletin {
        /// Four-digit year, or a full YYYY-MM-DD date
        #[arg(long)]
        year: String,
        /// Bulletin number, 1-99
        #[arg(long)]
        number: u32,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Section {
    Code,
    Icons,
    Paths,
    Email,
    Notices,
    Modules,
}

impl Section {
    fn entries(self) -> &'static [Snippet] {
        match self {
            Section::Code => catalog::CODE_TEMPLATES,
            Section::Icons => catalog::ICONS,
            Section::Paths => catalog::SOURCE_PATHS,
            Section::Email => catalog::EMAIL_TEMPLATES,
            Section::Notices => catalog::PASS_NOTICES,
            Section::Modules => catalog::MODULES,
        }
    }
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> WorkflowResult<()> {
    match &cli.command {
        Command::Fmt { kind, file } => {
            let input = read_input(file.as_deref())?;
            let output = match kind {
                Kind::Html => transform::html::pretty_print(&input)?,
                Kind::Css => transform::css::pretty_print(&input)?,
                Kind::Js => transform::js::pretty_print(&input)?,
            };
            println!("{}", output);
            Ok(())
        }
        Command::Minify { kind, file } => {
            let input = read_input(file.as_deref())?;
            let output = match kind {
                Kind::Html => transform::html::minify(&input)?,
                Kind::Css => transform::css::minify(&input)?,
                Kind::Js => transform::js::minify(&input)?,
            };
            println!("{}", output);
            Ok(())
        }
        Command::FixIcons { file } => {
            let input = read_input(file.as_deref())?;
            let outcome = transform::icons::repair_icons(&input)?;
            if cli.json {
                println!("{}", to_json(&outcome)?);
            } else {
                println!("{}", outcome.html);
                print_report(outcome.report.entries());
                eprintln!("✓ {} repair(s) applied", outcome.repairs);
            }
            Ok(())
        }
        Command::Clean { file } => {
            let input = read_input(file.as_deref())?;
            let outcome = transform::cleanup::clean(&input)?;
            if cli.json {
                println!("{}", to_json(&outcome)?);
            } else {
                println!("{}", outcome.html);
                if outcome.report.is_empty() {
                    eprintln!("✓ nothing to clean up");
                } else {
                    print_report(outcome.report.entries());
                }
            }
            Ok(())
        }
        Command::Case { mode, file } => {
            let input = read_input(file.as_deref())?;
            let output = match mode {
                CaseMode::Sentence => transform::textcase::sentence_case(&input)?,
                CaseMode::Lower => transform::textcase::lower_case(&input)?,
                CaseMode::Upper => transform::textcase::upper_case(&input)?,
                CaseMode::Capitalized => transform::textcase::capitalized_case(&input)?,
                CaseMode::Alternating => transform::textcase::alternating_case(&input)?,
                CaseMode::Title => transform::textcase::title_case(&input)?,
                CaseMode::Inverse => transform::textcase::inverse_case(&input)?,
            };
            println!("{}", output);
            Ok(())
        }
        Command::Filename { kind } => {
            let name = match kind {
                FilenameKind::Course { date, name } => filename::course_filename(date, name)?,
                FilenameKind::Bulletin { year, number } => {
                    // Accept a full date and use its leading four digits.
                    let year = year.split('-').next().unwrap_or(year.as_str());
                    filename::bulletin_filename(year, *number)?
                }
            };
            println!("{}", name);
            Ok(())
        }
        Command::Search { section, query } => {
            let hits = catalog::search(section.entries(), query.as_deref().unwrap_or(""));
            if cli.json {
                println!("{}", to_json(&hits)?);
            } else {
                if hits.is_empty() {
                    eprintln!("No entries found");
                }
                for snippet in hits {
                    println!("── {}", snippet.name);
                    if let Some(description) = snippet.description {
                        println!("   {}", description);
                    }
                    println!("{}", snippet.body);
                    println!();
                }
            }
            Ok(())
        }
    }
}

fn print_report(entries: &[String]) {
    for entry in entries {
        eprintln!("  - {}", entry);
    }
}

fn to_json<T: serde::Serialize>(value: &T) -> WorkflowResult<String> {
    serde_json::to_string_pretty(value).map_err(|e| WorkflowError::Io(e.to_string()))
}

fn read_input(path: Option<&Path>) -> WorkflowResult<String> {
    match path {
        Some(p) => std::fs::read_to_string(p)
            .map_err(|e| WorkflowError::Io(format!("failed to read {}: {}", p.display(), e))),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .map_err(|e| WorkflowError::Io(e.to_string()))?;
            Ok(buf)
        }
    }
}
