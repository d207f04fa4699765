use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use glpi_marks::commands::{clipboard, export, stats, tickets};
use glpi_marks::{load_config, AppError, FilterState, MarkFilter, OperatorFilter, Session};

#[derive(Parser, Debug)]
#[command(name = "glpi-marks")]
#[command(about = "Per-operator mark statistics for helpdesk ticket CSV exports")]
#[command(version)]
struct Cli {
    /// TOML configuration file (column names, delimiter, labels)
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the statistics report for an operator
    Stats {
        #[command(flatten)]
        source: SourceArgs,

        /// Copy the report to the system clipboard
        #[arg(long)]
        copy: bool,

        /// Output statistics as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the ticket table for an operator and mark
    Tickets {
        #[command(flatten)]
        source: SourceArgs,

        /// Mark to show; "-" shows the unresolved joint tickets
        #[arg(long, short = 'm', default_value = "")]
        mark: String,

        /// Output tickets as JSON
        #[arg(long)]
        json: bool,
    },

    /// Write statistics and the ticket table to an XLSX workbook
    Export {
        #[command(flatten)]
        source: SourceArgs,

        /// Mark to include; "-" exports the unresolved joint tickets
        #[arg(long, short = 'm', default_value = "")]
        mark: String,

        /// Destination .xlsx file
        #[arg(long, short = 'o', value_name = "FILE")]
        output: PathBuf,
    },
}

#[derive(Args, Debug)]
struct SourceArgs {
    /// Helpdesk CSV export (header row required)
    #[arg(long, short = 'i', value_name = "FILE")]
    input: PathBuf,

    /// Operator to filter on; defaults to every operator
    #[arg(long, short = 'p', value_name = "NAME")]
    operator: Option<String>,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    if let Err(e) = run(cli) {
        eprintln!("Ошибка при обработке файла: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let config = load_config(cli.config.as_deref())?;
    let mut session = Session::new(config);

    match cli.command {
        Command::Stats { source, copy, json } => {
            open(&mut session, &source, "")?;
            let output = stats::run_stats(&session, json)?;
            println!("{}", output);
            if copy {
                if let Some(report) = session.report() {
                    if clipboard::try_copy(&report) {
                        println!("Скопировано!");
                    }
                }
            }
        }
        Command::Tickets { source, mark, json } => {
            open(&mut session, &source, &mark)?;
            println!("{}", tickets::run_tickets(&session, json)?);
        }
        Command::Export {
            source,
            mark,
            output,
        } => {
            open(&mut session, &source, &mark)?;
            let result = export::run_export(&session, &output)?;
            println!(
                "Сохранено: {} ({} байт, {} мс)",
                result.path, result.size_bytes, result.duration_ms
            );
        }
    }
    Ok(())
}

fn open(session: &mut Session, source: &SourceArgs, mark: &str) -> Result<(), AppError> {
    let all_label = session.config().all_operators_label.clone();
    let operator = match source.operator.as_deref() {
        Some(name) => OperatorFilter::parse(name, &all_label),
        None => OperatorFilter::All,
    };
    session.set_filter(FilterState::new(operator, MarkFilter::parse(mark)));

    let parsed = session.load_path(&source.input)?;
    for w in &parsed.warnings {
        log::warn!("Строка {}: {}", w.line, w.message);
    }
    Ok(())
}
