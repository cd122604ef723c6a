use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use clinic::{Config, Db, Value, ValueRecord};
use std::path::PathBuf;

/// Clinic - query the clinic store from the command line
#[derive(Parser, Debug)]
#[command(name = "clinic")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML config file; defaults apply when omitted
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Database URL, overriding the config (`sqlite:<path>`)
    #[arg(long, global = true)]
    database_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Parser, Debug)]
enum Command {
    /// Print the labelled SELECT for the given columns without running it
    Sql {
        table: String,
        #[arg(required = true)]
        columns: Vec<String>,
    },

    /// List rows, showing foreign keys by label
    List {
        table: String,
        #[arg(required = true)]
        columns: Vec<String>,
    },

    /// List rows where any shown value contains TEXT, ignoring case
    Search {
        table: String,
        text: String,
        #[arg(required = true)]
        columns: Vec<String>,
    },

    /// List consultations from a date on, soonest first
    Upcoming {
        /// Reference date, `YYYY-MM-DD`; defaults to today
        #[arg(long)]
        date: Option<NaiveDate>,
    },
}

fn main() -> Result<()> {
    // Defaults to warnings only; override with RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let config = load_config(&cli)?;
    let db = Db::open(&config)
        .with_context(|| format!("cannot open `{}`", config.database.url))?;

    run(cli.command, &db)
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    if let Some(url) = &cli.database_url {
        config = config.database_url(url);
    }

    Ok(config)
}

fn run(command: Command, db: &Db) -> Result<()> {
    match command {
        Command::Sql { table, columns } => {
            println!("{}", db.select_sql(&table, &columns)?);
        }
        Command::List { table, columns } => {
            print_rows(&db.listing(&table, &columns)?);
        }
        Command::Search {
            table,
            text,
            columns,
        } => {
            print_rows(&db.search(&table, &columns, &text)?);
        }
        Command::Upcoming { date } => {
            let date = date.unwrap_or_else(|| Local::now().date_naive());
            log::debug!("listing upcoming consultations; date={date}");

            for row in db.upcoming_consultations(date)? {
                println!(
                    "{}\t{}\t{}\t{}\t{}",
                    row.id, row.scheduled_at, row.doctor, row.specialization, row.patient
                );
            }
        }
    }

    Ok(())
}

fn print_rows(rows: &[ValueRecord]) {
    for row in rows {
        let line: Vec<String> = row.iter().map(Value::to_string).collect();
        println!("{}", line.join("\t"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn database_url_overrides_config() {
        let cli = Cli::try_parse_from([
            "clinic",
            "sql",
            "doctor",
            "id",
            "name",
            "--database-url",
            "sqlite::memory:",
        ])
        .unwrap();

        let config = load_config(&cli).unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
        assert!(matches!(cli.command, Command::Sql { ref columns, .. } if columns.len() == 2));
    }

    #[test]
    fn upcoming_date_is_parsed() {
        let cli = Cli::try_parse_from(["clinic", "upcoming", "--date", "2025-01-01"]).unwrap();

        let Command::Upcoming { date } = cli.command else {
            panic!("expected upcoming");
        };
        assert_eq!(date, NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn columns_are_required() {
        assert!(Cli::try_parse_from(["clinic", "list", "doctor"]).is_err());
    }
}
