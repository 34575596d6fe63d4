use chirpy::application::{init, ChirpService, InitOutcome};
use chirpy::cli::{format_chirp, format_chirp_list, to_json, Cli, Commands};
use chirpy::error::ChirpyError;
use chirpy::infrastructure::logging::init_logging;
use chirpy::infrastructure::{Config, JsonFileDatabase};

use clap::Parser;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), ChirpyError> {
    let mut config = Config::resolve(cli.config.as_deref())?;
    if let Some(db) = cli.db {
        config.database = db;
    }

    init_logging(cli.verbose, &config.log_level);
    tracing::debug!(database = %config.database.display(), "resolved configuration");

    match cli.command {
        Commands::Init { path } => {
            let path = path.unwrap_or(config.database);
            match init(&path)? {
                InitOutcome::Created => println!("Initialized chirpy database at {}", path.display()),
                InitOutcome::AlreadyExists => {
                    println!("Database already exists at {}", path.display())
                }
            }
            Ok(())
        }
        Commands::Create { body } => {
            let service = ChirpService::new(JsonFileDatabase::open(&config.database)?);
            let chirp = service.create(&body)?;
            println!("Created chirp {}", chirp.id);
            Ok(())
        }
        Commands::List { limit, json } => {
            let service = ChirpService::new(JsonFileDatabase::open(&config.database)?);
            let chirps = service.list(limit)?;
            if json {
                println!("{}", to_json(&chirps)?);
            } else {
                print!("{}", format_chirp_list(&chirps));
                if chirps.is_empty() {
                    println!();
                }
            }
            Ok(())
        }
        Commands::Show { id, json } => {
            let service = ChirpService::new(JsonFileDatabase::open(&config.database)?);
            let chirp = service.show(id)?;
            if json {
                println!("{}", to_json(&chirp)?);
            } else {
                println!("{}", format_chirp(&chirp));
            }
            Ok(())
        }
    }
}
