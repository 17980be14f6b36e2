//! Command-line interface for xmlcodegen
//!
//! A small discovery front end over the generator registry: lists the
//! supported target languages, APIs, and (language, API) pairs.

#[cfg(feature = "cli")]
use clap::{Parser, Subcommand};

#[cfg(feature = "cli")]
#[derive(Parser, Debug)]
#[command(name = "xmlcodegen")]
#[command(author, version, about = "Schema-driven parser generator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[cfg(feature = "cli")]
#[derive(Subcommand, Debug)]
enum Commands {
    /// List the supported target languages
    Languages,
    /// List the supported parsing APIs
    Apis,
    /// List every supported (language, API) pair
    Targets,
}

#[cfg(feature = "cli")]
fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Languages => {
            for (language, description) in xmlcodegen::list_available_languages() {
                println!("{:<12} {}", language, description);
            }
        }
        Commands::Apis => {
            let apis = xmlcodegen::list_available_apis();
            if apis.is_empty() {
                println!("no generator is tied to a parsing API");
            }
            for (api, description) in apis {
                println!("{:<12} {}", api, description);
            }
        }
        Commands::Targets => {
            for (language, api) in xmlcodegen::list_available_language_api_pairs() {
                match api {
                    Some(api) => println!("{} ({})", language, api),
                    None => println!("{}", language),
                }
            }
        }
    }
}

#[cfg(not(feature = "cli"))]
fn main() {
    eprintln!("xmlcodegen was built without the 'cli' feature");
    std::process::exit(1);
}
