//! CLI frontend for the rpgme character editor.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use rpgme_core::SeedProfile;
use tracing::Level;

/// Page used when no `--url` is given.
const DEFAULT_URL: &str = "http://localhost:8000/";

#[derive(Parser)]
#[command(
    name = "rpgme",
    about = "rpgme: build an RPG character and share it as a seed",
    version,
    propagate_version = true
)]
struct Cli {
    /// Seed layout: classic (9 digits) or compact (8 digits)
    #[arg(short, long, global = true)]
    profile: Option<SeedProfile>,

    /// JSON editor configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log more (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the character fields, their ranges, and seed positions
    Fields,

    /// Print the seed for the default character plus assignments
    Encode {
        /// Field assignments, e.g. `--set hair=3 --set fire=1`
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,
    },

    /// Show the character a seed describes
    Decode {
        /// The seed digits
        seed: String,

        /// Print the record as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the share link for a seed
    Share {
        /// The seed digits
        seed: String,

        /// Page the link points at
        #[arg(short, long, default_value = DEFAULT_URL)]
        url: String,
    },

    /// Open a page, apply edits, and print the rewritten address
    Edit {
        /// Page address, optionally carrying a seed
        #[arg(short, long, default_value = DEFAULT_URL)]
        url: String,

        /// Field assignments, applied in order
        #[arg(short = 's', long = "set", value_name = "FIELD=VALUE")]
        assignments: Vec<String>,

        /// Display name
        #[arg(short, long)]
        name: Option<String>,

        /// Print the record as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Roll a random character
    Random {
        /// RNG seed for a reproducible roll
        #[arg(long)]
        rng_seed: Option<u64>,

        /// Page address to write the seed into
        #[arg(short, long, default_value = DEFAULT_URL)]
        url: String,
    },

    /// Launch the interactive terminal editor
    Tui {
        /// Page address, optionally carrying a seed
        #[arg(short, long, default_value = DEFAULT_URL)]
        url: String,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();

    let result = commands::load_config(cli.config.as_deref(), cli.profile).and_then(|config| {
        // The terminal editor owns the screen, so it gets no log output.
        if !matches!(cli.command, Commands::Tui { .. }) {
            init_logging(cli.verbose);
        }

        match cli.command {
            Commands::Fields => commands::fields::run(&config),
            Commands::Encode { assignments } => commands::encode::run(&config, &assignments),
            Commands::Decode { seed, json } => commands::decode::run(&config, &seed, json),
            Commands::Share { seed, url } => commands::share::run(&config, &seed, &url),
            Commands::Edit {
                url,
                assignments,
                name,
                json,
            } => commands::edit::run(config, &url, &assignments, name, json),
            Commands::Random { rng_seed, url } => commands::random::run(config, &url, rng_seed),
            Commands::Tui { url } => commands::tui::run(config, &url),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
