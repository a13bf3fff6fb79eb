//! AirTrack admin console
//!
//! Terminal admin console for airline operations: flights, passengers,
//! bookings, a live dashboard, and the monthly reports snapshot, all
//! over a single in-memory store owned by the session.

use clap::{Parser, ValueEnum};

use airtrack_core::logging_facility::{init, Profile};
use airtrack_core::{seed, Store};

mod auth;
mod repl;
mod screens;

#[derive(Debug, Parser)]
#[command(name = "airtrack")]
#[command(about = "AirTrack airline operations admin console", long_about = None)]
struct Cli {
    /// Logging profile
    #[arg(long, value_enum, default_value_t = ProfileArg::Dev)]
    profile: ProfileArg,

    /// Start with an empty store instead of the demo dataset
    #[arg(long)]
    empty: bool,

    /// Skip the login prompt
    #[arg(long)]
    skip_login: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ProfileArg {
    /// Human-readable logs at debug level
    Dev,
    /// JSON logs at info level
    Prod,
}

impl From<ProfileArg> for Profile {
    fn from(arg: ProfileArg) -> Self {
        match arg {
            ProfileArg::Dev => Profile::Development,
            ProfileArg::Prod => Profile::Production,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init(cli.profile.into());

    println!("AirTrack Admin Console");
    println!("Type 'help' for commands, 'quit' to exit.");
    println!();

    if !cli.skip_login {
        if let Err(e) = auth::login() {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }

    let store = if cli.empty {
        Store::new()
    } else {
        seed::demo_store()
    };
    let mut session = repl::Session::new(store);

    if let Err(e) = repl::run(&mut session) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
