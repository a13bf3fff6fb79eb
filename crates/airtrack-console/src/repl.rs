//! Interactive console loop
//!
//! One process, one session, one store. Each input line is tokenized
//! (quote-aware, so passenger names and airport descriptors can carry
//! spaces) and parsed as a clap subcommand tree. Parse failures print
//! clap's own usage text and the session continues; screen errors are
//! printed and the session continues too.

use std::io::{self, BufRead, Write};

use clap::{Parser, Subcommand};

use airtrack_core::{CodeSequence, Store};
use airtrack_core_types::SessionId;

use crate::screens;

/// All state owned by one console session
pub struct Session {
    pub session_id: SessionId,
    pub store: Store,
    pub codes: CodeSequence,
}

impl Session {
    pub fn new(store: Store) -> Self {
        Self {
            session_id: SessionId::new(),
            store,
            codes: CodeSequence::new(),
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "airtrack", no_binary_name = true)]
#[command(disable_version_flag = true)]
struct ConsoleLine {
    #[command(subcommand)]
    screen: Screen,
}

#[derive(Debug, Subcommand)]
enum Screen {
    /// Flight management
    Flights(screens::flights::FlightsArgs),
    /// Passenger management
    Passengers(screens::passengers::PassengersArgs),
    /// Booking management
    Bookings(screens::bookings::BookingsArgs),
    /// Live statistics over the session's data
    Dashboard(screens::dashboard::DashboardArgs),
    /// Monthly performance report snapshot
    Reports,
    /// Airport catalog
    Airports(screens::airports::AirportsArgs),
    /// End the session
    #[command(aliases = ["exit", "logout"])]
    Quit,
}

/// Run the console loop until quit or end of input
pub fn run(session: &mut Session) -> Result<(), Box<dyn std::error::Error>> {
    tracing::debug!(session_id = %session.session_id, "session started");
    let stdin = io::stdin();
    let mut line = String::new();

    loop {
        print!("airtrack> ");
        io::stdout().flush()?;

        line.clear();
        if stdin.lock().read_line(&mut line)? == 0 {
            println!();
            break;
        }

        let tokens = tokenize(&line);
        if tokens.is_empty() {
            continue;
        }

        let command = match ConsoleLine::try_parse_from(&tokens) {
            Ok(parsed) => parsed.screen,
            Err(err) => {
                err.print()?;
                continue;
            }
        };

        let result = match command {
            Screen::Flights(args) => screens::flights::execute(session, args),
            Screen::Passengers(args) => screens::passengers::execute(session, args),
            Screen::Bookings(args) => screens::bookings::execute(session, args),
            Screen::Dashboard(args) => screens::dashboard::execute(session, args),
            Screen::Reports => screens::reports::execute(),
            Screen::Airports(args) => screens::airports::execute(args),
            Screen::Quit => break,
        };

        if let Err(err) = result {
            eprintln!("Error: {}", err);
        }
    }

    tracing::debug!(session_id = %session.session_id, "session ended");
    println!("Goodbye.");
    Ok(())
}

/// Split a line into tokens, honoring double quotes
///
/// Quoted segments keep their spaces and the quotes themselves are
/// dropped. Quotes do not nest; an unclosed quote runs to the end of
/// the line.
fn tokenize(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for c in line.chars() {
        match c {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }

    tokens
}
