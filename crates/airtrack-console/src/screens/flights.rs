//! Flight management screen

use std::error::Error;
use std::time::Instant;

use clap::{Args, Subcommand};

use airtrack_core::forms::FlightForm;
use airtrack_core::model::{Flight, FlightStatus};
use airtrack_core::network::schedules;
use airtrack_core::queries::search;
use airtrack_core::{apply, log_op_end, log_op_error, log_op_start, Command};
use airtrack_core_types::FlightId;

use crate::repl::Session;
use crate::screens::{resolve_airport, OutputFormat};

#[derive(Debug, Args)]
pub struct FlightsArgs {
    #[command(subcommand)]
    pub command: FlightsCommand,
}

#[derive(Debug, Subcommand)]
pub enum FlightsCommand {
    /// List all flights, newest first
    List(ListArgs),
    /// Schedule a new flight
    Add(AddArgs),
    /// Edit a flight; omitted flags keep their current values
    Update(UpdateArgs),
    /// Remove a flight by id
    Delete(DeleteArgs),
    /// Show published departure times for a route
    Times(TimesArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by number, departure, or arrival substring
    #[arg(long)]
    pub search: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Flight number, e.g. KQ100
    #[arg(long)]
    pub number: String,

    /// Departure airport code, e.g. NBO
    #[arg(long)]
    pub from: String,

    /// Arrival airport code, e.g. LHR
    #[arg(long)]
    pub to: String,

    /// Departure date, YYYY-MM-DD
    #[arg(long)]
    pub date: String,

    /// Departure time, HH:MM
    #[arg(long)]
    pub time: String,

    /// Seat capacity
    #[arg(long)]
    pub capacity: String,

    /// Status: "On Time", Delayed, Cancelled, or Boarding
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Flight id
    pub id: String,

    /// New flight number
    #[arg(long)]
    pub number: Option<String>,

    /// New departure airport code
    #[arg(long)]
    pub from: Option<String>,

    /// New arrival airport code
    #[arg(long)]
    pub to: Option<String>,

    /// New date, YYYY-MM-DD
    #[arg(long)]
    pub date: Option<String>,

    /// New time, HH:MM
    #[arg(long)]
    pub time: Option<String>,

    /// New seat capacity
    #[arg(long)]
    pub capacity: Option<String>,

    /// New status
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Flight id
    pub id: String,
}

#[derive(Debug, Args)]
pub struct TimesArgs {
    /// Departure airport code, e.g. NBO
    #[arg(long)]
    pub from: String,

    /// Arrival airport code, e.g. LHR
    #[arg(long)]
    pub to: String,
}

pub fn execute(session: &mut Session, args: FlightsArgs) -> Result<(), Box<dyn Error>> {
    match args.command {
        FlightsCommand::List(list) => render_list(session, list),
        FlightsCommand::Add(add) => execute_add(session, add),
        FlightsCommand::Update(update) => execute_update(session, update),
        FlightsCommand::Delete(delete) => execute_delete(session, delete),
        FlightsCommand::Times(times) => render_times(times),
    }
}

fn render_list(session: &Session, args: ListArgs) -> Result<(), Box<dyn Error>> {
    let flights: Vec<&Flight> = match args.search.as_deref() {
        Some(term) => search::filter_flights(&session.store, term),
        None => session.store.flights().iter().collect(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&flights)?),
        OutputFormat::Table => {
            if flights.is_empty() {
                println!("No flights.");
                return Ok(());
            }
            println!(
                "{:<8} {:<20} {:<20} {:<12} {:<6} {:>9}  {:<10}",
                "NUMBER", "FROM", "TO", "DATE", "TIME", "SEATS", "STATUS"
            );
            for flight in flights {
                println!(
                    "{:<8} {:<20} {:<20} {:<12} {:<6} {:>4}/{:<4} {:<10}",
                    flight.flight_number,
                    flight.departure,
                    flight.arrival,
                    flight.date,
                    flight.time.format("%H:%M"),
                    flight.booked,
                    flight.capacity,
                    flight.status
                );
            }
        }
    }

    Ok(())
}

fn execute_add(session: &mut Session, args: AddArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "flight_add",
        session_id = %session.session_id,
        flight_number = &args.number
    );
    let start = Instant::now();

    let flight = build_flight(&args).map_err(|e| {
        log_op_error!(
            "flight_add",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let flight_id = flight.id.clone();
    let store = std::mem::take(&mut session.store);
    session.store = apply(store, Command::FlightAdd { flight });

    log_op_end!(
        "flight_add",
        duration_ms = start.elapsed().as_millis() as u64,
        flight_id = %flight_id
    );
    println!("✓ Flight {} scheduled (id {})", args.number, flight_id);
    Ok(())
}

fn build_flight(args: &AddArgs) -> airtrack_core::Result<Flight> {
    let form = FlightForm {
        flight_number: args.number.clone(),
        departure: resolve_airport(&args.from)?,
        arrival: resolve_airport(&args.to)?,
        date: args.date.clone(),
        time: args.time.clone(),
        capacity: args.capacity.clone(),
        status: parse_status(args.status.as_deref())?,
    };
    form.build()
}

fn execute_update(session: &mut Session, args: UpdateArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "flight_update",
        session_id = %session.session_id,
        flight_id = &args.id
    );
    let start = Instant::now();

    let flight_id = FlightId::from_string(args.id.clone());
    let Some(current) = session.store.get_flight(&flight_id) else {
        log_op_end!(
            "flight_update",
            duration_ms = start.elapsed().as_millis() as u64,
            matched = false
        );
        println!("No flight with id {}", args.id);
        return Ok(());
    };

    // Edit screens resubmit the full field set, so overlay the flags
    // onto the current values and revalidate everything.
    let update = overlay(current, &args)
        .and_then(FlightForm::into_update)
        .map_err(|e| {
            log_op_error!(
                "flight_update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    let store = std::mem::take(&mut session.store);
    session.store = apply(store, Command::FlightUpdate { flight_id, update });

    log_op_end!(
        "flight_update",
        duration_ms = start.elapsed().as_millis() as u64
    );
    println!("✓ Flight {} updated", args.id);
    Ok(())
}

fn overlay(current: &Flight, args: &UpdateArgs) -> airtrack_core::Result<FlightForm> {
    Ok(FlightForm {
        flight_number: args
            .number
            .clone()
            .unwrap_or_else(|| current.flight_number.clone()),
        departure: match &args.from {
            Some(code) => resolve_airport(code)?,
            None => current.departure.clone(),
        },
        arrival: match &args.to {
            Some(code) => resolve_airport(code)?,
            None => current.arrival.clone(),
        },
        date: args
            .date
            .clone()
            .unwrap_or_else(|| current.date.format("%Y-%m-%d").to_string()),
        time: args
            .time
            .clone()
            .unwrap_or_else(|| current.time.format("%H:%M").to_string()),
        capacity: args
            .capacity
            .clone()
            .unwrap_or_else(|| current.capacity.to_string()),
        status: match args.status.as_deref() {
            Some(raw) => raw.parse()?,
            None => current.status,
        },
    })
}

fn execute_delete(session: &mut Session, args: DeleteArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "flight_delete",
        session_id = %session.session_id,
        flight_id = &args.id
    );
    let start = Instant::now();

    let store = std::mem::take(&mut session.store);
    session.store = apply(
        store,
        Command::FlightDelete {
            flight_id: FlightId::from_string(args.id.clone()),
        },
    );

    log_op_end!(
        "flight_delete",
        duration_ms = start.elapsed().as_millis() as u64
    );
    println!("✓ Flight {} deleted", args.id);
    Ok(())
}

fn render_times(args: TimesArgs) -> Result<(), Box<dyn Error>> {
    let departure = resolve_airport(&args.from)?;
    let arrival = resolve_airport(&args.to)?;
    let times = schedules::departure_times(&departure, &arrival);

    println!("{} to {}: {}", departure, arrival, times.join(", "));
    Ok(())
}

fn parse_status(raw: Option<&str>) -> airtrack_core::Result<FlightStatus> {
    match raw {
        Some(s) => s.parse(),
        None => Ok(FlightStatus::default()),
    }
}
