//! Passenger management screen

use std::error::Error;
use std::time::Instant;

use clap::{Args, Subcommand};

use airtrack_core::forms::PassengerForm;
use airtrack_core::model::Passenger;
use airtrack_core::queries::search;
use airtrack_core::{apply, log_op_end, log_op_error, log_op_start, Command};
use airtrack_core_types::PassengerId;

use crate::repl::Session;
use crate::screens::OutputFormat;

#[derive(Debug, Args)]
pub struct PassengersArgs {
    #[command(subcommand)]
    pub command: PassengersCommand,
}

#[derive(Debug, Subcommand)]
pub enum PassengersCommand {
    /// List all passengers, newest first
    List(ListArgs),
    /// Register a new passenger
    Add(AddArgs),
    /// Edit a passenger; omitted flags keep their current values
    Update(UpdateArgs),
    /// Remove a passenger by id
    Delete(DeleteArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by name, email, phone, or frequent flyer substring
    #[arg(long)]
    pub search: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Full name, quoted if it contains spaces
    #[arg(long)]
    pub name: String,

    /// Email address
    #[arg(long)]
    pub email: String,

    /// Phone number, quoted if it contains spaces
    #[arg(long)]
    pub phone: String,

    /// Nationality
    #[arg(long)]
    pub nationality: String,

    /// Passport number
    #[arg(long)]
    pub passport: String,

    /// Date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: String,
}

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Passenger id
    pub id: String,

    /// New full name
    #[arg(long)]
    pub name: Option<String>,

    /// New email address
    #[arg(long)]
    pub email: Option<String>,

    /// New phone number
    #[arg(long)]
    pub phone: Option<String>,

    /// New nationality
    #[arg(long)]
    pub nationality: Option<String>,

    /// New passport number
    #[arg(long)]
    pub passport: Option<String>,

    /// New date of birth, YYYY-MM-DD
    #[arg(long)]
    pub dob: Option<String>,
}

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Passenger id
    pub id: String,
}

pub fn execute(session: &mut Session, args: PassengersArgs) -> Result<(), Box<dyn Error>> {
    match args.command {
        PassengersCommand::List(list) => render_list(session, list),
        PassengersCommand::Add(add) => execute_add(session, add),
        PassengersCommand::Update(update) => execute_update(session, update),
        PassengersCommand::Delete(delete) => execute_delete(session, delete),
    }
}

fn render_list(session: &Session, args: ListArgs) -> Result<(), Box<dyn Error>> {
    let passengers: Vec<&Passenger> = match args.search.as_deref() {
        Some(term) => search::filter_passengers(&session.store, term),
        None => session.store.passengers().iter().collect(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&passengers)?),
        OutputFormat::Table => {
            if passengers.is_empty() {
                println!("No passengers.");
                return Ok(());
            }
            println!(
                "{:<20} {:<26} {:<17} {:<12} {:>7}  {:<12}",
                "NAME", "EMAIL", "PHONE", "NATIONALITY", "FLIGHTS", "FREQ FLYER"
            );
            for passenger in passengers {
                println!(
                    "{:<20} {:<26} {:<17} {:<12} {:>7}  {:<12}",
                    passenger.name,
                    passenger.email,
                    passenger.phone,
                    passenger.nationality,
                    passenger.total_flights,
                    passenger.frequent_flyer_number
                );
            }
        }
    }

    Ok(())
}

fn execute_add(session: &mut Session, args: AddArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "passenger_add",
        session_id = %session.session_id,
        passenger_name = &args.name
    );
    let start = Instant::now();

    let form = PassengerForm {
        name: args.name.clone(),
        email: args.email,
        phone: args.phone,
        nationality: args.nationality,
        passport_number: args.passport,
        date_of_birth: args.dob,
    };
    let passenger = form.build(&mut session.codes).map_err(|e| {
        log_op_error!(
            "passenger_add",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let passenger_id = passenger.id.clone();
    let store = std::mem::take(&mut session.store);
    session.store = apply(store, Command::PassengerAdd { passenger });

    log_op_end!(
        "passenger_add",
        duration_ms = start.elapsed().as_millis() as u64,
        passenger_id = %passenger_id
    );
    println!("✓ Passenger {} registered (id {})", args.name, passenger_id);
    Ok(())
}

fn execute_update(session: &mut Session, args: UpdateArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "passenger_update",
        session_id = %session.session_id,
        passenger_id = &args.id
    );
    let start = Instant::now();

    let passenger_id = PassengerId::from_string(args.id.clone());
    let Some(current) = session.store.get_passenger(&passenger_id) else {
        log_op_end!(
            "passenger_update",
            duration_ms = start.elapsed().as_millis() as u64,
            matched = false
        );
        println!("No passenger with id {}", args.id);
        return Ok(());
    };

    // Edit screens resubmit the full identity field set.
    let update = overlay(current, &args)
        .into_update()
        .map_err(|e| {
            log_op_error!(
                "passenger_update",
                e.clone(),
                duration_ms = start.elapsed().as_millis() as u64
            );
            e
        })?;

    let store = std::mem::take(&mut session.store);
    session.store = apply(
        store,
        Command::PassengerUpdate {
            passenger_id,
            update,
        },
    );

    log_op_end!(
        "passenger_update",
        duration_ms = start.elapsed().as_millis() as u64
    );
    println!("✓ Passenger {} updated", args.id);
    Ok(())
}

fn overlay(current: &Passenger, args: &UpdateArgs) -> PassengerForm {
    PassengerForm {
        name: args.name.clone().unwrap_or_else(|| current.name.clone()),
        email: args.email.clone().unwrap_or_else(|| current.email.clone()),
        phone: args.phone.clone().unwrap_or_else(|| current.phone.clone()),
        nationality: args
            .nationality
            .clone()
            .unwrap_or_else(|| current.nationality.clone()),
        passport_number: args
            .passport
            .clone()
            .unwrap_or_else(|| current.passport_number.clone()),
        date_of_birth: args
            .dob
            .clone()
            .unwrap_or_else(|| current.date_of_birth.format("%Y-%m-%d").to_string()),
    }
}

fn execute_delete(session: &mut Session, args: DeleteArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "passenger_delete",
        session_id = %session.session_id,
        passenger_id = &args.id
    );
    let start = Instant::now();

    let store = std::mem::take(&mut session.store);
    session.store = apply(
        store,
        Command::PassengerDelete {
            passenger_id: PassengerId::from_string(args.id.clone()),
        },
    );

    log_op_end!(
        "passenger_delete",
        duration_ms = start.elapsed().as_millis() as u64
    );
    println!("✓ Passenger {} deleted", args.id);
    Ok(())
}
