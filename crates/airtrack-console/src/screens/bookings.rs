//! Booking management screen

use std::error::Error;
use std::time::Instant;

use clap::{Args, Subcommand};

use airtrack_core::forms::BookingForm;
use airtrack_core::model::{Booking, SeatClass};
use airtrack_core::queries::search;
use airtrack_core::{apply, log_op_end, log_op_error, log_op_start, Command};
use airtrack_core_types::BookingId;

use crate::repl::Session;
use crate::screens::OutputFormat;

#[derive(Debug, Args)]
pub struct BookingsArgs {
    #[command(subcommand)]
    pub command: BookingsCommand,
}

#[derive(Debug, Subcommand)]
pub enum BookingsCommand {
    /// List all bookings, newest first
    List(ListArgs),
    /// Book a passenger onto a flight
    Add(AddArgs),
    /// Cancel a booking by id, releasing its counter adjustments
    Cancel(CancelArgs),
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Filter by reference, passenger name, or flight number substring
    #[arg(long)]
    pub search: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
    pub format: OutputFormat,
}

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Passenger name, quoted if it contains spaces
    #[arg(long)]
    pub passenger: String,

    /// Flight number, e.g. KQ100
    #[arg(long)]
    pub flight: String,

    /// Seat class: economy, business, or first
    #[arg(long)]
    pub class: Option<String>,
}

#[derive(Debug, Args)]
pub struct CancelArgs {
    /// Booking id
    pub id: String,
}

pub fn execute(session: &mut Session, args: BookingsArgs) -> Result<(), Box<dyn Error>> {
    match args.command {
        BookingsCommand::List(list) => render_list(session, list),
        BookingsCommand::Add(add) => execute_add(session, add),
        BookingsCommand::Cancel(cancel) => execute_cancel(session, cancel),
    }
}

fn render_list(session: &Session, args: ListArgs) -> Result<(), Box<dyn Error>> {
    let bookings: Vec<&Booking> = match args.search.as_deref() {
        Some(term) => search::filter_bookings(&session.store, term),
        None => session.store.bookings().iter().collect(),
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&bookings)?),
        OutputFormat::Table => {
            if bookings.is_empty() {
                println!("No bookings.");
                return Ok(());
            }
            println!(
                "{:<10} {:<20} {:<8} {:<22} {:<12} {:<9} {:<5} {:>10}  {:<10}",
                "REF", "PASSENGER", "FLIGHT", "ROUTE", "DATE", "CLASS", "SEAT", "PRICE", "STATUS"
            );
            for booking in bookings {
                println!(
                    "{:<10} {:<20} {:<8} {:<22} {:<12} {:<9} {:<5} {:>10}  {:<10}",
                    booking.reference,
                    booking.passenger_name,
                    booking.flight_number,
                    booking.route,
                    booking.date,
                    booking.seat_class,
                    booking.seat_number,
                    booking.price,
                    booking.status
                );
            }
        }
    }

    Ok(())
}

fn execute_add(session: &mut Session, args: AddArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "booking_add",
        session_id = %session.session_id,
        passenger_name = &args.passenger,
        flight_number = &args.flight
    );
    let start = Instant::now();

    let booking = build_booking(session, &args).map_err(|e| {
        log_op_error!(
            "booking_add",
            e.clone(),
            duration_ms = start.elapsed().as_millis() as u64
        );
        e
    })?;

    let reference = booking.reference.clone();
    let seat = booking.seat_number.clone();
    let booking_id = booking.id.clone();
    let store = std::mem::take(&mut session.store);
    session.store = apply(store, Command::BookingAdd { booking });

    log_op_end!(
        "booking_add",
        duration_ms = start.elapsed().as_millis() as u64,
        booking_id = %booking_id
    );
    println!("✓ Booking {} confirmed, seat {}", reference, seat);
    Ok(())
}

fn build_booking(session: &mut Session, args: &AddArgs) -> airtrack_core::Result<Booking> {
    let form = BookingForm {
        passenger_name: args.passenger.clone(),
        flight_number: args.flight.clone(),
        seat_class: parse_class(args.class.as_deref())?,
    };
    form.build(&session.store, &mut session.codes)
}

fn execute_cancel(session: &mut Session, args: CancelArgs) -> Result<(), Box<dyn Error>> {
    log_op_start!(
        "booking_cancel",
        session_id = %session.session_id,
        booking_id = &args.id
    );
    let start = Instant::now();

    let store = std::mem::take(&mut session.store);
    session.store = apply(
        store,
        Command::BookingDelete {
            booking_id: BookingId::from_string(args.id.clone()),
        },
    );

    log_op_end!(
        "booking_cancel",
        duration_ms = start.elapsed().as_millis() as u64
    );
    println!("✓ Booking {} cancelled", args.id);
    Ok(())
}

fn parse_class(raw: Option<&str>) -> airtrack_core::Result<SeatClass> {
    match raw {
        Some(s) => s.parse(),
        None => Ok(SeatClass::default()),
    }
}
