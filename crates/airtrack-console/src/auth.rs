//! Login gate for the console
//!
//! Placeholder credentials only: admin/admin. The password is wrapped
//! in `Sensitive` as soon as it is read, so nothing downstream can
//! echo it into output or logs.

use std::io::{self, BufRead, Write};

use airtrack_core::errors::{AirtrackError, Result};
use airtrack_core::{log_op_end, log_op_error, log_op_start};
use airtrack_core_types::Sensitive;

/// Check a username/password pair against the placeholder credentials
pub fn check_credentials(username: &str, password: &Sensitive<String>) -> Result<()> {
    if username == "admin" && password.expose() == "admin" {
        Ok(())
    } else {
        Err(AirtrackError::InvalidCredentials)
    }
}

/// Prompt for credentials until a valid login or end of input
pub fn login() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();

    loop {
        log_op_start!("login");
        let start = std::time::Instant::now();

        print!("Username: ");
        io::stdout().flush()?;
        let mut username = String::new();
        if stdin.lock().read_line(&mut username)? == 0 {
            return Err("login aborted".into());
        }

        print!("Password: ");
        io::stdout().flush()?;
        let mut password = String::new();
        if stdin.lock().read_line(&mut password)? == 0 {
            return Err("login aborted".into());
        }
        let password = Sensitive::new(password.trim().to_string());

        match check_credentials(username.trim(), &password) {
            Ok(()) => {
                log_op_end!("login", duration_ms = start.elapsed().as_millis() as u64);
                println!("Welcome, {}.", username.trim());
                println!();
                return Ok(());
            }
            Err(err) => {
                log_op_error!(
                    "login",
                    err,
                    duration_ms = start.elapsed().as_millis() as u64
                );
                println!("{}", err);
            }
        }
    }
}
