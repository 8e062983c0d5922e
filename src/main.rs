//! Contact Book - demo entry point
//!
//! Walks through a short scripted session against the contact service and
//! prints the book to stdout. Logs go to stderr.

use anyhow::Result;
use contact_book::{Config, ContactService};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let config = Config::from_env()?;

    // RUST_LOG wins over the configured level
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    info!(policy = ?config.edit_policy(), "Starting contact book demo");

    let mut service = ContactService::from_config(&config);

    service.add_contact("John", &["1234567890", "5555555555"])?;
    service.add_contact("Jane", &["9876543210"])?;

    for record in service.book() {
        println!("{}", record);
    }

    service.change_phone("John", "1234567890", "1112223333")?;
    if let Some(john) = service.find("John") {
        println!("{}", john);
        if let Some(phone) = john.find_phone("5555555555") {
            println!("{}: {}", john.name(), phone);
        }
    }

    if let Err(e) = service.add_phone("Jane", "12-34") {
        warn!(error = %e, "Rejected phone number");
        println!("{}", e);
    }

    service.delete_contact("Jane");

    let snapshot = serde_json::to_string(service.book())?;
    debug!(%snapshot, "Final book");
    println!("{}", service.book());

    info!("Contact book demo complete");
    Ok(())
}
