//! Export command implementation.

use recordseal_record::{parse, serialize};

use super::read_input;

pub fn run(input: Option<String>, address: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;

    let parsed = parse(&raw).map_err(|e| format!("Failed to parse record: {}", e))?;

    // An explicit --address wins over one carried by the payload.
    let address = address.or(parsed.address);

    println!("{}", serialize(&parsed.form, address.as_deref()));
    Ok(())
}
