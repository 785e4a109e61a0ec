//! Canonicalize command implementation.

use recordseal_canonical::canonicalize;
use recordseal_record::{parse, transform_form};

use super::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;

    let parsed = parse(&raw).map_err(|e| format!("Failed to parse record: {}", e))?;
    let record = transform_form(&parsed.form).map_err(|e| format!("Invalid record: {}", e))?;

    println!("{}", canonicalize(&record.canonical_value()));
    Ok(())
}
