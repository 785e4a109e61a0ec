//! Validate command implementation.

use recordseal_record::validate;

use super::read_input;

pub fn run(input: Option<String>) -> Result<(), Box<dyn std::error::Error>> {
    let raw = read_input(input)?;

    match validate(&raw) {
        Ok(()) => {
            println!("valid");
            Ok(())
        }
        Err(e) if e.is_structural() => Err(format!("structural error: {}", e).into()),
        Err(e) => Err(format!("schema error: {}", e).into()),
    }
}
