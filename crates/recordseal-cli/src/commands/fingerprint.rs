//! Fingerprint command implementation.

use recordseal_canonical::fingerprint_bytes;
use recordseal_record::{parse, transform_form};
use recordseal_verify::check_file_size;

use super::{read_input, read_input_bytes};

pub fn run(input: Option<String>, raw: bool) -> Result<(), Box<dyn std::error::Error>> {
    let fingerprint = if raw {
        let bytes = read_input_bytes(input)?;
        check_file_size(bytes.len() as u64)?;
        fingerprint_bytes(&bytes)
    } else {
        let text = read_input(input)?;
        let parsed = parse(&text).map_err(|e| format!("Failed to parse record: {}", e))?;
        let record = transform_form(&parsed.form).map_err(|e| format!("Invalid record: {}", e))?;
        record.fingerprint()
    };

    println!("{}", fingerprint);
    Ok(())
}
