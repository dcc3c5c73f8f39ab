//! Prompt loop for entering one patient's measurements at a time.

use std::io::{BufRead, Write};

use anyhow::Result;
use clinorm_normalization::{Height, NormalizeError, parse_height_to_us, parse_weight_to_pounds};

const QUIT: &str = "q";

/// Read weight/height pairs from `input` until `q` or end of input.
///
/// # Errors
///
/// Only I/O errors on `input` or `output` are returned; parse failures are
/// printed and the loop continues.
pub fn run_interactive<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<()> {
    writeln!(output, "Clinical converter. Type '{QUIT}' to quit.")?;
    loop {
        writeln!(output)?;
        writeln!(output, "--- NEW PATIENT ---")?;
        let Some(weight) = prompt(
            &mut input,
            &mut output,
            "Input Weight (e.g. 70kg, 11st 6): ",
        )?
        else {
            return Ok(());
        };
        let Some(height) = prompt(&mut input, &mut output, "Input Height (e.g. 180cm, 5'11): ")?
        else {
            return Ok(());
        };

        match convert_pair(&weight, &height) {
            Ok((pounds, height)) => {
                writeln!(output, "OUTPUT:")?;
                writeln!(output, "   WEIGHT: {pounds:.2} lbs")?;
                writeln!(output, "   HEIGHT: {height}")?;
            }
            Err(error) => {
                writeln!(output, "ERROR: {error}")?;
                writeln!(output, "   Please check your formatting and try again.")?;
            }
        }
    }
}

fn convert_pair(weight: &str, height: &str) -> Result<(f64, Height), NormalizeError> {
    Ok((parse_weight_to_pounds(weight)?, parse_height_to_us(height)?))
}

/// Print `label` and read one trimmed line. `None` on quit or end of input.
fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> Result<Option<String>> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let line = line.trim();
    if line.eq_ignore_ascii_case(QUIT) {
        return Ok(None);
    }
    Ok(Some(line.to_string()))
}
