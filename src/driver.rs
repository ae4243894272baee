use std::io::{self, Write};

use log::debug;

use crate::selector::function_selector;

/// Writes `Function: <signature> \t Selector: <selector>` for each signature,
/// in order, and returns the number of lines written.
pub fn write_selectors(writer: &mut impl Write, signatures: &[&str]) -> io::Result<usize> {
    for signature in signatures {
        let selector = function_selector(signature);
        debug!("{signature} -> {selector}");
        writeln!(writer, "Function: {signature} \t Selector: {selector}")?;
    }
    writer.flush()?;
    Ok(signatures.len())
}
