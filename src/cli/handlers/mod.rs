pub mod decode;
pub mod dump;
pub mod encode;
pub mod eval;

use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

/// Read the whole input: a file when given, stdin otherwise.
pub(crate) fn read_input(file: Option<&PathBuf>) -> io::Result<Vec<u8>> {
    match file {
        Some(path) => fs::read(path),
        None => {
            let mut buffer = Vec::new();
            io::stdin().read_to_end(&mut buffer)?;
            Ok(buffer)
        }
    }
}

/// Write the whole output: a file when given, stdout otherwise.
pub(crate) fn write_output(output: Option<&PathBuf>, bytes: &[u8]) -> io::Result<()> {
    match output {
        Some(path) => fs::write(path, bytes),
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(bytes)?;
            stdout.flush()
        }
    }
}

/// Parse input as integers: decimal lines in text mode, packed
/// little-endian u32s otherwise.
pub(crate) fn parse_integers(bytes: &[u8], text: bool) -> Result<Vec<u32>, Box<dyn std::error::Error>> {
    if text {
        let text = std::str::from_utf8(bytes)?;
        let mut values = Vec::new();
        for (number, line) in text.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            let value: u32 = line
                .parse()
                .map_err(|_| format!("line {}: not an unsigned 32-bit integer: {:?}", number + 1, line))?;
            values.push(value);
        }
        Ok(values)
    } else {
        if !bytes.len().is_multiple_of(4) {
            return Err(format!(
                "binary input length {} is not a multiple of 4 bytes",
                bytes.len()
            )
            .into());
        }
        Ok(bytes
            .chunks_exact(4)
            .map(|chunk| u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
            .collect())
    }
}

/// Render integers: decimal lines in text mode, packed little-endian u32s
/// otherwise.
pub(crate) fn render_integers(values: &[u32], text: bool) -> Vec<u8> {
    if text {
        let mut out = String::new();
        for value in values {
            out.push_str(&value.to_string());
            out.push('\n');
        }
        out.into_bytes()
    } else {
        let mut out = Vec::with_capacity(values.len() * 4);
        for value in values {
            out.extend_from_slice(&value.to_le_bytes());
        }
        out
    }
}
