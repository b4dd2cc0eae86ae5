use crate::error::not_found;
use anyhow::{Context as _, Result};
use std::fs;
use std::io::{self, Read};
use std::path::Path;

/// Reads a whole input file, or stdin for `None` and `-`.
///
/// Uploaded lead lists are not always UTF-8, so invalid bytes are replaced
/// instead of failing the whole file.
pub fn read_input(path: Option<&Path>) -> Result<String> {
    let bytes = match path {
        Some(path) if path.as_os_str() != "-" => {
            if !path.exists() {
                return Err(not_found(format!("input file {}", path.display())));
            }
            fs::read(path).with_context(|| format!("read {}", path.display()))?
        }
        _ => {
            let mut buf = Vec::new();
            io::stdin()
                .lock()
                .read_to_end(&mut buf)
                .with_context(|| "read stdin")?;
            buf
        }
    };
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}
