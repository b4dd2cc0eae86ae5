use anyhow::{Context as _, Result};
use leadscan_core::PhoneExtractor;
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

pub mod completions;
pub mod extract;
pub mod leads;
pub mod regions;

pub struct Context<'a> {
    pub extractor: &'a PhoneExtractor,
    pub json: bool,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Replaces `path` with the pretty-printed JSON of `value`.
pub fn write_json_file<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value)?;
    bytes.push(b'\n');
    fs::write(path, bytes).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}
