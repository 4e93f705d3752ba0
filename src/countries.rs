use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{debug, info};

use crate::error::{ReportError, Result};

/// Reads the country list, one entry per line, in file order.
///
/// Every line is kept as-is, including empty ones. Lines end at `\n`, `\r\n`
/// or a lone `\r`; a trailing terminator does not add an extra empty entry.
pub fn load_countries(path: &Path) -> Result<Vec<String>> {
    let start_time = Instant::now();
    info!(action = "load", component = "country_file", file_path = ?path, "Loading country names");

    let content = fs::read_to_string(path).map_err(|source| ReportError::ReadInput {
        path: path.to_path_buf(),
        source,
    })?;

    let countries = parse_countries(&content);

    let load_time = start_time.elapsed();
    info!(
        action = "loaded",
        component = "country_file",
        country_count = countries.len(),
        duration_ms = load_time.as_millis(),
        "Loaded country names"
    );
    Ok(countries)
}

pub fn parse_countries(content: &str) -> Vec<String> {
    let mut countries = Vec::new();
    let mut rest = content;
    while !rest.is_empty() {
        match rest.find(['\n', '\r']) {
            Some(idx) => {
                countries.push(rest[..idx].to_string());
                let terminator = if rest[idx..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[idx + terminator..];
            }
            None => {
                countries.push(rest.to_string());
                break;
            }
        }
    }

    let blank = countries.iter().filter(|c| c.is_empty()).count();
    if blank > 0 {
        debug!(action = "parse", component = "country_file", blank_lines = blank, "Keeping blank lines as entries");
    }
    countries
}
