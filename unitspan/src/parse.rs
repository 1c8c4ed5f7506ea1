//! Definition-file parsing - the construction-time input boundary
//!
//! Line-oriented format:
//!
//! ```text
//! # lengths
//! units: m ft in
//! m -> ft = 3.28084
//! ft -> in = 12
//! ```
//!
//! The first non-comment line declares the units; each following line
//! declares one direct conversion. Parsing only validates shape; unit
//! membership and factor validity are checked by the converter.

use unitspan_core::ConvertError;

/// Parsed converter definition: unit names plus direct conversions
#[derive(Debug, Clone, PartialEq)]
pub struct Definitions {
    pub units: Vec<String>,
    pub conversions: Vec<(String, String, f64)>,
}

/// Parse a definitions file into units and conversion triples
pub fn parse_definitions(text: &str) -> Result<Definitions, ConvertError> {
    let mut units: Option<Vec<String>> = None;
    let mut conversions = Vec::new();

    for (lineno, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if units.is_none() {
            let Some(rest) = line.strip_prefix("units:") else {
                return Err(ConvertError::Parse(format!(
                    "line {}: expected 'units:' declaration, got '{}'",
                    lineno + 1,
                    line
                )));
            };
            let names: Vec<String> =
                rest.split_whitespace().map(|s| s.to_string()).collect();
            if names.is_empty() {
                return Err(ConvertError::Parse(format!(
                    "line {}: 'units:' declares no units",
                    lineno + 1
                )));
            }
            units = Some(names);
            continue;
        }

        conversions.push(parse_conversion_line(line, lineno + 1)?);
    }

    let units = units.ok_or_else(|| {
        ConvertError::Parse("missing 'units:' declaration".to_string())
    })?;

    Ok(Definitions { units, conversions })
}

/// Parse one `source -> target = factor` line
fn parse_conversion_line(
    line: &str,
    lineno: usize,
) -> Result<(String, String, f64), ConvertError> {
    let Some((pair, factor_str)) = line.split_once('=') else {
        return Err(ConvertError::Parse(format!(
            "line {}: expected 'source -> target = factor', got '{}'",
            lineno, line
        )));
    };
    let Some((source, target)) = pair.split_once("->") else {
        return Err(ConvertError::Parse(format!(
            "line {}: expected 'source -> target' before '=', got '{}'",
            lineno,
            pair.trim()
        )));
    };

    let source = source.trim();
    let target = target.trim();
    let factor_str = factor_str.trim();
    if source.is_empty() || target.is_empty() {
        return Err(ConvertError::Parse(format!(
            "line {}: empty unit name in '{}'",
            lineno, line
        )));
    }

    let factor: f64 = factor_str.parse().map_err(|_| {
        ConvertError::Parse(format!(
            "line {}: invalid factor '{}'",
            lineno, factor_str
        ))
    })?;

    Ok((source.to_string(), target.to_string(), factor))
}
