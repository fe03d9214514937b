use std::collections::HashMap;
use std::fmt;
use std::fmt::Formatter;
use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::common::structs::custom_error::CustomError;
use crate::config::structs::configuration::Configuration;

pub fn parse_query(query: Option<String>) -> Result<HashMap<String, Vec<Vec<u8>>>, CustomError> {
    let mut queries: HashMap<String, Vec<Vec<u8>>> = HashMap::new();
    let Some(result) = query else {
        return Ok(queries);
    };

    for query_item in result.split('&') {
        if query_item.is_empty() {
            continue;
        }
        match query_item.split_once('=') {
            Some((key_name_raw, value_data_raw)) => {
                let key_name = percent_encoding::percent_decode_str(key_name_raw).decode_utf8_lossy().to_lowercase();
                if key_name.is_empty() {
                    continue;
                }
                let value_data = percent_encoding::percent_decode_str(value_data_raw).collect::<Vec<u8>>();
                queries.entry(key_name).or_default().push(value_data);
            }
            None => {
                let key_name = percent_encoding::percent_decode_str(query_item).decode_utf8_lossy().to_lowercase();
                if key_name.is_empty() {
                    continue;
                }
                queries.entry(key_name).or_default();
            }
        }
    }

    Ok(queries)
}

pub(crate) fn bin2hex(data: &[u8; 20], f: &mut Formatter) -> fmt::Result {
    let mut chars = [0u8; 40];
    if binascii::bin2hex(data, &mut chars).is_err() {
        return Err(fmt::Error);
    }
    match std::str::from_utf8(&chars) {
        Ok(hex) => write!(f, "{}", hex),
        Err(_) => Err(fmt::Error)
    }
}

/// Returns the value of a single hex digit, or `0xFF` when the byte is not one.
pub(crate) fn hex_to_nibble(c: u8) -> u8 {
    match c {
        b'0'..=b'9' => c - b'0',
        b'a'..=b'f' => c - b'a' + 10,
        b'A'..=b'F' => c - b'A' + 10,
        _ => 0xFF,
    }
}

/// Parses sizes like `"500MB"`, `"10 kb"`, `"1.5g"` or `"1024"` into bytes.
///
/// Units are case-insensitive and 1024-based. Fractions are truncated to whole bytes.
pub fn parse_file_size(value: &str) -> Result<u64, CustomError> {
    let trimmed = value.trim();
    let split = trimmed.find(|c: char| !(c.is_ascii_digit() || c == '.')).unwrap_or(trimmed.len());
    let (number, unit) = trimmed.split_at(split);
    if number.is_empty() {
        return Err(CustomError::new(&format!("invalid file size '{}'", value)));
    }

    let multiplier: u64 = match unit.trim().to_ascii_lowercase().as_str() {
        "" | "b" => 1,
        "k" | "kb" => 1 << 10,
        "m" | "mb" => 1 << 20,
        "g" | "gb" => 1 << 30,
        "t" | "tb" => 1 << 40,
        other => {
            return Err(CustomError::new(&format!("unknown file size unit '{}'", other)));
        }
    };

    if number.contains('.') {
        let parsed = number.parse::<f64>()
            .map_err(|_| CustomError::new(&format!("invalid file size '{}'", value)))?;
        let bytes = parsed * multiplier as f64;
        if !bytes.is_finite() || bytes >= u64::MAX as f64 {
            return Err(CustomError::new(&format!("file size '{}' out of range", value)));
        }
        return Ok(bytes as u64);
    }

    number.parse::<u64>()
        .map_err(|_| CustomError::new(&format!("invalid file size '{}'", value)))?
        .checked_mul(multiplier)
        .ok_or_else(|| CustomError::new(&format!("file size '{}' out of range", value)))
}

pub fn parse_log_level(level: &str) -> Option<log::LevelFilter> {
    match level {
        "off" => Some(log::LevelFilter::Off),
        "trace" => Some(log::LevelFilter::Trace),
        "debug" => Some(log::LevelFilter::Debug),
        "info" => Some(log::LevelFilter::Info),
        "warn" => Some(log::LevelFilter::Warn),
        "error" => Some(log::LevelFilter::Error),
        _ => None
    }
}

pub fn setup_logging(config: &Configuration)
{
    let level = match parse_log_level(config.log_level.as_str()) {
        Some(level) => level,
        None => {
            panic!("Unknown log level encountered: '{}'", config.log_level.as_str());
        }
    };

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    if let Err(_err) = fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stdout())
        .apply()
    {
        panic!("Failed to initialize logging.")
    }
    info!("logging initialized.");
}
