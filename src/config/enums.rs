/// Errors raised while reading, parsing or writing the configuration file.
pub mod configuration_error;
