/// Message carrying error used for validation failures.
pub mod custom_error;
