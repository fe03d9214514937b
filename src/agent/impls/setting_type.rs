use std::fmt;
use std::fmt::Formatter;
use serde_json::Value;
use crate::agent::enums::setting_type::SettingType;
use crate::agent::enums::setting_value::SettingValue;
use crate::common::common::parse_file_size;

impl SettingType {
    /// Parses a build parameter. `None` when the text is not a valid value of this type.
    pub fn parse(&self, raw: &str) -> Option<SettingValue> {
        let raw = raw.trim();
        match self {
            SettingType::Boolean => {
                if raw.eq_ignore_ascii_case("true") {
                    Some(SettingValue::Boolean(true))
                } else if raw.eq_ignore_ascii_case("false") {
                    Some(SettingValue::Boolean(false))
                } else {
                    None
                }
            }
            SettingType::Integer => raw.parse::<u32>().ok().map(SettingValue::Integer),
            SettingType::ByteSize => parse_file_size(raw).ok().map(SettingValue::ByteSize),
            SettingType::Text => {
                if raw.is_empty() {
                    None
                } else {
                    Some(SettingValue::Text(raw.to_string()))
                }
            }
        }
    }

    /// Checks a value returned by the remote authority against this type.
    ///
    /// Only the native JSON representation is accepted: a remote integer
    /// sent as a string is rejected like any other mismatch.
    pub fn validate_remote(&self, value: &Value) -> Option<SettingValue> {
        match self {
            SettingType::Boolean => value.as_bool().map(SettingValue::Boolean),
            SettingType::Integer => value.as_u64()
                .and_then(|number| u32::try_from(number).ok())
                .map(SettingValue::Integer),
            SettingType::ByteSize => match value {
                Value::Number(number) => number.as_u64().map(SettingValue::ByteSize),
                Value::String(size) => parse_file_size(size).ok().map(SettingValue::ByteSize),
                _ => None
            },
            SettingType::Text => value.as_str()
                .filter(|text| !text.is_empty())
                .map(|text| SettingValue::Text(text.to_string())),
        }
    }
}

impl fmt::Display for SettingType {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SettingType::Boolean => f.write_str("boolean"),
            SettingType::Integer => f.write_str("integer"),
            SettingType::ByteSize => f.write_str("byte size"),
            SettingType::Text => f.write_str("text"),
        }
    }
}
