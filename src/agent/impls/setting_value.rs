use std::fmt;
use std::fmt::Formatter;
use crate::agent::enums::setting_type::SettingType;
use crate::agent::enums::setting_value::SettingValue;
use crate::common::structs::custom_error::CustomError;

impl SettingValue {
    pub fn setting_type(&self) -> SettingType {
        match self {
            SettingValue::Boolean(_) => SettingType::Boolean,
            SettingValue::Integer(_) => SettingType::Integer,
            SettingValue::ByteSize(_) => SettingType::ByteSize,
            SettingValue::Text(_) => SettingType::Text,
        }
    }

    fn mismatch(&self, expected: SettingType) -> CustomError {
        CustomError::new(&format!("expected a {} setting, found a {} ({})", expected, self.setting_type(), self))
    }
}

impl fmt::Display for SettingValue {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            SettingValue::Boolean(value) => write!(f, "{}", value),
            SettingValue::Integer(value) => write!(f, "{}", value),
            SettingValue::ByteSize(value) => write!(f, "{}b", value),
            SettingValue::Text(value) => f.write_str(value),
        }
    }
}

impl TryFrom<SettingValue> for bool {
    type Error = CustomError;

    fn try_from(value: SettingValue) -> Result<Self, Self::Error> {
        match value {
            SettingValue::Boolean(flag) => Ok(flag),
            other => Err(other.mismatch(SettingType::Boolean))
        }
    }
}

impl TryFrom<SettingValue> for u32 {
    type Error = CustomError;

    fn try_from(value: SettingValue) -> Result<Self, Self::Error> {
        match value {
            SettingValue::Integer(number) => Ok(number),
            other => Err(other.mismatch(SettingType::Integer))
        }
    }
}

impl TryFrom<SettingValue> for u64 {
    type Error = CustomError;

    fn try_from(value: SettingValue) -> Result<Self, Self::Error> {
        match value {
            SettingValue::ByteSize(bytes) => Ok(bytes),
            other => Err(other.mismatch(SettingType::ByteSize))
        }
    }
}

impl TryFrom<SettingValue> for String {
    type Error = CustomError;

    fn try_from(value: SettingValue) -> Result<Self, Self::Error> {
        match value {
            SettingValue::Text(text) => Ok(text),
            other => Err(other.mismatch(SettingType::Text))
        }
    }
}
