use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Clone, Debug)]
#[serde(untagged)]
pub enum SettingValue {
    Boolean(bool),
    Integer(u32),
    ByteSize(u64),
    Text(String),
}
