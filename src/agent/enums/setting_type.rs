use serde::Serialize;

#[derive(Serialize, PartialEq, Eq, Hash, Clone, Copy, Debug)]
#[serde(rename_all = "kebab-case")]
pub enum SettingType {
    Boolean,
    Integer,
    /// Sizes written with an optional unit suffix, `"500MB"` style.
    ByteSize,
    Text,
}
