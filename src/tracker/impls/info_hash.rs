use std::fmt;
use std::fmt::Formatter;
use crate::common::common::{bin2hex, hex_to_nibble};
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::info_hash::InfoHash;

impl fmt::Display for InfoHash {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl std::str::FromStr for InfoHash {
    type Err = binascii::ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != 40 {
            return Err(binascii::ConvertError::InvalidInputLength);
        }
        let mut result = InfoHash([0u8; 20]);
        for (i, chunk) in s.as_bytes().chunks_exact(2).enumerate() {
            let high = hex_to_nibble(chunk[0]);
            let low = hex_to_nibble(chunk[1]);
            if high == 0xFF || low == 0xFF {
                return Err(binascii::ConvertError::InvalidInput);
            }
            result.0[i] = (high << 4) | low;
        }
        Ok(result)
    }
}

impl TryFrom<&[u8]> for InfoHash {
    type Error = CustomError;

    fn try_from(data: &[u8]) -> Result<InfoHash, CustomError> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| CustomError::new("invalid info_hash size"))?;
        Ok(InfoHash(bytes))
    }
}

impl From<[u8; 20]> for InfoHash {
    fn from(data: [u8; 20]) -> Self {
        InfoHash(data)
    }
}

impl serde::ser::Serialize for InfoHash {
    fn serialize<S: serde::ser::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&hex::encode(self.0))
    }
}

impl<'de> serde::de::Deserialize<'de> for InfoHash {
    fn deserialize<D: serde::de::Deserializer<'de>>(des: D) -> Result<Self, D::Error> {
        struct InfoHashVisitor;

        impl<'de> serde::de::Visitor<'de> for InfoHashVisitor {
            type Value = InfoHash;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a 40 character hex string")
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                let mut result = InfoHash([0u8; 20]);
                hex::decode_to_slice(v, &mut result.0).map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(v), &"a 40 character hex string")
                })?;
                Ok(result)
            }
        }
        des.deserialize_str(InfoHashVisitor)
    }
}
