use std::fmt;
use std::fmt::Formatter;
use crate::common::common::bin2hex;
use crate::common::structs::custom_error::CustomError;
use crate::tracker::structs::peer_id::PeerId;

impl fmt::Display for PeerId {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        bin2hex(&self.0, f)
    }
}

impl TryFrom<&[u8]> for PeerId {
    type Error = CustomError;

    fn try_from(data: &[u8]) -> Result<PeerId, CustomError> {
        let bytes: [u8; 20] = data.try_into().map_err(|_| CustomError::new("invalid peer_id size"))?;
        Ok(PeerId(bytes))
    }
}

impl From<[u8; 20]> for PeerId {
    fn from(data: [u8; 20]) -> Self {
        PeerId(data)
    }
}
