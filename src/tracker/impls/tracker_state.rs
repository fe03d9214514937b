use std::fmt;
use std::fmt::Formatter;
use crate::tracker::enums::tracker_state::TrackerState;

impl fmt::Display for TrackerState {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            TrackerState::Stopped => write!(f, "stopped"),
            TrackerState::Starting => write!(f, "starting"),
            TrackerState::Started => write!(f, "started"),
        }
    }
}
