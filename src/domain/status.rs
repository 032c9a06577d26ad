//! Status colour mapping
//!
//! Maps numeric status ids to the colour used for the status column.

use crate::domain::measurement::{
    STATUS_FAILED, STATUS_FORCED_STOP, STATUS_NO_SUITABLE_PROBES, STATUS_ONGOING,
    STATUS_SCHEDULED, STATUS_SPECIFIED, STATUS_STOPPED,
};
use crate::domain::probe::{PROBE_ABANDONED, PROBE_CONNECTED, PROBE_DISCONNECTED};
use std::fmt;

/// Colour of a status cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusColour {
    White,
    Blue,
    Green,
    Yellow,
    Red,
}

impl StatusColour {
    /// Colour for a measurement status id; unknown ids are white
    pub fn for_measurement(status_id: Option<i64>) -> Self {
        match status_id {
            Some(STATUS_SPECIFIED) | Some(STATUS_SCHEDULED) => StatusColour::Blue,
            Some(STATUS_ONGOING) => StatusColour::Green,
            Some(STATUS_STOPPED) => StatusColour::Yellow,
            Some(STATUS_FORCED_STOP) | Some(STATUS_NO_SUITABLE_PROBES) | Some(STATUS_FAILED) => {
                StatusColour::Red
            }
            _ => StatusColour::White,
        }
    }

    /// Colour for a probe status id; unknown ids are white
    pub fn for_probe(status_id: Option<i64>) -> Self {
        match status_id {
            Some(PROBE_CONNECTED) => StatusColour::Green,
            Some(PROBE_DISCONNECTED) => StatusColour::Red,
            Some(PROBE_ABANDONED) => StatusColour::Yellow,
            _ => StatusColour::White,
        }
    }

    /// Lowercase colour name
    pub const fn name(&self) -> &'static str {
        match self {
            StatusColour::White => "white",
            StatusColour::Blue => "blue",
            StatusColour::Green => "green",
            StatusColour::Yellow => "yellow",
            StatusColour::Red => "red",
        }
    }
}

impl fmt::Display for StatusColour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_measurement_colours() {
        let colour = |id| StatusColour::for_measurement(Some(id)).name();
        assert_eq!(colour(0), "blue");
        assert_eq!(colour(1), "blue");
        assert_eq!(colour(2), "green");
        assert_eq!(colour(4), "yellow");
        assert_eq!(colour(5), "red");
        assert_eq!(colour(6), "red");
        assert_eq!(colour(7), "red");
    }

    #[test]
    fn test_unknown_measurement_status_is_white() {
        for id in [3, 8, -1, 999] {
            assert_eq!(StatusColour::for_measurement(Some(id)), StatusColour::White);
        }
        assert_eq!(StatusColour::for_measurement(None), StatusColour::White);
    }

    #[test]
    fn test_probe_colours() {
        assert_eq!(StatusColour::for_probe(Some(1)), StatusColour::Green);
        assert_eq!(StatusColour::for_probe(Some(2)), StatusColour::Red);
        assert_eq!(StatusColour::for_probe(Some(3)), StatusColour::Yellow);
        assert_eq!(StatusColour::for_probe(Some(0)), StatusColour::White);
    }
}
