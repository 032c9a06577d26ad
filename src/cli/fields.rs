//! Field selectors for tabular output
//!
//! Each selectable column is an enum variant with a fixed layout and an
//! accessor, so `--field` values map directly to code.

use crate::domain::{Measurement, Probe, StatusColour};
use clap::ValueEnum;

/// Horizontal alignment of a column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Layout of a single column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Column {
    pub header: &'static str,
    pub align: Align,
    pub width: usize,
}

impl Column {
    const fn new(header: &'static str, align: Align, width: usize) -> Self {
        Self {
            header,
            align,
            width,
        }
    }
}

/// A selectable column of a record listing
pub trait Field<R>: Copy {
    /// Column layout
    fn column(&self) -> Column;

    /// Cell text for a record
    ///
    /// `web_url` is the site root used by link fields.
    fn value(&self, record: &R, web_url: &str) -> String;

    /// Colour of the cell, if it is a status cell
    fn colour(&self, _record: &R) -> Option<StatusColour> {
        None
    }
}

/// Columns of the measurements listing
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementField {
    Id,
    Type,
    Description,
    Status,
    /// Destination name
    Target,
    /// Link to the measurement's web page
    Url,
}

impl MeasurementField {
    /// Columns shown when no `--field` is given
    pub const DEFAULTS: [MeasurementField; 4] = [
        MeasurementField::Id,
        MeasurementField::Type,
        MeasurementField::Description,
        MeasurementField::Status,
    ];
}

impl Field<Measurement> for MeasurementField {
    fn column(&self) -> Column {
        match self {
            MeasurementField::Id => Column::new("Id", Align::Left, 7),
            MeasurementField::Type => Column::new("Type", Align::Left, 10),
            MeasurementField::Description => Column::new("Description", Align::Left, 45),
            MeasurementField::Status => Column::new("Status", Align::Right, 14),
            MeasurementField::Target => Column::new("Target", Align::Left, 25),
            MeasurementField::Url => Column::new("Url", Align::Left, 45),
        }
    }

    fn value(&self, record: &Measurement, web_url: &str) -> String {
        match self {
            MeasurementField::Id => record.id.to_string(),
            MeasurementField::Type => record.kind.clone(),
            MeasurementField::Description => record.description.clone().unwrap_or_default(),
            MeasurementField::Status => record.status.clone(),
            MeasurementField::Target => record.destination_name.clone().unwrap_or_default(),
            MeasurementField::Url => record.url(web_url),
        }
    }

    fn colour(&self, record: &Measurement) -> Option<StatusColour> {
        match self {
            MeasurementField::Status => Some(StatusColour::for_measurement(record.status_id)),
            _ => None,
        }
    }
}

/// Columns of the probes listing
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeField {
    Id,
    #[value(name = "asn_v4")]
    AsnV4,
    #[value(name = "asn_v6")]
    AsnV6,
    Country,
    Status,
    Description,
}

impl ProbeField {
    /// Columns shown when no `--field` is given
    pub const DEFAULTS: [ProbeField; 5] = [
        ProbeField::Id,
        ProbeField::AsnV4,
        ProbeField::AsnV6,
        ProbeField::Country,
        ProbeField::Status,
    ];
}

impl Field<Probe> for ProbeField {
    fn column(&self) -> Column {
        match self {
            ProbeField::Id => Column::new("Id", Align::Left, 7),
            ProbeField::AsnV4 => Column::new("ASN v4", Align::Right, 8),
            ProbeField::AsnV6 => Column::new("ASN v6", Align::Right, 8),
            ProbeField::Country => Column::new("Country", Align::Left, 7),
            ProbeField::Status => Column::new("Status", Align::Right, 14),
            ProbeField::Description => Column::new("Description", Align::Left, 45),
        }
    }

    fn value(&self, record: &Probe, _web_url: &str) -> String {
        let asn = |asn: Option<u32>| asn.map(|a| a.to_string()).unwrap_or_default();
        match self {
            ProbeField::Id => record.id.to_string(),
            ProbeField::AsnV4 => asn(record.asn_v4),
            ProbeField::AsnV6 => asn(record.asn_v6),
            ProbeField::Country => record.country_code.clone().unwrap_or_default(),
            ProbeField::Status => record.status.clone(),
            ProbeField::Description => record.description.clone().unwrap_or_default(),
        }
    }

    fn colour(&self, record: &Probe) -> Option<StatusColour> {
        match self {
            ProbeField::Status => Some(StatusColour::for_probe(record.status_id)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WEB: &str = "https://atlas.ripe.net";

    fn sample() -> Measurement {
        Measurement::new(1, "ping", "Ongoing", 2)
            .with_description("Description 1")
            .with_destination("Name 1")
    }

    fn line_items(fields: &[MeasurementField], m: &Measurement) -> Vec<String> {
        fields.iter().map(|f| f.value(m, WEB)).collect()
    }

    #[test]
    fn test_default_line_items() {
        assert_eq!(
            line_items(&MeasurementField::DEFAULTS, &sample()),
            vec!["1", "ping", "Description 1", "Ongoing"]
        );
    }

    #[test]
    fn test_selected_line_items() {
        let fields = [MeasurementField::Id, MeasurementField::Status];
        assert_eq!(line_items(&fields, &sample()), vec!["1", "Ongoing"]);
    }

    #[test]
    fn test_url_field() {
        assert_eq!(
            line_items(&[MeasurementField::Url], &sample()),
            vec!["https://atlas.ripe.net/measurements/1/"]
        );
    }

    #[test]
    fn test_target_field() {
        assert_eq!(MeasurementField::Target.value(&sample(), WEB), "Name 1");
    }

    #[test]
    fn test_only_status_is_coloured() {
        let m = sample();
        assert_eq!(
            MeasurementField::Status.colour(&m),
            Some(StatusColour::Green)
        );
        assert_eq!(MeasurementField::Id.colour(&m), None);
    }

    #[test]
    fn test_field_names() {
        assert!(MeasurementField::from_str("url", false).is_ok());
        assert!(MeasurementField::from_str("not a field", false).is_err());
        assert!(ProbeField::from_str("asn_v4", false).is_ok());
    }

    #[test]
    fn test_probe_values() {
        let probe = Probe::new(42, "Connected", 1)
            .with_asns(Some(3333), None)
            .with_country("NL");
        assert_eq!(ProbeField::AsnV4.value(&probe, WEB), "3333");
        assert_eq!(ProbeField::AsnV6.value(&probe, WEB), "");
        assert_eq!(ProbeField::Country.value(&probe, WEB), "NL");
    }
}
