//! CLI argument definitions using clap derive
//!
//! Defines all command-line arguments and subcommands.

use crate::cli::fields::{MeasurementField, ProbeField};
use crate::cli::validators;
use crate::config::{ColorMode, MAX_LIMIT};
use crate::domain::measurement::{
    STATUS_FAILED, STATUS_FORCED_STOP, STATUS_NO_SUITABLE_PROBES, STATUS_ONGOING,
    STATUS_SCHEDULED, STATUS_SPECIFIED, STATUS_STOPPED,
};

use chrono::NaiveDateTime;
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use std::path::PathBuf;

/// RIPE Atlas command-line client
///
/// Search measurements and probes on the RIPE Atlas platform.
#[derive(Parser, Debug)]
#[command(name = "atlasctl")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "table")]
    pub format: OutputFormat,

    /// Path to configuration file
    #[arg(short, long, global = true, env = "ATLASCTL_CONFIG", value_parser = validators::path)]
    pub config: Option<PathBuf>,

    /// API key used for authenticated requests
    #[arg(long, global = true, env = "ATLAS_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// When to colorize status columns
    #[arg(long, global = true, value_enum)]
    pub color: Option<ColorMode>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search measurements
    Measurements(MeasurementsArgs),

    /// Search probes
    Probes(ProbesArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for the measurements command
#[derive(Parser, Debug, Default)]
pub struct MeasurementsArgs {
    /// Free-text search on description and target
    #[arg(long)]
    pub search: Option<String>,

    /// Only measurements in this state
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,

    /// Address family
    #[arg(long, value_enum)]
    pub af: Option<AddressFamilyArg>,

    /// Measurement type
    #[arg(long = "type", value_enum)]
    pub kind: Option<MeasurementTypeArg>,

    /// Started before this date/time (UTC)
    #[arg(long, value_name = "DATETIME", value_parser = validators::datetime)]
    pub started_before: Option<NaiveDateTime>,

    /// Started after this date/time (UTC)
    #[arg(long, value_name = "DATETIME", value_parser = validators::datetime)]
    pub started_after: Option<NaiveDateTime>,

    /// Stopped before this date/time (UTC)
    #[arg(long, value_name = "DATETIME", value_parser = validators::datetime)]
    pub stopped_before: Option<NaiveDateTime>,

    /// Stopped after this date/time (UTC)
    #[arg(long, value_name = "DATETIME", value_parser = validators::datetime)]
    pub stopped_after: Option<NaiveDateTime>,

    /// Only these measurement ids (comma separated)
    // Fully qualified so clap treats the list as one value
    #[arg(long, value_name = "ID,...", value_parser = validators::comma_separated_integers)]
    pub ids: Option<::std::vec::Vec<i64>>,

    /// Column to show (repeatable)
    #[arg(long = "field", value_enum)]
    pub fields: Vec<MeasurementField>,

    /// Maximum number of measurements to fetch
    #[arg(long, value_parser = validators::integer_range(1, MAX_LIMIT as i64))]
    pub limit: Option<i64>,

    /// Print only measurement ids
    #[arg(long)]
    pub ids_only: bool,
}

/// Arguments for the probes command
#[derive(Parser, Debug, Default)]
pub struct ProbesArgs {
    /// Two-letter country code
    #[arg(long, value_parser = validators::country_code)]
    pub country: Option<String>,

    /// Probes in this ASN (either address family)
    #[arg(long)]
    pub asn: Option<u32>,

    /// Probes in this IPv4 ASN
    #[arg(long)]
    pub asnv4: Option<u32>,

    /// Probes in this IPv6 ASN
    #[arg(long)]
    pub asnv6: Option<u32>,

    /// Only these probe ids (comma separated)
    #[arg(long, value_name = "ID,...", value_parser = validators::comma_separated_integers)]
    pub ids: Option<::std::vec::Vec<i64>>,

    /// Column to show (repeatable)
    #[arg(long = "field", value_enum)]
    pub fields: Vec<ProbeField>,

    /// Maximum number of probes to fetch
    #[arg(long, value_parser = validators::integer_range(1, MAX_LIMIT as i64))]
    pub limit: Option<i64>,

    /// Print only probe ids
    #[arg(long)]
    pub ids_only: bool,
}

/// Measurement state filter
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusArg {
    /// Specified or scheduled
    Scheduled,
    /// Currently running
    Ongoing,
    /// Stopped, forced to stop, no suitable probes or failed
    Stopped,
}

impl StatusArg {
    /// Status ids this filter expands to
    pub fn status_ids(&self) -> Vec<i64> {
        match self {
            StatusArg::Scheduled => vec![STATUS_SPECIFIED, STATUS_SCHEDULED],
            StatusArg::Ongoing => vec![STATUS_ONGOING],
            StatusArg::Stopped => vec![
                STATUS_STOPPED,
                STATUS_FORCED_STOP,
                STATUS_NO_SUITABLE_PROBES,
                STATUS_FAILED,
            ],
        }
    }
}

/// Address family argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamilyArg {
    /// IPv4
    #[value(name = "4")]
    V4,
    /// IPv6
    #[value(name = "6")]
    V6,
}

impl AddressFamilyArg {
    pub fn as_number(&self) -> i64 {
        match self {
            AddressFamilyArg::V4 => 4,
            AddressFamilyArg::V6 => 6,
        }
    }
}

/// Measurement type argument
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeasurementTypeArg {
    Ping,
    Traceroute,
    Dns,
    Sslcert,
    Http,
    Ntp,
}

impl MeasurementTypeArg {
    /// Name used by the API
    pub fn as_str(&self) -> &'static str {
        match self {
            MeasurementTypeArg::Ping => "ping",
            MeasurementTypeArg::Traceroute => "traceroute",
            MeasurementTypeArg::Dns => "dns",
            MeasurementTypeArg::Sslcert => "sslcert",
            MeasurementTypeArg::Http => "http",
            MeasurementTypeArg::Ntp => "ntp",
        }
    }
}

/// Output format
#[derive(ValueEnum, Debug, Clone, Copy, Default)]
pub enum OutputFormat {
    /// Human-readable table format
    #[default]
    Table,
    /// JSON format for machine parsing
    Json,
    /// One line per record
    Compact,
}

/// Generate shell completions and print to stdout
pub fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut std::io::stdout());
}
