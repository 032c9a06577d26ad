//! Output formatting utilities
//!
//! Provides table, JSON and compact output formatting for CLI commands.

use crate::api::RecordPage;
use crate::cli::args::OutputFormat;
use crate::cli::fields::{Align, Column, Field};
use crate::domain::{Measurement, Probe, StatusColour};
use colored::Colorize;
use serde::Serialize;
use std::io::{self, Write};

/// Format and print output based on the selected format
pub fn print_output<T: Serialize + TableDisplay>(data: &T, format: OutputFormat) -> io::Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    write_output(&mut handle, data, format)
}

/// Format output into any writer
pub fn write_output<W: Write, T: Serialize + TableDisplay>(
    out: &mut W,
    data: &T,
    format: OutputFormat,
) -> io::Result<()> {
    match format {
        OutputFormat::Table => {
            writeln!(out, "{}", data.to_table())?;
        }
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(data).map_err(io::Error::other)?;
            writeln!(out, "{}", json)?;
        }
        OutputFormat::Compact => {
            writeln!(out, "{}", data.to_compact())?;
        }
    }

    Ok(())
}

/// Trait for types that can be displayed as a table
pub trait TableDisplay {
    /// Format as a table string
    fn to_table(&self) -> String;

    /// Format as compact lines
    fn to_compact(&self) -> String {
        self.to_table()
    }
}

/// Rendering options for one listing, built once per invocation
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig<F> {
    /// Columns to show, in order
    pub fields: Vec<F>,
    /// Paint status cells
    pub colorize: bool,
    /// Print only record ids
    pub ids_only: bool,
    /// Site root for link fields
    pub web_url: String,
}

impl<F> RenderConfig<F> {
    /// Options with colour and ids-only off
    pub fn new(fields: Vec<F>, web_url: impl Into<String>) -> Self {
        Self {
            fields,
            colorize: false,
            ids_only: false,
            web_url: web_url.into(),
        }
    }
}

/// One table cell
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub colour: Option<StatusColour>,
}

/// Fixed-width text table with a rule above and below the rows
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Vec<Cell>>,
    colorize: bool,
}

impl Table {
    pub fn new(columns: Vec<Column>, colorize: bool) -> Self {
        Self {
            columns,
            rows: Vec::new(),
            colorize,
        }
    }

    pub fn push_row(&mut self, row: Vec<Cell>) {
        self.rows.push(row);
    }

    /// Width of a full row: all columns plus single-space separators
    pub fn width(&self) -> usize {
        let cols: usize = self.columns.iter().map(|c| c.width).sum();
        cols + self.columns.len().saturating_sub(1)
    }

    /// Render with a right-aligned footer line
    pub fn render(&self, footer: &str) -> String {
        let width = self.width();
        let rule = "=".repeat(width);

        let header: Vec<String> = self
            .columns
            .iter()
            .map(|c| pad(c.header, c))
            .collect();

        let mut output = String::from("\n");
        output.push_str(&header.join(" "));
        output.push('\n');
        output.push_str(&rule);
        output.push('\n');

        for row in &self.rows {
            let cells: Vec<String> = self
                .columns
                .iter()
                .zip(row)
                .map(|(column, cell)| self.paint(pad(&cell.text, column), cell.colour))
                .collect();
            output.push_str(&cells.join(" "));
            output.push('\n');
        }

        output.push_str(&rule);
        output.push('\n');
        output.push_str(&format!("{:>width$}", footer, width = width));
        output.push('\n');
        output
    }

    fn paint(&self, text: String, colour: Option<StatusColour>) -> String {
        match colour {
            Some(c) if self.colorize => text.color(terminal_colour(c)).to_string(),
            _ => text,
        }
    }
}

/// Truncate to the column width, then align
fn pad(text: &str, column: &Column) -> String {
    let text: String = text.chars().take(column.width).collect();
    match column.align {
        Align::Left => format!("{:<width$}", text, width = column.width),
        Align::Right => format!("{:>width$}", text, width = column.width),
    }
}

fn terminal_colour(colour: StatusColour) -> colored::Color {
    match colour {
        StatusColour::White => colored::Color::White,
        StatusColour::Blue => colored::Color::Blue,
        StatusColour::Green => colored::Color::Green,
        StatusColour::Yellow => colored::Color::Yellow,
        StatusColour::Red => colored::Color::Red,
    }
}

/// Build a table of records for the selected fields
fn record_table<R, F: Field<R>>(records: &[R], config: &RenderConfig<F>) -> Table {
    let columns = config.fields.iter().map(|f| f.column()).collect();
    let mut table = Table::new(columns, config.colorize);

    for record in records {
        table.push_row(
            config
                .fields
                .iter()
                .map(|f| Cell {
                    text: f.value(record, &config.web_url),
                    colour: f.colour(record),
                })
                .collect(),
        );
    }

    table
}

fn footer(shown: usize, total: u64, noun: &str) -> String {
    format!("Showing {} of {} total {}", shown, total, noun)
}

fn id_lines(ids: impl Iterator<Item = u64>) -> String {
    ids.map(|id| id.to_string()).collect::<Vec<_>>().join("\n")
}

/// Measurement search results
#[derive(Debug, Clone, Serialize)]
pub struct MeasurementListing<F> {
    pub total_count: u64,
    pub measurements: Vec<Measurement>,
    #[serde(skip)]
    pub config: RenderConfig<F>,
}

impl<F> MeasurementListing<F> {
    pub fn new(page: RecordPage<Measurement>, config: RenderConfig<F>) -> Self {
        Self {
            total_count: page.total_count,
            measurements: page.records,
            config,
        }
    }
}

impl<F: Field<Measurement>> TableDisplay for MeasurementListing<F> {
    fn to_table(&self) -> String {
        if self.config.ids_only {
            return id_lines(self.measurements.iter().map(|m| m.id));
        }
        record_table(&self.measurements, &self.config).render(&footer(
            self.measurements.len(),
            self.total_count,
            "measurements",
        ))
    }

    fn to_compact(&self) -> String {
        if self.config.ids_only {
            return self.to_table();
        }
        self.measurements
            .iter()
            .map(|m| format!("{} {} {}", m.id, m.kind, m.status))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Probe search results
#[derive(Debug, Clone, Serialize)]
pub struct ProbeListing<F> {
    pub total_count: u64,
    pub probes: Vec<Probe>,
    #[serde(skip)]
    pub config: RenderConfig<F>,
}

impl<F> ProbeListing<F> {
    pub fn new(page: RecordPage<Probe>, config: RenderConfig<F>) -> Self {
        Self {
            total_count: page.total_count,
            probes: page.records,
            config,
        }
    }
}

impl<F: Field<Probe>> TableDisplay for ProbeListing<F> {
    fn to_table(&self) -> String {
        if self.config.ids_only {
            return id_lines(self.probes.iter().map(|p| p.id));
        }
        record_table(&self.probes, &self.config).render(&footer(
            self.probes.len(),
            self.total_count,
            "probes",
        ))
    }

    fn to_compact(&self) -> String {
        if self.config.ids_only {
            return self.to_table();
        }
        self.probes
            .iter()
            .map(|p| {
                format!(
                    "{} {} {}",
                    p.id,
                    p.country_code.as_deref().unwrap_or("-"),
                    p.status
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
