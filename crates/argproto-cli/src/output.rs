//! Output formatting and writing utilities
//!
//! Results are written to stdout either for humans or as JSON/YAML. Status
//! lines (info, success, section headers) only appear in human mode.

use crate::cli::OutputFormat;
use crate::error::Result;
use argproto_core::{Resolved, ValidationError, ValidationErrors};
use colored::Colorize;
use serde::Serialize;
use serde_json::{Map, Value};
use std::io::{self, Write};
use tracing::trace;

/// Serializable view of a resolved call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CallReport {
    /// Name the call was made under
    pub name: String,
    /// Function selected by the matching prototype
    pub function: String,
    pub args: Vec<Value>,
    pub kwargs: Map<String, Value>,
    /// Return value, when the function was invoked
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
}

impl CallReport {
    pub fn new(name: &str, resolved: &Resolved) -> Self {
        Self {
            name: name.to_string(),
            function: resolved.function.name().to_string(),
            args: resolved.args.clone(),
            kwargs: resolved.kwargs.clone(),
            result: None,
        }
    }

    pub fn with_result(mut self, result: Value) -> Self {
        self.result = Some(result);
        self
    }
}

/// Trait for formatting output with specialized support for common types
pub trait OutputFormatter {
    /// Format a serializable value
    fn format<T: Serialize>(&self, value: &T) -> Result<String>;

    /// Format a resolved call
    fn format_call_report(&self, report: &CallReport) -> Result<String>;

    /// Format a single validation error
    fn format_validation_error(&self, error: &ValidationError) -> Result<String>;

    /// Format the failures of a batch
    fn format_validation_errors(&self, errors: &ValidationErrors) -> Result<String>;
}

impl OutputFormatter for OutputFormat {
    fn format<T: Serialize>(&self, value: &T) -> Result<String> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string(value)?),
            OutputFormat::JsonPretty => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
            OutputFormat::Human => Ok(serde_json::to_string_pretty(value)?),
        }
    }

    fn format_call_report(&self, report: &CallReport) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_call_report_human(report)),
            _ => self.format(report),
        }
    }

    fn format_validation_error(&self, error: &ValidationError) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_error_human(error)),
            _ => self.format(error),
        }
    }

    fn format_validation_errors(&self, errors: &ValidationErrors) -> Result<String> {
        match self {
            OutputFormat::Human => Ok(format_validation_errors_human(errors)),
            _ => self.format(errors),
        }
    }
}

/// Output writer that handles different output formats and colors
pub struct OutputWriter {
    format: OutputFormat,
    use_color: bool,
    quiet: bool,
    writer: Box<dyn Write>,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(format: OutputFormat, use_color: bool, quiet: bool) -> Self {
        Self::with_writer(format, use_color, quiet, Box::new(io::stdout()))
    }

    /// Create an output writer with a custom writer
    pub fn with_writer(
        format: OutputFormat,
        use_color: bool,
        quiet: bool,
        writer: Box<dyn Write>,
    ) -> Self {
        Self {
            format,
            use_color,
            quiet,
            writer,
        }
    }

    /// Get the output format
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn is_human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    /// Write a line of output
    pub fn writeln(&mut self, content: &str) -> Result<()> {
        writeln!(self.writer, "{}", content)?;
        self.writer.flush()?;
        Ok(())
    }

    /// Write an info message
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&format!("{} {}", "ℹ".blue(), message))
        } else {
            self.writeln(&format!("INFO: {}", message))
        }
    }

    /// Write a success message
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.green().to_string())
        } else {
            self.writeln(message)
        }
    }

    /// Write an error message
    pub fn error(&mut self, message: &str) -> Result<()> {
        if !self.is_human() {
            return Ok(());
        }

        if self.use_color {
            self.writeln(&message.red().to_string())
        } else {
            self.writeln(&format!("ERROR: {}", message))
        }
    }

    /// Write a section header
    pub fn section(&mut self, title: &str) -> Result<()> {
        if self.quiet || !self.is_human() {
            return Ok(());
        }

        self.writeln("")?;
        if self.use_color {
            self.writeln(&format!("═══ {} ═══", title).bright_blue().to_string())
        } else {
            self.writeln(&format!("=== {} ===", title))
        }
    }

    /// Write data in the configured format
    pub fn data<T: Serialize>(&mut self, value: &T) -> Result<()> {
        let formatted = self.format.format(value)?;
        trace!(bytes = formatted.len(), "Writing data");
        self.writeln(formatted.trim_end())
    }

    /// Write a resolved call
    pub fn call_report(&mut self, report: &CallReport) -> Result<()> {
        let formatted = self.format.format_call_report(report)?;
        self.writeln(formatted.trim_end())
    }

    /// Write a single validation error
    pub fn validation_error(&mut self, error: &ValidationError) -> Result<()> {
        let formatted = self.format.format_validation_error(error)?;
        self.writeln(formatted.trim_end())
    }

    /// Write the failures of a batch
    pub fn validation_errors(&mut self, errors: &ValidationErrors) -> Result<()> {
        let formatted = self.format.format_validation_errors(errors)?;
        self.writeln(formatted.trim_end())
    }
}

fn format_call_report_human(report: &CallReport) -> String {
    let mut output = String::new();

    output.push_str(&format!("Call:     {}\n", report.name));
    output.push_str(&format!("Function: {}\n", report.function));
    output.push_str(&format!("Args:     {}\n", Value::Array(report.args.clone())));
    output.push_str(&format!("Kwargs:   {}\n", Value::Object(report.kwargs.clone())));

    if let Some(result) = &report.result {
        output.push_str(&format!("Result:   {}\n", result));
    }

    output
}

/// Every message of the error, one per line, outermost first
fn format_validation_error_human(error: &ValidationError) -> String {
    let mut output = String::new();

    for (auto, human) in error.autos().iter().zip(error.errors()) {
        if let Some(auto) = auto {
            output.push_str(&format!("  {}\n", auto));
        }
        if let Some(human) = human {
            output.push_str(&format!("  > {}\n", human));
        }
    }

    output
}

fn format_validation_errors_human(errors: &ValidationErrors) -> String {
    let mut output = String::new();

    output.push_str(&format!("{} call(s) rejected\n", errors.len()));
    for (i, error) in errors.iter().enumerate() {
        output.push_str(&format!("\n{}.\n", i + 1));
        output.push_str(&format_validation_error_human(error));
    }

    output
}
