//! Classification session state
//!
//! The Checker holds the numeric mode and color selection picked on the
//! command line and turns raw input into reports.

use std::fmt;
use std::str::FromStr;

use core_types::Value;
use type_checks::{
    classify, is_color, is_ipv4, matching_formats, ColorFormat, ColorSelector, NumericMode,
    ValueKind,
};

use crate::error::{CliError, CliResult};

/// A single yes/no question about a value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// One of the value kinds
    Kind(ValueKind),
    /// Color literal of a selected format
    Color,
    /// IPv4 address
    Ipv4,
}

impl FromStr for Check {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "color" => Ok(Check::Color),
            "ipv4" => Ok(Check::Ipv4),
            _ => s
                .parse::<ValueKind>()
                .map(Check::Kind)
                .map_err(|_| CliError::UnknownCheck(s.to_string())),
        }
    }
}

/// Everything the checks say about one value
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    /// The input as given
    pub input: String,
    /// Kinds the value satisfies
    pub kinds: Vec<ValueKind>,
    /// Selected color formats the value matches
    pub colors: Vec<ColorFormat>,
    /// Whether the value is an IPv4 address
    pub ipv4: bool,
}

/// Formats as `input<TAB>kind,kind[<TAB>color:fmt,fmt][<TAB>ipv4]`.
impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kinds: Vec<&str> = self.kinds.iter().map(|kind| kind.name()).collect();
        write!(f, "{}\t{}", self.input, kinds.join(","))?;
        if !self.colors.is_empty() {
            let colors: Vec<&str> = self.colors.iter().map(|format| format.name()).collect();
            write!(f, "\tcolor:{}", colors.join(","))?;
        }
        if self.ipv4 {
            write!(f, "\tipv4")?;
        }
        Ok(())
    }
}

/// Classifies inputs under one numeric mode and color selection
#[derive(Debug, Clone, Default)]
pub struct Checker {
    mode: NumericMode,
    selector: ColorSelector,
    json: bool,
}

impl Checker {
    /// Create a checker
    ///
    /// # Example
    /// ```
    /// use type_checks::NumericMode;
    /// use typecheck_cli::Checker;
    ///
    /// let checker = Checker::new(NumericMode::Strict);
    /// assert_eq!(checker.mode(), NumericMode::Strict);
    /// ```
    pub fn new(mode: NumericMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    /// Restrict color checks to `formats`; an empty list keeps all formats
    pub fn with_formats(mut self, formats: Vec<ColorFormat>) -> Self {
        self.selector = if formats.is_empty() {
            ColorSelector::All
        } else {
            ColorSelector::Many(formats)
        };
        self
    }

    /// Parse inputs as JSON
    pub fn with_json(mut self, enabled: bool) -> Self {
        self.json = enabled;
        self
    }

    /// Current numeric mode
    pub fn mode(&self) -> NumericMode {
        self.mode
    }

    /// Switch numeric mode
    pub fn set_mode(&mut self, mode: NumericMode) {
        self.mode = mode;
    }

    /// Turn raw input into a value: JSON when enabled, otherwise a string
    pub fn parse_input(&self, raw: &str) -> CliResult<Value> {
        if !self.json {
            return Ok(Value::string(raw));
        }
        let json: serde_json::Value =
            serde_json::from_str(raw).map_err(|source| CliError::Json {
                input: raw.to_string(),
                source,
            })?;
        Ok(Value::from(json))
    }

    /// Answer one check
    pub fn check(&self, value: &Value, check: Check) -> bool {
        let passed = match check {
            Check::Kind(kind) => kind.check(value, self.mode),
            Check::Color => is_color(value, &self.selector),
            Check::Ipv4 => is_ipv4(value),
        };
        log::debug!("{:?} on {:?}: {}", check, value, passed);
        passed
    }

    /// Run every check on the value parsed from `raw`
    pub fn report(&self, raw: &str) -> CliResult<Report> {
        let value = self.parse_input(raw)?;
        let colors = match value.as_text() {
            Some(text) => matching_formats(text)
                .into_iter()
                .filter(|format| self.selector.formats().contains(format))
                .collect(),
            None => Vec::new(),
        };
        let report = Report {
            input: raw.to_string(),
            kinds: classify(&value, self.mode),
            colors,
            ipv4: is_ipv4(&value),
        };
        log::debug!("classified {:?} as {:?}", value, report);
        Ok(report)
    }
}
