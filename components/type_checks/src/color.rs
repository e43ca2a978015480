//! Color literal classification.
//!
//! Five fixed grammars, one per [`ColorFormat`]: `#rgb`/`#rrggbb` hex,
//! `rgb()`, `rgba()`, `hsl()` and `hsla()`. Each grammar encodes the channel
//! ranges itself (0-255 channels, 0-360 hue, 0-100 percentages, 0-1 alpha),
//! so classification needs no numeric decoding.
//!
//! Callers choose which grammars to test with a [`ColorSelector`]. Each
//! format is also identified by a unique [`Symbol`] token, for dynamic
//! callers that build selectors out of runtime values.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use core_types::{ObjectClass, Symbol, Value};
use regex::Regex;

use crate::error::ParseNameError;
use crate::primitive::{is_string, is_symbol};

/// Integer 0-255, no leading zeros
const CHANNEL: &str = r"(?:2(?:[0-4][0-9]|5[0-5])|1[0-9]{2}|[1-9]?[0-9])";
/// `0`, `1`, `1.0` or a one-digit fraction (`.5`, `0.5`)
const ALPHA: &str = r"(?:0|1(?:\.0)?|0?\.[0-9])";
/// Integer 0-360, no leading zeros
const HUE: &str = r"(?:3(?:60|[0-5][0-9])|[12][0-9]{2}|[1-9]?[0-9])";
/// Separator whitespace: the ECMAScript `\s` set, which excludes U+0085
const WS: &str =
    r"[\t\n\v\f\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}]";
/// 0-100 with at most one decimal digit, then `%`
const PERCENT: &str = r"(?:100(?:\.0)?|[1-9]?[0-9](?:\.[0-9])?)%";

/// Pattern per format, indexed by `ColorFormat as usize`.
static COLOR_PATTERNS: LazyLock<[Regex; 5]> = LazyLock::new(|| {
    log::debug!("compiling color patterns");
    [
        r"(?i)^#[0-9a-f]{3}(?:[0-9a-f]{3})?$".to_string(),
        format!(r"^rgb\({WS}*{CHANNEL}(?:{WS}*,{WS}*{CHANNEL}){{2}}{WS}*\)$"),
        format!(r"^rgba?\({WS}*{CHANNEL}(?:{WS}*,{WS}*{CHANNEL}){{2}}{WS}*,{WS}*{ALPHA}{WS}*\)$"),
        format!(r"^hsl\({WS}*{HUE}(?:{WS}*,{WS}*{PERCENT}){{2}}{WS}*\)$"),
        format!(r"^hsla\({WS}*{HUE}(?:{WS}*,{WS}*{PERCENT}){{2}}(?:{WS}*,{WS}*{ALPHA})?{WS}*\)$"),
    ]
    .map(|pattern| Regex::new(&pattern).expect("color pattern is valid"))
});

/// Opaque token per format, indexed by `ColorFormat as usize`.
static FORMAT_SYMBOLS: LazyLock<[Symbol; 5]> =
    LazyLock::new(|| ColorFormat::ALL.map(|format| Symbol::new(Some(format.name()))));

/// A supported textual color grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorFormat {
    /// `#` and 3 or 6 hex digits
    Hex,
    /// `rgb(r, g, b)`
    Rgb,
    /// `rgba(r, g, b, a)`, also accepting the `rgb(` prefix
    Rgba,
    /// `hsl(h, s%, l%)`
    Hsl,
    /// `hsla(h, s%, l%[, a])`
    Hsla,
}

impl ColorFormat {
    /// Every format, in declaration order
    pub const ALL: [ColorFormat; 5] = [
        ColorFormat::Hex,
        ColorFormat::Rgb,
        ColorFormat::Rgba,
        ColorFormat::Hsl,
        ColorFormat::Hsla,
    ];

    /// Lowercase format name
    pub fn name(self) -> &'static str {
        match self {
            ColorFormat::Hex => "hex",
            ColorFormat::Rgb => "rgb",
            ColorFormat::Rgba => "rgba",
            ColorFormat::Hsl => "hsl",
            ColorFormat::Hsla => "hsla",
        }
    }

    /// The unique symbol identifying this format in dynamic selectors.
    ///
    /// The same symbol is returned for the life of the process and no other
    /// symbol compares equal to it.
    pub fn symbol(self) -> &'static Symbol {
        &FORMAT_SYMBOLS[self as usize]
    }

    /// The format identified by `symbol`, if any
    pub fn from_symbol(symbol: &Symbol) -> Option<ColorFormat> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.symbol() == symbol)
    }

    /// Whether `text` matches this format's grammar
    pub fn matches(self, text: &str) -> bool {
        COLOR_PATTERNS[self as usize].is_match(text)
    }
}

impl fmt::Display for ColorFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorFormat {
    type Err = ParseNameError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ColorFormat::ALL
            .into_iter()
            .find(|format| format.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseNameError::ColorFormat(s.to_string()))
    }
}

/// Which formats [`is_color`] tests against.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ColorSelector {
    /// All five formats
    #[default]
    All,
    /// Exactly one format
    Single(ColorFormat),
    /// Any of the listed formats; an empty list never matches
    Many(Vec<ColorFormat>),
}

impl ColorSelector {
    /// Build a selector from a runtime value.
    ///
    /// - a symbol (primitive or wrapper) or string is a single tag: it
    ///   selects its format when it is one of the [`ColorFormat::symbol`]
    ///   tokens and nothing otherwise (strings never are)
    /// - an array selects every element that is a format token, boxed or
    ///   not; other elements are dropped
    /// - anything else selects all formats
    ///
    /// # Examples
    ///
    /// ```
    /// use core_types::Value;
    /// use type_checks::{ColorFormat, ColorSelector};
    ///
    /// let hex = Value::Symbol(ColorFormat::Hex.symbol().clone());
    /// assert_eq!(ColorSelector::from_value(&hex), ColorSelector::Single(ColorFormat::Hex));
    ///
    /// let list = Value::array(vec![hex, Value::string("rgb"), Value::Smi(1)]);
    /// assert_eq!(ColorSelector::from_value(&list), ColorSelector::Many(vec![ColorFormat::Hex]));
    ///
    /// assert_eq!(ColorSelector::from_value(&Value::Undefined), ColorSelector::All);
    /// ```
    pub fn from_value(value: &Value) -> ColorSelector {
        match value {
            _ if is_symbol(value) => match format_token(value) {
                Some(format) => ColorSelector::Single(format),
                None => ColorSelector::Many(Vec::new()),
            },
            _ if is_string(value) => ColorSelector::Many(Vec::new()),
            Value::Object(obj) => match obj.class() {
                ObjectClass::Array(elements) => ColorSelector::Many(
                    elements
                        .iter()
                        .filter_map(format_token)
                        .collect(),
                ),
                _ => ColorSelector::All,
            },
            _ => ColorSelector::All,
        }
    }

    /// The selected formats, in selection order
    pub fn formats(&self) -> &[ColorFormat] {
        match self {
            ColorSelector::All => &ColorFormat::ALL,
            ColorSelector::Single(format) => std::slice::from_ref(format),
            ColorSelector::Many(formats) => formats,
        }
    }
}

/// The format named by a symbol or Symbol wrapper object, if any
fn format_token(value: &Value) -> Option<ColorFormat> {
    match value {
        Value::Symbol(symbol) => ColorFormat::from_symbol(symbol),
        Value::Object(obj) => match obj.class() {
            ObjectClass::Symbol(symbol) => ColorFormat::from_symbol(symbol),
            _ => None,
        },
        _ => None,
    }
}

impl From<ColorFormat> for ColorSelector {
    fn from(format: ColorFormat) -> Self {
        ColorSelector::Single(format)
    }
}

impl FromIterator<ColorFormat> for ColorSelector {
    fn from_iter<I: IntoIterator<Item = ColorFormat>>(iter: I) -> Self {
        ColorSelector::Many(iter.into_iter().collect())
    }
}

/// Whether `text` matches at least one selected format.
pub fn is_color_str(text: &str, selector: &ColorSelector) -> bool {
    selector.formats().iter().any(|format| format.matches(text))
}

/// Classifies `value` as a color literal of one of the selected formats.
///
/// Only strings and String wrapper objects can be colors; every other value
/// is `false`.
///
/// # Examples
///
/// ```
/// use core_types::Value;
/// use type_checks::{is_color, ColorFormat, ColorSelector};
///
/// assert!(is_color(&Value::string("#A5B412"), &ColorSelector::All));
/// assert!(is_color(&Value::string("rgb(121, 23, 5)"), &ColorSelector::All));
/// assert!(!is_color(&Value::string("rgb(121, 23, 5)"), &ColorFormat::Hex.into()));
/// assert!(!is_color(&Value::Null, &ColorSelector::All));
/// ```
pub fn is_color(value: &Value, selector: &ColorSelector) -> bool {
    value
        .as_text()
        .is_some_and(|text| is_color_str(text, selector))
}

/// Every format whose grammar `text` matches.
///
/// `rgba` also accepts the `rgb(` prefix, so `rgb(1, 2, 3, 0.5)` reports
/// only `Rgba` while `rgb(1, 2, 3)` reports only `Rgb`.
pub fn matching_formats(text: &str) -> Vec<ColorFormat> {
    ColorFormat::ALL
        .into_iter()
        .filter(|format| format.matches(text))
        .collect()
}
