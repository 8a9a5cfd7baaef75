use std::str::FromStr;
use std::sync::LazyLock;

use regex::Regex;

/// "<digits and periods> <unit>", e.g. "200g", "1.5 kg", "3 eggs"
///
/// `\d` is Unicode-aware: digits of any script belong to the number, never
/// to the unit.
static RE_DECIMAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([\d.]+)\s*(\D*)$").unwrap());

/// "<numerator> / <denominator> <unit>", e.g. "1/2 cup"
static RE_FRACTION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d+)\s*/\s*(\d+)\s*(\D*)$").unwrap());

static RE_DIGIT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^\d$").unwrap());

/// A quantity string reduced to a number and the text that follows it.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedQuantity {
    pub value: f64,
    /// Trimmed unit text; empty when the quantity is a bare number
    pub unit: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum QuantityError {
    #[error("unrecognized quantity: {0:?}")]
    Unrecognized(String),

    #[error("zero denominator in quantity: {0:?}")]
    ZeroDenominator(String),
}

/// The grammars a quantity is tried against, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Grammar {
    Decimal,
    Fraction,
}

const GRAMMARS: [Grammar; 2] = [Grammar::Decimal, Grammar::Fraction];

impl Grammar {
    /// `None` means "does not apply, try the next grammar".
    fn apply(self, input: &str) -> Option<Result<ParsedQuantity, QuantityError>> {
        match self {
            Grammar::Decimal => {
                let caps = RE_DECIMAL.captures(input)?;
                let value = parse_finite(&caps[1])?;

                Some(Ok(ParsedQuantity {
                    value,
                    unit: caps[2].trim().to_owned(),
                }))
            }
            Grammar::Fraction => {
                let caps = RE_FRACTION.captures(input)?;
                let numerator = parse_finite(&caps[1])?;
                let denominator = parse_finite(&caps[2])?;

                if denominator == 0.0 {
                    return Some(Err(QuantityError::ZeroDenominator(input.to_owned())));
                }

                Some(Ok(ParsedQuantity {
                    value: numerator / denominator,
                    unit: caps[3].trim().to_owned(),
                }))
            }
        }
    }
}

fn parse_finite(digits: &str) -> Option<f64> {
    let ascii = digits
        .chars()
        .map(|c| match c {
            '.' => Some('.'),
            c => digit_value(c).and_then(|d| char::from_digit(d, 10)),
        })
        .collect::<Option<String>>()?;

    ascii.parse::<f64>().ok().filter(|v| v.is_finite())
}

fn is_decimal_digit(c: char) -> bool {
    let mut buf = [0u8; 4];
    RE_DIGIT.is_match(c.encode_utf8(&mut buf))
}

/// Value of a decimal digit in any script.
///
/// Unicode encodes every script's decimal digits as complete runs of ten,
/// zero first, so the value is the distance to the start of the run modulo 10.
fn digit_value(c: char) -> Option<u32> {
    if let Some(d) = c.to_digit(10) {
        return Some(d);
    }
    if !is_decimal_digit(c) {
        return None;
    }

    let mut offset = 0;
    let mut code = c as u32;
    while let Some(prev) = code.checked_sub(1).and_then(char::from_u32) {
        if !is_decimal_digit(prev) {
            break;
        }
        offset += 1;
        code -= 1;
    }

    Some(offset % 10)
}

/// Parse a free-form quantity string into a value and a unit
///
/// Commas are read as decimal separators before anything else, so "1,5kg"
/// is 1.5 kg and "1,000" is 1.0.
///
/// Supports formats:
/// - Decimals with an optional unit: "200g", "200 g", "1.5kg", ".5 l"
/// - Fractions with an optional unit: "1/2", "1 / 2 cup"
///
/// Anything else ("a pinch", "to taste", "1 1/2") is an error, and so is a
/// fraction with a zero denominator.
pub fn parse_quantity(raw: &str) -> Result<ParsedQuantity, QuantityError> {
    let normalized = raw.replace(',', ".");
    let normalized = normalized.trim();

    for grammar in GRAMMARS {
        match grammar.apply(normalized) {
            Some(result) => return result,
            None => tracing::trace!(?grammar, quantity = normalized, "grammar did not apply"),
        }
    }

    Err(QuantityError::Unrecognized(raw.to_owned()))
}

impl FromStr for ParsedQuantity {
    type Err = QuantityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_quantity(s)
    }
}

/// Format a total without insignificant zeros
///
/// Formats:
/// - Integral values: 2.0 → "2"
/// - Decimals: 1.50 → "1.5"
/// - Float noise is rounded away at six decimals: 0.1 + 0.2 → "0.3"
/// - Non-zero values below that precision keep their digits: 2e-7 → "0.0000002"
pub fn format_quantity(value: f64) -> String {
    let fixed = format!("{value:.6}");

    match trim_zeros(&fixed) {
        "" | "0" | "-0" if value != 0.0 => {
            let exact = format!("{value}");
            trim_zeros(&exact).to_owned()
        }
        "" | "-0" => "0".to_owned(),
        other => other.to_owned(),
    }
}

fn trim_zeros(text: &str) -> &str {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        text
    }
}
