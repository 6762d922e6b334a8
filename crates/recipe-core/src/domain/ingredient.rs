//! Ingredient Parser
//!
//! Turns free-text ingredient lines such as `"4 1/2 cups plain flour"`
//! into a quantity, a canonical unit and a name. Parsing never fails.

use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use super::units::canonical_unit;

/// One parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ingredient {
    /// Amount, if the line starts with one
    pub quantity: Option<f64>,
    /// Canonical unit, if the token after the quantity is a known unit
    pub unit: Option<String>,
    pub name: String,
}

impl Ingredient {
    /// An ingredient that is nothing but a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            quantity: None,
            unit: None,
            name: name.into(),
        }
    }
}

/// Parenthesised asides like "(about 200g)" carry no structure we use
fn parentheses() -> &'static Regex {
    static PARENTHESES: OnceLock<Regex> = OnceLock::new();
    PARENTHESES.get_or_init(|| Regex::new(r"\([^)]*\)").expect("parentheses pattern is valid"))
}

/// Parse one raw ingredient line.
pub fn parse(raw: &str) -> Ingredient {
    let cleaned = parentheses().replace_all(raw, " ");
    let tokens: Vec<&str> = cleaned.split_whitespace().collect();

    let (quantity, mut rest) = match leading_quantity(&tokens) {
        Some((quantity, used)) => (Some(quantity), &tokens[used..]),
        None => (None, &tokens[..]),
    };

    let unit = rest.first().and_then(|token| canonical_unit(token));
    if unit.is_some() {
        rest = &rest[1..];
    }

    let name = rest.join(" ");
    if name.is_empty() && quantity.is_none() && unit.is_none() {
        return Ingredient::named(raw.trim());
    }

    Ingredient {
        quantity,
        unit: unit.map(String::from),
        name,
    }
}

/// Detect a leading quantity and how many tokens it spans.
///
/// A whole number followed by a fraction is read as a mixed number.
fn leading_quantity(tokens: &[&str]) -> Option<(f64, usize)> {
    let first = tokens.first()?;
    let value = parse_number(first)?;

    if is_whole(first) {
        if let Some(fraction) = tokens.get(1).and_then(|t| parse_fraction(t)) {
            return Some((value + fraction, 2));
        }
    }
    Some((value, 1))
}

fn parse_number(token: &str) -> Option<f64> {
    if let Some(fraction) = parse_fraction(token) {
        return Some(fraction);
    }

    // "1-1/2" is a mixed number, "2-3" a range read as its lower bound
    if let Some((whole, rest)) = token.split_once('-') {
        let whole = parse_decimal(whole)?;
        return match parse_fraction(rest) {
            Some(fraction) => Some(whole + fraction),
            None => parse_decimal(rest).map(|_| whole),
        };
    }

    // "1½"
    if let Some(last) = token.chars().last() {
        if let Some(fraction) = vulgar_fraction(last) {
            let whole = &token[..token.len() - last.len_utf8()];
            if !whole.is_empty() && is_whole(whole) {
                return parse_decimal(whole).map(|w| w + fraction);
            }
        }
    }

    parse_decimal(token)
}

/// "1/2" or a single vulgar fraction character
fn parse_fraction(token: &str) -> Option<f64> {
    let mut chars = token.chars();
    if let (Some(c), None) = (chars.next(), chars.next()) {
        return vulgar_fraction(c);
    }

    let (numerator, denominator) = token.split_once('/')?;
    if !is_whole(numerator) || !is_whole(denominator) {
        return None;
    }
    let numerator: f64 = numerator.parse().ok()?;
    let denominator: f64 = denominator.parse().ok()?;
    if denominator == 0.0 {
        return None;
    }
    Some(numerator / denominator)
}

/// Digits with at most one decimal point; rejects "inf", "1e3" and friends
fn parse_decimal(token: &str) -> Option<f64> {
    let digits = token.chars().filter(|c| c.is_ascii_digit()).count();
    let points = token.chars().filter(|&c| c == '.').count();
    if digits == 0 || points > 1 || digits + points != token.chars().count() {
        return None;
    }
    token.parse().ok()
}

fn is_whole(token: &str) -> bool {
    !token.is_empty() && token.chars().all(|c| c.is_ascii_digit())
}

fn vulgar_fraction(c: char) -> Option<f64> {
    let value = match c {
        '½' => 1.0 / 2.0,
        '⅓' => 1.0 / 3.0,
        '⅔' => 2.0 / 3.0,
        '¼' => 1.0 / 4.0,
        '¾' => 3.0 / 4.0,
        '⅛' => 1.0 / 8.0,
        '⅜' => 3.0 / 8.0,
        '⅝' => 5.0 / 8.0,
        '⅞' => 7.0 / 8.0,
        _ => return None,
    };
    Some(value)
}

/// Render a quantity for display, preferring kitchen fractions: `4.5` -> `"4 1/2"`.
pub fn format_quantity(quantity: f64) -> String {
    if !quantity.is_finite() {
        return String::new();
    }

    let whole = quantity.trunc();
    let fraction = quantity - whole;
    if fraction.abs() < 1e-6 {
        return format!("{}", whole as i64);
    }

    let closest = [2u32, 3, 4, 8]
        .iter()
        .map(|&d| {
            let n = (fraction * f64::from(d)).round() as u32;
            (n, d, (fraction - f64::from(n) / f64::from(d)).abs())
        })
        .min_by(|a, b| a.2.total_cmp(&b.2));

    match closest {
        Some((n, d, error)) if error < 1e-3 && n > 0 && n < d => {
            let divisor = gcd(n, d);
            let fraction = format!("{}/{}", n / divisor, d / divisor);
            if whole == 0.0 {
                fraction
            } else {
                format!("{} {}", whole as i64, fraction)
            }
        }
        _ => {
            let text = format!("{:.2}", quantity);
            text.trim_end_matches('0').trim_end_matches('.').to_string()
        }
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}
