//! Decoders of raw positional fields in records.
//!
//! Integers are read leniently like the game does: a decimal such as `1234.5` is truncated toward
//! zero. Anything which is not a finite number is reported as [`ParseError::MalformedRecord`].

use itertools::Itertools;

use super::{ParseError, Result};
use crate::beatmap::lex::token::Section;

/// Parses an integer field, truncating a finite decimal.
pub(crate) fn parse_int<T: TryFrom<i64>>(
    section: Section,
    field: &'static str,
    raw: &str,
) -> Result<T> {
    let trimmed = raw.trim();
    let wide = match trimmed.parse::<i64>() {
        Ok(value) => Some(value),
        Err(_) => trimmed
            .parse::<f64>()
            .ok()
            .filter(|value| value.is_finite())
            .map(|value| value.trunc() as i64),
    };
    wide.and_then(|value| T::try_from(value).ok())
        .ok_or_else(|| malformed(section, field, raw))
}

/// Parses a finite float field.
pub(crate) fn parse_float(section: Section, field: &'static str, raw: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| malformed(section, field, raw))
}

/// Creates an error about an invalid field value.
pub(crate) fn malformed(section: Section, field: &'static str, raw: &str) -> ParseError {
    ParseError::MalformedRecord {
        section,
        field,
        value: raw.to_owned(),
    }
}

/// Positional fields of a record, split by a separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Fields<'a> {
    section: Section,
    fields: Vec<&'a str>,
}

impl<'a> Fields<'a> {
    /// Splits `record` into fields.
    pub(crate) fn split(section: Section, record: &'a str, separator: char) -> Self {
        Self {
            section,
            fields: record.split(separator).collect_vec(),
        }
    }

    /// Returns the field at `index`, or `None` if absent or blank.
    pub(crate) fn get(&self, index: usize) -> Option<&'a str> {
        self.fields
            .get(index)
            .copied()
            .filter(|raw| !raw.trim().is_empty())
    }

    /// Returns the field at `index`, which must be present.
    pub(crate) fn required(&self, index: usize, field: &'static str) -> Result<&'a str> {
        self.get(index).ok_or(ParseError::MissingField {
            section: self.section,
            field,
        })
    }

    /// Parses the required integer field at `index`.
    pub(crate) fn int<T: TryFrom<i64>>(&self, index: usize, field: &'static str) -> Result<T> {
        parse_int(self.section, field, self.required(index, field)?)
    }

    /// Parses the integer field at `index`, or returns `default` if absent.
    pub(crate) fn int_or<T: TryFrom<i64>>(
        &self,
        index: usize,
        field: &'static str,
        default: T,
    ) -> Result<T> {
        self.get(index)
            .map_or(Ok(default), |raw| parse_int(self.section, field, raw))
    }

    /// Parses the required float field at `index`.
    pub(crate) fn float(&self, index: usize, field: &'static str) -> Result<f64> {
        parse_float(self.section, field, self.required(index, field)?)
    }

    /// Creates an error about the invalid field at `index`.
    pub(crate) fn malformed(&self, index: usize, field: &'static str) -> ParseError {
        malformed(self.section, field, self.fields.get(index).copied().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const S: Section = Section::HitObjects;

    #[test]
    fn lenient_integers() {
        assert_eq!(parse_int::<i32>(S, "time", "1500"), Ok(1500));
        assert_eq!(parse_int::<i32>(S, "time", " -20 "), Ok(-20));
        assert_eq!(parse_int::<i32>(S, "time", "1234.9"), Ok(1234));
        assert_eq!(parse_int::<i32>(S, "time", "-0.5"), Ok(0));
    }

    #[test]
    fn malformed_integers() {
        for raw in ["", "abc", "NaN", "inf", "1e400"] {
            assert_eq!(
                parse_int::<i32>(S, "time", raw),
                Err(ParseError::MalformedRecord {
                    section: S,
                    field: "time",
                    value: raw.to_owned(),
                }),
                "{raw:?} must be rejected"
            );
        }
        assert!(parse_int::<u8>(S, "type", "256").is_err());
        assert!(parse_int::<u32>(S, "type", "-1").is_err());
    }

    #[test]
    fn floats_must_be_finite() {
        assert_eq!(parse_float(S, "beatLength", "333.33"), Ok(333.33));
        assert_eq!(parse_float(S, "beatLength", "-100"), Ok(-100.0));
        assert!(parse_float(S, "beatLength", "NaN").is_err());
        assert!(parse_float(S, "beatLength", "-inf").is_err());
    }

    #[test]
    fn positional_fields() {
        let fields = Fields::split(S, "1,,3", ',');
        assert_eq!(fields.get(0), Some("1"));
        assert_eq!(fields.get(1), None);
        assert_eq!(fields.int::<i32>(2, "c"), Ok(3));
        assert_eq!(fields.int_or(5, "f", 7_u32), Ok(7));
        assert_eq!(
            fields.required(1, "b"),
            Err(ParseError::MissingField {
                section: S,
                field: "b"
            })
        );
    }
}
