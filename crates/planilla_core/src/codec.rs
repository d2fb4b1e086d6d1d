//! Record codec trait and field formatting helpers.

use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use planilla_store::RecordId;

/// Date format used in record files (`dd/MM/yyyy`).
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Trait for entities stored as one line in a record file.
///
/// Implementors decide field order and the field counts a stored row may
/// have. Rows with any other count are skipped by typed listing while staying
/// visible through the store's raw read.
///
/// # Example
///
/// ```rust
/// use planilla_core::{CoreResult, RecordCodec};
/// use planilla_core::codec::parse_id;
/// use planilla_store::RecordId;
///
/// struct Tag {
///     id: RecordId,
///     label: String,
/// }
///
/// impl RecordCodec for Tag {
///     const ACCEPTED_FIELD_COUNTS: &'static [usize] = &[2];
///     const FIELD_NAMES: &'static [&'static str] = &["id", "label"];
///
///     fn record_id(&self) -> RecordId {
///         self.id
///     }
///
///     fn assign_id(&mut self, id: RecordId) {
///         self.id = id;
///     }
///
///     fn encode(&self) -> Vec<String> {
///         vec![self.id.to_string(), self.label.clone()]
///     }
///
///     fn decode(fields: &[String]) -> CoreResult<Self> {
///         Ok(Tag { id: parse_id(&fields[0])?, label: fields[1].clone() })
///     }
/// }
/// ```
pub trait RecordCodec: Sized {
    /// Field counts accepted when decoding a stored row.
    const ACCEPTED_FIELD_COUNTS: &'static [usize];

    /// Field names in storage order, used in validation errors.
    const FIELD_NAMES: &'static [&'static str];

    /// Returns the record key.
    fn record_id(&self) -> RecordId;

    /// Sets the record key, used once when the record is first stored.
    fn assign_id(&mut self, id: RecordId);

    /// Encodes the entity as fields, key first.
    fn encode(&self) -> Vec<String>;

    /// Decodes a row whose field count is one of
    /// [`RecordCodec::ACCEPTED_FIELD_COUNTS`].
    fn decode(fields: &[String]) -> CoreResult<Self>;

    /// Decodes a row, rejecting unexpected field counts first.
    fn decode_row(fields: &[String]) -> CoreResult<Self> {
        if !Self::ACCEPTED_FIELD_COUNTS.contains(&fields.len()) {
            return Err(CoreError::FieldCount {
                expected: Self::ACCEPTED_FIELD_COUNTS,
                actual: fields.len(),
            });
        }
        Self::decode(fields)
    }

    /// Checks that the entity can be written as one record line.
    fn validate(&self) -> CoreResult<()> {
        check_fields(Self::FIELD_NAMES, &self.encode())
    }
}

/// Checks that no field would break the line format.
///
/// Fields are written unquoted, so a delimiter or line break inside a value
/// would split the record.
pub fn check_fields(names: &[&'static str], fields: &[String]) -> CoreResult<()> {
    for (i, value) in fields.iter().enumerate() {
        if value.contains([',', '\n', '\r']) {
            let field = names.get(i).copied().unwrap_or("field");
            return Err(CoreError::invalid_field(
                field,
                value.as_str(),
                "contains a comma or line break",
            ));
        }
    }
    Ok(())
}

/// Parses the key field.
pub fn parse_id(value: &str) -> CoreResult<RecordId> {
    RecordId::parse_field(value).map_err(|_| CoreError::invalid_field("id", value, "not an integer"))
}

/// Formats an amount so it always carries a decimal part (`850000.0`).
#[must_use]
pub fn format_amount(value: f64) -> String {
    format!("{value:?}")
}

/// Parses an amount written by [`format_amount`] or by older tools
/// (`850000.0`, `1.0E7`).
pub fn parse_amount(field: &'static str, value: &str) -> CoreResult<f64> {
    let amount: f64 = value
        .parse()
        .map_err(|_| CoreError::invalid_field(field, value, "not a number"))?;
    if !amount.is_finite() {
        return Err(CoreError::invalid_field(field, value, "not finite"));
    }
    Ok(amount)
}

/// Formats a date as `dd/MM/yyyy`.
#[must_use]
pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a `dd/MM/yyyy` date.
pub fn parse_date(field: &'static str, value: &str) -> CoreResult<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| CoreError::invalid_field(field, value, "expected dd/MM/yyyy"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amount_keeps_decimal_point() {
        assert_eq!(format_amount(850000.0), "850000.0");
        assert_eq!(format_amount(1250.75), "1250.75");
    }

    #[test]
    fn amount_accepts_legacy_exponent() {
        assert_eq!(parse_amount("salary", "1.0E7").unwrap(), 10_000_000.0);
        assert_eq!(parse_amount("salary", "850000.0").unwrap(), 850_000.0);
    }

    #[test]
    fn amount_rejects_garbage() {
        assert!(parse_amount("salary", "abc").is_err());
        assert!(parse_amount("salary", "").is_err());
        assert!(parse_amount("salary", "NaN").is_err());
        assert!(parse_amount("salary", " 12.0").is_err());
    }

    #[test]
    fn date_round_trip_format() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(date), "05/03/2024");
        assert_eq!(parse_date("hire_date", "05/03/2024").unwrap(), date);
    }

    #[test]
    fn date_rejects_iso() {
        assert!(parse_date("hire_date", "2024-03-05").is_err());
    }

    #[test]
    fn check_fields_names_offender() {
        let fields = vec!["1".to_string(), "a,b".to_string()];
        let err = check_fields(&["id", "name"], &fields).unwrap_err();
        assert!(matches!(err, CoreError::InvalidField { field: "name", .. }));

        let fields = vec!["1".to_string(), "line\nbreak".to_string()];
        assert!(check_fields(&["id", "name"], &fields).is_err());

        let fields = vec!["1".to_string(), "ok".to_string()];
        assert!(check_fields(&["id", "name"], &fields).is_ok());
    }

    #[test]
    fn parse_id_reports_field() {
        assert_eq!(parse_id("9").unwrap(), RecordId::new(9));
        assert!(matches!(parse_id("x"), Err(CoreError::InvalidField { field: "id", .. })));
    }
}
