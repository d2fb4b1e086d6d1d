//! Employee records.

use crate::codec::{
    check_fields, format_amount, format_date, parse_amount, parse_date, parse_id, RecordCodec,
};
use crate::error::{CoreError, CoreResult};
use chrono::NaiveDate;
use planilla_store::RecordId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field names in storage order.
pub const EMPLOYEE_FIELDS: [&str; 11] = [
    "id",
    "national_id",
    "first_name",
    "first_surname",
    "second_surname",
    "email",
    "phone",
    "gross_salary",
    "payroll_type",
    "position",
    "hire_date",
];

/// How often an employee is paid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PayrollType {
    /// Paid twice a month (`QUINCENAL`).
    Biweekly,
    /// Paid once a month (`MENSUAL`).
    Monthly,
}

impl PayrollType {
    /// Returns the stored form.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Biweekly => "QUINCENAL",
            Self::Monthly => "MENSUAL",
        }
    }
}

impl fmt::Display for PayrollType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for PayrollType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("QUINCENAL") {
            Ok(Self::Biweekly)
        } else if s.eq_ignore_ascii_case("MENSUAL") {
            Ok(Self::Monthly)
        } else {
            Err(CoreError::invalid_field(
                "payroll_type",
                s,
                "expected QUINCENAL or MENSUAL",
            ))
        }
    }
}

/// An employee row.
///
/// Stored with 10 fields, or 11 when a hire date is present. Rows written
/// before the hire date column existed still decode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Record key; 0 until the employee is stored.
    pub id: RecordId,
    /// National identity number.
    pub national_id: String,
    /// Given name.
    pub first_name: String,
    /// First surname.
    pub first_surname: String,
    /// Second surname.
    pub second_surname: String,
    /// Contact email.
    pub email: String,
    /// Contact phone.
    pub phone: String,
    /// Gross salary per pay period.
    pub gross_salary: f64,
    /// Pay frequency.
    pub payroll_type: PayrollType,
    /// Job title.
    pub position: String,
    /// Hire date, absent for rows in the original 10-field layout.
    pub hire_date: Option<NaiveDate>,
}

impl Employee {
    /// Returns given name and both surnames separated by spaces.
    #[must_use]
    pub fn full_name(&self) -> String {
        format!(
            "{} {} {}",
            self.first_name, self.first_surname, self.second_surname
        )
    }
}

impl RecordCodec for Employee {
    const ACCEPTED_FIELD_COUNTS: &'static [usize] = &[10, 11];
    const FIELD_NAMES: &'static [&'static str] = &EMPLOYEE_FIELDS;

    fn record_id(&self) -> RecordId {
        self.id
    }

    fn assign_id(&mut self, id: RecordId) {
        self.id = id;
    }

    fn encode(&self) -> Vec<String> {
        let mut fields = vec![
            self.id.to_string(),
            self.national_id.clone(),
            self.first_name.clone(),
            self.first_surname.clone(),
            self.second_surname.clone(),
            self.email.clone(),
            self.phone.clone(),
            format_amount(self.gross_salary),
            self.payroll_type.to_string(),
            self.position.clone(),
        ];
        if let Some(date) = self.hire_date {
            fields.push(format_date(date));
        }
        fields
    }

    fn decode(fields: &[String]) -> CoreResult<Self> {
        let hire_date = match fields.get(10).map(String::as_str) {
            None | Some("") => None,
            Some(value) => Some(parse_date("hire_date", value)?),
        };

        Ok(Self {
            id: parse_id(&fields[0])?,
            national_id: fields[1].clone(),
            first_name: fields[2].clone(),
            first_surname: fields[3].clone(),
            second_surname: fields[4].clone(),
            email: fields[5].clone(),
            phone: fields[6].clone(),
            gross_salary: parse_amount("gross_salary", &fields[7])?,
            payroll_type: fields[8].parse()?,
            position: fields[9].clone(),
            hire_date,
        })
    }

    fn validate(&self) -> CoreResult<()> {
        if !self.gross_salary.is_finite() || self.gross_salary < 0.0 {
            return Err(CoreError::invalid_field(
                "gross_salary",
                self.gross_salary.to_string(),
                "must be a non-negative number",
            ));
        }
        check_fields(Self::FIELD_NAMES, &self.encode())
    }
}
