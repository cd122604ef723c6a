//! Upcoming-consultation listing.
//!
//! The listing joins through two levels of foreign keys (consultation to
//! doctor to specialization), which the generic select builder does not do,
//! so it runs a fixed statement. Its rows are then filtered and ordered in
//! memory by [`upcoming_sorted`].

use crate::{
    stmt::{Value, ValueRecord},
    Error, Result,
};

use chrono::{NaiveDate, NaiveDateTime};

/// `chrono` format of the combined date-time column.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Human-readable form of [`DATETIME_FORMAT`], used in error messages.
const DATETIME_PATTERN: &str = "YYYY-MM-DD HH:MM";

/// Lists every consultation with its doctor, the doctor's specialization,
/// the patient, and the combined date-time.
pub const UPCOMING_SQL: &str = "SELECT consultations.id, doctor.name, specialization.name, patient.name, \
consultations.date || ' ' || consultations.time \
FROM consultations \
JOIN doctor ON doctor.id = consultations.doctor \
JOIN specialization ON specialization.id = doctor.specialization_id \
JOIN patient ON patient.id = consultations.patient";

/// A row that is scheduled at a combined `YYYY-MM-DD HH:MM` date-time.
pub trait Scheduled {
    fn scheduled_at(&self) -> &str;
}

/// One line of the consultation listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsultationRow {
    pub id: i64,
    pub doctor: String,
    pub specialization: String,
    pub patient: String,

    /// Combined date and time, `YYYY-MM-DD HH:MM`
    pub scheduled_at: String,
}

impl ConsultationRow {
    /// Reads a row produced by [`UPCOMING_SQL`].
    pub fn from_record(mut record: ValueRecord) -> Result<Self> {
        if record.len() != 5 {
            return Err(Error::invalid_result(format!(
                "consultation row has {} fields; expected 5",
                record.len()
            )));
        }

        Ok(Self {
            id: record.take(0)?.to_i64()?,
            doctor: label(record.take(1)?)?,
            specialization: label(record.take(2)?)?,
            patient: label(record.take(3)?)?,
            scheduled_at: record.take(4)?.into_string()?,
        })
    }
}

impl Scheduled for ConsultationRow {
    fn scheduled_at(&self) -> &str {
        &self.scheduled_at
    }
}

fn label(value: Value) -> Result<String> {
    match value {
        Value::Null => Ok(String::new()),
        value => value.into_string(),
    }
}

/// Returns the rows scheduled on or after `reference_date`, ordered by
/// date-time.
///
/// Time of day is ignored when filtering, so a consultation earlier today is
/// still listed. Rows sharing a date-time keep their input order. A single
/// unparsable date-time rejects the whole batch.
pub fn upcoming_sorted<R>(rows: &[R], reference_date: NaiveDate) -> Result<Vec<R>>
where
    R: Scheduled + Clone,
{
    let mut upcoming = Vec::with_capacity(rows.len());

    for row in rows {
        let at = parse_datetime(row.scheduled_at())?;

        if at.date() >= reference_date {
            upcoming.push((at, row));
        }
    }

    upcoming.sort_by_key(|(at, _)| *at);

    Ok(upcoming.into_iter().map(|(_, row)| row.clone()).collect())
}

/// Parses a combined `YYYY-MM-DD HH:MM` date-time.
///
/// Every field must be zero-padded; `chrono` alone would also accept
/// `2024-1-5 9:00` or a leading sign.
pub fn parse_datetime(value: &str) -> Result<NaiveDateTime> {
    if !has_datetime_shape(value) {
        return Err(Error::invalid_format(value, DATETIME_PATTERN));
    }

    NaiveDateTime::parse_from_str(value, DATETIME_FORMAT)
        .map_err(|_| Error::invalid_format(value, DATETIME_PATTERN))
}

fn has_datetime_shape(value: &str) -> bool {
    value.len() == DATETIME_PATTERN.len()
        && value
            .bytes()
            .zip(DATETIME_PATTERN.bytes())
            .all(|(c, p)| match p {
                b'Y' | b'M' | b'D' | b'H' => c.is_ascii_digit(),
                _ => c == p,
            })
}
