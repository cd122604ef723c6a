use chrono::NaiveDate;
use clinic_core::consultation::{upcoming_sorted, ConsultationRow, Scheduled};
use pretty_assertions::assert_eq;

fn row(id: i64, scheduled_at: &str) -> ConsultationRow {
    ConsultationRow {
        id,
        doctor: format!("doctor {id}"),
        specialization: "Cardiology".to_string(),
        patient: format!("patient {id}"),
        scheduled_at: scheduled_at.to_string(),
    }
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn ids(rows: &[ConsultationRow]) -> Vec<i64> {
    rows.iter().map(|row| row.id).collect()
}

#[test]
fn past_rows_are_dropped() {
    let rows = [
        row(1, "2024-01-15 09:00"),
        row(2, "2099-01-01 10:00"),
        row(3, "2020-01-01 08:00"),
    ];

    let upcoming = upcoming_sorted(&rows, date(2025, 1, 1)).unwrap();
    assert_eq!(upcoming, [row(2, "2099-01-01 10:00")]);
}

#[test]
fn rows_are_ordered_by_date_and_time() {
    let rows = [
        row(1, "2030-05-02 08:00"),
        row(2, "2030-05-01 16:30"),
        row(3, "2030-05-01 09:15"),
        row(4, "2031-01-01 00:00"),
    ];

    let upcoming = upcoming_sorted(&rows, date(2030, 1, 1)).unwrap();
    assert_eq!(ids(&upcoming), [3, 2, 1, 4]);
}

#[test]
fn time_of_day_is_ignored_on_reference_date() {
    let rows = [row(1, "2025-01-01 00:01"), row(2, "2024-12-31 23:59")];

    let upcoming = upcoming_sorted(&rows, date(2025, 1, 1)).unwrap();
    assert_eq!(ids(&upcoming), [1]);
}

#[test]
fn ties_keep_input_order() {
    let rows = [
        row(7, "2030-05-01 09:00"),
        row(5, "2030-05-01 09:00"),
        row(6, "2030-05-01 09:00"),
    ];

    let upcoming = upcoming_sorted(&rows, date(2030, 5, 1)).unwrap();
    assert_eq!(ids(&upcoming), [7, 5, 6]);
}

#[test]
fn sorted_output_is_a_fixed_point() {
    let rows = [
        row(1, "2030-05-02 08:00"),
        row(2, "2020-05-01 16:30"),
        row(3, "2030-05-01 09:15"),
    ];
    let reference = date(2025, 6, 1);

    let once = upcoming_sorted(&rows, reference).unwrap();
    let twice = upcoming_sorted(&once, reference).unwrap();
    assert_eq!(once, twice);

    for pair in once.windows(2) {
        assert!(pair[0].scheduled_at() <= pair[1].scheduled_at());
    }
}

#[test]
fn malformed_row_fails_the_batch() {
    let rows = [
        row(1, "2099-01-01 10:00"),
        row(2, "01/02/2099 10:00"),
        row(3, "2099-01-02 10:00"),
    ];

    let err = upcoming_sorted(&rows, date(2025, 1, 1)).unwrap_err();
    assert!(err.is_invalid_format());
    assert_eq!(
        err.to_string(),
        "invalid format: `01/02/2099 10:00` does not match `YYYY-MM-DD HH:MM`"
    );
}

#[test]
fn malformed_past_row_still_fails() {
    let rows = [row(1, "2099-01-01 10:00"), row(2, "2020-13-01 10:00")];

    assert!(upcoming_sorted(&rows, date(2025, 1, 1))
        .unwrap_err()
        .is_invalid_format());
}

#[test]
fn input_is_left_untouched() {
    let rows = vec![row(2, "2030-05-02 08:00"), row(1, "2030-05-01 08:00")];
    let before = rows.clone();

    upcoming_sorted(&rows, date(2025, 1, 1)).unwrap();
    assert_eq!(rows, before);
}

#[test]
fn unpadded_row_fails_the_batch() {
    let rows = [row(1, "2099-01-01 10:00"), row(2, "2099-1-5 9:00")];

    let err = upcoming_sorted(&rows, date(2025, 1, 1)).unwrap_err();
    assert!(err.is_invalid_format());
}
