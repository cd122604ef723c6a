mod common;
use common::{clinic_schema, labels, serialize};

use clinic_core::stmt::Value;
use clinic_sql::{build_select, count, delete, insert, lookup, search, update};
use pretty_assertions::assert_eq;

#[test]
fn search_matches_every_selected_column() {
    let schema = clinic_schema();
    let select = build_select(&schema, &labels(), "doctor", &["id", "name"]).unwrap();

    let (sql, params) = serialize(search(select, "Silva"));

    assert_eq!(
        sql,
        "SELECT id, name FROM doctor \
         WHERE LOWER(id) LIKE ?1 ESCAPE '\\' OR LOWER(name) LIKE ?2 ESCAPE '\\'"
    );
    assert_eq!(params, vec![Value::from("%silva%"), Value::from("%silva%")]);
}

#[test]
fn search_matches_labels_of_joined_tables() {
    let schema = clinic_schema();
    let select = build_select(&schema, &labels(), "doctor", &["name", "specialization_id"]).unwrap();

    let (sql, params) = serialize(search(select, "cardio"));

    assert_eq!(
        sql,
        "SELECT doctor.name, specialization.name FROM doctor \
         JOIN specialization ON specialization.id = doctor.specialization_id \
         WHERE LOWER(doctor.name) LIKE ?1 ESCAPE '\\' \
         OR LOWER(specialization.name) LIKE ?2 ESCAPE '\\'"
    );
    assert_eq!(params.len(), 2);
}

#[test]
fn search_text_is_bound_not_spliced() {
    let schema = clinic_schema();
    let select = build_select(&schema, &labels(), "patient", &["name"]).unwrap();

    let (sql, params) = serialize(search(select, "50%_o'Brien"));

    assert_eq!(sql, "SELECT name FROM patient WHERE LOWER(name) LIKE ?1 ESCAPE '\\'");
    assert_eq!(params, vec![Value::from("%50\\%\\_o'brien%")]);
}

#[test]
fn empty_search_text_leaves_select_unchanged() {
    let schema = clinic_schema();
    let select = build_select(&schema, &labels(), "patient", &["id", "name"]).unwrap();

    assert_eq!(search(select.clone(), ""), select);
}

#[test]
fn search_keeps_existing_filter() {
    let schema = clinic_schema();
    let select = lookup(&schema, "patient", "id", "email", "maria@example.com").unwrap();

    let (sql, params) = serialize(search(select, "x"));

    assert_eq!(
        sql,
        "SELECT id FROM patient WHERE email = ?1 AND LOWER(id) LIKE ?2 ESCAPE '\\'"
    );
    assert_eq!(
        params,
        vec![Value::from("maria@example.com"), Value::from("%x%")]
    );
}

#[test]
fn lookup_binds_the_value() {
    let schema = clinic_schema();
    let select = lookup(&schema, "specialization", "id", "name", "Cardiology").unwrap();

    let (sql, params) = serialize(select);

    assert_eq!(sql, "SELECT id FROM specialization WHERE name = ?1");
    assert_eq!(params, vec![Value::from("Cardiology")]);
}

#[test]
fn count_with_conditions() {
    let schema = clinic_schema();
    let select = count(
        &schema,
        "users",
        &[
            ("email", Value::from("admin@clinic.com")),
            ("password", Value::from("secret")),
        ],
    )
    .unwrap();

    let (sql, params) = serialize(select);

    assert_eq!(
        sql,
        "SELECT COUNT(*) FROM users WHERE email = ?1 AND password = ?2"
    );
    assert_eq!(
        params,
        vec![Value::from("admin@clinic.com"), Value::from("secret")]
    );
}

#[test]
fn count_without_conditions() {
    let schema = clinic_schema();
    let (sql, params) = serialize(count(&schema, "doctor", &[]).unwrap());

    assert_eq!(sql, "SELECT COUNT(*) FROM doctor");
    assert!(params.is_empty());
}

#[test]
fn insert_binds_every_value() {
    let schema = clinic_schema();
    let stmt = insert(
        &schema,
        "consultations",
        &[
            ("patient", Value::from(1)),
            ("doctor", Value::from(2)),
            ("date", Value::from("2099-01-01")),
            ("time", Value::from("10:00")),
        ],
    )
    .unwrap();

    let (sql, params) = serialize(stmt);

    assert_eq!(
        sql,
        "INSERT INTO consultations (patient, doctor, date, time) VALUES (?1, ?2, ?3, ?4)"
    );
    assert_eq!(
        params,
        vec![
            Value::I64(1),
            Value::I64(2),
            Value::from("2099-01-01"),
            Value::from("10:00"),
        ]
    );
}

#[test]
fn insert_rejects_unknown_column() {
    let schema = clinic_schema();
    let err = insert(&schema, "doctor", &[("salary", Value::from(10))]).unwrap_err();
    assert!(err.is_invalid_identifier());
}

#[test]
fn insert_requires_values() {
    let schema = clinic_schema();
    let err = insert(&schema, "doctor", &[]).unwrap_err();
    assert!(err.is_invalid_identifier());
}

#[test]
fn update_sets_then_filters() {
    let schema = clinic_schema();
    let stmt = update(
        &schema,
        "patient",
        &[("name", Value::from("Maria Souza")), ("phone", Value::Null)],
        ("id", Value::from(7)),
    )
    .unwrap();

    let (sql, params) = serialize(stmt);

    assert_eq!(sql, "UPDATE patient SET name = ?1, phone = ?2 WHERE id = ?3");
    assert_eq!(
        params,
        vec![Value::from("Maria Souza"), Value::Null, Value::I64(7)]
    );
}

#[test]
fn update_rejects_malformed_key() {
    let schema = clinic_schema();
    let err = update(
        &schema,
        "patient",
        &[("name", Value::from("x"))],
        ("id OR 1=1", Value::from(7)),
    )
    .unwrap_err();

    assert!(err.is_invalid_identifier());
}

#[test]
fn delete_by_key() {
    let schema = clinic_schema();
    let (sql, params) = serialize(delete(&schema, "doctor", ("id", Value::from(3))).unwrap());

    assert_eq!(sql, "DELETE FROM doctor WHERE id = ?1");
    assert_eq!(params, vec![Value::I64(3)]);
}

#[test]
fn delete_from_unknown_table() {
    let schema = clinic_schema();
    let err = delete(&schema, "hospital", ("id", Value::from(3))).unwrap_err();
    assert!(err.is_invalid_schema());
}
