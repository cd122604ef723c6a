use clinic_core::schema::{ForeignKey, Introspect, Schema};

fn clinic_schema() -> Schema {
    Schema::builder()
        .table("patient", |t| {
            t.primary_key("id")
                .column("name")
                .column("address")
                .column("birth_date")
                .column("phone")
                .column("email")
        })
        .table("specialization", |t| t.primary_key("id").column("name"))
        .table("doctor", |t| {
            t.primary_key("id")
                .column("name")
                .column("email")
                .column("specialization_id")
                .foreign_key("specialization_id", "specialization", "id")
        })
        .table("consultations", |t| {
            t.primary_key("id")
                .column("patient")
                .column("doctor")
                .column("date")
                .column("time")
                .foreign_key("patient", "patient", "id")
                .foreign_key("doctor", "doctor", "id")
        })
        .build()
        .unwrap()
}

#[test]
fn foreign_keys_in_declaration_order() {
    let schema = clinic_schema();

    assert_eq!(
        schema.foreign_keys("consultations").unwrap(),
        [
            ForeignKey::new("patient", "patient", "id"),
            ForeignKey::new("doctor", "doctor", "id"),
        ]
    );
}

#[test]
fn table_without_foreign_keys() {
    let schema = clinic_schema();
    assert!(schema.foreign_keys("patient").unwrap().is_empty());
}

#[test]
fn unknown_table_is_schema_error() {
    let schema = clinic_schema();
    let err = schema.foreign_keys("hospital").unwrap_err();

    assert!(err.is_invalid_schema());
    assert_eq!(err.to_string(), "invalid schema: table `hospital` does not exist");
}

#[test]
fn describe_keeps_column_order() {
    let schema = clinic_schema();
    let doctor = schema.describe("doctor").unwrap();

    assert_eq!(
        doctor.column_names().collect::<Vec<_>>(),
        ["id", "name", "email", "specialization_id"]
    );
    assert_eq!(doctor.primary_key_column().unwrap().name, "id");
    assert_eq!(
        doctor.foreign_key("specialization_id").unwrap().to_table,
        "specialization"
    );
    assert!(doctor.foreign_key("email").is_none());
}

#[test]
fn repeated_calls_agree() {
    let schema = clinic_schema();
    assert_eq!(
        schema.foreign_keys("doctor").unwrap(),
        schema.foreign_keys("doctor").unwrap()
    );
}
