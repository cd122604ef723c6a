#![allow(dead_code)]

use clinic_core::{schema::LabelMap, stmt::Value, Schema};
use clinic_sql::{Serializer, Statement};

/// The clinic store's tables, as the bootstrap script declares them.
pub fn clinic_schema() -> Schema {
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
        .table("users", |t| {
            t.primary_key("id")
                .column("email")
                .column("password")
                .column("is_admin")
        })
        .build()
        .unwrap()
}

pub fn labels() -> LabelMap {
    LabelMap::default()
}

pub fn serialize(stmt: impl Into<Statement>) -> (String, Vec<Value>) {
    let mut params = vec![];
    let sql = Serializer::sqlite().serialize(&stmt.into(), &mut params);
    (sql, params)
}
