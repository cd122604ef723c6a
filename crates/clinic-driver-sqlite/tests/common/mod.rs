#![allow(dead_code)]

use clinic_driver_sqlite::Connection;

pub const CLINIC_SCHEMA: &str = "
CREATE TABLE patient (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    address TEXT,
    birth_date DATE,
    phone TEXT,
    email TEXT
);

CREATE TABLE specialization (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL
);

CREATE TABLE doctor (
    id INTEGER PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    specialization_id INTEGER,
    FOREIGN KEY (specialization_id) REFERENCES specialization(id)
);

CREATE TABLE consultations (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    patient INTEGER,
    doctor INTEGER,
    date DATE,
    time TIME,
    FOREIGN KEY (patient) REFERENCES patient(id),
    FOREIGN KEY (doctor) REFERENCES doctor(id)
);

CREATE TABLE users (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    email TEXT NOT NULL,
    password TEXT NOT NULL,
    is_admin BOOLEAN DEFAULT 0
);
";

pub const CLINIC_DATA: &str = "
INSERT INTO specialization (name) VALUES ('General Practice'), ('Pediatrics'), ('Cardiology');

INSERT INTO patient (id, name, email) VALUES
    (1, 'João Silva', 'joao@email.com'),
    (2, 'Maria Santos', 'maria@email.com');

INSERT INTO doctor (id, name, email, specialization_id) VALUES
    (10, 'Dr. Carlos Oliveira', 'carlos@clinica.com', 1),
    (11, 'Dra. Ana Pereira', 'ana@clinica.com', 3);

INSERT INTO consultations (patient, doctor, date, time) VALUES
    (1, 10, '2024-01-15', '09:00'),
    (2, 11, '2099-01-01', '10:00'),
    (1, 11, '2099-01-01', '08:30');
";

pub fn clinic_db() -> Connection {
    let connection = Connection::in_memory().unwrap();
    connection.execute_batch(CLINIC_SCHEMA).unwrap();
    connection.execute_batch(CLINIC_DATA).unwrap();
    connection
}
