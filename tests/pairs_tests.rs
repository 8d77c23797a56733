use predicates::str::contains;

mod common;
use common::{init_db_with_employee, setup_test_db, tc};

fn punch_at(db_path: &str, kind: &str, at: &str) {
    tc().args([
        "--db", db_path, "--test", "punch", "1", kind, "--at", at,
    ])
    .assert()
    .success();
}

#[test]
fn test_full_day_pair_with_default_lunch() {
    let db_path = setup_test_db("pair_full_day");
    init_db_with_employee(&db_path);

    // 13:00Z..22:00Z is 08:00..17:00 in the default UTC-5 zone
    punch_at(&db_path, "entrada", "2025-06-02T13:00:00Z");
    punch_at(&db_path, "salida", "2025-06-02T22:00:00Z");

    // 9h span minus the 2h default lunch
    tc().args(["--db", &db_path, "--test", "pairs", "1"])
        .assert()
        .success()
        .stdout(contains("02/06/2025"))
        .stdout(contains("lunes"))
        .stdout(contains("entrada 08:00:00"))
        .stdout(contains("salida 17:00:00"))
        .stdout(contains("total 07:00"))
        .stdout(contains("(7.00)"));
}

#[test]
fn test_open_pair_shows_placeholder() {
    let db_path = setup_test_db("pair_open");
    init_db_with_employee(&db_path);
    punch_at(&db_path, "entrada", "2025-06-02T13:00:00Z");

    tc().args(["--db", &db_path, "--test", "pairs", "1"])
        .assert()
        .success()
        .stdout(contains("entrada 08:00:00"))
        .stdout(contains("salida --"))
        .stdout(contains("total 00:00"));
}

#[test]
fn test_overnight_pair_is_not_split_by_date() {
    let db_path = setup_test_db("pair_overnight");
    init_db_with_employee(&db_path);

    // 22:00 local in, 06:00 local out the next day
    punch_at(&db_path, "entrada", "2025-06-03T03:00:00Z");
    punch_at(&db_path, "salida", "2025-06-03T11:00:00Z");

    // one pair, 8h minus the 2h default lunch
    tc().args(["--db", &db_path, "--test", "pairs", "1"])
        .assert()
        .success()
        .stdout(contains("entrada 22:00:00"))
        .stdout(contains("salida 06:00:00"))
        .stdout(contains("total 06:00"));
}

#[test]
fn test_edited_lunch_changes_totals() {
    let db_path = setup_test_db("pair_edited_lunch");
    init_db_with_employee(&db_path);

    punch_at(&db_path, "entrada", "2025-06-02T13:00:00Z");
    tc().args(["--db", &db_path, "--test", "lunch", "1", "00:30"])
        .assert()
        .success();
    punch_at(&db_path, "salida", "2025-06-02T22:00:00Z");

    tc().args(["--db", &db_path, "--test", "pairs", "1"])
        .assert()
        .success()
        .stdout(contains("almuerzo 00:30"))
        .stdout(contains("total 08:30"))
        .stdout(contains("(8.50)"));
}

#[test]
fn test_pairs_for_employee_without_records() {
    let db_path = setup_test_db("pair_empty");
    init_db_with_employee(&db_path);

    tc().args(["--db", &db_path, "--test", "pairs", "1"])
        .assert()
        .success()
        .stdout(contains("Sin registros"));
}
