use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper function to create a temporary directory for CLI tests
fn create_cli_test_environment() -> TempDir {
    TempDir::new().expect("Failed to create temporary directory")
}

/// Helper function to create a Command with --no-color and throwaway
/// database/ticket locations
fn rsv_cmd(temp_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("rsv").expect("Failed to find rsv binary");
    cmd.arg("--no-color");
    cmd.arg("--database-file");
    cmd.arg(temp_dir.path().join("cli_test.db"));
    cmd.arg("--tickets-dir");
    cmd.arg(temp_dir.path().join("tickets"));
    cmd
}

fn reserve_args(date: &str, start: &str, end: &str) -> Vec<String> {
    [
        "reserve",
        "polideportivo",
        date,
        start,
        end,
        "--requester",
        "Ana Pérez",
        "--contact",
        "555-0101",
        "--email",
        "ana@example.com",
        "--reason",
        "Basketball practice",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

#[test]
fn test_cli_reserve_success() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Created booking with ID: 1"))
        .stdout(predicate::str::contains("Ana Pérez"))
        .stdout(predicate::str::contains("Ticket written to"));
}

#[test]
fn test_cli_reserve_writes_ticket_file() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success();

    let ticket = temp_dir
        .path()
        .join("tickets")
        .join("ticket_1_ana-p-rez_2026-09-14.txt");
    let contents = std::fs::read_to_string(ticket).expect("Ticket file should exist");
    assert!(contents.contains("BOOKING TICKET"));
    assert!(contents.contains("Polideportivo"));
}

#[test]
fn test_cli_reserve_conflict_fails() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "11:00"))
        .assert()
        .success();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "10:00", "12:00"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not available"));
}

#[test]
fn test_cli_reserve_touching_slot_succeeds() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "10:00", "11:00"))
        .assert()
        .success();
}

#[test]
fn test_cli_list_empty() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found."));
}

#[test]
fn test_cli_default_command_lists() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found."));
}

#[test]
fn test_cli_check_and_day_view() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(["check", "polideportivo", "2026-09-14", "09:00", "10:00"])
        .assert()
        .success()
        .stdout(predicate::str::contains("is free on 2026-09-14"));

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success();

    rsv_cmd(&temp_dir)
        .args(["check", "polideportivo", "2026-09-14", "09:30", "10:30"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already booked"));

    rsv_cmd(&temp_dir)
        .args(["day", "polideportivo", "2026-09-14"])
        .assert()
        .success()
        .stdout(predicate::str::contains("09:00 - 10:00"))
        .stdout(predicate::str::contains("Ana Pérez"));
}

#[test]
fn test_cli_show_and_cancel() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success();

    rsv_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# 1. Polideportivo on 2026-09-14"));

    rsv_cmd(&temp_dir)
        .args(["cancel", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Cancelled booking 1"));

    rsv_cmd(&temp_dir)
        .args(["show", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No booking with ID 1."));
}

#[test]
fn test_cli_search_by_unparsable_id_is_empty() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success();

    rsv_cmd(&temp_dir)
        .args(["search", "--id", "abc"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No bookings found."));
}

#[test]
fn test_cli_search_by_requester() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args(reserve_args("2026-09-14", "09:00", "10:00"))
        .assert()
        .success();

    rsv_cmd(&temp_dir)
        .args(["search", "--requester", "Ana"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Ana Pérez"));
}

#[test]
fn test_cli_weekly_requires_weekdays() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args([
            "weekly",
            "sum",
            "18:00",
            "20:00",
            "--requester",
            "Club de ajedrez",
            "--contact",
            "555-0202",
            "--email",
            "club@example.com",
            "--reason",
            "Weekly meetup",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("weekdays"));
}

#[test]
fn test_cli_weekly_books_through_month_end() {
    let temp_dir = create_cli_test_environment();

    rsv_cmd(&temp_dir)
        .args([
            "weekly",
            "sum",
            "18:00",
            "20:00",
            "--weekdays",
            "mon,tue,wed,thu,fri,sat,sun",
            "--requester",
            "Club de ajedrez",
            "--contact",
            "555-0202",
            "--email",
            "club@example.com",
            "--reason",
            "Weekly meetup",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created"));
}
