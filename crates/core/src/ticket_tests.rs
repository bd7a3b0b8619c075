// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use chrono::{Duration, TimeZone};
use yare::parameterized;

fn at(minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 2, 6, 9, minute, 0).unwrap()
}

fn open_ticket() -> Ticket {
    Ticket::new(
        "FIRE0001".into(),
        "firewall".into(),
        "JDOE".into(),
        "VPN drops".into(),
        "Tunnel resets every hour".into(),
        Priority::High,
        at(0),
    )
}

#[parameterized(
    laptop = { "laptop", "LAPT" },
    pc = { "pc", "WKST" },
    firewall = { "firewall", "FIRE" },
    m365 = { "m365", "M365" },
    secrets = { "secrets", "SECR" },
    general = { "general", "GENL" },
    unknown = { "printer", "GENL" },
    empty = { "", "GENL" },
)]
fn category_prefix_lookup(category: &str, expected: &str) {
    assert_eq!(category_prefix(category), expected);
}

#[test]
fn category_prefixes_are_unique() {
    let mut prefixes: Vec<&str> = CATEGORIES.iter().map(|c| c.prefix).collect();
    prefixes.sort_unstable();
    prefixes.dedup();
    assert_eq!(prefixes.len(), CATEGORIES.len());
}

#[parameterized(
    open = { "Open", Status::Open },
    in_progress = { "In Progress", Status::InProgress },
    in_progress_snake = { "in_progress", Status::InProgress },
    closed_lower = { "closed", Status::Closed },
    cancelled = { "Cancelled", Status::Cancelled },
    canceled = { "canceled", Status::Cancelled },
)]
fn status_from_str_valid(input: &str, expected: Status) {
    assert_eq!(input.parse::<Status>().unwrap(), expected);
}

#[parameterized(
    invalid = { "Done" },
    empty = { "" },
)]
fn status_from_str_invalid(input: &str) {
    assert!(matches!(input.parse::<Status>(), Err(Error::InvalidStatus(_))));
}

#[parameterized(
    open = { Status::Open, false },
    in_progress = { Status::InProgress, false },
    closed = { Status::Closed, true },
    cancelled = { Status::Cancelled, true },
)]
fn status_is_terminal(status: Status, expected: bool) {
    assert_eq!(status.is_terminal(), expected);
}

#[test]
fn status_serializes_with_display_names() {
    assert_eq!(
        serde_json::to_string(&Status::InProgress).unwrap(),
        "\"In Progress\""
    );
    let parsed: Status = serde_json::from_str("\"Cancelled\"").unwrap();
    assert_eq!(parsed, Status::Cancelled);
}

#[parameterized(
    low = { "Low", Priority::Low },
    medium = { "medium", Priority::Medium },
    high = { "HIGH", Priority::High },
    critical = { "Critical", Priority::Critical },
)]
fn priority_from_str_valid(input: &str, expected: Priority) {
    assert_eq!(input.parse::<Priority>().unwrap(), expected);
}

#[test]
fn priority_from_str_invalid() {
    assert!(matches!(
        "Urgent".parse::<Priority>(),
        Err(Error::InvalidPriority(_))
    ));
}

#[test]
fn priority_defaults_to_medium() {
    assert_eq!(Priority::default(), Priority::Medium);
}

#[test]
fn ticket_new_is_open_and_unassigned() {
    let ticket = open_ticket();
    assert_eq!(ticket.status, Status::Open);
    assert!(ticket.assigned_to.is_none());
    assert!(ticket.assigned_at.is_none());
    assert!(ticket.closed_at.is_none());
    assert!(ticket.notes.is_empty());
}

#[test]
fn ticket_serializes_camel_case_with_nulls() {
    let value = serde_json::to_value(open_ticket()).unwrap();
    assert_eq!(value["briefDescription"], "VPN drops");
    assert_eq!(value["userId"], "JDOE");
    assert_eq!(value["status"], "Open");
    assert_eq!(value["priority"], "High");
    assert!(value["assignedTo"].is_null());
    assert!(value["closedAt"].is_null());
    assert_eq!(value["notes"], serde_json::json!([]));
}

#[test]
fn ticket_deserializes_stored_file_format() {
    let raw = r#"{
        "id": "NASS0003",
        "category": "nas",
        "userId": "RABARR",
        "createdAt": "2026-02-05T14:30:00.000Z",
        "briefDescription": "Drive 3 failing",
        "details": "SMART errors",
        "status": "In Progress",
        "priority": "Critical",
        "assignedTo": "JNGEASH",
        "assignedAt": "2026-02-05T15:00:00.000Z",
        "closedAt": null,
        "notes": [
            {"id": "note-1", "timestamp": "2026-02-05T15:00:00.000Z", "userId": "RABARR", "description": "Assigned to \"JNGEASH\""}
        ]
    }"#;
    let ticket: Ticket = serde_json::from_str(raw).unwrap();
    assert_eq!(ticket.status, Status::InProgress);
    assert_eq!(ticket.priority, Priority::Critical);
    assert_eq!(ticket.assigned_to.as_deref(), Some("JNGEASH"));
    assert_eq!(ticket.notes.len(), 1);
}

#[parameterized(
    closed = { Status::Closed },
    cancelled = { Status::Cancelled },
)]
fn set_status_terminal_stamps_close_and_adds_one_note(status: Status) {
    let mut ticket = open_ticket();
    ticket.set_status(status, "RABARR", at(5));

    assert_eq!(ticket.status, status);
    assert_eq!(ticket.closed_at, Some(at(5)));
    assert_eq!(ticket.notes.len(), 1);
    let note = &ticket.notes[0];
    assert_eq!(note.user_id, "RABARR");
    assert_eq!(note.timestamp, at(5));
    assert_eq!(
        note.description,
        format!("Status changed to \"{}\"", status.as_str())
    );
}

#[test]
fn set_status_non_terminal_leaves_close_unset() {
    let mut ticket = open_ticket();
    ticket.set_status(Status::InProgress, "RABARR", at(1));

    assert_eq!(ticket.status, Status::InProgress);
    assert!(ticket.closed_at.is_none());
    assert_eq!(ticket.notes[0].description, "Status changed to \"In Progress\"");
}

#[test]
fn set_status_allows_reopening_closed_ticket() {
    let mut ticket = open_ticket();
    ticket.set_status(Status::Closed, "RABARR", at(1));
    ticket.set_status(Status::Open, "RABARR", at(2));

    assert_eq!(ticket.status, Status::Open);
    // The earlier close stamp is kept.
    assert_eq!(ticket.closed_at, Some(at(1)));
    assert_eq!(ticket.notes.len(), 2);
}

#[test]
fn set_status_reclosing_restamps_close_time() {
    let mut ticket = open_ticket();
    ticket.set_status(Status::Closed, "RABARR", at(1));
    ticket.set_status(Status::Cancelled, "RABARR", at(2));

    assert_eq!(ticket.closed_at, Some(at(2)));
}

#[test]
fn assign_open_ticket_promotes_to_in_progress() {
    let mut ticket = open_ticket();
    ticket.assign("JNGEASH", "RABARR", at(3));

    assert_eq!(ticket.status, Status::InProgress);
    assert_eq!(ticket.assigned_to.as_deref(), Some("JNGEASH"));
    assert_eq!(ticket.assigned_at, Some(at(3)));
    assert_eq!(ticket.notes.len(), 1);
    assert_eq!(ticket.notes[0].description, "Assigned to \"JNGEASH\"");
    assert_eq!(ticket.notes[0].user_id, "RABARR");
}

#[test]
fn reassign_keeps_status_and_names_previous_assignee() {
    let mut ticket = open_ticket();
    ticket.assign("JNGEASH", "RABARR", at(3));
    ticket.assign("RABARR", "RABARR", at(4));

    assert_eq!(ticket.status, Status::InProgress);
    assert_eq!(ticket.assigned_to.as_deref(), Some("RABARR"));
    assert_eq!(ticket.assigned_at, Some(at(4)));
    assert_eq!(
        ticket.notes[1].description,
        "Reassigned from \"JNGEASH\" to \"RABARR\""
    );
}

#[parameterized(
    closed = { Status::Closed },
    cancelled = { Status::Cancelled },
)]
fn assign_terminal_ticket_leaves_status(status: Status) {
    let mut ticket = open_ticket();
    ticket.set_status(status, "RABARR", at(1));
    ticket.assign("JNGEASH", "RABARR", at(2));

    assert_eq!(ticket.status, status);
}

#[test]
fn notes_keep_append_order_and_unique_ids() {
    let mut ticket = open_ticket();
    let t = at(0);
    ticket.add_note("JDOE", "first".into(), t);
    ticket.add_note("JDOE", "second".into(), t);
    ticket.add_note("RABARR", "third".into(), t + Duration::seconds(1));

    let bodies: Vec<&str> = ticket.notes.iter().map(|n| n.description.as_str()).collect();
    assert_eq!(bodies, vec!["first", "second", "third"]);
    assert_ne!(ticket.notes[0].id, ticket.notes[1].id);
}

#[test]
fn add_note_returns_id_of_appended_note() {
    let mut ticket = open_ticket();
    let first = ticket.add_note("JDOE", "first".into(), at(1));
    let second = ticket.add_note("JDOE", "second".into(), at(2));

    assert_eq!(ticket.notes[0].id, first);
    assert_eq!(ticket.notes[1].id, second);
}

#[test]
fn add_note_does_not_touch_existing_notes() {
    let mut ticket = open_ticket();
    ticket.add_note("JDOE", "first".into(), at(1));
    let before = ticket.notes[0].clone();
    ticket.add_note("JDOE", "second".into(), at(2));

    assert_eq!(ticket.notes[0], before);
}
