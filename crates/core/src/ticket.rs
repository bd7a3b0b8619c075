// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core ticket types for the support desk.
//!
//! This module contains the fundamental data types: Ticket, Note, Status,
//! Priority, and the category prefix table used to build ticket IDs.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::id::note_id;

/// A ticket category with its ID prefix and display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Category {
    pub id: &'static str,
    pub prefix: &'static str,
    pub label: &'static str,
}

/// Category used when a ticket names a category outside [`CATEGORIES`].
pub const GENERAL_CATEGORY: &str = "general";

/// Every known ticket category, in display order.
pub const CATEGORIES: &[Category] = &[
    Category { id: "laptop", prefix: "LAPT", label: "Laptops" },
    Category { id: "pc", prefix: "WKST", label: "Workstations" },
    Category { id: "apps", prefix: "APPS", label: "Applications" },
    Category { id: "wifi", prefix: "WIFI", label: "WiFi" },
    Category { id: "switch", prefix: "SWCH", label: "LAN Switch" },
    Category { id: "firewall", prefix: "FIRE", label: "Firewall" },
    Category { id: "nas", prefix: "NASS", label: "NAS Storage" },
    Category { id: "server", prefix: "SERV", label: "Servers" },
    Category { id: "vm", prefix: "VMAC", label: "Virtual Machines" },
    Category { id: "vpn", prefix: "VPNN", label: "VPN" },
    Category { id: "cloud", prefix: "CLOU", label: "Cloud Services" },
    Category { id: "m365", prefix: "M365", label: "Microsoft 365" },
    Category { id: "auth", prefix: "AUTH", label: "Authentication" },
    Category { id: "secrets", prefix: "SECR", label: "Secrets/Infisical" },
    Category { id: GENERAL_CATEGORY, prefix: "GENL", label: "General/Other" },
];

/// Look up a category by id.
pub fn category(id: &str) -> Option<&'static Category> {
    CATEGORIES.iter().find(|c| c.id == id)
}

/// ID prefix for a category, falling back to the general prefix.
pub fn category_prefix(id: &str) -> &'static str {
    category(id)
        .or_else(|| category(GENERAL_CATEGORY))
        .map_or("GENL", |c| c.prefix)
}

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    /// Filed and not yet picked up. Initial state for new tickets.
    Open,
    /// Assigned and being worked.
    #[serde(rename = "In Progress")]
    InProgress,
    /// Resolved.
    Closed,
    /// Withdrawn without resolution.
    Cancelled,
}

impl Status {
    /// Returns the string representation used in storage and display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Open => "Open",
            Status::InProgress => "In Progress",
            Status::Closed => "Closed",
            Status::Cancelled => "Cancelled",
        }
    }

    /// Returns true if this is a terminal state (closed or cancelled).
    pub fn is_terminal(&self) -> bool {
        matches!(self, Status::Closed | Status::Cancelled)
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Status {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "open" => Ok(Status::Open),
            "in progress" | "in_progress" => Ok(Status::InProgress),
            "closed" => Ok(Status::Closed),
            "cancelled" | "canceled" => Ok(Status::Cancelled),
            _ => Err(Error::InvalidStatus(s.to_string())),
        }
    }
}

/// Urgency of a ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
            Priority::Critical => "Critical",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            "critical" => Ok(Priority::Critical),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

/// A note attached to a ticket. Notes are append-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    /// Author of the note.
    pub user_id: String,
    pub description: String,
}

/// A user-filed IT support request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Category prefix plus zero-padded sequence (e.g. `FIRE0001`).
    pub id: String,
    /// Category id as supplied at creation (e.g. `firewall`).
    pub category: String,
    /// Creator of the ticket.
    pub user_id: String,
    pub created_at: DateTime<Utc>,
    pub brief_description: String,
    pub details: String,
    pub status: Status,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub assigned_to: Option<String>,
    #[serde(default)]
    pub assigned_at: Option<DateTime<Utc>>,
    /// Set whenever the ticket moves to Closed or Cancelled.
    #[serde(default)]
    pub closed_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl Ticket {
    /// Creates an open, unassigned ticket with no notes.
    pub fn new(
        id: String,
        category: String,
        user_id: String,
        brief_description: String,
        details: String,
        priority: Priority,
        created_at: DateTime<Utc>,
    ) -> Self {
        Ticket {
            id,
            category,
            user_id,
            created_at,
            brief_description,
            details,
            status: Status::Open,
            priority,
            assigned_to: None,
            assigned_at: None,
            closed_at: None,
            notes: Vec::new(),
        }
    }

    /// Appends a note and returns its id.
    pub fn add_note(&mut self, user_id: &str, description: String, at: DateTime<Utc>) -> String {
        let id = note_id(&self.id, self.notes.len(), &at);
        self.notes.push(Note {
            id: id.clone(),
            timestamp: at,
            user_id: user_id.to_string(),
            description,
        });
        id
    }

    /// Moves the ticket to `status` and records the change as a note.
    ///
    /// Any transition is accepted, including out of Closed/Cancelled. Those
    /// are logged since they usually indicate a mistake.
    pub fn set_status(&mut self, status: Status, user_id: &str, at: DateTime<Utc>) {
        if self.status.is_terminal() {
            warn!(
                ticket = %self.id,
                from = %self.status,
                to = %status,
                "status change on a {} ticket",
                self.status
            );
        }
        self.status = status;
        if status.is_terminal() {
            self.closed_at = Some(at);
        }
        self.add_note(user_id, format!("Status changed to \"{}\"", status), at);
    }

    /// Assigns the ticket, promoting an Open ticket to In Progress, and
    /// records the assignment as a note.
    pub fn assign(&mut self, assignee: &str, user_id: &str, at: DateTime<Utc>) {
        let description = match self.assigned_to.as_deref() {
            Some(previous) => format!("Reassigned from \"{}\" to \"{}\"", previous, assignee),
            None => format!("Assigned to \"{}\"", assignee),
        };
        self.assigned_to = Some(assignee.to_string());
        self.assigned_at = Some(at);
        if self.status == Status::Open {
            self.status = Status::InProgress;
        }
        self.add_note(user_id, description, at);
    }
}

/// On-disk layout of the ticket collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TicketsData {
    #[serde(default)]
    pub tickets: Vec<Ticket>,
    /// Last sequence number used per category prefix.
    #[serde(default)]
    pub sequences: BTreeMap<String, u32>,
}

#[cfg(test)]
#[path = "ticket_tests.rs"]
mod tests;
