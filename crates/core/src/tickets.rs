// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Ticket storage backed by `tickets.json`.
//!
//! The file holds every ticket plus the last sequence number used for each
//! category prefix. Allocating an ID and inserting the ticket happen in the
//! same locked write, so sequences never go backwards and IDs are never
//! handed out twice.

use std::path::Path;

use chrono::Utc;
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::id::next_ticket_id;
use crate::jsonfile::JsonFile;
use crate::ticket::{category_prefix, Priority, Status, Ticket, TicketsData};

pub const TICKETS_FILE: &str = "tickets.json";

/// Fields supplied when filing a ticket.
#[derive(Debug, Clone, PartialEq)]
pub struct NewTicket {
    pub category: String,
    pub user_id: String,
    pub brief_description: String,
    pub details: String,
    pub priority: Priority,
}

/// A combined status/assignment change, applied status first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TicketChange {
    pub status: Option<Status>,
    pub assigned_to: Option<String>,
}

/// The ticket collection.
#[derive(Debug)]
pub struct TicketStore {
    file: JsonFile<TicketsData>,
}

fn empty_tickets() -> Result<TicketsData> {
    Ok(TicketsData::default())
}

impl TicketStore {
    /// Opens the store in `data_dir`. The file is created on first access.
    pub fn open(data_dir: &Path) -> Self {
        TicketStore {
            file: JsonFile::new(data_dir.join(TICKETS_FILE), empty_tickets),
        }
    }

    /// Files a new ticket, allocating the next ID for its category prefix.
    pub fn create(&self, new: NewTicket) -> Result<Ticket> {
        let ticket = self.file.update(|data| {
            let prefix = category_prefix(&new.category);
            let last = data.sequences.get(prefix).copied().unwrap_or(0);
            let (id, sequence) =
                next_ticket_id(prefix, last, |id| data.tickets.iter().any(|t| t.id == id))?;

            let ticket = Ticket::new(
                id,
                new.category,
                new.user_id,
                new.brief_description,
                new.details,
                new.priority,
                Utc::now(),
            );
            data.tickets.push(ticket.clone());
            data.sequences.insert(prefix.to_string(), sequence);
            Ok(ticket)
        })?;

        info!(
            ticket = %ticket.id,
            user = %ticket.user_id,
            priority = %ticket.priority,
            "ticket created"
        );
        Ok(ticket)
    }

    pub fn get(&self, id: &str) -> Result<Ticket> {
        self.file
            .load()?
            .tickets
            .into_iter()
            .find(|t| t.id == id)
            .ok_or_else(|| Error::TicketNotFound(id.to_string()))
    }

    /// All tickets in creation order.
    pub fn list_all(&self) -> Result<Vec<Ticket>> {
        let tickets = self.file.load()?.tickets;
        debug!("listed {} tickets", tickets.len());
        Ok(tickets)
    }

    /// Tickets filed by `user_id`, in creation order.
    pub fn list_by_user(&self, user_id: &str) -> Result<Vec<Ticket>> {
        let mut tickets = self.file.load()?.tickets;
        tickets.retain(|t| t.user_id == user_id);
        Ok(tickets)
    }

    pub fn update_status(&self, id: &str, status: Status, acting_user: &str) -> Result<Ticket> {
        self.apply(
            id,
            &TicketChange {
                status: Some(status),
                assigned_to: None,
            },
            acting_user,
        )
    }

    pub fn assign(&self, id: &str, assignee: &str, acting_user: &str) -> Result<Ticket> {
        self.apply(
            id,
            &TicketChange {
                status: None,
                assigned_to: Some(assignee.to_string()),
            },
            acting_user,
        )
    }

    /// Applies a status change and/or assignment in a single write.
    ///
    /// Each part appends its own audit note.
    pub fn apply(&self, id: &str, change: &TicketChange, acting_user: &str) -> Result<Ticket> {
        let ticket = self.modify(id, |ticket| {
            let now = Utc::now();
            if let Some(status) = change.status {
                ticket.set_status(status, acting_user, now);
            }
            if let Some(assignee) = change.assigned_to.as_deref() {
                ticket.assign(assignee, acting_user, now);
            }
        })?;

        info!(
            ticket = %ticket.id,
            user = %acting_user,
            status = %ticket.status,
            assignee = ticket.assigned_to.as_deref().unwrap_or("-"),
            "ticket updated"
        );
        Ok(ticket)
    }

    pub fn add_note(&self, id: &str, author: &str, text: &str) -> Result<Ticket> {
        let ticket = self.modify(id, |ticket| {
            ticket.add_note(author, text.to_string(), Utc::now());
        })?;
        info!(ticket = %ticket.id, user = %author, "note added");
        Ok(ticket)
    }

    fn modify(&self, id: &str, f: impl FnOnce(&mut Ticket)) -> Result<Ticket> {
        self.file.update(|data| {
            let ticket = data
                .tickets
                .iter_mut()
                .find(|t| t.id == id)
                .ok_or_else(|| Error::TicketNotFound(id.to_string()))?;
            f(ticket);
            Ok(ticket.clone())
        })
    }
}

#[cfg(test)]
#[path = "tickets_tests.rs"]
mod tests;
