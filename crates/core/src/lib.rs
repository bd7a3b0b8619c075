// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! ob-core: Shared library for the opsboard IT-operations dashboard
//!
//! This crate provides the data model and JSON-file stores behind the
//! dashboard: support tickets, users, compliance records, and settings.

pub mod compliance;
pub mod error;
pub mod id;
pub mod jsonfile;
pub mod settings;
pub mod ticket;
pub mod tickets;
pub mod users;

pub use compliance::{
    ComplianceData, ComplianceMetric, ComplianceStatus, ComplianceStore, ComponentCompliance,
    ComponentReport,
};
pub use error::{Error, Result};
pub use jsonfile::JsonFile;
pub use settings::{AppConfig, ConfigStore, NodeConfig};
pub use ticket::{Category, Note, Priority, Status, Ticket, TicketsData, CATEGORIES};
pub use tickets::{NewTicket, TicketChange, TicketStore};
pub use users::{User, UserStore, UserUpdate};
