//! # Rolodex Architecture
//!
//! Rolodex keeps a small catalog of customers (name, email, phone) in a JSON file and
//! manages it through an interactive menu. The catalog logic is a library; the menu is
//! one client of it.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Options, logging setup, the menu loop, printing          │
//! │  - The ONLY place that reads stdin or writes stdout         │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Owns the Catalog and its DataStore                       │
//! │  - Returns structured Result<CmdResult> values              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - add, list, search, delete, load, save                    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Catalog + Storage (catalog.rs, store/)                     │
//! │  - Validation and ordering rules                            │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Errors
//!
//! Every failure is a [`error::RolodexError`]. None of them are fatal to a session: the
//! load command turns storage problems into an empty catalog plus a message, and the
//! menu reports validation and save errors and carries on.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per operation
//! - [`catalog`]: The ordered, name-keyed customer collection
//! - [`model`]: `Customer` and its stored form
//! - [`validation`]: Name, email and phone rules
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `config.json` handling
//! - [`error`]: Error types

pub mod api;
pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod store;
pub mod validation;
