//! # Custbook Architecture
//!
//! Custbook keeps a small customer list in a single JSON file. The library
//! holds all the logic; the `custbook` binary is one client of it.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints tables and messages             │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs, records.rs)                  │
//! │  - load → mutate → save, returns CmdResult                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait                                          │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never calls
//! `std::process::exit`. An unknown id comes back as
//! [`error::CustbookError::CustomerNotFound`] and the binary turns it into a
//! message and exit status 1.
//!
//! ## Module Overview
//!
//! - [`api`]: the facade
//! - [`commands`]: one module per subcommand
//! - [`records`]: find, create, and delete over an in-memory list
//! - [`store`]: storage trait, id assignment, file and memory backends
//! - [`table`]: fixed-width table rendering
//! - [`model`]: `Customer`, `NewCustomer`, `CustomerUpdate`
//! - [`config`]: configuration file and data-file resolution
//! - [`error`]: error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod model;
pub mod records;
pub mod store;
pub mod table;
