//! # Rollcall Architecture
//!
//! Rollcall is a **UI-agnostic attendance-tracking library** with a CLI
//! client. The library owns the roster, the check-in/check-out state
//! machine and the printable exports; the binary only parses arguments
//! and formats output.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (main.rs, args.rs)                               │
//! │  - Parses arguments, formats output, handles exit codes     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands, returns structured results    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Attendance operations and exports, no terminal I/O       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - Roster over an abstract DataStore                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! The sheet pipeline is deliberately split: [`layout`] computes pure
//! placements, [`barcode`] turns a string into bars, [`sheet`] consumes
//! both and emits the PDF. Each piece tests on its own.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each command
//! - [`store`]: Storage abstraction, the roster and its state machine
//! - [`model`]: Core data types (`Student`, `AttendanceStatus`)
//! - [`layout`]: Page/grid placement for barcode sheets
//! - [`barcode`]: Code 128 synthesis
//! - [`sheet`]: PDF sheet writer
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod barcode;
pub mod commands;
pub mod config;
pub mod error;
pub mod init;
pub mod layout;
pub mod model;
pub mod sheet;
pub mod store;
