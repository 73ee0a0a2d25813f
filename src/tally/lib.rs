//! # Tally Architecture
//!
//! Tally is a **UI-agnostic inventory library**. The CLI binary is a thin
//! client; everything it can do is available through [`api::TallyApi`].
//!
//! ## The Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (wired by main.rs, args.rs, print.rs)            │
//! │  - Parses arguments, formats output, handles terminal I/O   │
//! │  - The ONLY place that knows about stdout/stderr/exit codes │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade over commands                                │
//! │  - Owns the in-memory ledger and the run log                │
//! │  - Returns structured Result types                          │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Business logic: validation, warnings, payloads           │
//! │  - Operates on Rust types, returns Rust types               │
//! │  - No I/O assumptions whatsoever                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Core + Storage (ledger.rs, store/)                         │
//! │  - Ledger: normalized item key → quantity                   │
//! │  - Abstract SnapshotStore trait                             │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: No I/O Assumptions in Core
//!
//! From `api.rs` inward (API, commands, core, storage), code:
//! - Takes regular Rust function arguments
//! - Returns regular Rust types (`Result<CmdResult>`)
//! - **Never** writes to stdout/stderr
//! - **Never** calls `std::process::exit`
//!
//! Recoverable failures (invalid quantity, unknown item, missing or corrupt
//! snapshot file) never surface as `Err`: commands report them as
//! [`commands::CmdMessage`]s and leave the ledger untouched, so every caller
//! sees a safe no-op plus a human-readable line. `Err` is reserved for
//! genuinely exceptional conditions the command layer does not absorb.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade—entry point for all operations
//! - [`commands`]: Business logic for each operation
//! - [`ledger`]: The stock map and its invariants
//! - [`store`]: Snapshot persistence abstraction and implementations
//! - [`model`]: Key normalization and the run-log entry type
//! - [`config`]: Configuration management
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod ledger;
pub mod model;
pub mod store;
