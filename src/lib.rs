//! Funil - a CRM pipeline board for the terminal
//!
//! This library provides the core functionality for funil, including:
//! - Data models for leads, tasks, stages and team members
//! - The board core: pure bucket aggregation and status transitions
//! - Filter state (text query and assignee axes)
//! - Billing arithmetic: package prices, billing cycles, MRR, invoices
//! - Agenda calendar: month/week/day range generation and navigation
//! - Seeded sample data and JSON snapshot handoff
//! - CLI command parsing, dispatch and output rendering
//!
//! # Example
//!
//! ```no_run
//! use funil::cli::run;
//!
//! fn main() {
//!     if let Err(e) = run() {
//!         eprintln!("Error: {}", e);
//!         std::process::exit(1);
//!     }
//! }
//! ```

pub mod agenda;
pub mod billing;
pub mod board;
pub mod cli;
pub mod filter;
pub mod models;
pub mod seed;
pub mod sync;
pub mod utils;
