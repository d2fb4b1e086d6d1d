//! # Planilla Core
//!
//! Entity layer for the Planilla payroll data files.
//!
//! This crate provides:
//! - [`Employee`] and [`User`] schemas and their line encodings
//! - [`Repository`] for add/list/get/update/delete over one table
//! - User authentication lookup
//! - [`Planilla`], which opens a data directory and hands out repositories
//!
//! Storage itself lives in `planilla_store`; this crate decides which rows
//! are valid for each entity and how non-text fields are written.

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod codec;
mod config;
mod employee;
mod error;
mod planilla;
mod repository;
mod user;

pub use codec::RecordCodec;
pub use config::{Config, EMPLOYEES_FILE, LEDGER_FILE, USERS_FILE};
pub use employee::{Employee, PayrollType, EMPLOYEE_FIELDS};
pub use error::{CoreError, CoreResult};
pub use planilla::Planilla;
pub use repository::{Employees, Repository, Users};
pub use user::{User, USER_FIELDS};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
