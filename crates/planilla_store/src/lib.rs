//! # Planilla Store
//!
//! Flat-file persistence for Planilla.
//!
//! This crate provides the two leaf components the entity layer is built on:
//!
//! - [`RecordStore`] - append, full scan, and replace-or-delete by key over
//!   comma-delimited text files
//! - [`IdAllocator`] - per-name monotonic record IDs persisted in a ledger
//!   file shared by all tables
//!
//! ## Design Principles
//!
//! - One record per line, field 0 is an integer key, no quoting or escaping
//! - The target file is an argument of every call, never ambient state
//! - Generic reads are lossless; typed filtering belongs to the caller
//! - Rewrites go through a temp file renamed over the original
//! - Single writer per file; see [`IdAllocator`] for the cross-process caveat
//!
//! ## Example
//!
//! ```no_run
//! use planilla_store::{IdAllocator, RecordChange, RecordStore};
//!
//! let store = RecordStore::new();
//! let ids = IdAllocator::new("idControl.txt");
//!
//! let id = ids.next_id("usuarios.txt").unwrap();
//! store.append("usuarios.txt", &[id.to_string(), "ana".to_string()]).unwrap();
//! store.replace_or_delete("usuarios.txt", id, &RecordChange::Delete).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod allocator;
mod config;
mod error;
mod id;
mod ledger;
pub mod line;
mod store;
mod swap;

pub use allocator::IdAllocator;
pub use config::StoreConfig;
pub use error::{StoreError, StoreResult, SwapStage};
pub use id::RecordId;
pub use ledger::{validate_name, IdLedger, LEDGER_SEPARATOR};
pub use store::{RecordChange, RecordStore};
