//! # roster
//!
//! A menu-driven employee records manager backed by a single CSV file.
//!
//! The crate is a library with a thin CLI binary on top, layered so that
//! nothing below the terminal layer does any I/O assumptions:
//!
//! - [`cli`]: argument parsing, the interactive menu, prompts with bounded
//!   retry, and output rendering. The only layer touching stdin/stdout.
//! - [`api`]: thin facade dispatching to the command layer.
//! - [`commands`]: one module per operation; pure logic returning structured
//!   [`commands::CmdResult`] values.
//! - [`store`]: the in-memory collection plus snapshot persistence, behind a
//!   [`store::StoreBackend`] trait with CSV and in-memory implementations.
//! - [`model`], [`validate`], [`error`]: record types, field rules, errors.
//!
//! The persistence contract is deliberately simple: the whole collection is
//! rewritten to the backing file after every successful mutation, so memory
//! and disk never disagree.

pub mod api;
pub mod cli;
pub mod commands;
pub mod error;
pub mod model;
pub mod store;
pub mod validate;
