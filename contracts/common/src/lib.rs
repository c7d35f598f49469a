//! Shared utilities for the Poolside contract suite.
//!
//! This crate provides:
//! - [`admin`] — the stored-administrator singleton and two-step handover
//!   helpers used by every contract with privileged operations.
//!
//! Contracts keep their own `#[contracterror]` enums; the helpers here return
//! `Option`/`bool` so each contract can map failures onto its own codes.

#![no_std]

pub mod admin;

pub use admin::*;
