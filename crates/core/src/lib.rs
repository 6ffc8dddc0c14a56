//! Core budget model for Exchequer.
//!
//! This crate contains the budget hierarchy with ZERO I/O dependencies.
//! Trees are built in memory, mutated through allocations and transfers, and
//! rendered through `Display`.
//!
//! # Modules
//!
//! - `budget` - Government, departments, schemes, actors, and transfers

pub mod budget;
