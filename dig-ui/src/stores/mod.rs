//! Store types for UI state
//!
//! The stores mirror the digger's state after every mutation. Each derives
//! `Store` so views can subscribe to single fields via lensing.

pub mod digger;

pub use digger::*;
