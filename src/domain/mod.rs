//! Domain modules organized as vertical slices.
//!
//! Service-backed sub-modules contain:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching service responses
//! - `convert.rs` — `TryFrom` conversions with validation
//! - `client.rs` — Sub-client with the HTTP calls
//!
//! `chart` has no wire form; it is derived from the other two.

pub mod chart;
pub mod historical;
pub mod prediction;
