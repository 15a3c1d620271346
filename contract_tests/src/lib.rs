//! # Service Contract Tests
//!
//! Golden end-to-end scenarios for the command-line and caret-display
//! services, driven through a simulated host session.
//!
//! ## Philosophy
//!
//! - **Explicit over implicit**: the host adapter's wiring is written out
//!   as code in [`session::SimSession`], so the contract between the
//!   services and the host cannot drift silently
//! - **Whole-session coverage**: each scenario drives real key sequences
//!   through both services at once, the way a host delivers them
//! - **Mechanism not policy**: the session helper wires, it does not
//!   assert; scenarios own their expectations

pub mod session;

#[cfg(test)]
mod scenarios;
