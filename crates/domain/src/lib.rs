//! # relayhub-domain
//!
//! Pure domain model for the relayhub relay controller.
//!
//! ## Responsibilities
//! - Validated **relay numbers** (1–4) and **actions** (`on` / `off`)
//! - The **CoAP target** (device host + port) and the endpoint naming scheme
//!   understood by the relay firmware (`relay<N><action>`)
//! - Normalized **results** of external command invocations and reachability
//!   probes, shaped exactly as the HTTP API returns them
//! - Parsing of `ping` output (round-trip time) and IPv6 literal handling
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It never spawns processes or touches the network. All IO boundaries are
//! expressed as traits in the `app` crate (ports).

pub mod command;
pub mod error;
pub mod reachability;
pub mod relay;
