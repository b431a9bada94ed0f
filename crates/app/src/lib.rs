//! # relayhub-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **`CommandRunner` port** that adapters implement to run an
//!   external program with a timeout
//! - `RelayService` — build CoAP requests for one relay, or fan out to all
//!   four relays concurrently and aggregate
//! - `ReachabilityService` — probe the device with a single ICMPv6 echo and
//!   report round-trip time
//! - Normalize every runner failure into a result value; nothing here
//!   returns an error to the caller
//!
//! ## Dependency rule
//! Depends on `relayhub-domain` only (plus `tokio` for joining futures).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
