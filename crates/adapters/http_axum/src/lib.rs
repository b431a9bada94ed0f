//! # relayhub-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a small **JSON API** under `/api` for the web UI:
//!   - `POST /api/relay/{relay}/{action}` — switch one relay
//!   - `POST /api/relay/all/{action}`     — switch all four relays
//!   - `GET  /api/health`                 — liveness, no IO
//!   - `GET  /api/ping`                   — device reachability
//! - Serve the **static front-end** (`/` → `index.html`, other files by name),
//!   contained to the configured static directory
//! - Validate path parameters before any command is run (400 on bad input)
//! - Map service results into status codes (200 / 500 / 503)
//!
//! ## Dependency rule
//! Depends on `relayhub-app` (for the port trait and services) and
//! `relayhub-domain` (for request/response types). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
