//! # Luma Admin
//!
//! > **The non-visual core of the Luma caregiving admin console.**
//!
//! Luma's admin pages all follow the same shape: fetch on mount, show a list or a
//! set of counters, open a modal form, submit, fetch again. This crate implements
//! that shape without the pages: typed data access, a statistics aggregation that
//! survives partial API outages, and the page state the presentation layer renders.
//!
//! ## Module Tour
//!
//! ### 1. Data access ([`luma_api`], [`clients`], [`model`])
//! Every REST collection is served by a gateway actor owning the HTTP transport.
//! [`clients`] wraps the generic `ResourceClient` in one typed client per
//! collection; [`model`] holds the records and their payloads.
//!
//! ### 2. Aggregation ([`aggregation`])
//! [`AggregationEngine`](aggregation::AggregationEngine) fans out to every
//! collection plus the health probe, waits for all of them, and reduces the answers
//! into a [`StatsSnapshot`](aggregation::StatsSnapshot) and city/country rollups.
//! A failing collection counts as `0`; nothing escapes the cycle.
//!
//! ### 3. Page state ([`view`], [`forms`])
//! Overview refresh with a generation guard, the interval
//! [`RefreshTask`](view::RefreshTask), tab-scoped refetch, CRUD list pages with
//! refetch-after-mutation, typed form drafts.
//!
//! ### 4. Wiring ([`lifecycle`], [`config`])
//! [`AdminSystem`](lifecycle::AdminSystem) spawns the actors and shuts them down;
//! [`AppConfig`](config::AppConfig) reads `LUMA_*` variables.
//!
//! ## Running
//!
//! ```bash
//! LUMA_API_URL=http://localhost:3002/api RUST_LOG=info cargo run
//! ```

pub mod aggregation;
pub mod clients;
pub mod config;
pub mod error;
pub mod forms;
pub mod lifecycle;
pub mod model;
pub mod view;

pub use error::{AdminError, DraftError};
