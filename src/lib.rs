//! Client library for the Myrrix recommendation engine's REST API.
//!
//! [`MyrrixService`] exposes one typed method per remote operation:
//! recommendations, score estimation, item similarity, preference
//! ingestion, and user/item tagging. [`MyrrixClient`] underneath maps
//! each operation onto its HTTP verb, URL, and body, and decodes the
//! response (JSON, newline-delimited floats, or plain success).
//!
//! ```no_run
//! use myrrix_client::MyrrixService;
//!
//! # async fn example() -> myrrix_client::Result<()> {
//! let service = MyrrixService::new("localhost", 8080);
//! let recommendations = service.recommend(2115287, Some(10)).await?;
//! for item in recommendations {
//!     println!("{}: {}", item.item_id, item.value);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod ingest;
pub mod models;
pub mod operation;
pub mod service;

pub use client::MyrrixClient;
pub use error::{MyrrixError, Result};
pub use models::{Preference, ScoredItem};
pub use operation::Operation;
pub use service::MyrrixService;
