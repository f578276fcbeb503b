//! # Pitch Core
//!
//! Core logic for PitchSite, the pitch landing-page generator.
//!
//! This crate contains:
//! - The pitch and idea data model, including the effective-idea fallback
//! - Read access to the hosted datastore (`PitchStore`, Postgres and in-memory implementations)
//! - The static HTML document renderer
//! - `PitchService`, which ties lookup and rendering together
//!
//! **No API concerns**: HTTP servers, routing and status codes belong in `api-rest`.

pub mod config;
pub mod constants;
pub mod error;
pub mod model;
pub mod render;
pub mod service;
pub mod store;

pub use config::CoreConfig;
pub use error::{ErrorKind, PitchError, PitchResult};
pub use model::{Idea, Language, Pitch, PitchContent, PitchRecord, Tone};
pub use pitch_types::{NonEmptyText, PitchId, TextError};
pub use render::{render_document, RenderOptions};
pub use service::{render_record, PitchService};
pub use store::{InMemoryPitchStore, PgPitchStore, PitchStore};
