//! Domain services used by the HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own outbound fetches and result shaping so route handlers
//! stay focused on request parsing and status mapping.

pub mod ingest;
pub mod unsplash;
