//! Core business logic - framework-agnostic contribution-pool operations.
//!
//! Everything in here is async over a `SeaORM` connection and returns the
//! crate's typed errors; nothing knows about WhatsApp, HTTP, or reply
//! formatting beyond the report text itself.

/// Contribution recording and queries, including the mark-paid upsert
pub mod contribution;
/// Member CRUD and ordering
pub mod member;
/// Month create/list/lookup
pub mod month;
/// Monthly report text generation
pub mod report;
/// Idempotent roster seeding
pub mod seed;
/// Dashboard and statistics aggregates
pub mod stats;
