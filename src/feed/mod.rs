// src/feed/mod.rs
//! # Feed readers
//!
//! This module hosts the **endpoint-specific readers** for the intel service.
//! Each reader focuses on a single remote endpoint and encodes *what the
//! response envelope looks like* and *how to decode it tolerantly*.
//!
//! ## What lives here
//! - **JSON envelope decoding** for remote endpoints (`/api/proptech-intel`,
//!   `/api/proptech-articles`, …) into `Article` records.
//! - **Field precedence rules** (e.g. `url` over `link`, `summary` over
//!   `proptech_analysis`) so the rest of the pipeline sees one shape.
//!
//! ## What does **not** live here
//! - **Caching/persistence** (`store::load_feed` / `store::save_feed`) –
//!   handled by higher layers (`fetch::collect_intel`).
//! - **Analysis parsing** – `core::analysis` owns the text-to-sections
//!   transform; readers only carry the raw string along.
//! - **GUI concerns, filtering, or export formatting.**
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → fetch::collect_intel → intel::fetch()
//!                                  ↘  returns an article bundle
//!                     store::save_feed (outside of feed)
//! ```
//!
//! In short: **`feed` knows how to read the endpoints.** Other layers decide
//! when to fetch, how to cache, and how to present/export.
pub mod intel;
