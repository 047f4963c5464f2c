//! Networking modules for the assist endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the single `POST /api/assist` call per submission and
//! `types` defines its wire schema.

pub mod api;
pub mod types;
