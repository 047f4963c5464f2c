//! Domain services used by HTTP routes.
//!
//! ARCHITECTURE
//! ============
//! Service modules own the answer-shaping logic so route handlers can stay
//! focused on protocol translation.

pub mod assist;
