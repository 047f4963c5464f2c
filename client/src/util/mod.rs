//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser concerns and pure formatting helpers from
//! component logic so they can be unit-tested without a DOM.

pub mod carousel;
pub mod clipboard;
pub mod markdown;
