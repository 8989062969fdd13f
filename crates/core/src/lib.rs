//! Shared domain types and pure view-shaping logic for the revboard
//! dashboard client.
//!
//! Everything in this crate is side-effect free: wire payload types for
//! the read endpoints, review-record normalization, and the formatting
//! rules applied before values reach a view region.

pub mod analytics;
pub mod format;
pub mod review;
pub mod widget;
