//! Utility functions for UUID generation and timestamp handling.

pub mod timestamps;
mod uuid_utils;

pub use timestamps::{format_iso, iso_timestamp, now_utc, Timestamp};
pub use uuid_utils::{generate_uuid, short_id};
