//! Shared Kernel
//!
//! Vocabulary every backend crate agrees on:
//! - the unified error type rendered at the HTTP boundary
//! - typed identifiers for players and game sessions
//!
//! Only things with one meaning across the whole backend belong here.

pub mod error {
    pub mod app_error;
    pub mod conversions;
    pub mod kind;
}
pub mod id;
