//! Application Layer - Use Cases
//!
//! This layer orchestrates domain logic and infrastructure.
//! Contains use case implementations.

pub mod account;
pub mod buy_swaps;
pub mod check_word;
pub mod config;
pub mod maintenance;
pub mod reveal_hints;
pub mod start_round;
pub mod submit_round;
pub mod swap_letters;
mod validation;
