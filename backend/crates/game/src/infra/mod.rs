//! Infrastructure Layer - persistence and outbound adapters

pub mod dictionary;
pub mod memory;
pub mod postgres;
pub mod remote;
pub mod word_list;
