//! Domain Layer - Business logic and entities
//!
//! This layer contains:
//! - Domain entities (GameSession, PlayerAccount)
//! - Domain value objects (Word, Rack)
//! - Domain services (letter bag, scoring, rack generation, dictionary)
//! - Repository traits (interfaces)

pub mod dictionary;
pub mod entities;
pub mod letter_bag;
pub mod presets;
pub mod rack;
pub mod repository;
pub mod scoring;
pub mod value_objects;
