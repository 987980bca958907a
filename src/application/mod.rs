//! Application layer orchestrating domain logic and collaborators.

pub mod services;
