//! Core types: configuration, errors, resource acquisition

pub mod config;
pub mod error;
pub mod resource;
