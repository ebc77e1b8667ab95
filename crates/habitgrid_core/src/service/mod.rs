//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into grid-level use-case APIs.
//! - Keep presentation layers decoupled from storage details.

pub mod grid_service;
