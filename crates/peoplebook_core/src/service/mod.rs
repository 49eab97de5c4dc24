//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate filter, pagination, and repository calls into the
//!   transport-free request surface.
//! - Keep presentation layers decoupled from storage details.

pub mod person_service;
