//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate repository calls into use-case level APIs.
//! - Shape marker data for the map and detail views.
//! - Keep presentation callers decoupled from storage details.

pub mod asset;
pub mod marker_service;
