//! Comparison use-case services.
//!
//! # Responsibility
//! - Chain normalization, fingerprinting and scoring into one call.
//! - Keep threshold decisions with the caller.

pub mod match_service;
