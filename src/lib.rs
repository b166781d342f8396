//! Pay Policy Engine
//!
//! This crate evaluates a proposed base salary change against an
//! organization's pay fairness and consistency policies, producing a
//! PASS / WARNING / BLOCK verdict with human-readable explanations.

#![warn(missing_docs)]

pub mod checks;
pub mod config;
pub mod data_access;
pub mod error;
pub mod evaluation;
pub mod models;
