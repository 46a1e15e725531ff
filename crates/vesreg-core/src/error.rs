//! # Error Hierarchy
//!
//! Structured validation errors for the domain primitives, built with
//! `thiserror`. No `Box<dyn Error>`, no `.unwrap()` outside tests.
//!
//! Each variant carries the offending input and the expected format so that
//! a clerk or operator can diagnose a rejected registration without
//! guesswork. Errors here are *input* errors — the license engine has its
//! own [`crate::license::EvaluationError`] for the one failure mode of
//! evaluation.

use thiserror::Error;

/// Validation errors for domain primitive newtypes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Registry code does not have the three-segment hyphenated shape.
    #[error("invalid registry code: \"{0}\" (expected three hyphen-separated alphanumeric segments, e.g. AB-PE-1234)")]
    InvalidRegistryCode(String),

    /// Owner identity document number is empty or blank.
    #[error("invalid owner id: \"{0}\" (expected a non-empty identity document number)")]
    InvalidOwnerId(String),

    /// A calendar date string does not parse as year-month-day.
    #[error("invalid date: \"{0}\" (expected YYYY-MM-DD)")]
    InvalidDate(String),
}
