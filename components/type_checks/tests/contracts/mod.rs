//! Contract tests for type_checks
//!
//! These tests exercise the public predicate surface from outside the crate,
//! one file per group of built-ins.

mod fundamental_tests;
mod conversion_tests;
mod tag_tests;
