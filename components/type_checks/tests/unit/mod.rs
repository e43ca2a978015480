//! Unit tests for type_checks
//!
//! One module per classifier family.

mod address_tests;
mod number_tests;
