//! Integration tests for pageforge.
//!
//! These tests verify the interaction between multiple components
//! and test complete workflows end-to-end.

mod http_api_tests;
mod selection_tests;
