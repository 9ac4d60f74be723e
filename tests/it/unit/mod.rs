//! Unit tests for pageforge.

mod color_tests;
mod notifications_tests;
