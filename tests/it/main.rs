//! Single test binary entry point.
//!
//! This consolidates all tests into a single binary following matklad's best practices,
//! reducing linking overhead.
//!
//! Structure:
//! - integration: Multi-component editor and project workflows
//! - unit: Single-component unit tests

mod helpers;
mod integration;
mod unit;
