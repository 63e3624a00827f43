//! Test modules for the Manu filter crate.
//!
//! This module contains the in-crate testing infrastructure, including:
//! - Property-based tests using proptest
//! - Configuration loading tests against temporary files
//! - Shared strategies and fixtures
//!
//! Unit tests for individual components live next to the code they cover.
