//! Cross-crate test suite for Tubefolio.
//!
//! Integration tests that drive the whole estimation pipeline through the
//! public APIs of tubefolio-core and tubefolio-growth.

pub mod helpers;
