//! Integration test crate for the suitor strategies.
//!
//! This crate exists solely to run games that span suitor-core and suitor-agent.
//! It has no public API - all functionality is in the test modules.

#![forbid(unsafe_code)]
