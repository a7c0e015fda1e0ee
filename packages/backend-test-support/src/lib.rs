//! Test support utilities for the game engine
//!
//! Shared between unit tests and the integration test binaries so every test
//! target initializes logging the same way.

pub mod logging;
