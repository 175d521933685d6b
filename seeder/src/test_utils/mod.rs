//! Testing utilities for the seeding pipeline.
//!
//! Provides destination wrappers with controllable failure behavior so pipeline and
//! engine tests can exercise chunk-level failures and fatal precondition paths without
//! a real database.

pub mod faulty_destination;
