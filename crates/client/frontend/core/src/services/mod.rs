//! Frontend-independent services.
pub mod targeting;
