//! Test doubles shared by unit and integration tests.

pub mod stubs;

pub use stubs::{ScriptedApiService, ResponseGate};
