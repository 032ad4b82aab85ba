//! Domain types
//!
//! Models of the vendor-owned objects this code observes over the API.
//! None of these are created or mutated locally; the remote service owns
//! their lifecycle and this code only reads them.

pub mod assistant;
pub mod chat;
pub mod file;
pub mod run;
pub mod thread;
