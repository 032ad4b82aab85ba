//! Scribe Core
//!
//! Core types and abstractions for the scribe document summarizer.
//!
//! This crate contains:
//! - Domain types: Remote vendor objects as observed over the API (Run, Thread, etc.)
//! - DTOs: Request and response envelopes for the vendor API

pub mod domain;
pub mod dto;
