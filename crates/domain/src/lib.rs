//! `mnemo-domain` — types shared by the mnemo crates: the error enum,
//! client configuration and structured trace events.

pub mod config;
pub mod error;
pub mod trace;
