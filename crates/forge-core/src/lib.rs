//! Core library for preprint forge: deterministic project identity for
//! free-text paper prompts, plus the artifact lifecycle around each project
//! (document variants, LaTeX compilation, remote publishing, announcements).
//!
//! The identity pipeline is the heart of the crate: a prompt is normalized
//! and fingerprinted, resolved to a stable filesystem-safe project name via
//! the persistent name cache, and the project directory is materialized with
//! whichever document variants the caller requested.

pub mod compile;
pub mod config;
pub mod error;
pub mod fingerprint;
pub mod generate;
pub mod io;
pub mod latex;
pub mod name;
pub mod paths;
pub mod pipeline;
pub mod project;
pub mod remote;
pub mod social;
pub mod store;

pub use error::{ForgeError, Result};
