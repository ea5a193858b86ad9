//! kodigo-core - Catalog access for Kodigo Music
//!
//! Everything here compiles for both wasm32 (the web app) and native targets
//! (tests, tooling). No UI code lives in this crate.

pub mod catalog;
