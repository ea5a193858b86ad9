//! kodigo-ui - Pure view components for Kodigo Music
//!
//! Components here take data and callbacks as props and hold no application
//! state; the web app owns state and routing.

pub mod components;

pub use components::*;
