//! kodigo-common - Pure state shared by the catalog client, the views and the web app
//!
//! Nothing in here performs I/O. The search state machine, the preview slot
//! and the contact form model are plain data structures so they can be
//! exercised natively.

pub mod contact;
mod item;
mod preview;
mod search;

pub use contact::{ContactErrors, ContactMessage, MIN_MESSAGE_LEN};
pub use item::{ResultKind, SearchResultItem};
pub use preview::{PreviewChange, PreviewOutput, PreviewPlayer, PreviewSlot};
pub use search::{SearchState, SearchTicket, DEFAULT_SEARCH_TERM};
