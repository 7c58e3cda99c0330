//! Server-rendered chat page and its client-side state model.
//!
//! The page is assembled from Rust string templates; message state lives in
//! the browser for the lifetime of the page session. [`state`] holds the
//! typed model that seeds the page's initial store and the bounds of its
//! controls.

pub mod page;
pub mod state;

pub use page::chat_page;
pub use state::{FontSize, Message, Preferences, Sender, Theme};
