//! Session state.
//!
//! - [`store::SessionStore`] — History and Favorites for the running session

pub mod store;
