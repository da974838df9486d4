//! # passage-store
//!
//! In-memory storage for the Passage lead-intake backend.
//!
//! Nothing here survives a restart. The crate exposes the async [`Storage`]
//! trait the HTTP layer talks to, and [`MemStorage`], which keeps every
//! collection in process memory with its own sequential id counter and
//! seeds the showcase fundraising campaigns on construction.

pub mod campaigns;
pub mod consultations;
pub mod contacts;
pub mod contributions;
pub mod memory;
pub mod models;
pub mod seed;
pub mod storage;
pub mod users;

mod error;

pub use error::{Result, StoreError};
pub use memory::MemStorage;
pub use models::*;
pub use storage::Storage;
