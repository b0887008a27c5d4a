//! Common types used across the Coinbase client library.

pub mod common;
pub mod pagination;
pub mod serde_helpers;

pub use common::*;
pub use pagination::{Cursor, Pagination, PaginationParameters};
