//! Common types used across the application.

pub mod country;
pub mod id;
pub mod money;
pub mod pagination;


pub use country::{CountryCode, CountryProfile};
pub use id::*;
pub use money::{Currency, round_money};
pub use pagination::{PageMeta, PageRequest, PageResponse};
