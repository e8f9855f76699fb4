//! Building blocks shared by the Atrio crates: typed IDs, countries and
//! money rounding, pagination, the common error type, session tokens and
//! configuration loading.

pub mod auth;
pub mod config;
pub mod error;
pub mod jwt;
pub mod types;


pub use auth::{Claims, UserRole};
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use jwt::{JwtError, JwtService};
