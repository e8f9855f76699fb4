//! Companies (tenants), their trade specialties and user accounts.

pub mod error;
pub mod service;
pub mod types;

pub use error::CompanyError;
pub use service::CompanyService;
pub use types::{Company, CompanyUpdate, NewCompany, Specialty, User, UserStatus};
