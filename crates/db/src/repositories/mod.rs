//! Repository abstractions for data access.
//!
//! Repositories hide the table layout from the rest of the application.
//! Every budget access is scoped by the caller's company.

pub mod budget;
pub mod company;
pub mod notification;
pub mod user;

pub use budget::BudgetRepository;
pub use company::CompanyRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
