//! Client payments recorded against a budget.

pub mod error;
pub mod service;
pub mod types;

pub use error::PaymentError;
pub use service::PaymentService;
pub use types::{PaymentInput, PaymentRecord, PaymentSummary};
