//! Core business logic for Atrio.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `auth` - Password hashing and account rules
//! - `company` - Company profile, trade specialties and users
//! - `plan` - Free/Premium gating and subscription periods
//! - `budget` - Quotes, line items and total/tax arithmetic
//! - `payment` - Client payments against a budget
//! - `expense` - Job expenses and profit
//! - `project` - Per-budget financial summary
//! - `dashboard` - Company-wide headline figures
//! - `analytics` - Premium analytics aggregation and caching
//! - `notification` - Broadcast messages and audience filtering
//! - `document` - Printable budget document rendering

pub mod analytics;
pub mod auth;
pub mod budget;
pub mod company;
pub mod dashboard;
pub mod document;
pub mod expense;
pub mod notification;
pub mod payment;
pub mod plan;
pub mod project;
