//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of audit data for the formatters.

pub mod advisory_view;
pub mod audit_read_model;
pub mod audit_read_model_builder;

pub use advisory_view::AdvisoryView;
pub use audit_read_model::{AuditMetadataView, AuditReadModel, AuditSummaryView, RemediationView};
pub use audit_read_model_builder::AuditReadModelBuilder;
