mod advisory_filter;

pub use advisory_filter::{AdvisoryFilter, FilterOutcome};
