//! Validation of alert rule groups submitted through the ruler API.
//!
//! A valid group yields its rules as domain models, along with markers of
//! which optional inputs were supplied so that callers can patch stored rules.

mod condition;
mod errors;
mod group;
mod interval;
mod labels;
mod rule;

pub use condition::validate_condition;
pub use errors::Error;
pub use group::validate_rule_group;
pub use interval::validate_interval;
pub use labels::validate_labels;
pub use rule::validate_rule_node;
