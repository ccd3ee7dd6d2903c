#[must_use]
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("unknown NoData state option {value}")]
    UnknownNoDataState { value: String },
    #[error("unknown Error state option {value}")]
    UnknownExecErrState { value: String },
    #[error("both annotations {dashboard} and {panel} must be specified")]
    DashboardPanelMismatch {
        dashboard: &'static str,
        panel: &'static str,
    },
    #[error("annotation {annotation} must be a valid integer Panel ID")]
    InvalidPanelId {
        annotation: &'static str,
        value: String,
    },
    #[error("receiver must be specified")]
    ReceiverMissing,
    #[error("group by override must contain two required labels: '{alert_name}' and '{folder}' or '{group_by_all}' (group by all)")]
    GroupByMissingRequired {
        alert_name: &'static str,
        folder: &'static str,
        group_by_all: &'static str,
    },
    #[error("{field} must be greater than zero")]
    ZeroInterval { field: &'static str },
    #[error("{name} is not a valid Prometheus metric name")]
    MetricName { name: String },
}

impl Error {
    /// Reports whether this error describes a semantically invalid alert rule,
    /// as opposed to an unparsable input.
    pub fn is_failed_validation(&self) -> bool {
        matches!(
            self,
            Error::DashboardPanelMismatch { .. } | Error::InvalidPanelId { .. }
        )
    }
}
