use itertools::Itertools;

#[must_use]
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("rule group name cannot be empty")]
    GroupNameEmpty,
    #[error("rule group name is too long. Max length is {max}")]
    GroupNameTooLong { max: usize },
    #[error("rule evaluation interval ({seconds} second) should be positive number that is multiple of the base interval of {base} seconds")]
    GroupInterval { seconds: i64, base: i64 },
    #[error("rule evaluation interval must be positive duration that is multiple of the base interval {base} seconds")]
    IntervalNotPositive { base: i64 },
    #[error("rule evaluation interval {seconds} should be multiple of the base interval of {base} seconds")]
    IntervalNotMultiple { seconds: i64, base: i64 },
    #[error("not Grafana managed alert rule")]
    NotGrafanaManaged,
    #[error("alert rule title cannot be empty")]
    TitleEmpty,
    #[error("alert rule title is too long. Max length is {max}")]
    TitleTooLong { max: usize },
    #[error("rule cannot be simultaneously an alerting and recording rule")]
    AlertingAndRecording,
    #[error("recording rules cannot be created on this instance")]
    RecordingRulesDisabled,
    #[error("condition cannot be empty")]
    ConditionEmpty,
    #[error("no query/expressions specified")]
    NoQueries,
    #[error("refID is not specified for data query/expression at index {index}")]
    RefIdEmpty { index: usize },
    #[error("refID '{ref_id}' at index {index} is already used by query/expression at index {existing}")]
    RefIdDuplicate {
        ref_id: String,
        index: usize,
        existing: usize,
    },
    #[error("condition {condition} does not exist, must be one of [{}]", .ref_ids.join(","))]
    ConditionNotFound {
        condition: String,
        ref_ids: Vec<String>,
    },
    #[error("metric name for recording rule must be a valid Prometheus metric name")]
    InvalidMetricName {
        #[source]
        source: models::Error,
    },
    #[error("system reserved labels cannot be defined in the rule. Label {label} is the reserved")]
    ReservedLabel { label: String },
    #[error("number of missing series evaluations to resolve must be a non-negative integer, not {value}")]
    NegativeMissingSeriesEvals { value: i64 },
    #[error("invalid notification settings: {0}")]
    NotificationSettings(#[source] models::Error),
    #[error(transparent)]
    Model(#[from] models::Error),
    #[error("invalid rule specification at index [{index}]: {source}")]
    Rule {
        index: usize,
        #[source]
        source: Box<Error>,
    },
    #[error("rule [{index}] has UID {uid} that is already assigned to another rule at index {existing}")]
    DuplicateUid {
        index: usize,
        uid: String,
        existing: usize,
    },
    #[error("{}", .0.iter().join("; "))]
    Rules(Vec<Error>),
}

impl Error {
    /// Reports whether this error describes a semantically invalid rule
    /// or group, rather than a malformed request.
    pub fn is_failed_validation(&self) -> bool {
        match self {
            Error::NotGrafanaManaged => false,
            Error::Model(err) => err.is_failed_validation(),
            Error::Rule { source, .. } => source.is_failed_validation(),
            Error::Rules(errors) => errors.iter().any(Error::is_failed_validation),
            _ => true,
        }
    }
}
