use crate::Error;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// State an alerting rule transitions to when its queries return no data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum NoDataState {
    Alerting,
    NoData,
    #[serde(rename = "OK")]
    Ok,
    KeepLast,
}

impl Default for NoDataState {
    fn default() -> Self {
        NoDataState::NoData
    }
}

impl std::fmt::Display for NoDataState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl NoDataState {
    pub fn name(&self) -> &'static str {
        match self {
            NoDataState::Alerting => "Alerting",
            NoDataState::NoData => "NoData",
            NoDataState::Ok => "OK",
            NoDataState::KeepLast => "KeepLast",
        }
    }

    pub fn all() -> &'static [NoDataState] {
        &[
            NoDataState::Alerting,
            NoDataState::NoData,
            NoDataState::Ok,
            NoDataState::KeepLast,
        ]
    }

    /// Parse the exact wire name of a state. Matching is case-sensitive.
    pub fn from_str(name: &str) -> Result<NoDataState, Error> {
        Self::all()
            .iter()
            .find(|state| state.name() == name)
            .copied()
            .ok_or_else(|| Error::UnknownNoDataState {
                value: name.to_string(),
            })
    }
}

/// State an alerting rule transitions to when evaluation fails.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum ExecutionErrorState {
    Alerting,
    Error,
    #[serde(rename = "OK")]
    Ok,
    KeepLast,
}

impl Default for ExecutionErrorState {
    fn default() -> Self {
        ExecutionErrorState::Alerting
    }
}

impl std::fmt::Display for ExecutionErrorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl ExecutionErrorState {
    pub fn name(&self) -> &'static str {
        match self {
            ExecutionErrorState::Alerting => "Alerting",
            ExecutionErrorState::Error => "Error",
            ExecutionErrorState::Ok => "OK",
            ExecutionErrorState::KeepLast => "KeepLast",
        }
    }

    pub fn all() -> &'static [ExecutionErrorState] {
        &[
            ExecutionErrorState::Alerting,
            ExecutionErrorState::Error,
            ExecutionErrorState::Ok,
            ExecutionErrorState::KeepLast,
        ]
    }

    pub fn from_str(name: &str) -> Result<ExecutionErrorState, Error> {
        Self::all()
            .iter()
            .find(|state| state.name() == name)
            .copied()
            .ok_or_else(|| Error::UnknownExecErrState {
                value: name.to_string(),
            })
    }
}

/// Parse an optional wire state, where an empty string means "not set".
pub fn no_data_state_from_wire(s: &str) -> Result<Option<NoDataState>, Error> {
    if s.is_empty() {
        Ok(None)
    } else {
        NoDataState::from_str(s).map(Some)
    }
}

pub fn exec_err_state_from_wire(s: &str) -> Result<Option<ExecutionErrorState>, Error> {
    if s.is_empty() {
        Ok(None)
    } else {
        ExecutionErrorState::from_str(s).map(Some)
    }
}
