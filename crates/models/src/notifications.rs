use crate::{labels, Error};
use std::time::Duration;

/// Simplified routing of an alerting rule's notifications to a single
/// receiver, which overrides the notification policy tree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationSettings {
    pub receiver: String,
    pub group_by: Vec<String>,
    pub group_wait: Option<Duration>,
    pub group_interval: Option<Duration>,
    pub repeat_interval: Option<Duration>,
    pub mute_time_intervals: Vec<String>,
    pub active_time_intervals: Vec<String>,
}

impl NotificationSettings {
    /// Validate the structure of these settings.
    /// A zero group wait is allowed, but group and repeat intervals must be positive.
    pub fn validate(&self) -> Result<(), Error> {
        if self.receiver.is_empty() {
            return Err(Error::ReceiverMissing);
        }

        if !self.group_by.is_empty() {
            let has = |label: &str| self.group_by.iter().any(|l| l == label);

            if !has(labels::GROUP_BY_ALL)
                && !(has(labels::ALERT_NAME) && has(labels::FOLDER_TITLE))
            {
                return Err(Error::GroupByMissingRequired {
                    alert_name: labels::ALERT_NAME,
                    folder: labels::FOLDER_TITLE,
                    group_by_all: labels::GROUP_BY_ALL,
                });
            }
        }

        if self.group_interval == Some(Duration::ZERO) {
            return Err(Error::ZeroInterval {
                field: "group interval",
            });
        }
        if self.repeat_interval == Some(Duration::ZERO) {
            return Err(Error::ZeroInterval {
                field: "repeat interval",
            });
        }
        Ok(())
    }
}
