//! Conversions between the alerting domain model and its API, provisioning,
//! and export representations.
//!
//! Every conversion is a pure function of its inputs. Conversions into the
//! domain fail only where the wire form admits values the domain doesn't,
//! such as unknown state names or non-object query models.

mod contact_points;
mod errors;
mod export;
mod mute_timings;
mod notification_settings;
mod omit;
mod queries;
mod receivers;
mod routes;
mod rules;

pub use contact_points::{
    alerting_file_export_from_embedded_contact_points, receiver_export_from_embedded_contact_point,
};
pub use errors::Error;
pub use export::{
    alert_rule_export_from_alert_rule,
    alert_rule_group_export_from_alert_rule_group_with_folder_fullpath,
    alerting_file_export_from_alert_rule_groups,
};
pub use mute_timings::{alerting_file_export_from_mute_timings, mute_time_interval_export_from_mute_timing};
pub use notification_settings::{
    api_notification_settings_from_notification_settings, api_record_from_model_record,
    model_record_from_api_record, notification_settings_export_from_notification_settings,
    notification_settings_from_api, record_export_from_model_record,
};
pub use omit::{nil_if_empty, omit_default};
pub use queries::{
    alert_queries_from_api_alert_queries, alert_query_export_from_alert_query,
    api_alert_queries_from_alert_queries,
};
pub use receivers::{
    gettable_api_receiver_from_receiver, gettable_grafana_receiver_from_integration,
    integration_from_postable_grafana_receiver,
};
pub use routes::{alerting_file_export_from_route, route_export_from_route};
pub use rules::{
    alert_rule_from_provisioned_alert_rule, alert_rule_group_from_api_alert_rule_group,
    api_alert_rule_group_from_alert_rule_group, postable_rule_node_from_alert_rule,
    provisioned_alert_rule_from_alert_rule,
};
