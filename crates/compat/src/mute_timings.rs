use definitions::{AlertingFileExport, MuteTimeInterval, MuteTimeIntervalExport, EXPORT_API_VERSION};

pub fn alerting_file_export_from_mute_timings(
    org_id: i64,
    timings: &[MuteTimeInterval],
) -> AlertingFileExport {
    AlertingFileExport {
        api_version: EXPORT_API_VERSION,
        mute_timings: timings
            .iter()
            .map(|t| mute_time_interval_export_from_mute_timing(org_id, t))
            .collect(),
        ..Default::default()
    }
}

pub fn mute_time_interval_export_from_mute_timing(
    org_id: i64,
    timing: &MuteTimeInterval,
) -> MuteTimeIntervalExport {
    MuteTimeIntervalExport {
        org_id,
        name: timing.name.clone(),
        time_intervals: timing.time_intervals.clone(),
    }
}
