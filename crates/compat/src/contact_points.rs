use definitions::{AlertingFileExport, ContactPointExport, EmbeddedContactPoint, ReceiverExport};

/// Group contact points by name into an export file.
/// Groups appear in the order their names are first seen, and each
/// contact point contributes one receiver to its group.
pub fn alerting_file_export_from_embedded_contact_points(
    org_id: i64,
    cps: &[EmbeddedContactPoint],
) -> AlertingFileExport {
    let mut contact_points: Vec<ContactPointExport> = Vec::new();

    for cp in cps {
        let receiver = receiver_export_from_embedded_contact_point(cp);

        match contact_points.iter_mut().find(|c| c.name == cp.name) {
            Some(existing) => existing.receivers.push(receiver),
            None => contact_points.push(ContactPointExport {
                org_id,
                name: cp.name.clone(),
                receivers: vec![receiver],
            }),
        }
    }

    tracing::debug!(
        contact_points = contact_points.len(),
        integrations = cps.len(),
        "exported contact points"
    );

    AlertingFileExport {
        api_version: definitions::EXPORT_API_VERSION,
        contact_points,
        ..Default::default()
    }
}

pub fn receiver_export_from_embedded_contact_point(cp: &EmbeddedContactPoint) -> ReceiverExport {
    let settings = match &cp.settings {
        serde_json::Value::Null => serde_json::Value::Object(Default::default()),
        other => other.clone(),
    };

    ReceiverExport {
        uid: cp.uid.clone(),
        integration_type: cp.integration_type.clone(),
        settings,
        disable_resolve_message: cp.disable_resolve_message,
    }
}
