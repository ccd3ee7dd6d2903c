use crate::Error;

pub fn alert_queries_from_api_alert_queries(
    queries: &[definitions::AlertQuery],
) -> Vec<models::AlertQuery> {
    queries.iter().map(alert_query_from_api_alert_query).collect()
}

pub fn api_alert_queries_from_alert_queries(
    queries: &[models::AlertQuery],
) -> Vec<definitions::AlertQuery> {
    queries.iter().map(api_alert_query_from_alert_query).collect()
}

fn alert_query_from_api_alert_query(q: &definitions::AlertQuery) -> models::AlertQuery {
    models::AlertQuery {
        ref_id: q.ref_id.clone(),
        query_type: q.query_type.clone(),
        relative_time_range: models::RelativeTimeRange {
            from: q.relative_time_range.from,
            to: q.relative_time_range.to,
        },
        datasource_uid: q.datasource_uid.clone(),
        model: q.model.clone(),
    }
}

fn api_alert_query_from_alert_query(q: &models::AlertQuery) -> definitions::AlertQuery {
    definitions::AlertQuery {
        ref_id: q.ref_id.clone(),
        query_type: q.query_type.clone(),
        relative_time_range: definitions::RelativeTimeRange {
            from: q.relative_time_range.from,
            to: q.relative_time_range.to,
        },
        datasource_uid: q.datasource_uid.clone(),
        model: q.model.clone(),
    }
}

/// Project a query for export. The model is decoded into a map, so that it's
/// emitted as structured YAML or JSON, and is also rendered as a compact string.
/// A null model exports as an empty object.
pub fn alert_query_export_from_alert_query(
    q: &models::AlertQuery,
) -> Result<definitions::AlertQueryExport, Error> {
    let model = match q.model.to_value() {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(serde_json::Value::Null) => serde_json::Map::new(),
        Ok(_) => {
            return Err(Error::QueryModelNotObject {
                ref_id: q.ref_id.clone(),
            })
        }
        Err(source) => {
            return Err(Error::QueryModelDecode {
                ref_id: q.ref_id.clone(),
                source,
            })
        }
    };
    // serde_json doesn't escape HTML characters, and orders map keys.
    let model_string = serde_json::to_string(&model).map_err(|source| Error::QueryModelDecode {
        ref_id: q.ref_id.clone(),
        source,
    })?;

    Ok(definitions::AlertQueryExport {
        ref_id: q.ref_id.clone(),
        query_type: q.query_type.clone(),
        relative_time_range: definitions::RelativeTimeRangeExport {
            from_seconds: q.relative_time_range.from.as_secs() as i64,
            to_seconds: q.relative_time_range.to.as_secs() as i64,
        },
        datasource_uid: q.datasource_uid.clone(),
        model,
        model_string,
    })
}
