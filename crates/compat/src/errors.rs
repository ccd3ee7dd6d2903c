#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Model(#[from] models::Error),
    #[error("failed to decode the model of query {ref_id}: {source}")]
    QueryModelDecode {
        ref_id: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("model of query {ref_id} must be a JSON object")]
    QueryModelNotObject { ref_id: String },
    #[error("invalid settings of integration {name}: {source}")]
    Settings {
        name: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("settings of integration {name} must be a JSON object")]
    SettingsNotObject { name: String },
}
