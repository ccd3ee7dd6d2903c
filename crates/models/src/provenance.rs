use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Provenance describes how an alerting resource is managed.
/// Resources with a provenance other than `None` may only be
/// modified through the channel which created them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum Provenance {
    #[default]
    #[serde(rename = "")]
    None,
    #[serde(rename = "api")]
    Api,
    #[serde(rename = "file")]
    File,
    #[serde(rename = "converted_prometheus")]
    ConvertedPrometheus,
}

impl Provenance {
    pub fn name(&self) -> &'static str {
        match self {
            Provenance::None => "",
            Provenance::Api => "api",
            Provenance::File => "file",
            Provenance::ConvertedPrometheus => "converted_prometheus",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Provenance::None)
    }
}

impl std::fmt::Display for Provenance {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod test {
    use super::Provenance;

    #[test]
    fn test_wire_names() {
        for (p, name) in [
            (Provenance::None, ""),
            (Provenance::Api, "api"),
            (Provenance::File, "file"),
            (Provenance::ConvertedPrometheus, "converted_prometheus"),
        ] {
            assert_eq!(serde_json::to_value(p).unwrap(), serde_json::json!(name));
            assert_eq!(
                serde_json::from_value::<Provenance>(serde_json::json!(name)).unwrap(),
                p
            );
            assert_eq!(p.to_string(), name);
        }
    }
}
