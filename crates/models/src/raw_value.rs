/// RawValue holds an opaque JSON document, such as the model of a query.
/// It's like serde_json::value::RawValue, but is comparable and always
/// valid JSON. Newlines are stripped so that values stay on a single line
/// when a rule is logged or exported.
///
/// As it uses serde_json::RawValue, it MUST be deserialized using serde_json
/// and not serde_yaml or some other Deserializer. This may require first
/// transcoding to serde_json::Value and then using serde_json::from_value().
#[derive(serde::Serialize, Clone)]
pub struct RawValue(Box<serde_json::value::RawValue>);

// RawValues are only equal if they are byte-for-byte identical,
// except for leading and trailing whitespace.
impl std::cmp::PartialEq<RawValue> for RawValue {
    fn eq(&self, other: &RawValue) -> bool {
        self.get().trim() == other.get().trim()
    }
}

impl RawValue {
    pub fn from_str(s: &str) -> serde_json::Result<Self> {
        Self::from_string(s.to_owned())
    }
    pub fn from_string(mut s: String) -> serde_json::Result<Self> {
        s.retain(|c| c != '\n');
        let value = serde_json::value::RawValue::from_string(s)?;
        Ok(Self(value))
    }
    pub fn to_value(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::from_str(self.get())
    }
}

impl<'de> serde::Deserialize<'de> for RawValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let inner = Box::<serde_json::value::RawValue>::deserialize(deserializer)?;
        Ok(inner.into())
    }
}

impl Default for RawValue {
    fn default() -> Self {
        Self(serde_json::value::to_raw_value(&()).unwrap())
    }
}

impl From<Box<serde_json::value::RawValue>> for RawValue {
    fn from(value: Box<serde_json::value::RawValue>) -> Self {
        if !value.get().contains('\n') {
            return Self(value);
        }
        let s: Box<str> = value.into();
        let mut s = String::from(s);
        s.retain(|c| c != '\n');
        // Removing newlines from valid JSON leaves valid JSON,
        // since a newline may only appear as insignificant whitespace.
        match serde_json::value::RawValue::from_string(s) {
            Ok(value) => Self(value),
            Err(_) => Self::default(),
        }
    }
}

impl std::ops::Deref for RawValue {
    type Target = serde_json::value::RawValue;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl std::fmt::Debug for RawValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.0.fmt(f)
    }
}

impl schemars::JsonSchema for RawValue {
    fn schema_name() -> String {
        "Value".to_string()
    }
    fn is_referenceable() -> bool {
        false
    }
    fn json_schema(gen: &mut schemars::gen::SchemaGenerator) -> schemars::schema::Schema {
        serde_json::Value::json_schema(gen)
    }
}
