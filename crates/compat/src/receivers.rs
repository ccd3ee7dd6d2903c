use crate::Error;
use definitions::{GettableApiReceiver, GettableGrafanaReceiver, PostableGrafanaReceiver};
use models::{Integration, Provenance, RawValue, Receiver};

/// Project an integration for reading. Secure settings are replaced by the
/// names of those which are set, and settings are omitted when empty.
pub fn gettable_grafana_receiver_from_integration(
    integration: &Integration,
    provenance: Provenance,
) -> Result<GettableGrafanaReceiver, Error> {
    let settings = if integration.settings.is_empty() {
        None
    } else {
        let raw = serde_json::value::to_raw_value(&integration.settings).map_err(|source| {
            Error::Settings {
                name: integration.name.clone(),
                source,
            }
        })?;
        Some(RawValue::from(raw))
    };

    Ok(GettableGrafanaReceiver {
        uid: integration.uid.clone(),
        name: integration.name.clone(),
        integration_type: integration.integration_type.clone(),
        disable_resolve_message: integration.disable_resolve_message,
        secure_fields: integration.secure_fields(),
        settings,
        provenance,
    })
}

pub fn gettable_api_receiver_from_receiver(receiver: &Receiver) -> Result<GettableApiReceiver, Error> {
    let grafana_managed_receiver_configs = receiver
        .integrations
        .iter()
        .map(|i| gettable_grafana_receiver_from_integration(i, receiver.provenance))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(GettableApiReceiver {
        name: receiver.name.clone(),
        grafana_managed_receiver_configs,
    })
}

/// Map a submitted integration into the domain. Its settings must be
/// a JSON object, or null which is taken as no settings.
pub fn integration_from_postable_grafana_receiver(
    postable: &PostableGrafanaReceiver,
) -> Result<Integration, Error> {
    let settings = match postable.settings.to_value() {
        Ok(serde_json::Value::Object(map)) => map,
        Ok(serde_json::Value::Null) => serde_json::Map::new(),
        Ok(_) => {
            return Err(Error::SettingsNotObject {
                name: postable.name.clone(),
            })
        }
        Err(source) => {
            return Err(Error::Settings {
                name: postable.name.clone(),
                source,
            })
        }
    };

    Ok(Integration {
        uid: postable.uid.clone(),
        name: postable.name.clone(),
        integration_type: postable.integration_type.clone(),
        disable_resolve_message: postable.disable_resolve_message,
        settings,
        secure_settings: postable.secure_settings.clone(),
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn slack() -> Integration {
        Integration {
            uid: "sl1".to_string(),
            name: "ops".to_string(),
            integration_type: "slack".to_string(),
            disable_resolve_message: true,
            settings: json!({"recipient": "#ops", "mentionChannel": "here"})
                .as_object()
                .cloned()
                .unwrap(),
            secure_settings: [("token".to_string(), "xoxb-1".to_string())].into(),
        }
    }

    #[test]
    fn test_gettable_receiver_hides_secrets() {
        let receiver = Receiver {
            uid: "r1".to_string(),
            name: "ops".to_string(),
            integrations: vec![
                slack(),
                Integration {
                    uid: "em1".to_string(),
                    name: "ops".to_string(),
                    integration_type: "email".to_string(),
                    ..Default::default()
                },
            ],
            provenance: Provenance::Api,
        };
        let gettable = gettable_api_receiver_from_receiver(&receiver).unwrap();

        insta::assert_snapshot!(serde_json::to_string_pretty(&gettable).unwrap(), @r###"
        {
          "name": "ops",
          "grafana_managed_receiver_configs": [
            {
              "uid": "sl1",
              "name": "ops",
              "type": "slack",
              "disableResolveMessage": true,
              "secureFields": {
                "token": true
              },
              "settings": {"mentionChannel":"here","recipient":"#ops"},
              "provenance": "api"
            },
            {
              "uid": "em1",
              "name": "ops",
              "type": "email",
              "disableResolveMessage": false,
              "secureFields": {},
              "provenance": "api"
            }
          ]
        }
        "###);
    }

    #[test]
    fn test_postable_receiver_to_integration() {
        let postable: PostableGrafanaReceiver = serde_json::from_str(
            r##"{
                "uid": "sl1",
                "name": "ops",
                "type": "slack",
                "disableResolveMessage": true,
                "settings": {"recipient": "#ops", "mentionChannel": "here"},
                "secureSettings": {"token": "xoxb-1"}
            }"##,
        )
        .unwrap();
        assert_eq!(integration_from_postable_grafana_receiver(&postable).unwrap(), slack());

        let postable = PostableGrafanaReceiver {
            name: "broken".to_string(),
            settings: RawValue::from_str(r#""just a string""#).unwrap(),
            ..Default::default()
        };
        let err = integration_from_postable_grafana_receiver(&postable).unwrap_err();
        insta::assert_snapshot!(err, @"settings of integration broken must be a JSON object");

        let postable = PostableGrafanaReceiver::default();
        assert!(integration_from_postable_grafana_receiver(&postable)
            .unwrap()
            .settings
            .is_empty());
    }
}
