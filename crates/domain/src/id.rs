//! Home-Assistant-style entity identifiers (`<domain>.<object_id>`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConfigurationError;

/// Identifier of a sensor or switch owned by the host, e.g. `switch.grow_light_1`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EntityId(String);

impl EntityId {
    /// The part before the first dot (`switch`, `sensor`, …).
    #[must_use]
    pub fn domain(&self) -> &str {
        self.0.split_once('.').map_or("", |(domain, _)| domain)
    }

    /// The part after the first dot.
    #[must_use]
    pub fn object_id(&self) -> &str {
        self.0.split_once('.').map_or("", |(_, object_id)| object_id)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for EntityId {
    type Err = ConfigurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let valid = s
            .split_once('.')
            .is_some_and(|(domain, object_id)| !domain.is_empty() && !object_id.is_empty())
            && !s.chars().any(char::is_whitespace);
        if valid {
            Ok(Self(s.to_string()))
        } else {
            Err(ConfigurationError::InvalidEntityId(s.to_string()))
        }
    }
}

impl TryFrom<String> for EntityId {
    type Error = ConfigurationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<EntityId> for String {
    fn from(id: EntityId) -> Self {
        id.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_parse_switch_entity_id() {
        let id: EntityId = "switch.grow_light_1".parse().unwrap();
        assert_eq!(id.domain(), "switch");
        assert_eq!(id.object_id(), "grow_light_1");
        assert_eq!(id.to_string(), "switch.grow_light_1");
    }

    #[test]
    fn should_keep_dots_after_the_first_in_object_id() {
        let id: EntityId = "sensor.uv.index".parse().unwrap();
        assert_eq!(id.domain(), "sensor");
        assert_eq!(id.object_id(), "uv.index");
    }

    #[test]
    fn should_reject_missing_domain_separator() {
        assert!(matches!(
            "grow_light".parse::<EntityId>(),
            Err(ConfigurationError::InvalidEntityId(_))
        ));
    }

    #[test]
    fn should_reject_empty_parts() {
        assert!(".grow_light".parse::<EntityId>().is_err());
        assert!("switch.".parse::<EntityId>().is_err());
        assert!("".parse::<EntityId>().is_err());
    }

    #[test]
    fn should_reject_whitespace() {
        assert!("switch.grow light".parse::<EntityId>().is_err());
    }

    #[test]
    fn should_deserialize_from_plain_string() {
        let id: EntityId = serde_json::from_str("\"sensor.uv_index\"").unwrap();
        assert_eq!(id.as_str(), "sensor.uv_index");
    }

    #[test]
    fn should_fail_to_deserialize_malformed_id() {
        assert!(serde_json::from_str::<EntityId>("\"uv_index\"").is_err());
    }
}
