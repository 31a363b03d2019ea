//! Command-line overrides of configuration values
use super::ConfigParseError;
use serde_yaml::{Mapping, Value};
use std::str::FromStr;

/// Assignment of a value to a dotted configuration key, written `reward.name=RE3`.
///
/// The value is read as YAML so `true`, `10` and `{name: RE3}` keep their types.
#[derive(Debug, Clone, PartialEq)]
pub struct Override {
    text: String,
    path: Vec<String>,
    value: Value,
}

impl Override {
    /// The key segments, outermost first.
    pub fn path(&self) -> &[String] {
        &self.path
    }

    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Set the value in a configuration document, creating intermediate mappings.
    pub fn apply(&self, root: &mut Value) -> Result<(), ConfigParseError> {
        let (last, parents) = self
            .path
            .split_last()
            .ok_or_else(|| self.invalid("empty key"))?;

        let mut node = root;
        for segment in parents {
            node = as_mapping(node)
                .ok_or_else(|| self.invalid("key passes through a non-mapping value"))?
                .entry(Value::String(segment.clone()))
                .or_insert_with(|| Value::Mapping(Mapping::new()));
        }
        as_mapping(node)
            .ok_or_else(|| self.invalid("key passes through a non-mapping value"))?
            .insert(Value::String(last.clone()), self.value.clone());
        Ok(())
    }

    fn invalid(&self, reason: &'static str) -> ConfigParseError {
        ConfigParseError::InvalidOverride {
            text: self.text.clone(),
            reason,
        }
    }
}

/// View a node as a mapping, turning an unset node into an empty mapping.
fn as_mapping(node: &mut Value) -> Option<&mut Mapping> {
    if node.is_null() {
        *node = Value::Mapping(Mapping::new());
    }
    node.as_mapping_mut()
}

impl FromStr for Override {
    type Err = ConfigParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason| ConfigParseError::InvalidOverride {
            text: s.to_owned(),
            reason,
        };
        let (key, raw_value) = s.split_once('=').ok_or_else(|| invalid("expected key=value"))?;
        let path: Vec<String> = key.trim().split('.').map(str::to_owned).collect();
        if path.iter().any(String::is_empty) {
            return Err(invalid("empty key segment"));
        }
        let value = serde_yaml::from_str(raw_value.trim())
            .map_err(|_| invalid("value is not valid YAML"))?;
        Ok(Self {
            text: s.to_owned(),
            path,
            value,
        })
    }
}
