//! Configuration parameters of the commands, merged from the configuration
//! file, the environment, and the command line.

use std::collections::HashMap;

use serde::Deserialize;
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Error raised when a required parameter is not present.
    #[error("Parameter '{0}' is mandatory.")]
    Required(String),

    /// Error raised when a parameter can not be converted to its expected type.
    #[error("{0}")]
    Conversion(String),
}

/// Source of configuration parameters that a command can contribute to the
/// [ConfigParameters] holder.
pub trait ConfigSource {
    /// Collect the parameters of this source
    fn collect(&self) -> Result<HashMap<String, String>, ConfigError>;
}

/// Configuration parameters holder
#[derive(Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConfigParameters {
    parameters: HashMap<String, String>,
}

impl ConfigParameters {
    /// Constructor
    pub fn new(parameters: HashMap<String, String>) -> Self {
        Self { parameters }
    }

    /// Useful constructor for testing
    #[cfg(test)]
    pub fn build(parameters: &[(&str, &str)]) -> Self {
        let parameters = parameters
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        Self::new(parameters)
    }

    /// Add or replace a parameter in the holder
    #[cfg(test)]
    pub fn add_parameter(&mut self, name: &str, value: &str) -> &mut Self {
        let _ = self.parameters.insert(name.to_string(), value.to_string());

        self
    }

    /// Merge the parameters of the given source into the holder, the source
    /// taking precedence over already known parameters.
    pub fn add_source(mut self, source: &impl ConfigSource) -> Result<Self, ConfigError> {
        for (name, value) in source.collect()? {
            let _ = self.parameters.insert(name, value);
        }

        Ok(self)
    }

    /// Fetch a parameter from the holder.
    pub fn get(&self, name: &str) -> Option<String> {
        self.parameters.get(name).cloned()
    }

    /// Fetch a parameter from the holder. If the parameter is not set, the
    /// given default value is returned instead.
    pub fn get_or(&self, name: &str, default: &str) -> String {
        self.get(name).unwrap_or(default.to_string())
    }

    /// Fetch a parameter from the holder. If the parameter is not set, an error
    /// is raised.
    pub fn require(&self, name: &str) -> Result<String, ConfigError> {
        self.get(name)
            .ok_or_else(|| ConfigError::Required(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct ArgumentsSource {
        endpoint: Option<String>,
    }

    impl ConfigSource for ArgumentsSource {
        fn collect(&self) -> Result<HashMap<String, String>, ConfigError> {
            let mut map = HashMap::new();

            if let Some(endpoint) = self.endpoint.clone() {
                map.insert("endpoint".to_string(), endpoint);
            }

            Ok(map)
        }
    }

    #[test]
    fn test_config_constructor() {
        let config = ConfigParameters::build(&[("endpoint", "http://local.test")]);

        assert_eq!(
            ConfigParameters {
                parameters: [("endpoint".to_string(), "http://local.test".to_string())]
                    .into_iter()
                    .collect()
            },
            config
        );
    }

    #[test]
    fn test_config_set() {
        let mut config = ConfigParameters::default();
        config.add_parameter("endpoint", "http://local.test");

        assert_eq!(
            ConfigParameters {
                parameters: [("endpoint".to_string(), "http://local.test".to_string())]
                    .into_iter()
                    .collect()
            },
            config
        );
    }

    #[test]
    fn test_config_get() {
        let config = ConfigParameters::build(&[("endpoint", "http://local.test")]);

        assert_eq!("http://local.test".to_string(), config.get("endpoint").unwrap());
        assert!(config.get("whatever").is_none());
    }

    #[test]
    fn test_config_default() {
        let config = ConfigParameters::build(&[("endpoint", "http://local.test")]);

        assert_eq!("http://local.test".to_string(), config.get("endpoint").unwrap());
        assert_eq!("default".to_string(), config.get_or("whatever", "default"));
    }

    #[test]
    fn test_config_require() {
        let config = ConfigParameters::build(&[("endpoint", "http://local.test")]);

        assert_eq!(
            "http://local.test".to_string(),
            config.require("endpoint").unwrap()
        );
        let error = config.require("kid").unwrap_err();
        assert_eq!("Parameter 'kid' is mandatory.".to_string(), error.to_string());
    }

    #[test]
    fn test_config_source_overrides_existing_parameters() {
        let config = ConfigParameters::build(&[("endpoint", "http://config-file.test")]);
        let source = ArgumentsSource {
            endpoint: Some("http://arguments.test".to_string()),
        };

        let config = config.add_source(&source).unwrap();

        assert_eq!(
            "http://arguments.test".to_string(),
            config.require("endpoint").unwrap()
        );
    }

    #[test]
    fn test_config_source_without_value_keeps_existing_parameters() {
        let config = ConfigParameters::build(&[("endpoint", "http://config-file.test")]);
        let source = ArgumentsSource { endpoint: None };

        let config = config.add_source(&source).unwrap();

        assert_eq!(
            "http://config-file.test".to_string(),
            config.require("endpoint").unwrap()
        );
    }
}
