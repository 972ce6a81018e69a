//! Configuration validation.

use crate::schema::{BackendKind, Config, StoreConfig};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
const REDIS_SCHEMES: [&str; 3] = ["redis://", "rediss://", "unix://"];

/// Validation result.
#[derive(Debug, Default)]
pub struct ValidationResult {
    pub errors: Vec<ValidationError>,
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }
}

/// A validation error.
#[derive(Debug)]
pub struct ValidationError {
    pub path: String,
    pub message: String,
}

impl ValidationError {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// A validation warning.
#[derive(Debug)]
pub struct ValidationWarning {
    pub path: String,
    pub message: String,
}

impl ValidationWarning {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate the configuration.
    pub fn validate(config: &Config) -> ValidationResult {
        let mut result = ValidationResult::default();

        Self::validate_logging(config, &mut result);
        Self::validate_store("defaults", None, &config.defaults, &mut result);
        for (name, store) in &config.stores {
            if name.is_empty() {
                result.add_error(ValidationError::new("stores", "Store name cannot be empty"));
            }
            Self::validate_store(&format!("stores.{}", name), Some(name), store, &mut result);
        }
        Self::validate_consumers(config, &mut result);

        result
    }

    fn validate_logging(config: &Config, result: &mut ValidationResult) {
        let level = config.logging.level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            result.add_warning(ValidationWarning::new(
                "logging.level",
                format!(
                    "Unknown log level '{}', valid values: {:?}",
                    config.logging.level, LOG_LEVELS
                ),
            ));
        }
    }

    /// `name` is `None` for `[defaults]`, whose stores are named at lookup time.
    fn validate_store(
        path: &str,
        name: Option<&str>,
        store: &StoreConfig,
        result: &mut ValidationResult,
    ) {
        match store.backend {
            BackendKind::Memory => {}
            BackendKind::File => {
                let unusable = name.and_then(|name| store.file_path(name).err());
                if let Some(err) = unusable {
                    result.add_error(ValidationError::new(format!("{}.path", path), err.to_string()));
                } else if store.path.is_none() {
                    result.add_warning(ValidationWarning::new(
                        format!("{}.path", path),
                        "File store path not set, will use ~/.storehouse/stores",
                    ));
                }
            }
            BackendKind::Redis => match &store.url {
                None => result.add_error(ValidationError::new(
                    format!("{}.url", path),
                    "Redis store requires a url",
                )),
                Some(url) if !REDIS_SCHEMES.iter().any(|s| url.starts_with(s)) => {
                    result.add_error(ValidationError::new(
                        format!("{}.url", path),
                        format!("url must start with one of {:?}", REDIS_SCHEMES),
                    ))
                }
                Some(_) => {}
            },
        }

        if store.namespace.is_some() && store.backend != BackendKind::Redis {
            result.add_warning(ValidationWarning::new(
                format!("{}.namespace", path),
                format!("namespace is ignored by the {} backend", store.backend),
            ));
        }
    }

    fn validate_consumers(config: &Config, result: &mut ValidationResult) {
        if config.response_cache.store.is_empty() {
            result.add_error(ValidationError::new(
                "response_cache.store",
                "Store name cannot be empty",
            ));
        }
        if config.response_cache.default_expiration == 0 {
            result.add_error(ValidationError::new(
                "response_cache.default_expiration",
                "default_expiration must be greater than 0",
            ));
        }

        if config.sessions.store.is_empty() {
            result.add_error(ValidationError::new("sessions.store", "Store name cannot be empty"));
        }
        if config.sessions.max_age == 0 {
            result.add_error(ValidationError::new(
                "sessions.max_age",
                "max_age must be greater than 0",
            ));
        }

        if config.sessions.store == config.response_cache.store {
            result.add_warning(ValidationWarning::new(
                "sessions.store",
                "Sessions and response cache share a store; clearing one clears both",
            ));
        }
    }
}

#[cfg(test)]
#[path = "validator_tests.rs"]
mod tests;
