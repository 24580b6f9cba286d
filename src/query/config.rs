/// Field compared by the only filter shape a backend can run
pub const DEFAULT_KEY_FIELD: &str = "Name";

/// Settings for a [`QueryProvider`](crate::query::QueryProvider)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Field whose equality filter is sent to the backend
    pub key_field: String,
    /// Evaluate filters the backend cannot run against the fetched rows.
    /// When off, such filters fail the query before anything is fetched.
    pub local_filtering: bool,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            key_field: DEFAULT_KEY_FIELD.to_string(),
            local_filtering: true,
        }
    }
}

impl ProviderConfig {
    pub fn with_key_field(mut self, key_field: impl Into<String>) -> Self {
        self.key_field = key_field.into();
        self
    }

    pub fn with_local_filtering(mut self, enabled: bool) -> Self {
        self.local_filtering = enabled;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ProviderConfig::default();
        assert_eq!(config.key_field, "Name");
        assert!(config.local_filtering);
    }

    #[test]
    fn test_builders() {
        let config = ProviderConfig::default()
            .with_key_field("Age")
            .with_local_filtering(false);
        assert_eq!(config.key_field, "Age");
        assert!(!config.local_filtering);
    }
}
