use std::path::PathBuf;

/// Errors reading or writing the settings document.
#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("settings file {} is not a valid JSON object: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("could not determine a configuration directory; pass an explicit settings path")]
    NoConfigDir,
}

/// A required credential could not be resolved from settings or environment.
///
/// The message tells the user how to set the missing value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ConfigurationError {
    key: &'static str,
    message: String,
}

impl ConfigurationError {
    pub(crate) fn missing(key: &'static str, label: &str, env_var: &str) -> Self {
        Self {
            key,
            message: format!(
                "{label} not configured. Set it with: sakari config set {key} <your-{}>\n\
                 Or set {env_var} environment variable.\n\
                 Get your credentials at: https://hub.sakari.io/",
                label.to_lowercase().replace(' ', "-"),
            ),
        }
    }

    /// Settings key of the missing credential.
    pub fn key(&self) -> &'static str {
        self.key
    }

    /// Remediation message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_message_explains_remediation() {
        let err = ConfigurationError::missing("clientId", "Client ID", "SAKARI_CLIENT_ID");
        assert_eq!(err.key(), "clientId");
        assert_eq!(
            err.to_string(),
            "Client ID not configured. Set it with: sakari config set clientId <your-client-id>\n\
             Or set SAKARI_CLIENT_ID environment variable.\n\
             Get your credentials at: https://hub.sakari.io/"
        );
    }
}
