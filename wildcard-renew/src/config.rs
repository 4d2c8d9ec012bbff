//! Credential file loading.
//!
//! The credential file is shared with certbot's `dns-cloudflare` plugin, so it
//! uses that plugin's INI-like format. Only the first line is read:
//!
//! ```text
//! dns_cloudflare_api_token=0123456789abcdef
//! ```

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use thiserror::Error;
use wildcard_renew_provider::log_sanitizer::mask_secret;

/// Key certbot's `dns-cloudflare` plugin expects on the token line.
pub const TOKEN_KEY: &str = "dns_cloudflare_api_token";

/// Failure to obtain the API token from the credential file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Cannot open config file {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Cannot open config file {}", path.display())]
    PermissionDenied { path: PathBuf },

    #[error("Cannot open config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Malformed config file {}: {detail}", path.display())]
    Malformed { path: PathBuf, detail: String },
}

impl ConfigError {
    /// Whether the file itself could not be read, as opposed to being read
    /// and found malformed.
    pub fn is_inaccessible(&self) -> bool {
        !matches!(self, Self::Malformed { .. })
    }

    fn from_io(path: &Path, source: io::Error) -> Self {
        let path = path.to_path_buf();
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source },
        }
    }
}

/// Cloudflare API token. `Debug` only shows a masked prefix.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiToken(String);

impl ApiToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The raw token, for building an `Authorization` header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("ApiToken")
            .field(&mask_secret(&self.0))
            .finish()
    }
}

/// Extract the token from a `key=value` line.
///
/// The line is split on `=` and the second field is taken, trimmed. The key
/// itself is not checked.
pub fn parse_token_line(line: &str) -> Option<&str> {
    let value = line.split('=').nth(1)?.trim();
    (!value.is_empty()).then_some(value)
}

/// Read the API token from the first line of `path`.
pub fn load_api_token(path: &Path) -> Result<ApiToken, ConfigError> {
    let file = File::open(path).map_err(|e| ConfigError::from_io(path, e))?;

    let mut first_line = String::new();
    BufReader::new(file)
        .read_line(&mut first_line)
        .map_err(|e| ConfigError::from_io(path, e))?;

    if first_line.trim().is_empty() {
        return Err(ConfigError::Malformed {
            path: path.to_path_buf(),
            detail: "first line is empty".to_string(),
        });
    }

    let key = first_line.split('=').next().unwrap_or_default().trim();
    if key != TOKEN_KEY {
        tracing::warn!(
            "Unexpected key '{key}' in {}, certbot expects '{TOKEN_KEY}'",
            path.display()
        );
    }

    let token = parse_token_line(&first_line).ok_or_else(|| ConfigError::Malformed {
        path: path.to_path_buf(),
        detail: format!("expected '{TOKEN_KEY}=<token>' on the first line"),
    })?;

    tracing::debug!("Loaded API token {} from {}", mask_secret(token), path.display());
    Ok(ApiToken::new(token))
}
