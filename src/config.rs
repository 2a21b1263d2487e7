//! Configuration for session defaults
//!
//! Defaults are optional: embedders that want every new session to
//! start with a few headers and a timeout can ship an INI file, and
//! everything works without one. The file looks like:
//!
//! ```ini
//! [session]
//! timeout = 30
//!
//! [headers]
//! User-Agent = pigeon/0.1
//! Accept = */*
//! ```

use std::path::Path;

use ini::Ini;

use crate::error::{Error, Result};
use crate::models::KeyValuePair;

/// Default defaults-file path
pub const DEFAULT_DEFAULTS_PATH: &str = "~/.pigeon/defaults";

/// Environment variable name for overriding the defaults path
pub const DEFAULTS_PATH_ENV_VAR: &str = "PIGEON_DEFAULTS_PATH";

/// Get the defaults file path, checking environment variable first, then
/// falling back to default
pub fn get_defaults_path() -> String {
    std::env::var_os(DEFAULTS_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_DEFAULTS_PATH.to_string())
}

/// Starting values applied to every new session: header rows seeded
/// ahead of the blank placeholder, and a timeout in seconds.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionDefaults {
    timeout: Option<u64>,
    headers: Vec<KeyValuePair>,
}

impl SessionDefaults {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn timeout(&self) -> Option<u64> {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Option<u64>) {
        self.timeout = timeout;
    }

    pub fn headers(&self) -> &[KeyValuePair] {
        &self.headers
    }

    pub fn push_header(&mut self, pair: KeyValuePair) {
        self.headers.push(pair);
    }

    /// Load defaults from the configured path, `~` expanded. A missing
    /// file is not an error: sessions simply start blank.
    pub fn load() -> Result<Option<Self>> {
        let path = shellexpand::tilde(&get_defaults_path()).into_owned();
        Self::load_from(Path::new(&path))
    }

    /// Load defaults from `path`. Returns `Ok(None)` when the file does
    /// not exist and `Error::Defaults` when it exists but cannot be
    /// parsed. Header rows keep their file order, duplicates included.
    pub fn load_from(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            tracing::debug!("No defaults file at {}", path.display());
            return Ok(None);
        }

        let ini = Ini::load_from_file(path).map_err(|e| Error::Defaults {
            message: format!("failed to parse {}: {}", path.display(), e),
        })?;

        let mut defaults = Self::new();

        if let Some(section) = ini.section(Some("session")) {
            if let Some(raw) = section.get("timeout") {
                let timeout = raw.trim().parse::<u64>().map_err(|_| Error::Defaults {
                    message: format!("invalid timeout value: {raw:?}"),
                })?;
                defaults.timeout = Some(timeout);
            }
        }

        if let Some(section) = ini.section(Some("headers")) {
            for (key, value) in section.iter() {
                defaults.headers.push(KeyValuePair::new(key, value));
            }
        }

        tracing::debug!(
            "Loaded defaults from {}: {} header(s), timeout {:?}",
            path.display(),
            defaults.headers.len(),
            defaults.timeout
        );
        Ok(Some(defaults))
    }
}
