use std::{collections::HashMap, fs, io, path::Path};

use tracing::debug;

use crate::config::ConfigError;

/// The contents of a `KEY=VALUE` env file.
///
/// Values are kept in a map and looked up explicitly; the process
/// environment is never modified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvFile {
    values: HashMap<String, String>,
}

impl EnvFile {
    /// Reads the env file at `path`.
    ///
    /// A missing file is not an error and yields an empty `EnvFile`.
    ///
    /// # Errors
    /// Returns [`ConfigError::EnvFileUnreadable`] if the file exists but
    /// cannot be read, or any error from [`EnvFile::parse`].
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "looking for env file");
        match fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(ConfigError::EnvFileUnreadable { path:   path.display().to_string(),
                                                           reason: e.to_string(), }),
        }
    }

    /// Parses env file contents.
    ///
    /// Each line is blank, a `#` comment, or `KEY=VALUE` with an optional
    /// leading `export `. Surrounding whitespace is trimmed, and a value
    /// wrapped in matching single or double quotes is unwrapped. A repeated
    /// key keeps its last value.
    ///
    /// # Errors
    /// Returns [`ConfigError::MalformedEnvLine`] for a line without `=` or
    /// with an empty key.
    ///
    /// # Example
    /// ```
    /// use diophant::config::env_file::EnvFile;
    ///
    /// let env = EnvFile::parse("# local settings\nexport DB_URL = 'postgres://u:p@h:1/d'\n").unwrap();
    /// assert_eq!(env.get("DB_URL"), Some("postgres://u:p@h:1/d"));
    ///
    /// assert!(EnvFile::parse("not a pair").is_err());
    /// ```
    pub fn parse(contents: &str) -> Result<Self, ConfigError> {
        let mut values = HashMap::new();

        for (index, raw) in contents.lines().enumerate() {
            let line = raw.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let line = line.strip_prefix("export ").unwrap_or(line);
            let malformed = || ConfigError::MalformedEnvLine { line: index + 1,
                                                               text: raw.to_string(), };

            let (key, value) = line.split_once('=').ok_or_else(malformed)?;
            let key = key.trim();
            if key.is_empty() {
                return Err(malformed());
            }

            values.insert(key.to_string(), unquote(value.trim()).to_string());
        }

        Ok(Self { values })
    }

    /// The value of `key`, if present.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// The value of the first of `keys` that is present.
    #[must_use]
    pub fn get_any(&self, keys: &[&str]) -> Option<&str> {
        keys.iter().find_map(|key| self.get(key))
    }
}

/// Strips one pair of matching quotes.
fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = value.strip_prefix(quote)
                                  .and_then(|rest| rest.strip_suffix(quote))
        {
            return inner;
        }
    }
    value
}
