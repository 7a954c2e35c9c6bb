//! Driver options and their normalization from a connection URL.

use std::fmt;

use indexmap::IndexMap;
use indexmap::map::Entry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::parser::parse_connection_url;
use crate::driver::DatabaseType;
use crate::error::{ConnectionResult, MalformedReason};

/// Key holding the connection URL.
pub const URL_KEY: &str = "url";

/// Key holding the driver type.
pub const TYPE_KEY: &str = "type";

/// A single driver option value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag.
    Boolean(bool),
    /// Integer value.
    Integer(i64),
    /// String value.
    String(String),
}

impl OptionValue {
    /// Get the string value, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the integer value, if this is an integer.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get the boolean value, if this is a boolean.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Interpret free text the way a command line or env file would:
    /// `true`/`false` first, then a base-10 integer, otherwise a string.
    ///
    /// ```rust
    /// use quarry_driver::OptionValue;
    ///
    /// assert_eq!(OptionValue::infer("true"), OptionValue::Boolean(true));
    /// assert_eq!(OptionValue::infer("5432"), OptionValue::Integer(5432));
    /// assert_eq!(OptionValue::infer("public"), OptionValue::String("public".into()));
    /// ```
    pub fn infer(raw: &str) -> Self {
        match raw {
            "true" => Self::Boolean(true),
            "false" => Self::Boolean(false),
            _ => raw
                .parse::<i64>()
                .map(Self::Integer)
                .unwrap_or_else(|_| Self::String(raw.to_string())),
        }
    }
}

impl fmt::Display for OptionValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Boolean(b) => write!(f, "{}", b),
            Self::Integer(i) => write!(f, "{}", i),
            Self::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<&str> for OptionValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(s: String) -> Self {
        Self::String(s)
    }
}

impl From<i64> for OptionValue {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<u16> for OptionValue {
    fn from(i: u16) -> Self {
        Self::Integer(i64::from(i))
    }
}

impl From<bool> for OptionValue {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

/// Settings for [`DriverOptions::build`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildOptions {
    /// Copy the URL's database segment into a `sid` option.
    pub use_sid: bool,
}

impl BuildOptions {
    /// Create build options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether `sid` is filled from the database segment.
    pub fn use_sid(mut self, use_sid: bool) -> Self {
        self.use_sid = use_sid;
        self
    }

    /// The build options a driver kind needs.
    pub fn for_type(database_type: DatabaseType) -> Self {
        Self {
            use_sid: database_type.uses_sid(),
        }
    }
}

/// An ordered mapping of driver option names to values.
///
/// Insertion order is preserved, and replacing a value keeps the key where
/// it first appeared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DriverOptions {
    values: IndexMap<String, OptionValue>,
}

impl DriverOptions {
    /// Create an empty option set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an option, builder style.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<OptionValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Set an option, returning the value it replaced.
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<OptionValue>,
    ) -> Option<OptionValue> {
        self.values.insert(key.into(), value.into())
    }

    /// Remove an option, keeping the order of the rest.
    pub fn remove(&mut self, key: &str) -> Option<OptionValue> {
        self.values.shift_remove(key)
    }

    /// Get an option.
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        self.values.get(key)
    }

    /// Get a string option.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(OptionValue::as_str)
    }

    /// Check whether an option is set.
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// Number of options.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no options are set.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Iterate options in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Mutable access to every value, in insertion order.
    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut OptionValue> {
        self.values.values_mut()
    }

    /// Option names in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// The driver kind named by the `type` option, or by the URL scheme.
    pub fn database_type(&self) -> Option<DatabaseType> {
        if let Some(ty) = self.get_str(TYPE_KEY) {
            return DatabaseType::from_type(ty);
        }
        let url = self.get_str(URL_KEY)?;
        let (scheme, _) = url.split_once("//")?;
        DatabaseType::from_type(scheme.strip_suffix(':').unwrap_or(scheme))
    }

    /// Normalize options, filling defaults from the `url` option.
    ///
    /// When `url` holds a non-empty string, it is parsed and its parts become
    /// the `type`, `host`, `username`, `password`, `port` and `database`
    /// options (plus `sid` when `config.use_sid` is set). Every option in
    /// `self` is then laid over those defaults, `url` included, so explicit
    /// values always win. Parts missing from the URL are left out rather
    /// than set empty.
    ///
    /// Without a `url`, the result is a copy of `self`. `self` is never
    /// modified.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use quarry_driver::{BuildOptions, DriverOptions, OptionValue};
    ///
    /// let options = DriverOptions::new()
    ///     .with("url", "pg://a:b@x:5/mydb")
    ///     .with("database", "override");
    ///
    /// let built = options.build(BuildOptions::new().use_sid(true)).unwrap();
    /// assert_eq!(built.get_str("type"), Some("pg"));
    /// assert_eq!(built.get("port"), Some(&OptionValue::Integer(5)));
    /// assert_eq!(built.get_str("database"), Some("override"));
    /// assert_eq!(built.get_str("sid"), Some("mydb"));
    /// ```
    pub fn build(&self, config: BuildOptions) -> ConnectionResult<DriverOptions> {
        let url = match self.get(URL_KEY) {
            None => return Ok(self.clone()),
            Some(OptionValue::String(url)) if url.is_empty() => return Ok(self.clone()),
            Some(OptionValue::String(url)) => url,
            Some(_) => return Err(MalformedReason::UrlNotAString.into()),
        };

        let parsed = parse_connection_url(url)?;

        let mut merged = DriverOptions::new()
            .with(TYPE_KEY, parsed.scheme)
            .with("host", parsed.host)
            .with("username", parsed.username);
        if let Some(password) = parsed.password {
            merged.insert("password", password);
        }
        if let Some(port) = parsed.port {
            merged.insert("port", port);
        }
        if let Some(database) = parsed.database {
            if config.use_sid {
                merged.insert("database", database.clone());
                merged.insert("sid", database);
            } else {
                merged.insert("database", database);
            }
        }

        let mut overridden = 0usize;
        for (key, value) in &self.values {
            match merged.values.entry(key.clone()) {
                Entry::Occupied(mut slot) => {
                    overridden += 1;
                    slot.insert(value.clone());
                }
                Entry::Vacant(slot) => {
                    slot.insert(value.clone());
                }
            }
        }

        debug!(
            options = merged.len(),
            overridden,
            use_sid = config.use_sid,
            "Driver options built from URL"
        );

        Ok(merged)
    }
}

impl<K, V> FromIterator<(K, V)> for DriverOptions
where
    K: Into<String>,
    V: Into<OptionValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a DriverOptions {
    type Item = (&'a String, &'a OptionValue);
    type IntoIter = indexmap::map::Iter<'a, String, OptionValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

/// Normalize driver options. See [`DriverOptions::build`].
pub fn build_driver_options(
    options: &DriverOptions,
    config: BuildOptions,
) -> ConnectionResult<DriverOptions> {
    options.build(config)
}
