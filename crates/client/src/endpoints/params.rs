//! Query parameter building for API methods.
//!
//! [`ApiParams`] is an ordered parameter set with replace-on-set semantics,
//! and [`query_params!`] fills it declaratively:
//!
//! ```ignore
//! let mut params = ApiParams::new();
//! query_params! { params =>
//!     "monitorFriendlyName" => required monitor.friendly_name,
//!     "monitorSubType" => monitor.subtype.map(|s| s.code()),
//!     "monitorKeywordValue" => nonempty monitor.keyword_value,
//!     "monitors" => ids input.monitors.iter(),
//!     "logs" => flag input.logs,
//! }
//! ```
//!
//! The API key and transport parameters are added by the request helper and
//! never live in an `ApiParams`.

use std::fmt;

/// Parameters whose values are masked when the set is logged.
const SENSITIVE_PARAMS: &[&str] = &["monitorHTTPPassword"];

/// Ordered query parameters for one API call.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ApiParams {
    pairs: Vec<(&'static str, String)>,
}

impl ApiParams {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `key`, replacing any previous value in place.
    pub fn set(&mut self, key: &'static str, value: impl Into<String>) -> &mut Self {
        let value = value.into();
        match self.pairs.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.pairs.push((key, value)),
        }
        self
    }

    /// Set `key` only when `value` is present.
    pub fn set_opt<T: fmt::Display>(&mut self, key: &'static str, value: Option<T>) -> &mut Self {
        if let Some(value) = value {
            self.set(key, value.to_string());
        }
        self
    }

    /// Set `key` only when `value` is not blank.
    pub fn set_nonempty(&mut self, key: &'static str, value: &str) -> &mut Self {
        if !value.trim().is_empty() {
            self.set(key, value);
        }
        self
    }

    /// `"1"` or `"0"`.
    pub fn set_flag(&mut self, key: &'static str, value: bool) -> &mut Self {
        self.set(key, if value { "1" } else { "0" })
    }

    /// Dash-joined list; nothing is set for an empty list.
    pub fn set_ids<I, T>(&mut self, key: &'static str, values: I) -> &mut Self
    where
        I: IntoIterator<Item = T>,
        T: fmt::Display,
    {
        let joined = values
            .into_iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join("-");
        if !joined.is_empty() {
            self.set(key, joined);
        }
        self
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Loggable rendering with sensitive values masked.
    pub fn redacted(&self) -> Redacted<'_> {
        Redacted(self)
    }
}

/// Display adapter returned by [`ApiParams::redacted`].
pub struct Redacted<'a>(&'a ApiParams);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (key, value)) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("&")?;
            }
            if SENSITIVE_PARAMS.contains(&key) {
                write!(f, "{key}=<redacted>")?;
            } else {
                write!(f, "{key}={value}")?;
            }
        }
        Ok(())
    }
}

/// Fill an [`ApiParams`] declaratively.
///
/// # Syntax Patterns
///
/// - `key => expr` - `Option<T>` where `T: Display`, set if `Some`
/// - `key => required expr` - any `Display` value, always set
/// - `key => nonempty expr` - string, set if not blank
/// - `key => flag expr` - `bool`, always set as `"1"`/`"0"`
/// - `key => ids expr` - iterator of `Display`, dash-joined if not empty
#[macro_export]
macro_rules! query_params {
    ($params:ident =>) => {};

    ($params:ident => $key:literal => required $val:expr, $($rest:tt)*) => {
        $params.set($key, $val.to_string());
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => nonempty $val:expr, $($rest:tt)*) => {
        $params.set_nonempty($key, &$val);
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => flag $val:expr, $($rest:tt)*) => {
        $params.set_flag($key, $val);
        $crate::query_params!($params => $($rest)*);
    };

    ($params:ident => $key:literal => ids $val:expr, $($rest:tt)*) => {
        $params.set_ids($key, $val);
        $crate::query_params!($params => $($rest)*);
    };

    // Option<T> - LAST because most generic
    ($params:ident => $key:literal => $val:expr, $($rest:tt)*) => {
        $params.set_opt($key, $val);
        $crate::query_params!($params => $($rest)*);
    };
}
