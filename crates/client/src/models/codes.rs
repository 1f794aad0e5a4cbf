//! Numeric code enumerations used by the UptimeRobot API.
//!
//! Responsibilities:
//! - Map every documented status/type code to a closed Rust enum.
//! - Provide a single text form (kebab-case label) for display and CLI parsing.
//! - Decode codes from string or numeric JSON values; encode them as string codes.
//!
//! Explicitly does NOT handle:
//! - Remote error ids (see `models::api_errors`).
//!
//! Invariants:
//! - Unknown codes are decode errors, never a fallback variant.
//! - `Display` and `FromStr` agree: `label.parse()` yields the same variant.

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

/// A code or label that does not belong to the target enumeration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownCodeError {
    pub kind: &'static str,
    pub value: String,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawCode {
    Number(u64),
    String(String),
}

impl RawCode {
    /// `None` for an empty string.
    fn into_code<E: serde::de::Error>(self) -> Result<Option<u32>, E> {
        match self {
            RawCode::Number(n) => u32::try_from(n).map(Some).map_err(E::custom),
            RawCode::String(s) if s.trim().is_empty() => Ok(None),
            RawCode::String(s) => s
                .trim()
                .parse::<u32>()
                .map(Some)
                .map_err(|e| E::custom(format!("invalid code {s:?}: {e}"))),
        }
    }
}

macro_rules! api_code_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($kind:literal) {
            $( $(#[$vmeta:meta])* $variant:ident = $code:literal => $label:literal, )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $( $(#[$vmeta])* $variant, )+
        }

        impl $name {
            /// Every variant, in code order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// Numeric code used on the wire.
            pub const fn code(self) -> u32 {
                match self {
                    $($name::$variant => $code,)+
                }
            }

            /// Kebab-case label used for display and parsing.
            pub const fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl TryFrom<u32> for $name {
            type Error = UnknownCodeError;

            fn try_from(code: u32) -> Result<Self, Self::Error> {
                match code {
                    $($code => Ok($name::$variant),)+
                    _ => Err(UnknownCodeError {
                        kind: $kind,
                        value: code.to_string(),
                    }),
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownCodeError;

            /// Accepts the label (case-insensitive, `_` or `-`) or the numeric code.
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let normalized = s.trim().to_ascii_lowercase().replace('_', "-");
                if let Ok(code) = normalized.parse::<u32>() {
                    return $name::try_from(code);
                }
                $name::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label() == normalized)
                    .ok_or_else(|| UnknownCodeError {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.code().to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let code = RawCode::deserialize(deserializer)?
                    .into_code::<D::Error>()?
                    .ok_or_else(|| D::Error::custom(concat!("empty ", $kind, " code")))?;
                $name::try_from(code).map_err(D::Error::custom)
            }
        }
    };
}

api_code_enum! {
    /// Current state of a monitor.
    MonitorStatus ("monitor status") {
        Paused = 0 => "paused",
        NotCheckedYet = 1 => "not-checked-yet",
        Up = 2 => "up",
        SeemsDown = 8 => "seems-down",
        Down = 9 => "down",
    }
}

impl Default for MonitorStatus {
    fn default() -> Self {
        MonitorStatus::NotCheckedYet
    }
}

api_code_enum! {
    /// What a monitor checks.
    MonitorType ("monitor type") {
        Http = 1 => "http",
        Keyword = 2 => "keyword",
        Ping = 3 => "ping",
        Port = 4 => "port",
    }
}

api_code_enum! {
    /// Protocol checked by a port monitor.
    MonitorSubtype ("monitor subtype") {
        Http = 1 => "http",
        Https = 2 => "https",
        Ftp = 3 => "ftp",
        Smtp = 4 => "smtp",
        Pop3 = 5 => "pop3",
        Imap = 6 => "imap",
        CustomPort = 99 => "custom-port",
    }
}

api_code_enum! {
    /// Whether a keyword monitor alerts when the keyword exists or is missing.
    KeywordType ("keyword type") {
        Exists = 1 => "exists",
        NotExists = 2 => "not-exists",
    }
}

api_code_enum! {
    /// Notification channel of an alert contact.
    AlertContactType ("alert contact type") {
        Sms = 1 => "sms",
        Email = 2 => "email",
        TwitterDm = 3 => "twitter-dm",
        Boxcar = 4 => "boxcar",
        WebHook = 5 => "webhook",
        PushBullet = 6 => "pushbullet",
        Zapier = 7 => "zapier",
        Pushover = 8 => "pushover",
        HipChat = 9 => "hipchat",
        Slack = 10 => "slack",
    }
}

api_code_enum! {
    /// Activation state of an alert contact.
    AlertContactStatus ("alert contact status") {
        NotActivated = 0 => "not-activated",
        Paused = 1 => "paused",
        Active = 2 => "active",
    }
}

api_code_enum! {
    /// Kind of monitor log event.
    LogType ("log type") {
        Down = 1 => "down",
        Up = 2 => "up",
        Started = 98 => "started",
        Paused = 99 => "paused",
    }
}

/// Optional code field: missing, `null` and `""` decode to `None`.
pub fn optional_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u32, Error = UnknownCodeError>,
{
    match Option::<RawCode>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => raw
            .into_code::<D::Error>()?
            .map(|code| T::try_from(code).map_err(D::Error::custom))
            .transpose(),
    }
}

/// Like [`optional_code`], and `0` also means "not set".
pub fn optional_nonzero_code<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: TryFrom<u32, Error = UnknownCodeError>,
{
    match Option::<RawCode>::deserialize(deserializer)? {
        None => Ok(None),
        Some(raw) => match raw.into_code::<D::Error>()? {
            None | Some(0) => Ok(None),
            Some(code) => T::try_from(code).map(Some).map_err(D::Error::custom),
        },
    }
}
