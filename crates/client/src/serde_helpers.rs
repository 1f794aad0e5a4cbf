//! Serde helpers for UptimeRobot's string-encoded JSON values.
//!
//! Responsibilities:
//! - Convert numeric fields that arrive as `"123"` strings into typed integers and floats.
//! - Keep parsing behavior centralized so model definitions stay readable and consistent.
//!
//! Explicitly does NOT handle:
//! - Enumerated codes (see `models::codes`).
//! - Higher-level validation of ranges or business rules.
//!
//! Invariants / assumptions:
//! - The API encodes every number as a string; plain JSON numbers are accepted too so
//!   serialized models decode back unchanged.
//! - A value that is present but unparsable is an error, never a silent zero.
//! - Empty strings mean "not provided" and only map to `None` for optional fields.

use serde::Deserialize;
use serde::de::Error as _;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum U64OrString {
    U64(u64),
    I64(i64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64OrString {
    F64(f64),
    String(String),
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum F64ListOrString {
    List(Vec<f64>),
    F64(f64),
    String(String),
}

fn parse_u64<E: serde::de::Error>(value: U64OrString) -> Result<u64, E> {
    match value {
        U64OrString::U64(v) => Ok(v),
        U64OrString::I64(v) => u64::try_from(v).map_err(E::custom),
        U64OrString::String(s) => s
            .trim()
            .parse::<u64>()
            .map_err(|e| E::custom(format!("invalid integer {s:?}: {e}"))),
    }
}

fn parse_opt_u64<E: serde::de::Error>(value: Option<U64OrString>) -> Result<Option<u64>, E> {
    match value {
        None => Ok(None),
        Some(U64OrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(v) => parse_u64(v).map(Some),
    }
}

pub fn u64_from_string_or_number<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: serde::Deserializer<'de>,
{
    parse_u64(U64OrString::deserialize(deserializer)?)
}

pub fn u32_from_string_or_number<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = u64_from_string_or_number(deserializer)?;
    u32::try_from(value).map_err(D::Error::custom)
}

pub fn usize_from_string_or_number<'de, D>(deserializer: D) -> Result<usize, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = u64_from_string_or_number(deserializer)?;
    usize::try_from(value).map_err(D::Error::custom)
}

/// Missing, `null` and `""` decode to `None`.
pub fn opt_u32_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = parse_opt_u64(Option::<U64OrString>::deserialize(deserializer)?)?;
    value
        .map(|v| u32::try_from(v).map_err(D::Error::custom))
        .transpose()
}

/// Like [`opt_u32_from_string_or_number`], and `0` also means "not set".
pub fn opt_nonzero_u32_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(opt_u32_from_string_or_number(deserializer)?.filter(|v| *v != 0))
}

/// Port numbers; missing, `null`, `""` and `0` decode to `None`.
pub fn opt_nonzero_u16_from_string_or_number<'de, D>(
    deserializer: D,
) -> Result<Option<u16>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = parse_opt_u64(Option::<U64OrString>::deserialize(deserializer)?)?;
    match value {
        None | Some(0) => Ok(None),
        Some(v) => u16::try_from(v).map(Some).map_err(D::Error::custom),
    }
}

/// Missing, `null` and `""` decode to `None`.
pub fn opt_f64_from_string_or_number<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<F64OrString>::deserialize(deserializer)? {
        None => Ok(None),
        Some(F64OrString::F64(v)) => Ok(Some(v)),
        Some(F64OrString::String(s)) if s.trim().is_empty() => Ok(None),
        Some(F64OrString::String(s)) => s
            .trim()
            .parse::<f64>()
            .map(Some)
            .map_err(|e| D::Error::custom(format!("invalid number {s:?}: {e}"))),
    }
}

/// Decodes a dash-separated list of ratios (`"99.98-100"`), one per
/// requested period. Also accepts a JSON array or a single number.
pub fn f64_list_from_dashed_string<'de, D>(deserializer: D) -> Result<Vec<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Option::<F64ListOrString>::deserialize(deserializer)? {
        None => Ok(Vec::new()),
        Some(F64ListOrString::List(values)) => Ok(values),
        Some(F64ListOrString::F64(v)) => Ok(vec![v]),
        Some(F64ListOrString::String(s)) if s.trim().is_empty() => Ok(Vec::new()),
        Some(F64ListOrString::String(s)) => s
            .split('-')
            .map(|part| {
                part.trim()
                    .parse::<f64>()
                    .map_err(|e| D::Error::custom(format!("invalid ratio {part:?} in {s:?}: {e}")))
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Deserialize)]
    struct U32Wrapper {
        #[serde(deserialize_with = "u32_from_string_or_number")]
        value: u32,
    }

    #[test]
    fn test_u32_from_string_or_number_accepts_string_and_number() {
        let parsed: U32Wrapper = serde_json::from_str(r#"{ "value": "50" }"#).unwrap();
        assert_eq!(parsed.value, 50);

        let parsed: U32Wrapper = serde_json::from_str(r#"{ "value": 50 }"#).unwrap();
        assert_eq!(parsed.value, 50);
    }

    #[test]
    fn test_u32_from_string_or_number_rejects_garbage() {
        let result = serde_json::from_str::<U32Wrapper>(r#"{ "value": "fifty" }"#);
        let err = result.err().unwrap().to_string();
        assert!(err.contains("invalid integer"), "unexpected error: {err}");
    }

    #[test]
    fn test_u32_from_string_or_number_rejects_empty_string() {
        assert!(serde_json::from_str::<U32Wrapper>(r#"{ "value": "" }"#).is_err());
    }

    #[test]
    fn test_opt_u32_handles_missing_null_and_empty() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_u32_from_string_or_number")]
            value: Option<u32>,
        }

        for json in [r#"{}"#, r#"{ "value": null }"#, r#"{ "value": "" }"#] {
            let parsed: Wrapper = serde_json::from_str(json).unwrap();
            assert_eq!(parsed.value, None, "input: {json}");
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "value": "0" }"#).unwrap();
        assert_eq!(parsed.value, Some(0));
    }

    #[test]
    fn test_opt_nonzero_treats_zero_as_unset() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_nonzero_u32_from_string_or_number")]
            interval: Option<u32>,
            #[serde(default, deserialize_with = "opt_nonzero_u16_from_string_or_number")]
            port: Option<u16>,
        }

        let parsed: Wrapper =
            serde_json::from_str(r#"{ "interval": "0", "port": "0" }"#).unwrap();
        assert_eq!(parsed.interval, None);
        assert_eq!(parsed.port, None);

        let parsed: Wrapper =
            serde_json::from_str(r#"{ "interval": "300", "port": "8080" }"#).unwrap();
        assert_eq!(parsed.interval, Some(300));
        assert_eq!(parsed.port, Some(8080));
    }

    #[test]
    fn test_port_out_of_range_rejected() {
        #[derive(Debug, Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_nonzero_u16_from_string_or_number")]
            #[allow(dead_code)]
            port: Option<u16>,
        }

        assert!(serde_json::from_str::<Wrapper>(r#"{ "port": "70000" }"#).is_err());
    }

    #[test]
    fn test_opt_f64_parses_ratio() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "opt_f64_from_string_or_number")]
            ratio: Option<f64>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "ratio": "99.98" }"#).unwrap();
        assert_eq!(parsed.ratio, Some(99.98));

        let parsed: Wrapper = serde_json::from_str(r#"{ "ratio": "" }"#).unwrap();
        assert_eq!(parsed.ratio, None);
    }

    #[test]
    fn test_f64_list_from_dashed_string() {
        #[derive(Deserialize)]
        struct Wrapper {
            #[serde(default, deserialize_with = "f64_list_from_dashed_string")]
            ratios: Vec<f64>,
        }

        let parsed: Wrapper = serde_json::from_str(r#"{ "ratios": "99.5-100-98.25" }"#).unwrap();
        assert_eq!(parsed.ratios, vec![99.5, 100.0, 98.25]);

        let parsed: Wrapper = serde_json::from_str(r#"{ "ratios": "100" }"#).unwrap();
        assert_eq!(parsed.ratios, vec![100.0]);

        let parsed: Wrapper = serde_json::from_str(r#"{ "ratios": [1.5, 2.0] }"#).unwrap();
        assert_eq!(parsed.ratios, vec![1.5, 2.0]);

        let parsed: Wrapper = serde_json::from_str(r#"{}"#).unwrap();
        assert!(parsed.ratios.is_empty());

        assert!(serde_json::from_str::<Wrapper>(r#"{ "ratios": "99-abc" }"#).is_err());
    }
}
