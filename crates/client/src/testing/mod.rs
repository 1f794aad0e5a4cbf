//! Testing utilities for UptimeRobot client tests.
//!
//! Available when running tests or when the `test-utils` feature is enabled.
//!
//! # Example
//! ```ignore
//! use uptimerobot_client::testing::load_fixture;
//!
//! let fixture = load_fixture("monitors/get_monitors.json");
//! ```

use std::path::Path;

/// Load a JSON fixture file from the fixtures directory.
///
/// # Arguments
/// * `fixture_path` - Relative path within the fixtures directory (e.g., "account/get_account_details.json")
///
/// # Panics
/// - If the fixture file cannot be read
/// - If the file content is not valid JSON
pub fn load_fixture(fixture_path: &str) -> serde_json::Value {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    let full_path = manifest_dir.join("fixtures").join(fixture_path);
    let content = std::fs::read_to_string(&full_path)
        .unwrap_or_else(|_| panic!("Failed to load fixture: {}", full_path.display()));
    serde_json::from_str(&content).expect("Invalid JSON in fixture")
}

/// A list page body shaped like `getMonitors`, with string paging fields.
pub fn monitor_page(offset: usize, limit: usize, total: usize, ids: &[u64]) -> serde_json::Value {
    let monitors: Vec<serde_json::Value> = ids
        .iter()
        .map(|id| {
            serde_json::json!({
                "id": id.to_string(),
                "friendlyname": format!("monitor-{id}"),
                "url": format!("https://example.com/{id}"),
                "type": "1",
                "status": "2",
                "interval": "300",
            })
        })
        .collect();

    serde_json::json!({
        "stat": "ok",
        "offset": offset.to_string(),
        "limit": limit.to_string(),
        "total": total.to_string(),
        "monitors": { "monitor": monitors },
    })
}
