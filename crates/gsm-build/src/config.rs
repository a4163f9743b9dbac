// Build Settings
//
// The pipeline settings block that reaches the kernel. The host build
// script owns the full settings file; only the knobs that change kernel
// behavior live here.

use serde::{Deserialize, Serialize};

/// Settings consumed by the transformation kernel
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BuildSettings {
    /// Whether the reference-database table is consulted at all.
    ///
    /// When disabled, every cross-reference database resolves through the
    /// permissive identifiers.org fallback, as if the table were empty.
    pub reference_table_enabled: bool,
}

impl Default for BuildSettings {
    fn default() -> Self {
        BuildSettings {
            reference_table_enabled: true,
        }
    }
}

impl BuildSettings {
    /// Settings with the reference-database table disabled
    pub fn without_reference_table() -> Self {
        BuildSettings {
            reference_table_enabled: false,
        }
    }

    /// Load settings from environment variables
    ///
    /// Environment variables:
    /// - `GSM_REFERENCE_TABLE_ENABLED`: consult the reference table (true/false)
    pub fn from_env() -> Self {
        BuildSettings {
            reference_table_enabled: std::env::var("GSM_REFERENCE_TABLE_ENABLED")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(true),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = BuildSettings::default();
        assert!(settings.reference_table_enabled);
    }

    #[test]
    fn test_without_reference_table() {
        let settings = BuildSettings::without_reference_table();
        assert!(!settings.reference_table_enabled);
    }

    #[test]
    fn test_settings_roundtrip_json() {
        let settings = BuildSettings::without_reference_table();
        let json = serde_json::to_string(&settings).unwrap();
        let back: BuildSettings = serde_json::from_str(&json).unwrap();
        assert!(!back.reference_table_enabled);
    }
}
