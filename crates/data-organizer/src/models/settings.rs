use anyhow::{anyhow, bail, Result};
use serde::{Deserialize, Serialize};

/// Largest number of items the random action may generate
pub const MAX_COLLECTION_SIZE: usize = 100;
/// Item values are drawn as two-character columns
pub const MAX_ITEM_VALUE: i64 = 99;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Number of items generated by the random action
    pub collection_size: usize,
    /// Generated items take values in `1..=maximum_item_value`
    pub maximum_item_value: i64,
    pub item_color: (u8, u8, u8),
    /// Position of the first item of the collection
    pub origin: (i32, i32),
    /// Attach the sort capability to the organizer
    pub sortable: bool,
    /// Fixed seed for the item generator
    pub seed: Option<u64>,
    pub log_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            collection_size: 10,
            maximum_item_value: 16,
            item_color: (255, 165, 0),
            origin: (0, 0),
            sortable: true,
            seed: None,
            log_file: None,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| anyhow!("Unable to decode settings: {}", e))?;

        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.collection_size == 0 {
            bail!("collection_size must be at least 1");
        }
        if self.collection_size > MAX_COLLECTION_SIZE {
            bail!(
                "collection_size must be at most {}, got {}",
                MAX_COLLECTION_SIZE,
                self.collection_size
            );
        }
        if !(1..=MAX_ITEM_VALUE).contains(&self.maximum_item_value) {
            bail!(
                "maximum_item_value must be between 1 and {}, got {}",
                MAX_ITEM_VALUE,
                self.maximum_item_value
            );
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_settings() {
        let json = r#"{
            "collection_size": 12,
            "maximum_item_value": 20,
            "item_color": [10, 20, 30],
            "origin": [4, 8],
            "sortable": false,
            "seed": 42
        }"#;

        let settings = Settings::from_json(json).unwrap();
        assert_eq!(settings.collection_size, 12);
        assert_eq!(settings.maximum_item_value, 20);
        assert_eq!(settings.item_color, (10, 20, 30));
        assert_eq!(settings.origin, (4, 8));
        assert!(!settings.sortable);
        assert_eq!(settings.seed, Some(42));
        assert!(settings.log_file.is_none());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings = Settings::from_json("{}").unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn reject_empty_collection() {
        let settings = Settings::from_json(r#"{"collection_size": 0}"#);
        assert!(settings.is_err())
    }

    #[test]
    fn reject_non_positive_maximum() {
        let settings = Settings::from_json(r#"{"maximum_item_value": 0}"#);
        assert!(settings.is_err())
    }

    #[test]
    fn reject_oversized_collection() {
        let settings = Settings::from_json(r#"{"collection_size": 100000000}"#);
        assert!(settings.is_err());

        let limit = format!(r#"{{"collection_size": {}}}"#, MAX_COLLECTION_SIZE);
        assert!(Settings::from_json(&limit).is_ok());
    }

    #[test]
    fn reject_three_digit_maximum() {
        let settings = Settings::from_json(r#"{"maximum_item_value": 5000000}"#);
        assert!(settings.is_err());

        let settings = Settings::from_json(r#"{"maximum_item_value": 100}"#);
        assert!(settings.is_err());

        let limit = format!(r#"{{"maximum_item_value": {}}}"#, MAX_ITEM_VALUE);
        assert!(Settings::from_json(&limit).is_ok());
    }

    #[test]
    fn reject_malformed_json() {
        let settings = Settings::from_json(r#"{"collection_size": "#);
        assert!(settings.is_err())
    }
}
