//! JSON-based catalog loader
//!
//! Loads the content catalog from a data file so deployments can swap the
//! stock content without a rebuild.

use std::error::Error;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use super::ContentCatalog;

/// Default path to the catalog data file
pub const DEFAULT_CATALOG_PATH: &str = "data/catalog.json";

/// Load the catalog from a JSON file
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<ContentCatalog, Box<dyn Error>> {
    let file = File::open(path.as_ref())?;
    let catalog = load_catalog_from_reader(file)?;
    log::debug!(
        "loaded catalog from {}: {} courses, {} scenarios",
        path.as_ref().display(),
        catalog.courses.len(),
        catalog.fraud_scenarios.len()
    );
    Ok(catalog)
}

/// Load the catalog from any reader (e.g. string buffer, embedded asset)
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<ContentCatalog, Box<dyn Error>> {
    let catalog: ContentCatalog = serde_json::from_reader(reader)?;
    Ok(catalog)
}

/// Load the catalog from the default location
pub fn load_default_catalog() -> Result<ContentCatalog, Box<dyn Error>> {
    load_catalog(DEFAULT_CATALOG_PATH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_default_catalog() {
        let catalog = load_default_catalog().expect("Failed to load catalog");

        assert_eq!(catalog.courses.len(), 4);
        assert_eq!(catalog.profile.name, "Arjun Sharma");
    }

    #[test]
    fn test_load_from_reader() {
        let json = r#"{
            "courses": [],
            "course_categories": [],
            "fraud_scenarios": [
                {
                    "id": 1,
                    "title": "Fake Bank SMS",
                    "kind": "phishing",
                    "description": "Spot fraudulent bank SMS",
                    "difficulty": "Easy",
                    "completed": true
                }
            ],
            "security_tips": [],
            "achievements": [],
            "savings_goals": [
                {
                    "id": 1,
                    "title": "Emergency Fund",
                    "target_amount": 100000.0,
                    "current_amount": 45000.0,
                    "deadline": "2025-12-31",
                    "category": "Savings"
                }
            ],
            "calculator_tools": [],
            "quick_actions": [],
            "learning_modules": [],
            "onboarding_steps": [],
            "profile": {
                "name": "Arjun Sharma",
                "email": "arjun.sharma@email.com",
                "member_since": "January 2025",
                "total_points": 1250,
                "streak_days": 7,
                "completed_modules": 8
            }
        }"#;

        let catalog = load_catalog_from_reader(json.as_bytes()).expect("Failed to parse catalog");

        assert_eq!(catalog.fraud_scenarios.len(), 1);
        assert_eq!(
            catalog.fraud_scenarios[0].kind,
            crate::content::FraudKind::Phishing
        );
        assert_eq!(catalog.savings_goals[0].deadline.to_string(), "2025-12-31");
    }

    #[test]
    fn test_missing_file_errors() {
        assert!(load_catalog("data/does_not_exist.json").is_err());
    }
}
