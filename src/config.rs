use std::collections::HashMap;
use std::env;
use std::fs;

use crate::clients::trip_client::DEFAULT_BASE_URL;
use crate::models::trip::TripOwner;

/// Key/value settings read from an env-style file, with the process
/// environment as fallback.
#[derive(Debug, Default, Clone)]
pub struct AppConfig {
    values: HashMap<String, String>,
}

impl AppConfig {
    pub fn from_file(path: &str) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self, String> {
        let mut values = HashMap::new();
        for (idx, line) in content.lines().enumerate() {
            let trimmed = line.trim();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            let trimmed = trimmed.strip_prefix("export ").unwrap_or(trimmed);
            let Some((key, value)) = trimmed.split_once('=') else {
                return Err(format!("Invalid config line {}: {}", idx + 1, line));
            };
            let key = key.trim();
            let mut value = value.trim().to_string();
            if value.len() >= 2
                && ((value.starts_with('"') && value.ends_with('"'))
                    || (value.starts_with('\'') && value.ends_with('\'')))
            {
                value = value[1..value.len() - 1].to_string();
            }
            values.insert(key.to_string(), value);
        }
        Ok(Self { values })
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.values
            .get(key)
            .cloned()
            .or_else(|| env::var(key).ok())
    }

    pub fn api_url(&self) -> String {
        self.get("TRIP_API_URL")
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn owner(&self) -> Result<TripOwner, String> {
        let name = self
            .get("OWNER_NAME")
            .ok_or("OWNER_NAME must be set to create trips")?;
        let email = self
            .get("OWNER_EMAIL")
            .ok_or("OWNER_EMAIL must be set to create trips")?;
        Ok(TripOwner { name, email })
    }

    pub fn db_location(&self) -> Option<String> {
        self.get("DB_LOCATION")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_quotes_comments_and_exports() {
        let config = AppConfig::parse(
            "# trips backend\nexport TRIP_API_URL=\"http://trips.local\"\nOWNER_NAME='Ana Souza'\n\nOWNER_EMAIL = ana@example.com\n",
        )
        .unwrap();
        assert_eq!(config.api_url(), "http://trips.local");
        let owner = config.owner().unwrap();
        assert_eq!(owner.name, "Ana Souza");
        assert_eq!(owner.email, "ana@example.com");
    }

    #[test]
    fn rejects_lines_without_assignment() {
        let err = AppConfig::parse("TRIP_API_URL\n").unwrap_err();
        assert!(err.contains("line 1"));
    }

    #[test]
    fn file_values_win_over_defaults() {
        let config = AppConfig::parse("TRIP_API_URL=http://override\n").unwrap();
        assert_eq!(config.api_url(), "http://override");
    }
}
