use serde::Deserialize;

use common::FlickrSettings;

pub const DEFAULT_CONFIG: &str = "settings.toml";

//Just data we get from the settings file, this is general configuration you might want to use anywhere
#[derive(Deserialize, Clone, Debug)]
#[serde(default)]
pub struct Config
{
    pub address: String,
    pub api_endpoint: String,
    pub http_root: String,
    pub static_files: String,
    pub flickr: FlickrSettings
}

impl Default for Config {
    fn default() -> Self {
        Self {
            address: String::from("127.0.0.1:5000"),
            api_endpoint: String::from(flickrapi::endpoints::REST_ENDPOINT),
            http_root: String::new(),
            static_files: String::from("static"),
            flickr: FlickrSettings::default()
        }
    }
}

impl Config
{
    pub fn from_toml(raw: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(raw)
    }

    /// Read the settings file, then let the environment override the api key (so it doesn't
    /// have to live in a file)
    pub fn load(path: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let raw = std::fs::read_to_string(path)
            .map_err(|error| format!("Couldn't read config {}: {}", path, error))?;
        let mut config = Self::from_toml(&raw)?;
        if let Ok(key) = std::env::var("FLICKR_API_KEY") {
            config.flickr.api_key = key;
        }
        Ok(config)
    }

    pub fn static_root(&self) -> String {
        format!("{}/static", self.http_root)
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_is_default() {
        let config = Config::from_toml("").unwrap();
        assert_eq!(config.address, "127.0.0.1:5000");
        assert_eq!(config.api_endpoint, "http://api.flickr.com/services/rest/");
        assert_eq!(config.flickr, FlickrSettings::default());
        assert_eq!(config.static_root(), "/static");
    }

    #[test]
    fn full_file() {
        let config = Config::from_toml(r#"
            address = "0.0.0.0:8080"
            http_root = "/photos"

            [flickr]
            api_key = "abc123"
            thumbnail_size = "t"
            link_to_size = "o"
            user_id = "12@N01"
        "#).unwrap();
        assert_eq!(config.address, "0.0.0.0:8080");
        assert_eq!(config.static_root(), "/photos/static");
        assert_eq!(config.flickr.api_key, "abc123");
        assert_eq!(config.flickr.thumbnail_size, "t");
        assert_eq!(config.flickr.page, 1);
        assert_eq!(config.flickr.link_to_size.as_deref(), Some("o"));
        assert_eq!(config.flickr.user_id.as_deref(), Some("12@N01"));
    }

    #[test]
    fn bad_file() {
        assert!(Config::from_toml("address = 5").is_err());
    }
}
