pub mod links;
pub mod render;
pub mod gallery;
pub mod response;

use flickrapi::{Record, SizeCode, translate_size};
use serde::{Serialize, Deserialize};
use maud::{Markup, html, DOCTYPE};

/// What you get if you never set a key. Flickr will refuse every call with it.
pub const PLACEHOLDER_API_KEY: &str = "YOUR API KEY";

/// Everything that shapes a single gallery call. There's no global copy of this anywhere;
/// pass one (or a modified clone) to each call.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(default)]
pub struct FlickrSettings {
    pub api_key: String,
    pub thumbnail_size: String,
    pub page: i64,
    pub link_to_size: Option<String>,
    pub user_id: Option<String>  //Used as the owner in links when a record has none
}

impl Default for FlickrSettings {
    fn default() -> Self {
        Self {
            api_key: String::from(PLACEHOLDER_API_KEY),
            thumbnail_size: String::from("sq"),
            page: 1,
            link_to_size: None,
            user_id: None
        }
    }
}

impl FlickrSettings {
    pub fn thumbnail_suffix(&self) -> &'static str {
        translate_size(&self.thumbnail_size)
    }

    /// The size to put in data-photo-href, if one is configured and it's one we link to
    pub fn link_size(&self) -> Option<SizeCode> {
        self.link_to_size.as_deref()
            .and_then(SizeCode::parse)
            .filter(|size| size.is_link_target())
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }
}

#[derive(Clone, Debug)]
pub struct LinkConfig {
    pub http_root: String,
    pub static_root: String
}

#[derive(Debug)]
pub struct MainLayoutData {
    pub links: LinkConfig,
    pub current_path: String,
    pub settings: FlickrSettings
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings() {
        let settings = FlickrSettings::default();
        assert_eq!(settings.thumbnail_size, "sq");
        assert_eq!(settings.page, 1);
        assert_eq!(settings.thumbnail_suffix(), "_s");
        assert!(!settings.has_api_key());
    }

    #[test]
    fn link_size_only_for_targets() {
        let mut settings = FlickrSettings::default();
        assert_eq!(settings.link_size(), None);
        settings.link_to_size = Some(String::from("o"));
        assert_eq!(settings.link_size(), Some(SizeCode::Original));
        settings.link_to_size = Some(String::from("l"));
        assert_eq!(settings.link_size(), None);
        settings.link_to_size = Some(String::from("m640"));
        assert_eq!(settings.link_size(), None);
        settings.link_to_size = Some(String::from("bogus"));
        assert_eq!(settings.link_size(), None);
    }

    #[test]
    fn unknown_thumbnail_size_is_medium() {
        let settings = FlickrSettings { thumbnail_size: String::from("huge"), ..Default::default() };
        assert_eq!(settings.thumbnail_suffix(), "");
    }
}
