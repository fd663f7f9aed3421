use common::{FlickrSettings, LinkConfig, MainLayoutData};
use flickrapi::endpoints::ApiContext;

use crate::config::Config;

/// The unchanging configuration for the current runtime. Mostly values read from
/// config, plus the one api context everybody shares.
pub struct GlobalState {
    pub link_config: LinkConfig,
    pub api_context: ApiContext,
    pub config: Config
}

impl GlobalState {
    pub fn new(config: Config) -> Self {
        Self {
            link_config: LinkConfig {
                http_root: config.http_root.clone(),
                static_root: config.static_root()
            },
            api_context: ApiContext::new(config.api_endpoint.clone()),
            config
        }
    }

    /// Layout data for one page. The settings are whatever this request ended up using.
    pub fn layout_data(&self, path: &str, settings: FlickrSettings) -> MainLayoutData {
        MainLayoutData {
            links: self.link_config.clone(),
            current_path: String::from(path),
            settings
        }
    }
}
