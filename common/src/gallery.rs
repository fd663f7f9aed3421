use flickrapi::{ApiParameters, Method};
use flickrapi::endpoints::{ApiContext, ApiError};

use super::*;

//Query keys that only change how we render, never sent to flickr
const RENDER_ONLY_KEYS: [&str; 2] = ["thumbnail_size", "link_to_size"];

/// The result of one gallery call. Failures still produce a (empty) gallery; the outcome
/// says what actually happened.
#[derive(Debug)]
pub struct Gallery {
    pub method: Method,
    pub thumbnails: Vec<Markup>,
    pub outcome: Result<Vec<Record>, ApiError>
}

/// Runs once the gallery markup is ready, whether or not the call worked
pub type CompletionHook = Box<dyn FnOnce(&Gallery) + Send>;

/// The parameters actually sent: the caller's, plus page and user_id from settings when the
/// caller didn't set them. Rendering keys are stripped.
pub fn request_params(params: &ApiParameters, settings: &FlickrSettings) -> ApiParameters {
    let mut result = params.clone();
    for key in RENDER_ONLY_KEYS {
        result.remove(key);
    }
    if !result.has_wire_value("page") {
        result.insert("page", settings.page);
    }
    if let Some(user_id) = &settings.user_id {
        if !result.has_wire_value("user_id") {
            result.insert("user_id", user_id);
        }
    }
    result
}

/// The page this call will ask for: the caller's own page parameter if it's a number, else the
/// configured one.
pub fn current_page(params: &ApiParameters, settings: &FlickrSettings) -> i64 {
    params.get("page")
        .and_then(|page| page.to_wire())
        .and_then(|page| page.parse::<i64>().ok())
        .unwrap_or(settings.page)
}

/// Split raw query pairs into api parameters and the settings for this one call. Only the
/// rendering keys can override settings; everything else is forwarded to flickr verbatim.
pub fn split_query(query: Vec<(String, String)>, base: &FlickrSettings) -> (ApiParameters, FlickrSettings) {
    let mut settings = base.clone();
    let mut params = ApiParameters::new();
    for (key, value) in query {
        match key.as_str() {
            "thumbnail_size" => settings.thumbnail_size = value,
            "link_to_size" => settings.link_to_size = Some(value),
            _ => params.insert(key, value)
        }
    }
    (params, settings)
}

/// Fetch a photo list and turn it into thumbnails. Like the browser plugin this came from,
/// a failed call just means no thumbnails (it's logged, and kept in the outcome).
pub async fn load_gallery(context: &ApiContext, method: Method, params: &ApiParameters, settings: &FlickrSettings, on_complete: Option<CompletionHook>) -> Gallery
{
    let params = request_params(params, settings);
    let outcome = context.photos(method, &params, &settings.api_key).await;

    let thumbnails = match &outcome {
        Ok(records) => render::thumbnails(records, settings),
        Err(error) => {
            log::warn!("Gallery for {} is empty: {}", method, error.to_verbose_string());
            Vec::new()
        }
    };

    let gallery = Gallery { method, thumbnails, outcome };

    if let Some(hook) = on_complete {
        hook(&gallery);
    }

    gallery
}

impl Gallery {
    pub fn error(&self) -> Option<&ApiError> {
        self.outcome.as_ref().err()
    }
}
