use super::*;

pub const PHOTO_PAGE_ROOT: &str = "http://www.flickr.com/photos";

// ------------------------
// *    FLICKR LOCATIONS  *
// ------------------------

/// The exact image url for a record at the given size suffix (use translate_size to get one).
/// Photosets are shown by their primary photo.
pub fn image_src(record: &Record, size_suffix: &str) -> String {
    let photo = record.photo();
    format!("http://farm{}.static.flickr.com/{}/{}_{}{}.jpg", photo.farm, photo.server, photo.id, photo.secret, size_suffix)
}

/// Image url at whatever thumbnail size the settings ask for
pub fn thumbnail_src(record: &Record, settings: &FlickrSettings) -> String {
    image_src(record, settings.thumbnail_suffix())
}

/// Link back to the photo's page on flickr. Records without an owner (photoset lists don't
/// have one) fall back to the configured user.
pub fn photo_page(record: &Record, settings: &FlickrSettings) -> String {
    let owner = record.photo().owner.as_deref()
        .or(settings.user_id.as_deref())
        .unwrap_or_default();
    format!("{}/{}/{}", PHOTO_PAGE_ROOT, owner, record.photo_id())
}


// ------------------------
// *    LOCAL LINKS       *
// ------------------------

impl LinkConfig {
    pub fn http(&self, path: &str) -> String {
        format!("{}{}", self.http_root, path)
    }

    pub fn style(&self, path: &str) -> Markup {
        html! { link rel="stylesheet" href={(self.static_root)(path)}; }
    }

    /// A local gallery link with an arbitrary query attached
    pub fn gallery(&self, path: &str, query: &[(&str, &str)]) -> String {
        if query.is_empty() {
            return self.http(path);
        }
        match serde_urlencoded::to_string(query) {
            Ok(querystring) => format!("{}?{}", self.http(path), querystring),
            Err(error) => {
                log::error!("Couldn't encode query for {}, linking without it: {}", path, error);
                self.http(path)
            }
        }
    }

    /// The same gallery one page further along. Everything else in the query is kept.
    pub fn next_page(&self, path: &str, query: &[(String, String)], current_page: i64) -> String {
        let next = (current_page + 1).to_string();
        let mut pairs: Vec<(&str, &str)> = query.iter()
            .filter(|(key,_)| key != "page")
            .map(|(key,value)| (key.as_str(), value.as_str()))
            .collect();
        pairs.push(("page", next.as_str()));
        self.gallery(path, &pairs)
    }
}
