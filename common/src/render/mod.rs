pub mod layout;

use super::*;
use crate::links;

// ----------------------------
// *     THUMBNAIL MARKUP     *
// ----------------------------

pub fn image_tag(src: &str, alt: &str) -> Markup {
    html! {
        img src=(src) alt=(alt);
    }
}

/// Wrap content in a link back to flickr. Without an explicit href, it goes to the record's
/// photo page. The data attributes let page scripts find the photo (and set) without another
/// api call.
pub fn link_tag(content: Markup, record: &Record, settings: &FlickrSettings, href: Option<&str>) -> Markup {
    let href = match href {
        Some(href) => String::from(href),
        None => links::photo_page(record, settings)
    };
    let photo_href = settings.link_size().map(|size| links::image_src(record, size.suffix()));
    html! {
        a href=(href) title=(record.title()) data-photo-id=(record.photo_id()) data-photoset-id=[record.set_id()] data-photo-href=[photo_href] {
            (content)
        }
    }
}

/// A single gallery entry: the thumbnail image linking back to flickr
pub fn thumbnail(record: &Record, settings: &FlickrSettings) -> Markup {
    html! {
        div."item" {
            (link_tag(image_tag(&links::thumbnail_src(record, settings), record.title()), record, settings, None))
        }
    }
}

pub fn thumbnails(records: &[Record], settings: &FlickrSettings) -> Vec<Markup> {
    records.iter().map(|record| thumbnail(record, settings)).collect()
}
