use serde::{Deserialize, Deserializer, Serialize};
use serde_aux::prelude::*; //Flickr sends ids and servers as strings but farms as numbers, mostly

pub mod endpoints;
pub mod params;
pub mod conversion;

pub use params::{ApiParameters, ParamValue};


macro_rules! api_method {
    ($name:ident => {
        $($item:ident : $method:literal,)*
    }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($item,)*
        }

        impl $name {
            pub fn all() -> Vec<Self> {
                vec![$(Self::$item,)*]
            }

            /// The identifier Flickr expects in the "method" parameter
            pub fn as_str(&self) -> &'static str {
                match self {
                $(
                    Self::$item => $method,
                )*
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }
    };
}

// --------------------
// *    CONSTANTS     *
// --------------------

api_method!{
    Method => {
        PhotosGetRecent : "flickr.photos.getRecent",
        PhotosGetContactsPublicPhotos : "flickr.photos.getContactsPublicPhotos",
        PhotosSearch : "flickr.photos.search",
        PhotosetsGetList : "flickr.photosets.getList",
        PhotosetsGetPhotos : "flickr.photosets.getPhotos",
    }
}

/// The pre-rendered resolutions Flickr keeps for every photo. The plugin-style short codes
/// ("sq", "m640") are what callers configure; the suffix is what goes in the image url.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeCode {
    #[serde(rename = "sq")] Square,
    #[serde(rename = "lsq")] LargeSquare,
    #[serde(rename = "t")] Thumbnail,
    #[serde(rename = "s")] Small,
    #[serde(rename = "s320")] Small320,
    #[serde(rename = "m")] Medium,
    #[serde(rename = "m640")] Medium640,
    #[serde(rename = "m800")] Medium800,
    #[serde(rename = "l")] Large,
    #[serde(rename = "o")] Original,
}

impl SizeCode {
    pub const ALL: [SizeCode; 10] = [
        Self::Square, Self::LargeSquare, Self::Thumbnail, Self::Small, Self::Small320,
        Self::Medium, Self::Medium640, Self::Medium800, Self::Large, Self::Original
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::Square => "sq",
            Self::LargeSquare => "lsq",
            Self::Thumbnail => "t",
            Self::Small => "s",
            Self::Small320 => "s320",
            Self::Medium => "m",
            Self::Medium640 => "m640",
            Self::Medium800 => "m800",
            Self::Large => "l",
            Self::Original => "o",
        }
    }

    pub fn suffix(&self) -> &'static str {
        match self {
            Self::Square => "_s",
            Self::LargeSquare => "_q",
            Self::Thumbnail => "_t",
            Self::Small => "_m",
            Self::Small320 => "_n",
            Self::Medium => "", //Medium is the one without a suffix
            Self::Medium640 => "_z",
            Self::Medium800 => "_c",
            Self::Large => "_b",
            Self::Original => "_o",
        }
    }

    pub fn parse(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|size| size.code() == code)
    }

    /// Only these sizes get a direct image href attached to the link (for lightbox-ish scripts).
    /// The match is exact: the old plugin tested `link_to_size` against the unanchored regex
    /// `/sq|t|s|m|o/`, which also let through `lsq`, `s320`, `m640` and `m800`. Those get no href.
    pub fn is_link_target(&self) -> bool {
        matches!(self, Self::Square | Self::Thumbnail | Self::Small | Self::Medium | Self::Original)
    }
}

impl std::fmt::Display for SizeCode {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Turn any size code into its url suffix. Codes we don't know fall back to medium, which is
/// the empty suffix.
pub fn translate_size(code: &str) -> &'static str {
    SizeCode::parse(code).map(|size| size.suffix()).unwrap_or("")
}


// -----------------------------
// *     RESULTS FROM API      *
// -----------------------------

/// Titles are plain strings on photos but `{"_content": ...}` objects on photosets
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Title {
    Plain(String),
    Structured {
        #[serde(rename = "_content")]
        content: String
    }
}

impl Title {
    pub fn text(&self) -> &str {
        match self {
            Self::Plain(text) => text,
            Self::Structured { content } => content
        }
    }
}

impl Default for Title {
    fn default() -> Self {
        Title::Plain(String::new())
    }
}

/// A single entry from any of the photo or photoset lists, exactly as it comes over the wire.
/// Use [`Record`] for anything past parsing.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PhotoRecord
{
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    pub secret: String,
    #[serde(deserialize_with = "deserialize_string_from_number")]
    pub server: String,
    #[serde(deserialize_with = "deserialize_number_from_string")]
    pub farm: u32,
    #[serde(default)]
    pub title: Title,
    //Only photoset entries have this; it's the id of the cover photo
    #[serde(default, skip_serializing_if = "Option::is_none", deserialize_with = "deserialize_option_string_from_number")]
    pub primary: Option<String>
}

fn deserialize_option_string_from_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
    where D: Deserializer<'de>
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum StringOrNumber {
        String(String),
        Number(serde_json::Number)
    }

    Ok(Option::<StringOrNumber>::deserialize(deserializer)?.map(|value| match value {
        StringOrNumber::String(string) => string,
        StringOrNumber::Number(number) => number.to_string()
    }))
}

/// Everything needed to locate one image on Flickr's farms
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Photo
{
    pub id: String,
    pub owner: Option<String>,
    pub secret: String,
    pub server: String,
    pub farm: u32,
    pub title: Title
}

/// A displayable entry: either a single photo, or a photoset represented by its cover photo.
#[derive(Deserialize, Clone, Debug, PartialEq)]
#[serde(from = "PhotoRecord")]
pub enum Record {
    Photo(Photo),
    PhotosetEntry {
        set_id: String,
        cover: Photo //The cover's id is the set's primary photo, NOT the set id
    }
}

impl From<PhotoRecord> for Record {
    fn from(record: PhotoRecord) -> Self {
        let PhotoRecord { id, owner, secret, server, farm, title, primary } = record;
        match primary {
            Some(primary) => Record::PhotosetEntry {
                set_id: id,
                cover: Photo { id: primary, owner, secret, server, farm, title }
            },
            None => Record::Photo(Photo { id, owner, secret, server, farm, title })
        }
    }
}

impl Record {
    /// The photo whose image represents this record
    pub fn photo(&self) -> &Photo {
        match self {
            Self::Photo(photo) => photo,
            Self::PhotosetEntry { cover, .. } => cover
        }
    }

    pub fn photo_id(&self) -> &str {
        &self.photo().id
    }

    pub fn set_id(&self) -> Option<&str> {
        match self {
            Self::Photo(_) => None,
            Self::PhotosetEntry { set_id, .. } => Some(set_id)
        }
    }

    pub fn title(&self) -> &str {
        self.photo().title.text()
    }
}


// ----------------------------
// *         TESTS
// ----------------------------

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! translate_tests {
        ($($name:ident: $value:expr;)*) => {
        $(
            #[test]
            fn $name() {
                let (input, expected) = $value;
                assert_eq!(translate_size(input), expected);
            }
        )*
        }
    }

    translate_tests! {
        translate_square: ("sq", "_s");
        translate_large_square: ("lsq", "_q");
        translate_thumbnail: ("t", "_t");
        translate_small: ("s", "_m");
        translate_small320: ("s320", "_n");
        translate_medium: ("m", "");
        translate_medium640: ("m640", "_z");
        translate_medium800: ("m800", "_c");
        translate_large: ("l", "_b");
        translate_original: ("o", "_o");
        translate_unknown: ("huge", "");
        translate_empty: ("", "");
        translate_case_sensitive: ("SQ", "");
    }

    #[test]
    fn size_code_roundtrip_all() {
        for size in SizeCode::ALL {
            assert_eq!(SizeCode::parse(size.code()), Some(size));
            assert_eq!(translate_size(size.code()), size.suffix());
        }
    }

    #[test]
    fn link_targets() {
        let targets: Vec<&str> = SizeCode::ALL.into_iter()
            .filter(|s| s.is_link_target())
            .map(|s| s.code())
            .collect();
        assert_eq!(targets, vec!["sq", "t", "s", "m", "o"]);
    }

    #[test]
    fn larger_variants_are_not_link_targets() {
        for code in ["lsq", "s320", "m640", "m800", "l"] {
            let size = SizeCode::parse(code).unwrap();
            assert!(!size.is_link_target(), "{}", code);
        }
    }

    #[test]
    fn method_strings() {
        assert_eq!(Method::PhotosSearch.to_string(), "flickr.photos.search");
        assert_eq!(Method::PhotosetsGetPhotos.as_str(), "flickr.photosets.getPhotos");
        assert_eq!(Method::all().len(), 5);
    }

    #[test]
    fn title_plain_and_structured() {
        let plain: Title = serde_json::from_str("\"Sunset\"").unwrap();
        let structured: Title = serde_json::from_str("{\"_content\":\"Holiday\"}").unwrap();
        assert_eq!(plain.text(), "Sunset");
        assert_eq!(structured.text(), "Holiday");
    }

    #[test]
    fn record_photo() {
        let record: Record = serde_json::from_str(
            r#"{"id":"99","owner":"12@N01","secret":"abc","server":"2","farm":1,"title":"Cat"}"#).unwrap();
        assert!(matches!(record, Record::Photo(_)));
        assert_eq!(record.photo_id(), "99");
        assert_eq!(record.set_id(), None);
        assert_eq!(record.title(), "Cat");
        assert_eq!(record.photo().owner.as_deref(), Some("12@N01"));
    }

    #[test]
    fn record_photoset_uses_primary() {
        let record: Record = serde_json::from_str(
            r#"{"id":"S1","primary":"P1","secret":"xyz","server":"2","farm":1,"title":{"_content":"Set"}}"#).unwrap();
        assert_eq!(record.photo_id(), "P1");
        assert_eq!(record.set_id(), Some("S1"));
        assert_eq!(record.title(), "Set");
    }

    #[test]
    fn record_numeric_fields() {
        //Some responses send these the "other" way around
        let record: Record = serde_json::from_str(
            r#"{"id":99,"secret":"abc","server":2,"farm":"3","primary":7}"#).unwrap();
        let photo = record.photo();
        assert_eq!(photo.id, "7");
        assert_eq!(photo.server, "2");
        assert_eq!(photo.farm, 3);
        assert_eq!(record.set_id(), Some("99"));
        assert_eq!(record.title(), "");
    }

    #[test]
    fn record_missing_secret_fails() {
        assert!(serde_json::from_str::<Record>(r#"{"id":"1","server":"2","farm":1}"#).is_err());
    }
}
