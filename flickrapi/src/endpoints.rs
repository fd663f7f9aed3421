use serde::de::DeserializeOwned;

use super::*;
use crate::conversion::{self, Dispatch};

/// Where Flickr's REST api lives. Everything gets a query string tacked on.
pub const REST_ENDPOINT: &str = "http://api.flickr.com/services/rest/";

//These are the specific types of errors we'll care about from the api. In all instances, the String
//is a minimal amount of data to show the users. The rest is for logging
#[derive(Debug)]
pub enum ApiError
{
    NonRequest(AboutRequest, String),   //Something not pertaining to the actual request itself happened!
    Parse(AboutRequest, String, Option<Vec<u8>>),        //Something didn't parse correctly! This is common enough to be its own error
    Network(AboutRequest, String),      //Is the API reachable? This indicates an error beyond 404
    Request(AboutRequest, String, u16), //Flickr answered with a bad http status
    Flickr(AboutRequest, i64, String),  //Flickr answered fine but said "stat: fail" (bad key, missing params, etc)
    UnrecognizedResponseShape(AboutRequest), //Valid json, but no photo list anywhere we know to look
}

impl ApiError {
    pub fn to_user_string(&self) -> String {
        match self {
            Self::NonRequest(_,err) => err.clone(),
            Self::Parse(_,err,_) => err.clone(),
            Self::Network(_,err) => err.clone(),
            Self::Request(_,err,_) => err.clone(),
            Self::Flickr(_,_,err) => err.clone(),
            Self::UnrecognizedResponseShape(_) => String::from("Flickr returned something that isn't a photo list")
        }
    }
    pub fn to_status(&self) -> u16 {
        match self {
            Self::NonRequest(_,_) => 500,
            Self::Parse(_,_,_) => 502,
            Self::Network(_,_) => 503,
            Self::Request(_,_,_) => 502,
            Self::Flickr(_,_,_) => 502,
            Self::UnrecognizedResponseShape(_) => 502
        }
    }
    pub fn to_verbose_string(&self) -> String {
        match self {
            Self::NonRequest(about,err) =>
                format!("[{}]{} - Something happened before we could reach flickr: {}", about.verb, about.method, err),
            Self::Parse(about,err,data) =>
                if let Some(data) = data {
                    format!("[{}]{} - Couldn't parse response from flickr: {}. Data:\n{}",
                        about.verb, about.method, err, String::from_utf8_lossy(data))
                }
                else {
                    format!("[{}]{} - Couldn't read the body of the response: {}", about.verb, about.method, err)
                },
            Self::Network(about,err) =>
                format!("[{}]{} - Flickr seems to be unreachable: {}", about.verb, about.method, err),
            Self::Request(about,err,status) =>
                format!("[{}]{} - Bad request to flickr ({}): {}", about.verb, about.method, status, err),
            Self::Flickr(about,code,err) =>
                format!("[{}]{} - Flickr refused the call (code {}): {}", about.verb, about.method, code, err),
            Self::UnrecognizedResponseShape(about) =>
                format!("[{}]{} - Response had no photos, photoset or photosets list", about.verb, about.method),
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_verbose_string())
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Clone)]
pub struct AboutRequest {
    //This is GET/POST/etc. I don't care for it to be an enum, since I'm just printing it
    pub verb: String,
    pub method: String,
    //The full url, which includes the api key. Don't print it anywhere public
    pub url: String
}

impl AboutRequest {
    /// The url with the api key blanked out, safe for logs
    pub fn redacted_url(&self) -> String {
        const KEY: &str = "&api_key=";
        match self.url.find(KEY) {
            Some(index) => {
                let start = index + KEY.len();
                let end = self.url[start..].find('&').map(|i| start + i).unwrap_or(self.url.len());
                format!("{}REDACTED{}", &self.url[..start], &self.url[end..])
            },
            None => self.url.clone()
        }
    }
}

/// This is needed so often: just convert any generic error into a "no request" error,
/// assuming you have the AboutRequest...
macro_rules! noreqerr {
    ($result:expr, $req:ident) => {
        $result.map_err(|e| ApiError::NonRequest($req.clone(), e.to_string()))
    };
}

/// This isn't needed as often: just convert any generic error into a "network" error
macro_rules! neterr {
    ($result:expr, $req:ident) => {
        $result.map_err(|e| ApiError::Network($req.clone(), e.to_string()))
    };
}

/// This isn't needed as often: just convert any generic error into a "parse" error
macro_rules! parseerr {
    ($result:expr, $req:ident) => {
        parseerr!($result, $req, None)
    };
    ($result:expr, $req:ident, $data:expr) => {
        $result.map_err(|e| ApiError::Parse($req.clone(), e.to_string(), $data))
    };
}

/// Produce the full request url for an api method at the default endpoint. Pure; nothing
/// is sent anywhere.
pub fn build_url(method: &str, params: &ApiParameters, api_key: &str) -> String {
    build_url_at(REST_ENDPOINT, method, params, api_key)
}

/// Same as build_url but against any endpoint. The caller's params are never touched; an
/// api_key inside them beats the default one.
pub fn build_url_at(endpoint: &str, method: &str, params: &ApiParameters, api_key: &str) -> String
{
    let mut pairs = params.sanitized();

    if !pairs.iter().any(|(key,_)| key == "api_key") {
        pairs.push((String::from("api_key"), String::from(api_key)));
    }

    let extra = if pairs.is_empty() {
        String::new()
    }
    else {
        match serde_urlencoded::to_string(&pairs) {
            Ok(querystring) => format!("&{}", querystring),
            Err(error) => {
                log::error!("Couldn't encode parameters for {}, sending none: {}", method, error);
                String::new()
            }
        }
    };

    format!("{}?method={}&format=json{}&nojsoncallback=1", endpoint, method, extra)
}

//One context can be shared by everything; the hyper client inside is cheap to clone and
//pools its own connections.
#[derive(Clone, Debug)]
pub struct ApiContext {
    api_url: String,
    client: hyper::client::Client<hyper::client::HttpConnector>,
}

impl ApiContext {
    pub fn new(api_url: String) -> Self {
        Self {
            api_url,
            client : hyper::client::Client::new()
        }
    }

    pub fn get_url(&self, method: Method, params: &ApiParameters, api_key: &str) -> String {
        build_url_at(&self.api_url, method.as_str(), params, api_key)
    }

    //Once a response comes back from the API, figure out the appropriate errors or data to parse and return
    async fn handle_response<T: DeserializeOwned>(response: hyper::Response<hyper::Body>, about: AboutRequest) -> Result<T, ApiError> {
        let status = response.status();

        let body = parseerr!(hyper::body::to_bytes(response.into_body()).await, about)?;

        //Good status vs all the rest.
        if status.is_success() {
            parseerr!(serde_json::from_slice::<T>(&body), about, Some(body.into()))
        }
        else {
            Err(ApiError::Request(about, String::from_utf8_lossy(&body).into_owned(), status.as_u16()))
        }
    }

    /// Plain GET against a prebuilt url. Flickr always answers in json since we ask for
    /// nojsoncallback.
    pub async fn basic_get_request<T: DeserializeOwned>(&self, request: AboutRequest) -> Result<T, ApiError>
    {
        let uri = noreqerr!(request.url.parse::<hyper::Uri>(), request)?;
        let req = noreqerr!(hyper::Request::builder()
            .method(hyper::Method::GET)
            .uri(uri)
            .header("Accept", "application/json")
            .body(hyper::Body::empty()), request)?;

        let response = neterr!(self.client.request(req).await, request)?;

        Self::handle_response(response, request).await
    }

    /// Call any of the photo-listing methods and pull out the records. The caller's params
    /// are forwarded as-is (minus anything that can't be serialized).
    pub async fn photos(&self, method: Method, params: &ApiParameters, api_key: &str) -> Result<Vec<Record>, ApiError>
    {
        let about = AboutRequest {
            verb: String::from("GET"),
            method: method.to_string(),
            url: self.get_url(method, params, api_key)
        };

        log::debug!("Calling {}: {}", about.method, about.redacted_url());

        let response = self.basic_get_request::<serde_json::Value>(about.clone()).await?;

        match conversion::dispatch(&response) {
            Dispatch::Records(records) => Ok(records),
            Dispatch::Failed { code, message } => Err(ApiError::Flickr(about, code, message)),
            Dispatch::Unrecognized => Err(ApiError::UnrecognizedResponseShape(about))
        }
    }
}

impl Default for ApiContext {
    fn default() -> Self {
        Self::new(String::from(REST_ENDPOINT))
    }
}

macro_rules! make_photos_endpoint {
    ($name:ident($method:expr)) => {
        pub async fn $name(&self, params: &ApiParameters, api_key: &str) -> Result<Vec<Record>, ApiError> {
            self.photos($method, params, api_key).await
        }
    };
}

//This is the rest of the implementation, which are all the actual functions you want to call!
//Parameters for each match flickr's own documentation for that method.
impl ApiContext {
    make_photos_endpoint!{photos_get_recent(Method::PhotosGetRecent)}
    make_photos_endpoint!{photos_get_contacts_public_photos(Method::PhotosGetContactsPublicPhotos)}
    make_photos_endpoint!{photos_search(Method::PhotosSearch)}
    make_photos_endpoint!{photosets_get_list(Method::PhotosetsGetList)}
    make_photos_endpoint!{photosets_get_photos(Method::PhotosetsGetPhotos)}
}
