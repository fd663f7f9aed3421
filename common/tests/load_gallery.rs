use std::convert::Infallible;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use hyper::service::{make_service_fn, service_fn};
use hyper::{Body, Request, Response, Server};

use common::FlickrSettings;
use common::gallery::{load_gallery, CompletionHook, Gallery};
use flickrapi::endpoints::ApiContext;
use flickrapi::{ApiParameters, Method};

const THREE_PHOTOS: &str = r#"{"photos":{"page":2,"pages":5,"perpage":3,"total":15,"photo":[
    {"id":"1","owner":"a@N01","secret":"s1","server":"10","farm":1,"title":"One"},
    {"id":"2","owner":"b@N01","secret":"s2","server":"20","farm":2,"title":"Two"},
    {"id":"3","owner":"c@N01","secret":"s3","server":"30","farm":3,"title":"Three"}
]},"stat":"ok"}"#;

//Always answers with the same list, remembering every query string it was sent
async fn start_server(queries: Arc<Mutex<Vec<String>>>) -> SocketAddr {
    let make_svc = make_service_fn(move |_conn| {
        let queries = queries.clone();
        async move {
            Ok::<_, Infallible>(service_fn(move |req: Request<Body>| {
                queries.lock().unwrap().push(req.uri().query().unwrap_or_default().to_string());
                async { Ok::<_, Infallible>(Response::new(Body::from(THREE_PHOTOS))) }
            }))
        }
    });
    let server = Server::bind(&SocketAddr::from(([127, 0, 0, 1], 0))).serve(make_svc);
    let addr = server.local_addr();
    tokio::spawn(server);
    addr
}

#[tokio::test]
async fn fetched_gallery_renders_and_completes() {
    let queries = Arc::new(Mutex::new(Vec::new()));
    let addr = start_server(queries.clone()).await;
    let context = ApiContext::new(format!("http://{}/services/rest/", addr));

    let settings = FlickrSettings {
        api_key: String::from("KEY"),
        thumbnail_size: String::from("t"),
        page: 2,
        user_id: Some(String::from("me@N01")),
        ..Default::default()
    };

    let seen = Arc::new(Mutex::new(Vec::new()));
    let hook_seen = seen.clone();
    let hook: CompletionHook = Box::new(move |gallery: &Gallery| {
        hook_seen.lock().unwrap().push((gallery.thumbnails.len(), gallery.outcome.is_ok()));
    });

    let params = ApiParameters::new().with("per_page", 3);
    let gallery = load_gallery(&context, Method::PhotosGetRecent, &params, &settings, Some(hook)).await;

    let records = gallery.outcome.as_ref().unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(gallery.thumbnails.len(), records.len());
    assert!(gallery.error().is_none());

    let html = gallery.thumbnails[2].clone().into_string();
    assert!(html.contains("http://farm3.static.flickr.com/30/3_s3_t.jpg"), "{}", html);

    //Exactly once, and the hook already sees every thumbnail
    assert_eq!(*seen.lock().unwrap(), vec![(3, true)]);

    let queries = queries.lock().unwrap();
    assert_eq!(queries.len(), 1);
    let query = &queries[0];
    assert!(query.contains("method=flickr.photos.getRecent"), "{}", query);
    assert!(query.contains("per_page=3"), "{}", query);
    assert!(query.contains("&page=2&"), "{}", query);
    assert!(query.contains("user_id=me%40N01"), "{}", query);
    assert!(query.contains("api_key=KEY"), "{}", query);
    assert!(!query.contains("thumbnail_size"), "{}", query);
}
