use std::sync::Arc;

use axum::{
    routing::get,
    Router, extract::{Query, Path, State}, http::Uri,
};
use tower_http::services::ServeDir;

use common::gallery::{self, CompletionHook, Gallery};
use common::render::layout;
use common::response::{Response, Error};
use flickrapi::Method;

use crate::state::GlobalState;

type StdResponse = Result<Response, Error>;
type QueryPairs = Vec<(String, String)>;

#[macro_export]
macro_rules! srender {
    ($render:expr) => {
        async move {
            StdResponse::Ok($render.await?)
        }
    };
}

/// Every gallery route looks the same: forward the query to one api method and render
macro_rules! gallery_route {
    ($method:expr, $title:literal) => {
        get(|State(state): State<Arc<GlobalState>>, uri: Uri, Query(query): Query<QueryPairs>|
            srender!(gallery_render(state, uri, $method, $title, query, Vec::new())))
    };
}

pub fn get_all_routes(gstate: Arc<GlobalState>) -> Router
{
    let app = Router::new()
        .route("/",
            get(|State(state): State<Arc<GlobalState>>, uri: Uri| async move {
                let data = state.layout_data(uri.path(), state.config.flickr.clone());
                Response::Render(layout::index_page(&data))
            }))
        .route("/recent", gallery_route!(Method::PhotosGetRecent, "Recent photos"))
        .route("/contacts", gallery_route!(Method::PhotosGetContactsPublicPhotos, "Photos from contacts"))
        .route("/sets", gallery_route!(Method::PhotosetsGetList, "Photosets"))
        .route("/search",
            get(|State(state): State<Arc<GlobalState>>, uri: Uri, Query(query): Query<QueryPairs>|
                srender!(search_render(state, uri, query))))
        .route("/set",
            get(|State(state): State<Arc<GlobalState>>| async move {
                Response::Redirect(state.link_config.http("/sets"))
            }))
        .route("/set/:photoset_id",
            get(|State(state): State<Arc<GlobalState>>, uri: Uri, Path(photoset_id): Path<String>, Query(query): Query<QueryPairs>|
                srender!(gallery_render(state, uri, Method::PhotosetsGetPhotos, "Photoset", query,
                    vec![(String::from("photoset_id"), photoset_id)]))))
        .nest_service("/static", ServeDir::new(&gstate.config.static_files))
        .fallback(|uri: Uri| async move {
            Error::NotFound(format!("Nothing at {}", uri.path()))
        })
        .with_state(gstate)
    ;

    app
}

//Some methods are meaningless without somebody to look at
fn requires_user_id(method: Method) -> bool {
    matches!(method, Method::PhotosGetContactsPublicPhotos | Method::PhotosetsGetList)
}

fn completion_logger(path: String) -> CompletionHook {
    Box::new(move |gallery: &Gallery| {
        match &gallery.outcome {
            Ok(records) => log::info!("{}: rendered {} thumbnails from {}", path, records.len(), gallery.method),
            Err(_) => log::info!("{}: rendered an empty gallery from {}", path, gallery.method)
        }
    })
}

//Failed galleries still render, just with the api's status
fn rendered(html: String, gallery: &Gallery) -> Response {
    match gallery.error() {
        Some(error) => Response::RenderWithStatus(html, error.to_status()),
        None => Response::Render(html)
    }
}

//Path params are sent to flickr but stay out of the links we generate
async fn gallery_render(state: Arc<GlobalState>, uri: Uri, method: Method, title: &str, query: QueryPairs, path_params: QueryPairs) -> StdResponse
{
    let next_query = query.clone();
    let (mut params, settings) = gallery::split_query(query, &state.config.flickr);
    for (key, value) in path_params {
        params.insert(key, value);
    }

    if requires_user_id(method) && settings.user_id.is_none() && !params.has_wire_value("user_id") {
        return Err(Error::User(format!("{} needs a user_id, either configured or in the query", method)));
    }

    let gallery = gallery::load_gallery(&state.api_context, method, &params, &settings,
        Some(completion_logger(uri.path().to_string()))).await;

    let next = state.link_config.next_page(uri.path(), &next_query, gallery::current_page(&params, &settings));
    let data = state.layout_data(uri.path(), settings);
    Ok(rendered(layout::gallery_page(&data, title, &gallery, Some(next.as_str())), &gallery))
}

async fn search_render(state: Arc<GlobalState>, uri: Uri, query: QueryPairs) -> StdResponse
{
    let next_query = query.clone();
    let (params, settings) = gallery::split_query(query, &state.config.flickr);

    //Flickr refuses a search with no criteria, so don't even ask
    let gallery = if params.has_wire_value("text") || params.has_wire_value("tags") {
        Some(gallery::load_gallery(&state.api_context, Method::PhotosSearch, &params, &settings,
            Some(completion_logger(uri.path().to_string()))).await)
    }
    else {
        None
    };

    let text = params.get("text").and_then(|text| text.to_wire());
    let next = state.link_config.next_page(uri.path(), &next_query, gallery::current_page(&params, &settings));
    let data = state.layout_data(uri.path(), settings);
    let html = layout::search_page(&data, text.as_deref(), gallery.as_ref(), Some(next.as_str()));

    Ok(match &gallery {
        Some(gallery) => rendered(html, gallery),
        None => Response::Render(html)
    })
}
