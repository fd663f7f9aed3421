use flickrapi::endpoints;

// -------------------------------------
// *     Response/Error from pages     *
// -------------------------------------

#[derive(Debug)]
pub enum Response {
    Render(String), //string is the markup
    RenderWithStatus(String, u16),  //string is the markup, status is the status code returned
    MessageWithStatus(String, u16), //Not an html page, just a message
    Redirect(String)
}

#[derive(Debug)]
pub enum Error {
    Api(endpoints::ApiError),
    NotFound(String),   //Normal "not found" error
    User(String),       //A user-generated error, usually related to request. Should produce 400
}

impl From<endpoints::ApiError> for Error {
    fn from(error: endpoints::ApiError) -> Self {
        Error::Api(error)
    }
}

impl Error {
    pub fn to_user_string(&self) -> String {
        match self {
            Self::Api(error) => error.to_user_string(),
            Self::User(error) => error.clone(),
            Self::NotFound(error) => error.clone()
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Api(error) => write!(f, "{}", error),
            _ => write!(f, "{}", self.to_user_string())
        }
    }
}

impl std::error::Error for Error {}


/// Response is powerful enough to represent both errors and responses, so this function flattens
/// a result of either response or error into just a response.
pub fn flatten(result: Result<Response, Error>) -> Response
{
    match result
    {
        Ok(response) => response,
        Err(error) => {
            match error
            {
                Error::Api(apierr) => {
                    log::error!("{}", apierr.to_verbose_string());
                    Response::MessageWithStatus(apierr.to_user_string(), apierr.to_status())
                },
                Error::NotFound(otherr) => Response::MessageWithStatus(otherr, 404),
                Error::User(otherr) => Response::MessageWithStatus(otherr, 400)
            }
        }
    }
}

#[cfg(feature = "axum")]
fn status_code(status: u16) -> axum::http::StatusCode {
    axum::http::StatusCode::from_u16(status).unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR)
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Response {
    fn into_response(self) -> axum::response::Response {
        match self {
            Response::Render(html) => axum::response::Html(html).into_response(),
            Response::RenderWithStatus(html, status) =>
                (
                    status_code(status),
                    [(axum::http::header::CONTENT_TYPE, "text/html; charset=utf-8")],
                    html,
                ).into_response(),
            Response::MessageWithStatus(msg, status) =>
                (
                    status_code(status),
                    msg,
                ).into_response(),
            Response::Redirect(uri) => axum::response::Redirect::to(&uri).into_response()
        }
    }
}

#[cfg(feature = "axum")]
impl axum::response::IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        flatten(Err(self)).into_response()
    }
}
