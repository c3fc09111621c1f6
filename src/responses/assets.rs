use crate::errors::ServerError;
use crate::responses::ResultResp;
use astra::{Body, ResponseBuilder};

/// Site stylesheet, compiled into the binary.
const MAIN_CSS: &str = include_str!("../../static/main.css");

pub fn css_response() -> ResultResp {
    ResponseBuilder::new()
        .status(200)
        .header("Content-Type", mime::TEXT_CSS_UTF_8.as_ref())
        .body(Body::from(MAIN_CSS.to_string()))
        .map_err(|_| ServerError::InternalError)
}
