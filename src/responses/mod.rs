pub mod assets;
pub mod errors;
pub mod html;

pub use errors::{html_error_response, ResultResp};

// Normal HTML response
pub use assets::css_response;
pub use html::html_response;
