use crate::api::PropertyApi;
use crate::auth::Credentials;
use crate::domain::PropertyDraft;
use crate::errors::ServerError;
use crate::responses::{css_response, html_response, ResultResp};
use crate::templates;
use astra::Request;
use std::io::Read;
use tracing::{error, info};

/// Everything a request handler needs. Cheap to clone: the API client
/// shares its connection pool.
#[derive(Clone)]
pub struct AppCtx {
    pub api: PropertyApi,
}

pub fn handle(req: Request, ctx: &AppCtx) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();

    match (method.as_str(), path.as_str()) {
        ("GET", "/") => html_response(templates::pages::home_page()),
        ("GET", "/about") => html_response(templates::pages::about_page()),
        ("GET", "/static/main.css") => css_response(),
        ("GET", "/dashboard/add-property") => {
            html_response(templates::pages::add_property_page(&PropertyDraft::new(), None))
        }
        ("POST", "/dashboard/add-property") => submit_property(req, ctx),
        _ => Err(ServerError::NotFound),
    }
}

/// Fold the posted form into a draft, read the submitter's credentials
/// from their cookies, and forward the listing to the property API.
///
/// The draft only lives for this request. On success the confirmation
/// page replaces it; on failure the form comes back with the draft's
/// values and a notice, and nothing is retried.
fn submit_property(mut req: Request, ctx: &AppCtx) -> ResultResp {
    let creds = Credentials::from_request(&req);
    let pairs = read_form_pairs(&mut req)?;
    let draft =
        PropertyDraft::from_form_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));

    let payload = draft.to_payload(creds.user_id.as_deref());
    info!("submitting property '{}' to the listings api", draft.title);

    match ctx.api.create_property(&payload, creds.token.as_deref()) {
        Ok(created) => {
            info!("property accepted, id {:?}", created.id);
            html_response(templates::pages::submitted_page(&created))
        }
        Err(err) => {
            error!("property submission failed: {err}");
            let notice = err.user_message();
            html_response(templates::pages::add_property_page(
                &draft,
                Some(notice.as_str()),
            ))
        }
    }
}

/// Decode an application/x-www-form-urlencoded body into ordered pairs.
/// Order matters: the draft folds them one by one.
fn read_form_pairs(req: &mut Request) -> Result<Vec<(String, String)>, ServerError> {
    let mut buf = Vec::new();
    req.body_mut()
        .reader()
        .read_to_end(&mut buf)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;

    Ok(url::form_urlencoded::parse(&buf).into_owned().collect())
}
