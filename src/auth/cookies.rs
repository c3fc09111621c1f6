// src/auth/cookies.rs
use astra::Request;
use std::collections::HashMap;

/// The two values the browser keeps for us: who is submitting, and the
/// bearer token the property API expects. Read at submit time, never
/// written.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Credentials {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

impl Credentials {
    pub fn from_request(req: &Request) -> Self {
        let cookies = parse_cookies(req);
        Self {
            user_id: cookies.get("user_id").cloned(),
            token: cookies.get("token").cloned(),
        }
    }
}

/// Split the `Cookie` header into name/value pairs.
pub fn parse_cookies(req: &Request) -> HashMap<String, String> {
    let mut map = HashMap::new();

    let Some(header) = req.headers().get("Cookie").and_then(|v| v.to_str().ok()) else {
        return map;
    };

    for pair in header.split(';') {
        let mut parts = pair.trim().splitn(2, '=');
        if let (Some(name), Some(value)) = (parts.next(), parts.next()) {
            map.insert(name.to_string(), value.to_string());
        }
    }

    map
}
