// src/core/net.rs
// Credentialed JSON GET (blocking reqwest). The session cookie rides along
// as a default header on every request from the client.

use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, COOKIE, HeaderMap, HeaderValue};
use serde_json::Value;

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchOptions;
use crate::error::{FetchError, Result};

pub fn build_client(opts: &FetchOptions) -> Result<Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    if let Some(cookie) = &opts.cookie {
        let mut v = HeaderValue::from_str(cookie.trim())?;
        v.set_sensitive(true);
        headers.insert(COOKIE, v);
    }

    let client = Client::builder()
        .timeout(opts.timeout)
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()?;
    Ok(client)
}

/// GET `url`, require a 2xx status, parse the body as JSON.
pub fn get_json(client: &Client, url: &str) -> Result<Value> {
    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16(), path: s!(url) });
    }
    let body = resp.text()?;
    Ok(serde_json::from_str(&body)?)
}
