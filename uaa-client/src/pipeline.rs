//! Request pipeline - builds, authenticates, traces and sends requests to the target

use reqwest::header::{HeaderValue, ACCEPT};
use reqwest::{Method, RequestBuilder};
use url::Url;

use crate::response::RawResponse;
use crate::{trace, UaaClient};
use uaa_shared::{Credentials, Result, UaaError};

/// Header UAA uses to route a request to an identity zone.
pub const ZONE_ID_HEADER: &str = "X-Identity-Zone-Id";

/// `base_url` and `path` joined by exactly one slash, plus an optional query string.
pub fn endpoint_url(base_url: &str, path: &str, query: &str) -> Result<Url> {
    let mut url = Url::parse(&format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    ))?;

    if !query.is_empty() {
        url.set_query(Some(query));
    }

    Ok(url)
}

impl UaaClient {
    /// `GET` a path on the target.
    pub async fn get_bytes(
        &self,
        path: &str,
        query: &str,
        credentials: &Credentials,
    ) -> Result<RawResponse> {
        let url = endpoint_url(&self.context.base_url, path, query)?;
        let builder = self.request(Method::GET, url, credentials);
        self.execute(builder).await
    }

    /// `POST` a form-encoded body to a path on the target.
    pub async fn post_form(
        &self,
        path: &str,
        form: &[(&str, String)],
        credentials: &Credentials,
    ) -> Result<RawResponse> {
        let url = endpoint_url(&self.context.base_url, path, "")?;
        let builder = self.request(Method::POST, url, credentials).form(form);
        self.execute(builder).await
    }

    fn request(&self, method: Method, url: Url, credentials: &Credentials) -> RequestBuilder {
        let mut builder = self
            .http
            .request(method, url)
            .header(ACCEPT, HeaderValue::from_static("application/json"));

        if !self.context.zone_id.is_empty() {
            builder = builder.header(ZONE_ID_HEADER, self.context.zone_id.as_str());
        }

        credentials.apply(builder)
    }

    async fn execute(&self, builder: RequestBuilder) -> Result<RawResponse> {
        let request = builder.build().map_err(UaaError::HttpClient)?;
        let url = request.url().to_string();

        tracing::debug!("{} {}", request.method(), url);
        if self.options.trace {
            trace::print_request(request.method(), request.url(), request.headers());
        }

        let response = self
            .http
            .execute(request)
            .await
            .map_err(|source| UaaError::Network {
                url: url.clone(),
                source,
            })?;

        let status = response.status();
        let version = response.version();
        let body = response
            .bytes()
            .await
            .map_err(|source| UaaError::Network {
                url: url.clone(),
                source,
            })?;

        tracing::debug!("{} responded {}", url, status);
        if self.options.trace {
            trace::print_response(version, status, &body);
        }

        Ok(RawResponse::new(url, status, body.to_vec()))
    }
}
