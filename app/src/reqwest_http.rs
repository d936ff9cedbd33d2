//! Reqwest-based implementation of the `HttpClient` port trait.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

use ff_types::ports::http::{HttpClient, HttpRequest, HttpResponse};
use ff_types::PortError;

/// Two inner clients: the credentialed one keeps a cookie store, so the
/// service can recognize repeat operator visits and answer with the
/// self-visit sentinel.
pub struct ReqwestHttpClient {
    plain: reqwest::Client,
    credentialed: reqwest::Client,
}

impl ReqwestHttpClient {
    pub fn new() -> Result<Self, reqwest::Error> {
        let plain = reqwest::Client::builder().build()?;
        let credentialed = reqwest::Client::builder().cookie_store(true).build()?;
        Ok(Self { plain, credentialed })
    }
}

impl HttpClient for ReqwestHttpClient {
    fn execute(
        &self,
        req: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, PortError>> + Send + '_>> {
        Box::pin(async move {
            let client = if req.with_credentials {
                &self.credentialed
            } else {
                &self.plain
            };

            let mut builder = client.post(&req.url);
            if req.timeout_secs > 0 {
                builder = builder.timeout(Duration::from_secs(req.timeout_secs));
            }
            for (key, value) in &req.headers {
                builder = builder.header(key.as_str(), value.as_str());
            }

            let response = builder
                .body(req.body)
                .send()
                .await
                .map_err(|err| PortError::Io(format!("http request failed: {err}")))?;

            let status = response.status().as_u16();
            let body = response
                .bytes()
                .await
                .map_err(|err| PortError::Io(format!("read response body: {err}")))?;

            Ok(HttpResponse {
                status,
                body: body.to_vec(),
            })
        })
    }
}
