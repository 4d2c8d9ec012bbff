//! Cloudflare HTTP request methods

use reqwest::{Method, RequestBuilder};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::types::CloudflareResultInfo;
use super::{CloudflareProvider, CloudflareResponse};

impl CloudflareProvider {
    fn authorized(&self, method: Method, url: &str) -> RequestBuilder {
        self.client
            .request(method, url)
            .bearer_auth(&self.api_token)
    }

    /// Send a request and unwrap the Cloudflare envelope.
    ///
    /// `success=false` is mapped through the Cloudflare error table using `ctx`.
    async fn send<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        request: Option<RequestBuilder>,
        ctx: ErrorContext,
    ) -> Result<CloudflareResponse<T>> {
        let url = self.url(path);
        let request = request.unwrap_or_else(|| self.authorized(method.clone(), &url));

        let (_status, response_text) =
            HttpUtils::execute_request(request, self.provider_name(), method.as_str(), &url)
                .await?;

        let cf_response: CloudflareResponse<T> =
            HttpUtils::parse_json(&response_text, self.provider_name())?;

        if !cf_response.success {
            let raw = cf_response.errors.first().map_or_else(
                || RawApiError::new("Unknown error"),
                |e| RawApiError::with_code(e.code.to_string(), e.message.clone()),
            );
            let err = self.map_error(raw, ctx);
            if err.is_expected() {
                log::warn!("[{}] API error: {err}", self.provider_name());
            } else {
                log::error!("[{}] API error: {err}", self.provider_name());
            }
            return Err(err);
        }

        Ok(cf_response)
    }

    /// GET a single page of a list endpoint.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        ctx: ErrorContext,
    ) -> Result<(Vec<T>, Option<CloudflareResultInfo>)> {
        let cf_response: CloudflareResponse<Vec<T>> =
            self.send(Method::GET, path, None, ctx).await?;
        Ok((
            cf_response.result.unwrap_or_default(),
            cf_response.result_info,
        ))
    }

    /// POST a JSON body and return the `result` object.
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
        ctx: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        if let Ok(body_json) = serde_json::to_string(body) {
            log::debug!("Request Body: {body_json}");
        }
        let request = self.authorized(Method::POST, &url).json(body);

        self.send::<T>(Method::POST, path, Some(request), ctx)
            .await?
            .result
            .ok_or_else(|| self.parse_error("Missing result field in response"))
    }

    /// DELETE a resource. The response `result` is ignored.
    pub(crate) async fn delete(&self, path: &str, ctx: ErrorContext) -> Result<()> {
        self.send::<serde_json::Value>(Method::DELETE, path, None, ctx)
            .await
            .map(|_| ())
    }
}
