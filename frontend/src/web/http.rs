//! HTTP 请求封装模块
//!
//! `web_sys::fetch` behind the core's `HttpClient` trait.

use gameshelf::{ClientError, ClientResult, HttpClient, HttpRequest, HttpResponse};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

fn build_failed(e: JsValue) -> ClientError {
    ClientError::Transport(format!("request build failed: {e:?}"))
}

/// 轻量级 HTTP 客户端
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchHttpClient;

impl FetchHttpClient {
    async fn read_text(response: &Response) -> ClientResult<String> {
        let promise = response
            .text()
            .map_err(|e| ClientError::decode(format_args!("{e:?}")))?;

        let text = JsFuture::from(promise)
            .await
            .map_err(|e| ClientError::decode(format_args!("{e:?}")))?;

        text.as_string()
            .ok_or_else(|| ClientError::decode("body is not a string"))
    }
}

#[async_trait::async_trait(?Send)]
impl HttpClient for FetchHttpClient {
    async fn send(&self, req: HttpRequest) -> ClientResult<HttpResponse> {
        let headers = Headers::new().map_err(build_failed)?;
        for (key, value) in &req.headers {
            headers.set(key, value).map_err(build_failed)?;
        }

        let opts = RequestInit::new();
        opts.set_method(req.method.as_str());
        opts.set_headers(&headers.into());

        if let Some(body) = &req.body {
            opts.set_body(&JsValue::from_str(body));
        }

        let request = Request::new_with_str_and_init(&req.url, &opts).map_err(build_failed)?;

        let window = web_sys::window()
            .ok_or_else(|| ClientError::Transport("no window object".to_string()))?;

        let resp_value = JsFuture::from(window.fetch_with_request(&request))
            .await
            .map_err(|e| ClientError::Transport(format!("{e:?}")))?;

        let response: Response = resp_value
            .dyn_into()
            .map_err(|e| ClientError::decode(format_args!("not a Response: {e:?}")))?;

        let body = Self::read_text(&response).await?;

        Ok(HttpResponse {
            status: response.status(),
            body,
        })
    }
}
