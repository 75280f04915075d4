use crate::http_handler::{
    HTTPError,
    http_client::HTTPClient,
    http_response::response_common::HTTPResponseType,
};
use strum_macros::Display;

#[derive(Debug, Clone, Copy)]
pub(crate) enum HTTPRequestMethod {
    Post,
}

pub(crate) trait HTTPRequestType {
    type Response: HTTPResponseType;
    fn endpoint(&self) -> &str;
    fn request_method(&self) -> HTTPRequestMethod;
    fn header_params(&self) -> reqwest::header::HeaderMap { reqwest::header::HeaderMap::new() }

    fn compose(&self, client: &HTTPClient) -> reqwest::RequestBuilder {
        let url = client.endpoint_url(self.endpoint());
        let builder = match self.request_method() {
            HTTPRequestMethod::Post => client.client().post(url),
        };
        builder.headers(self.header_params())
    }
}

pub(crate) trait JSONBodyHTTPRequestType: HTTPRequestType {
    type Body: serde::Serialize;
    fn body(&self) -> &Self::Body;

    async fn send_request(
        &self,
        client: &HTTPClient,
    ) -> Result<<Self::Response as HTTPResponseType>::ParsedResponseType, HTTPError> {
        let response = self
            .compose(client)
            .json(self.body())
            .send()
            .await
            .map_err(RequestError::from)?;
        Ok(Self::Response::read_response(response).await?)
    }
}

#[derive(Debug, Display)]
pub enum RequestError {
    NoConnection,
    Timeout,
    Builder,
    Unknown,
}

impl std::error::Error for RequestError {}

impl From<reqwest::Error> for RequestError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() {
            RequestError::NoConnection
        } else if value.is_timeout() {
            RequestError::Timeout
        } else if value.is_builder() {
            RequestError::Builder
        } else {
            RequestError::Unknown
        }
    }
}
