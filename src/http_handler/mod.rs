//! HTTP/JSON adapter towards the autopilot bridge. Every command endpoint lives in its own
//! request module together with the matching response type.

mod common;
pub(crate) mod http_client;
pub(crate) mod http_request;
pub(crate) mod http_response;

pub(crate) use common::HTTPError;
