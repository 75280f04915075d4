use strum_macros::Display;

pub(crate) trait HTTPResponseType {
    type ParsedResponseType;
    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError>;
}

/// A JSON acknowledgement from the bridge carrying the autopilot's verdict on a command.
///
/// The HTTP status only tells whether the bridge handled the call; whether the autopilot
/// accepted it is the flag inside the body.
pub(crate) trait BridgeAckResponseType: for<'de> serde::Deserialize<'de> {
    fn accepted(&self) -> bool;
}

impl<T: BridgeAckResponseType> HTTPResponseType for T {
    type ParsedResponseType = T;

    async fn read_response(response: reqwest::Response) -> Result<T, ResponseError> {
        let body = check_status(response).await?.bytes().await?;
        serde_json::from_slice(&body).map_err(|e| ResponseError::MalformedBody { reason: e.to_string() })
    }
}

/// Maps non-success status codes onto [`ResponseError`], passing successful responses on.
pub(crate) async fn check_status(
    response: reqwest::Response,
) -> Result<reqwest::Response, ResponseError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else if status.is_server_error() {
        Err(ResponseError::InternalServer { status: status.as_u16() })
    } else if status.is_client_error() {
        let detail = response.text().await.unwrap_or_default();
        Err(ResponseError::BadRequest { status: status.as_u16(), detail })
    } else {
        Err(ResponseError::Unknown)
    }
}

#[derive(Debug, Display)]
pub enum ResponseError {
    #[strum(to_string = "bridge failed with status {status}")]
    InternalServer { status: u16 },
    #[strum(to_string = "bridge refused the request with status {status}: {detail}")]
    BadRequest { status: u16, detail: String },
    #[strum(to_string = "malformed bridge reply: {reason}")]
    MalformedBody { reason: String },
    NoConnection,
    Unknown,
}

impl std::error::Error for ResponseError {}

impl From<reqwest::Error> for ResponseError {
    fn from(value: reqwest::Error) -> Self {
        if value.is_connect() || value.is_timeout() {
            ResponseError::NoConnection
        } else if value.is_decode() || value.is_body() {
            ResponseError::MalformedBody { reason: value.to_string() }
        } else {
            ResponseError::Unknown
        }
    }
}
