use crate::http_handler::http_response::response_common::{
    HTTPResponseType, ResponseError, check_status,
};

/// The setpoint endpoint answers with an empty body; only the status code is checked.
pub(crate) struct SetpointAckResponse {}

impl HTTPResponseType for SetpointAckResponse {
    type ParsedResponseType = ();

    async fn read_response(
        response: reqwest::Response,
    ) -> Result<Self::ParsedResponseType, ResponseError> {
        check_status(response).await?;
        Ok(())
    }
}
