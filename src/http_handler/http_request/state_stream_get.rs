use crate::http_handler::http_client::HTTPClient;
use reqwest_eventsource::EventSource;

/// Subscription to the /state/stream server-sent-event endpoint.
#[derive(Debug)]
pub(crate) struct StateStreamRequest {}

impl StateStreamRequest {
    const ENDPOINT: &'static str = "/state/stream";

    /// Opens the event source. Reconnects are handled by `reqwest_eventsource`; the stream
    /// does not share the command client, whose request timeout would cut the stream off.
    pub(crate) fn subscribe(&self, client: &HTTPClient) -> EventSource {
        EventSource::get(client.endpoint_url(Self::ENDPOINT))
    }
}
