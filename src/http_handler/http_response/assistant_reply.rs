use super::response_common::SerdeJSONBodyHTTPResponseType;

/// Response type for the /voice_assistant endpoint.
#[derive(serde::Deserialize, Debug)]
pub(crate) struct AssistantReplyResponse {
    /// The assistant's spoken/displayed reply.
    response: String,
}

impl SerdeJSONBodyHTTPResponseType for AssistantReplyResponse {}

impl AssistantReplyResponse {
    pub(crate) fn into_response(self) -> String { self.response }
}
