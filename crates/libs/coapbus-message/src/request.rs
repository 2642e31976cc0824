use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

use crate::error::MessageError;
use crate::options::Options;

/// One CoAP request in bridge-internal form.
///
/// Field order is the bus marshalling contract: the transport reads the
/// record positionally as `(options, attributes, payload)`. The payload
/// slot is a byte array with no absent variant on the wire, so every
/// payload-accepting operation stores the absent case as the zero-length
/// sequence.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequestMessage {
    options: Options,
    attributes: HashMap<String, String>,
    payload: ByteBuf,
}

impl RequestMessage {
    /// An empty request: no options, no attributes, zero-length payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a request from already-parsed parts. The options are copied,
    /// the payload goes through the same normalization as
    /// [`RequestMessage::set_payload`].
    pub fn from_parts(
        options: &Options,
        attributes: HashMap<String, String>,
        payload: Option<Vec<u8>>,
    ) -> Self {
        let mut message = Self { options: options.clone(), attributes, payload: ByteBuf::new() };
        message.set_payload(payload);
        message
    }

    /// The stored option set, owned by this message.
    pub fn options(&self) -> &Options {
        &self.options
    }

    /// Replaces the stored options with an independent copy of `options`.
    /// Later mutation of the caller's container does not reach this message.
    pub fn set_options(&mut self, options: &Options) {
        self.options = options.clone();
    }

    pub fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }

    /// Live access to the stored attribute map.
    pub fn attributes_mut(&mut self) -> &mut HashMap<String, String> {
        &mut self.attributes
    }

    /// Stores `attributes` as given. Unlike [`RequestMessage::set_options`]
    /// this transfers ownership of the map instead of copying it.
    pub fn set_attributes(&mut self, attributes: HashMap<String, String>) {
        self.attributes = attributes;
    }

    /// The payload bytes. Always present; an absent payload is zero-length.
    pub fn payload(&self) -> &[u8] {
        self.payload.as_slice()
    }

    /// Stores the payload. `None` is stored as the zero-length sequence,
    /// the only absent-payload shape the bus signature can carry.
    pub fn set_payload(&mut self, payload: Option<Vec<u8>>) {
        self.payload = ByteBuf::from(payload.unwrap_or_default());
    }

    /// Stores a text payload as its UTF-8 bytes. Delegates to
    /// [`RequestMessage::set_payload`] so the absent case has a single
    /// normalization path.
    pub fn set_payload_text(&mut self, text: Option<&str>) {
        self.set_payload(text.map(|text| text.as_bytes().to_vec()));
    }

    /// The payload decoded as UTF-8 text. A zero-length payload is `""`
    /// without touching the decoder.
    pub fn payload_text(&self) -> Result<&str, MessageError> {
        if self.payload.is_empty() {
            return Ok("");
        }
        std::str::from_utf8(&self.payload)
            .map_err(|e| MessageError::PayloadNotText(e.to_string()))
    }

    /// Decodes a request from its bus wire value.
    pub fn from_msgpack(bytes: &[u8]) -> Result<Self, MessageError> {
        rmp_serde::from_slice(bytes).map_err(|e| MessageError::Decode(e.to_string()))
    }

    /// Encodes the request as its bus wire value, a positional
    /// `[options, attributes, payload]` triple.
    pub fn to_msgpack(&self) -> Result<Vec<u8>, MessageError> {
        rmp_serde::to_vec(self).map_err(|e| MessageError::Encode(e.to_string()))
    }
}
