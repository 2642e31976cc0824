//! Message representation layer for the CoAP-to-bus bridge.
//!
//! The bridge decodes CoAP requests on one side and re-emits them as calls
//! on a bus-style RPC transport whose marshalling is positional and total:
//! every field has a fixed position and type, and the byte-array field
//! cannot be absent. This crate owns the form in between:
//!
//! - [`Options`] — ordered CoAP option container, cloned on every
//!   assignment so stored option state never aliases a caller's container
//! - [`RequestMessage`] — one request as the transport reads it (options,
//!   query attributes, payload), normalized to a bus-legal shape on every
//!   mutation
//! - [`MessageError`] — codec and payload-text errors
//!
//! A `RequestMessage` is built and mutated by a single owner (the CoAP
//! decode path or the bus unmarshaller) and handed to the next bridge stage
//! by move. It holds no locks and no shared state.

pub mod error;
pub mod options;
pub mod request;

pub use error::MessageError;
pub use options::Options;
pub use request::RequestMessage;
