use serde::{Deserialize, Serialize};
use serde_bytes::ByteBuf;

// Option numbers from RFC 7252 and the block-wise extension.
pub const IF_MATCH: u16 = 1;
pub const URI_HOST: u16 = 3;
pub const ETAG: u16 = 4;
pub const IF_NONE_MATCH: u16 = 5;
pub const OBSERVE: u16 = 6;
pub const URI_PORT: u16 = 7;
pub const LOCATION_PATH: u16 = 8;
pub const URI_PATH: u16 = 11;
pub const CONTENT_FORMAT: u16 = 12;
pub const MAX_AGE: u16 = 14;
pub const URI_QUERY: u16 = 15;
pub const ACCEPT: u16 = 17;
pub const LOCATION_QUERY: u16 = 20;
pub const BLOCK2: u16 = 23;
pub const BLOCK1: u16 = 27;
pub const SIZE2: u16 = 28;
pub const PROXY_URI: u16 = 35;
pub const PROXY_SCHEME: u16 = 39;
pub const SIZE1: u16 = 60;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct OptionEntry {
    number: u16,
    value: ByteBuf,
}

/// Ordered CoAP option container.
///
/// Entries stay sorted by option number; values for the same number keep
/// their insertion order, which is the order the protocol assigns to
/// repeatable options such as `Uri-Path`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    entries: Vec<OptionEntry>,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Adds one value for `number`, after any values already stored for it.
    pub fn insert(&mut self, number: u16, value: impl Into<Vec<u8>>) -> &mut Self {
        let at = self.entries.partition_point(|entry| entry.number <= number);
        let entry = OptionEntry { number, value: ByteBuf::from(value.into()) };
        self.entries.insert(at, entry);
        self
    }

    pub fn contains(&self, number: u16) -> bool {
        self.entries.iter().any(|entry| entry.number == number)
    }

    /// The first value stored for `number`, if any.
    pub fn first(&self, number: u16) -> Option<&[u8]> {
        self.values(number).next()
    }

    /// Every value stored for `number`, in insertion order.
    pub fn values(&self, number: u16) -> impl Iterator<Item = &[u8]> + '_ {
        self.entries
            .iter()
            .filter(move |entry| entry.number == number)
            .map(|entry| entry.value.as_slice())
    }

    /// Removes every value stored for `number`.
    pub fn remove(&mut self, number: u16) {
        self.entries.retain(|entry| entry.number != number);
    }

    /// All entries in protocol order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &[u8])> + '_ {
        self.entries.iter().map(|entry| (entry.number, entry.value.as_slice()))
    }
}
