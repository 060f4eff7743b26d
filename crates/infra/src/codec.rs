//! Line-oriented text format for the persisted inventory.
//!
//! One record per line, fields separated by whitespace:
//!
//! ```text
//! bolts 40 0.25
//! hammer 2 18.99
//! ```
//!
//! The price always carries exactly two decimals. There is no header and no
//! version marker.
//!
//! Reading is token based, so records may be split or joined across lines. Reading
//! stops at the first record that does not parse, keeping everything before it.

use std::io::{self, Read, Write};

use thiserror::Error;

use stockroom_core::DomainError;
use stockroom_inventory::{Item, ItemName, Price, Quantity};

/// Result of decoding persisted text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Records read before end of input or the first malformed record.
    pub items: Vec<Item>,
    /// 1-based number of the record that stopped decoding, if any.
    pub stopped_at: Option<usize>,
}

impl Decoded {
    pub fn is_complete(&self) -> bool {
        self.stopped_at.is_none()
    }
}

/// Why a single record could not be read.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
enum RecordError {
    #[error("record ends after {0} of 3 fields")]
    Truncated(usize),

    #[error(transparent)]
    Field(#[from] DomainError),
}

/// Decode every well-formed record up to the first malformed one.
pub fn decode(input: &str) -> Decoded {
    let mut tokens = input.split_whitespace();
    let mut items = Vec::new();

    while let Some(name) = tokens.next() {
        match decode_record(name, tokens.next(), tokens.next()) {
            Ok(item) => items.push(item),
            Err(error) => {
                let record = items.len() + 1;
                tracing::warn!(record, %error, "stopped reading inventory at malformed record");
                return Decoded {
                    items,
                    stopped_at: Some(record),
                };
            }
        }
    }

    Decoded {
        items,
        stopped_at: None,
    }
}

fn decode_record(
    name: &str,
    quantity: Option<&str>,
    price: Option<&str>,
) -> Result<Item, RecordError> {
    let quantity = quantity.ok_or(RecordError::Truncated(1))?;
    let price = price.ok_or(RecordError::Truncated(2))?;

    Ok(Item::new(
        ItemName::new(name)?,
        Quantity::parse(quantity)?,
        Price::parse(price)?,
    ))
}

/// Read `reader` to the end and decode it.
///
/// Bytes that are not valid UTF-8 are replaced rather than failing the whole read.
pub fn read_from<R: Read>(mut reader: R) -> io::Result<Decoded> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    Ok(decode(&String::from_utf8_lossy(&bytes)))
}

/// Write each item as `name quantity price` on its own line.
pub fn encode<W: Write>(mut writer: W, items: &[Item]) -> io::Result<()> {
    for item in items {
        writer.write_all(record_line(item).as_bytes())?;
    }
    writer.flush()
}

/// [`encode`] into a `String`.
pub fn encode_to_string(items: &[Item]) -> String {
    items.iter().map(record_line).collect()
}

fn record_line(item: &Item) -> String {
    format!("{} {} {}\n", item.name(), item.quantity(), item.price())
}
