//! JSON rendition of a resource map, members kept in input order.

use std::io::Write;

use serde::{Serialize, Serializer, ser::SerializeMap};

use crate::{error::Error, formats::properties, traits::Writer, types::ResourceEntry};

/// Object of `key: value` members, serialized in entry order.
///
/// A repeated key is written as many times as it occurs, like the module output.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct JsonMap {
    pub entries: Vec<ResourceEntry>,
}

impl Serialize for JsonMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(&entry.key, &entry.raw_value)?;
        }
        map.end()
    }
}

impl From<properties::Format> for JsonMap {
    fn from(value: properties::Format) -> Self {
        JsonMap {
            entries: value.entries,
        }
    }
}

impl Writer for JsonMap {
    fn to_writer<W: Write>(&self, mut writer: W) -> Result<(), Error> {
        serde_json::to_writer_pretty(&mut writer, self)?;
        writeln!(writer)?;
        Ok(())
    }
}
