//! Traits for reading and writing resource files in resgen.

use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Cursor, Read, Write},
    path::Path,
};

use crate::error::Error;

/// A trait for parsing a resource file.
///
/// # Example
///
/// ```rust,no_run
/// use resgen::traits::{Parser, Writer};
/// let format = resgen::formats::properties::Format::read_from("Cres_en.properties")?;
/// format.write_to("Cres_en_copy.properties")?;
/// Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub trait Parser {
    /// Parse from any reader.
    fn from_reader<R: BufRead>(reader: R) -> Result<Self, Error>
    where
        Self: Sized;

    /// Parse from file path.
    ///
    /// Input carrying a UTF-8 or UTF-16 byte order mark is decoded to UTF-8,
    /// anything else is read as UTF-8 with invalid sequences replaced.
    fn read_from<P: AsRef<Path>>(path: P) -> Result<Self, Error>
    where
        Self: Sized,
    {
        let decoded = read_to_utf8(path)?;
        Self::from_str(&decoded)
    }

    /// Parse from a string.
    fn from_str(s: &str) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(Cursor::new(s))
    }

    /// Parse from bytes.
    fn from_bytes(bytes: &[u8]) -> Result<Self, Error>
    where
        Self: Sized,
    {
        Self::from_reader(BufReader::new(bytes))
    }
}

/// Reads a whole file as UTF-8, honouring a UTF-8 or UTF-16 byte order mark.
pub(crate) fn read_to_utf8(path: impl AsRef<Path>) -> Result<String, Error> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| Error::read(path, e))?;
    let mut decoder = encoding_rs_io::DecodeReaderBytesBuilder::new()
        .encoding(Some(encoding_rs::UTF_8))
        .bom_override(true)
        .strip_bom(true)
        .build(file);

    let mut decoded = String::new();
    decoder
        .read_to_string(&mut decoded)
        .map_err(|e| Error::read(path, e))?;
    Ok(decoded)
}

/// A trait for serializing a resource file.
pub trait Writer {
    /// Write to any writer (file, memory, etc.).
    fn to_writer<W: Write>(&self, writer: W) -> Result<(), Error>;

    /// Write to file path, truncating whatever was there.
    fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| Error::write(path, e))?;
        let mut writer = BufWriter::new(file);
        self.to_writer(&mut writer)
            .and_then(|_| writer.flush().map_err(Error::Io))
            .map_err(|e| match e {
                Error::Io(source) => Error::write(path, source),
                other => other,
            })
    }

    /// Render into an in-memory string.
    fn to_string_lossy(&self) -> Result<String, Error> {
        let mut buffer = Vec::new();
        self.to_writer(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }
}
