use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::errors::ParserError;
use crate::formats::{AirportsParser, RoutesParser};
use crate::model::{AirportRecord, RouteRecord};

pub trait DatParser {
    type Record;

    fn name(&self) -> &'static str;
    fn parse_reader<R: Read>(&self, input: R) -> Result<Vec<Self::Record>, ParserError>;

    fn parse(&self, content: &str) -> Result<Vec<Self::Record>, ParserError> {
        self.parse_reader(content.as_bytes())
    }
}

/// Parses airports from text that has already been through the cleaner.
pub fn parse_airports(cleaned: &str) -> Result<Vec<AirportRecord>, ParserError> {
    AirportsParser.parse(cleaned)
}

/// Reads routes straight from disk; the routes file is not cleaned.
pub fn load_routes(path: impl AsRef<Path>) -> Result<Vec<RouteRecord>, ParserError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ParserError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    RoutesParser.parse_reader(file)
}
