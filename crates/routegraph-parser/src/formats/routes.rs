use std::io::Read;

use crate::errors::ParserError;
use crate::model::RouteRecord;
use crate::registry::DatParser;

use super::schema::ROUTE_COLUMNS;
use super::{check_width, locate_columns, read_header, required_text, tab_reader};

/// Parses `routes.dat`. Every column stays text; identifiers are not checked
/// against the airports table here.
#[derive(Debug, Default, Clone, Copy)]
pub struct RoutesParser;

impl RoutesParser {
    const NAME: &'static str = "ROUTES";
}

impl DatParser for RoutesParser {
    type Record = RouteRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse_reader<R: Read>(&self, input: R) -> Result<Vec<RouteRecord>, ParserError> {
        let mut reader = tab_reader(input);
        let header = read_header(Self::NAME, &mut reader)?;
        let [from_idx, to_idx] = locate_columns(Self::NAME, &header, ROUTE_COLUMNS)?;

        let mut routes = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| ParserError::Csv {
                parser: Self::NAME,
                source,
            })?;
            check_width(Self::NAME, &record, header.len())?;
            routes.push(RouteRecord {
                from: required_text(&record, from_idx),
                to: required_text(&record, to_idx),
            });
        }

        Ok(routes)
    }
}
