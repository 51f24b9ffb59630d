use std::io::Read;

use csv::StringRecord;

use crate::errors::ParserError;
use crate::model::AirportRecord;
use crate::registry::DatParser;

use super::schema::{AIRPORT_COLUMNS, LATITUDE, LONGITUDE};
use super::{check_width, locate_columns, parse_required_f64, read_header, required_text, tab_reader};

/// Parses the cleaned airports table. Coordinates are coerced to `f64` as each
/// row is read; any row that fails coercion aborts the parse.
#[derive(Debug, Default, Clone, Copy)]
pub struct AirportsParser;

impl AirportsParser {
    const NAME: &'static str = "AIRPORTS";

    fn parse_row(
        record: &StringRecord,
        [id_idx, name_idx, lat_idx, lon_idx]: [usize; 4],
    ) -> Result<AirportRecord, ParserError> {
        let latitude = parse_required_f64(Self::NAME, record, lat_idx, LATITUDE)?;
        let longitude = parse_required_f64(Self::NAME, record, lon_idx, LONGITUDE)?;
        Ok(AirportRecord {
            airport_id: required_text(record, id_idx),
            airport_name: required_text(record, name_idx),
            latitude,
            longitude,
        })
    }
}

impl DatParser for AirportsParser {
    type Record = AirportRecord;

    fn name(&self) -> &'static str {
        Self::NAME
    }

    fn parse_reader<R: Read>(&self, input: R) -> Result<Vec<AirportRecord>, ParserError> {
        let mut reader = tab_reader(input);
        let header = read_header(Self::NAME, &mut reader)?;
        let positions = locate_columns(Self::NAME, &header, AIRPORT_COLUMNS)?;

        let mut airports = Vec::new();
        for record in reader.records() {
            let record = record.map_err(|source| ParserError::Csv {
                parser: Self::NAME,
                source,
            })?;
            check_width(Self::NAME, &record, header.len())?;
            airports.push(Self::parse_row(&record, positions)?);
        }

        Ok(airports)
    }
}
