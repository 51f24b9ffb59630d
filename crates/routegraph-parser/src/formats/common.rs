use std::io::Read;

use csv::{Reader, StringRecord};

use crate::errors::ParserError;

pub(crate) fn tab_reader<R: Read>(reader: R) -> Reader<R> {
    csv::ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
}

/// Reads the header row. The csv reader skips blank lines, so the first
/// non-empty line is the header.
pub(crate) fn read_header<R: Read>(
    parser: &'static str,
    reader: &mut Reader<R>,
) -> Result<StringRecord, ParserError> {
    let mut header = StringRecord::new();
    let found = reader
        .read_record(&mut header)
        .map_err(|source| ParserError::Csv { parser, source })?;
    if !found {
        return Err(ParserError::MissingHeader { parser });
    }
    Ok(header)
}

/// Resolves each required column name to its position in `header`.
pub(crate) fn locate_columns<const N: usize>(
    parser: &'static str,
    header: &StringRecord,
    required: [&'static str; N],
) -> Result<[usize; N], ParserError> {
    let mut positions = [0usize; N];
    for (slot, column) in positions.iter_mut().zip(required) {
        *slot = header
            .iter()
            .position(|name| name == column)
            .ok_or(ParserError::MissingColumn { parser, column })?;
    }
    Ok(positions)
}

pub(crate) fn line_of(record: &StringRecord) -> u64 {
    record.position().map(|pos| pos.line()).unwrap_or_default()
}

pub(crate) fn check_width(
    parser: &'static str,
    record: &StringRecord,
    expected: usize,
) -> Result<(), ParserError> {
    if record.len() != expected {
        return Err(ParserError::DataRow {
            parser,
            line: line_of(record),
            message: format!("expected {expected} fields, found {}", record.len()),
        });
    }
    Ok(())
}

pub(crate) fn required_text(record: &StringRecord, index: usize) -> String {
    record.get(index).unwrap_or_default().to_string()
}

pub(crate) fn parse_required_f64(
    parser: &'static str,
    record: &StringRecord,
    index: usize,
    column: &str,
) -> Result<f64, ParserError> {
    let value = record.get(index).unwrap_or_default().trim();
    let parsed = value.parse::<f64>().map_err(|err| ParserError::DataRow {
        parser,
        line: line_of(record),
        message: format!("failed to parse column '{column}' value '{value}' as float: {err}"),
    })?;
    if !parsed.is_finite() {
        return Err(ParserError::DataRow {
            parser,
            line: line_of(record),
            message: format!("column '{column}' value '{value}' is not a finite number"),
        });
    }
    Ok(parsed)
}
