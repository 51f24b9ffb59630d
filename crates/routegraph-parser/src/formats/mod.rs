mod airports;
mod common;
mod routes;
pub mod schema;

pub use airports::AirportsParser;
pub use routes::RoutesParser;

pub(crate) use common::{
    check_width, locate_columns, parse_required_f64, read_header, required_text, tab_reader,
};
