pub mod cleaner;
pub mod errors;
pub mod formats;
pub mod model;
mod registry;

pub use cleaner::{clean_file, clean_text};
pub use errors::ParserError;
pub use model::{AirportRecord, RouteRecord};
pub use registry::{load_routes, parse_airports, DatParser};
