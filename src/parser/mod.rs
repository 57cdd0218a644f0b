pub mod coerce;
pub mod columns;
pub mod pipeline;
pub mod types;

pub use pipeline::{parse_csv_reader, parse_file, parse_xlsx_reader};
pub use types::{ParseOutput, RawTicket, Ticket};
