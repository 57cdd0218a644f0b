pub mod csv_export;
pub mod workbook;

pub use csv_export::{export_csv, generate_csv};
pub use workbook::{export_xlsx, generate_xlsx};

use rust_xlsxwriter::{Format, FormatBorder};

/// Cabeçalho azul, texto branco, negrito, borda fina.
pub fn create_header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color("2C5F8A")
        .set_font_color("FFFFFF")
        .set_font_size(11)
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
}
