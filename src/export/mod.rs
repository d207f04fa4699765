pub mod view_report;

pub use view_report::generate_view_report;

use rust_xlsxwriter::{Format, FormatBorder};

/// Заголовок таблицы: синий фон #2C5F8A, белый жирный текст, тонкая рамка.
pub fn create_header_format() -> Format {
    Format::new()
        .set_bold()
        .set_background_color("2C5F8A")
        .set_font_color("FFFFFF")
        .set_font_size(11)
        .set_border(FormatBorder::Thin)
        .set_text_wrap()
}

/// Целое число #,##0
pub fn create_integer_format() -> Format {
    Format::new().set_num_format("#,##0")
}

/// Multi-line ticket titles stay readable in the table sheet.
pub fn create_wrap_format() -> Format {
    Format::new().set_text_wrap()
}
