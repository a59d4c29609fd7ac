// ============================================================
// SPREADSHEET INFRASTRUCTURE LAYER
// ============================================================
// Format detection, text decoding, and workbook/CSV row readers

mod csv_reader;
mod source_format;
mod text_decoding;
mod workbook_reader;

pub use csv_reader::CsvRowReader;
pub use source_format::SourceFormat;
pub use text_decoding::decode_text;
pub use workbook_reader::WorkbookRowReader;
