pub mod decode;
pub mod spreadsheet;

pub use decode::decode_workbook;
pub use spreadsheet::{parse_workbook_xml, Sheet, WorkBook};
