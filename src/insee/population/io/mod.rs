pub mod store;
pub mod workbook;
