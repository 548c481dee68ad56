pub mod csv_writer;
pub mod report_writer;

pub use csv_writer::CsvWriter;
pub use report_writer::ReportWriter;
