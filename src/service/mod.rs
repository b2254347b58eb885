pub mod csv_loader;
pub mod report_printer;
pub mod reports;
