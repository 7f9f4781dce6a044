mod csv_export;

pub(crate) use csv_export::CsvExporter;
