pub mod csv_import;
pub mod db;
pub mod models;
