pub mod csv_export;
pub mod store;

pub use csv_export::export_estimate_csv;
pub use store::DocumentStore;
