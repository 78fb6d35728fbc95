//! Output writers
//!
//! Stateless serializers for the two export formats.

pub mod csv_writer;
pub mod text_writer;

pub use csv_writer::save_to_csv;
pub use text_writer::save_to_txt;
