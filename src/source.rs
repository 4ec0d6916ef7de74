pub mod file;

pub use self::file::WellCsvSource;
