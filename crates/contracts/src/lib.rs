pub mod catalogs;
pub mod domain;
