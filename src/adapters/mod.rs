// Adapters layer: concrete implementations for external systems (files on disk).

pub mod listing;

pub use listing::JsonListingFile;
