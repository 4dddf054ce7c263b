//! Calendar sources backed by the host environment.
//!
//! The bundled datasets live in `feiertag_core::store::EmbeddedSource`; this
//! module adds sources that need filesystem access.

mod directory;

pub use directory::DirectorySource;
