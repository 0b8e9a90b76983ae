pub(crate) mod pep;

pub use pep::{PepClient, DEFAULT_BASE_URL, DEFAULT_MAX_BODY_BYTES};
