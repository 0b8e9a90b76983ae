mod locale;
mod profile;

pub use locale::Locale;
pub use profile::{Blocks, Body, Header, Names, ProfileRecord, Scoring, TopField, TopSection};
