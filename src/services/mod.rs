mod person;

pub use person::PersonHandler;
