pub mod curl;
pub mod diff;
pub mod request;
pub mod tools;
