pub mod clients;
pub mod protocol;
pub mod runtime;
pub mod view;
