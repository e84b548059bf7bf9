pub mod cli;
pub mod errors;
pub mod generators;
pub mod password;
pub mod settings;
