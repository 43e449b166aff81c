pub mod health;
pub mod languages;
pub mod transcribe;
pub mod translate;
