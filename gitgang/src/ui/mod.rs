// gitgang/src/ui/mod.rs
pub mod output_format;
pub mod reporter;

pub use reporter::Reporter;
