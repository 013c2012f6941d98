//! Configuration management module

pub mod loader;

pub use loader::{
    CodeSection, CommitsSection, FileConfig, PrSection, ReposSection,
};
