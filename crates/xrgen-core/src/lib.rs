//! Xrgen Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the xrgen
//! sample scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           xrgen-cli (CLI)               │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │            (GenerateService)            │
//! │   Orchestrates Clone → Clean → Rewrite  │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │       Application Ports (Traits)        │
//! │         (Driven: Filesystem)            │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │     xrgen-adapters (Infrastructure)     │
//! │   (LocalFilesystem, MemoryFilesystem)   │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (SampleIdentifiers, SubstitutionTable) │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! The domain layer is pure and usable on its own:
//!
//! ```rust
//! use xrgen_core::domain::{SampleIdentifiers, SubstitutionTable};
//!
//! // 1. Derive the identifier family once per run
//! let ids = SampleIdentifiers::derive("Passthrough");
//! assert_eq!(ids.folder_name(), "XrPassthrough");
//!
//! // 2. Build the ordered rewrite table from it
//! let table = SubstitutionTable::for_identifiers(&ids);
//! let out = table.apply("apk of com.oculus.sdk.xrappbase");
//! assert_eq!(out, "apk of com.oculus.sdk.xrpassthrough");
//! ```
//!
//! Cloning and rewriting a real template goes through
//! [`application::GenerateService`] with an injected
//! [`application::ports::Filesystem`] adapter.

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        GenerateReport, GenerateService,
        ports::Filesystem,
    };
    pub use crate::domain::{
        EntryKind, SampleIdentifiers, Substitution, SubstitutionTable, layout,
    };
    pub use crate::error::{XrgenError, XrgenResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
