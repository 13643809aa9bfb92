// ============================================================================
//  CLEAN MODULE BOUNDARIES
// ============================================================================

//! Core domain layer for xrgen.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O concerns are handled via ports (traits) defined in the
//! application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + serde derives
//! - **Immutable values**: Derived once per run, never mutated
//!
// Public API - what the world sees
pub mod entry;
pub mod identifiers;
pub mod layout;
pub mod substitution;

// Re-exports for convenience
pub use entry::EntryKind;
pub use identifiers::SampleIdentifiers;
pub use substitution::{Substitution, SubstitutionTable};
