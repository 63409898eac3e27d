//! Content-derived hashing for dependency graphs that may contain cycles.
//!
//! Ordinary Merkle hashing is undefined on cyclic graphs — a node's hash
//! would depend on itself. This crate computes a reproducible,
//! difference-sensitive hash for every node of an arbitrary directed graph
//! by relaxing hashes over a bounded number of synchronous rounds, letting
//! hash information flow one dependency hop per round until it has crossed
//! every cycle.
//!
//! The result is the building block for content-addressed caching and change
//! detection over graphs where cycles are legal: mutually referential
//! modules, circular build targets, recursive type graphs.
//!
//! # Example
//!
//! ```
//! use tangle_core::{calculate, Blake3Digest, HashPart, NodeId};
//!
//! struct Module {
//!     name: &'static str,
//!     source_digest: &'static str,
//!     imports: Vec<&'static str>,
//! }
//!
//! // Two modules importing each other: a cycle.
//! let modules = [
//!     Module { name: "auth", source_digest: "d1", imports: vec!["session"] },
//!     Module { name: "session", source_digest: "d2", imports: vec!["auth"] },
//! ];
//!
//! let hashes = calculate(
//!     &modules,
//!     &Blake3Digest,
//!     |m| NodeId::from(m.name),
//!     |m| {
//!         let mut parts = vec![HashPart::lit(m.source_digest)];
//!         parts.extend(m.imports.iter().map(|i| HashPart::dep(*i)));
//!         Ok(parts)
//!     },
//! )?;
//!
//! assert_eq!(hashes.len(), 2);
//! assert!(hashes[&NodeId::from("auth")].starts_with("blake3:"));
//! # Ok::<(), tangle_core::HashError>(())
//! ```
//!
//! # Conventions
//!
//! - **Errors**: typed [`HashError`] with machine-readable [`HashErrorCode`];
//!   caller-callback failures ride along as `anyhow` sources.
//! - **Logging**: `tracing` macros at phase boundaries; no subscriber is
//!   installed by the library.
//!
//! # Caveats
//!
//! The per-node hash after the bounded rounds is the deliberately final
//! answer, not necessarily a value a further round would leave unchanged.
//! Two cyclic shapes whose bounded unrollings coincide (e.g. a self-loop and
//! a symmetric 2-cycle with equal content) hash equal; that is inherent to
//! bounded relaxation, not a defect of a particular digest.

mod bound;
mod engine;
mod relax;
mod state;

pub mod digest;
pub mod error;
pub mod id;
pub mod part;

pub use digest::{Blake3Digest, Digest, Sha256Digest};
pub use engine::calculate;
pub use error::{HashError, HashErrorCode};
pub use id::NodeId;
pub use part::{HashPart, PART_SEPARATOR};
