//! Version range specifier (`vers`) processing
//!
//! This module turns a `vers` string into a validated range and answers
//! containment questions against it. Version ordering is delegated to
//! versioning schemes registered in a [`registry::SchemeRegistry`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Tokenizer  │────▶│   Parser    │────▶│  Validator  │◀──── Registry
//! │ (split)     │     │ (raw range) │     │ (certify)   │     (schemes)
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                         ┌──────────────────────┼──────────────────────┐
//!                         ▼                      ▼                      ▼
//!                  ┌─────────────┐        ┌─────────────┐        ┌─────────────┐
//!                  │ Simplifier  │        │   Matcher   │        │  Canonical  │
//!                  └─────────────┘        └─────────────┘        └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`tokenizer`]: splits off the `vers:` prefix and the scheme id
//! - [`parser`]: constraint list parsing into a [`parser::ParsedRange`]
//! - [`validator`]: range invariants, producing a [`types::VersionRange`]
//! - [`simplifier`]: removal of redundant constraints
//! - [`matcher`]: version containment
//! - [`canonical`]: canonical string rendering
//! - [`scheme`]: the versioning scheme plugin trait
//! - [`registry`]: scheme id to scheme mapping
//! - [`error`]: the error type shared by all of the above

pub mod canonical;
pub mod comparator;
pub mod constraint;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod registry;
pub mod scheme;
pub mod simplifier;
pub mod tokenizer;
pub mod types;
pub mod validator;
