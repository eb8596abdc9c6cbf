//! Composition engine for inheritable parent build descriptors.
//!
//! This crate provides:
//! - An ordered element tree ([`Node`]) used as the output representation
//! - A read-only plugin [`Catalog`] keyed by logical plugin name
//! - One fragment builder per plugin kind ([`Fragment`])
//! - Architecture-conditional profiles
//! - The [`Assembler`], which runs an explicit [`AssemblyPlan`] per module
//! - The [`PublicationGate`] predicate for publish invocations
//!
//! # Architecture
//!
//! ```text
//! Catalog ──┐
//!           ├──► Assembler ──► [Parent, Coordinates, Packaging, Properties,
//! Module ───┘        │            PluginManagement, Plugins, Profiles] ──► Node
//!                    └── Fragment::emit (resolves from Catalog)
//!
//! PublishInvocation ──► PublicationGate ──► allow / deny
//! ```
//!
//! The crate does no I/O. Loading catalogs and writing documents is left to
//! `pomforge-io`.

pub mod assemble;
pub mod catalog;
pub mod config;
pub mod error;
pub mod fragments;
pub mod node;
pub mod profiles;
pub mod publish;

pub use assemble::{Assembler, AssemblyPlan, AssemblyStep, Packaging, assemble};
pub use catalog::{Catalog, CatalogBuilder, CatalogEntry, Execution, PluginDescriptor};
pub use config::{AssemblyConfig, Coordinates, ModuleContext, Platform};
pub use error::{Error, Result};
pub use fragments::Fragment;
pub use node::Node;
pub use profiles::{Activation, Profile, inject_architecture_profiles};
pub use publish::{InvocationKind, PublicationGate, PublicationIdentity, PublishInvocation};
