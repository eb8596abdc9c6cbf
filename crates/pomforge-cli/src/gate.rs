//! Gate command implementation.

use pomforge_core::{AssemblyConfig, InvocationKind, PublicationGate, PublishInvocation};

use crate::colors;

/// Print the gate decision and return whether publishing may proceed.
pub fn execute(config: &AssemblyConfig, publication: &str, kind: InvocationKind) -> bool {
    let gate = PublicationGate::from_config(config);
    let allowed = gate.should_publish(&PublishInvocation::new(kind, publication));

    if allowed {
        println!("{}allow{} {} ({})", colors::GREEN, colors::RESET, publication, kind);
    } else {
        println!("{}deny{} {} ({})", colors::RED, colors::RESET, publication, kind);
    }
    allowed
}
