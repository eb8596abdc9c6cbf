//! Plan command implementation.

use pomforge_core::{AssemblyConfig, AssemblyPlan};

use crate::colors;

/// Print the assembly steps in the order they run.
pub fn execute(config: &AssemblyConfig) {
    let plan = AssemblyPlan::standard(config);

    println!("{}Assembly plan{}", colors::BOLD, colors::RESET);
    for (index, step) in plan.steps().iter().enumerate() {
        println!("  {}{}.{} {}", colors::DIM, index + 1, colors::RESET, step);
    }
}
