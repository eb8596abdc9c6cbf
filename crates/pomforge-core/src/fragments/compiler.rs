//! Compiler settings fragment.

use crate::catalog::PluginDescriptor;
use crate::config::AssemblyConfig;
use crate::error::Result;

use super::{configuration, layered};

pub(super) fn describe(
    base: &PluginDescriptor,
    config: &AssemblyConfig,
) -> Result<PluginDescriptor> {
    let options = configuration(&[("release", config.compiler_release.as_str())])?;
    layered(base, Some(options), Vec::new())
}
