//! Backend information.

use crate::{error::TargetIdError, target::TargetId};
use std::collections::BTreeSet;

/// Information a backend publishes about itself.
///
/// Currently this is the set of targets it supports. The registry uses it to
/// skip a backend without loading it when the target is not listed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BackendInfo {
    supported_functions: BTreeSet<TargetId>,
}

impl BackendInfo {
    /// Create information from already-built identifiers.
    pub fn new(supported_functions: impl IntoIterator<Item = TargetId>) -> Self {
        Self {
            supported_functions: supported_functions.into_iter().collect(),
        }
    }

    /// Create information from `module:function` strings.
    pub fn parse<'a>(
        supported_functions: impl IntoIterator<Item = &'a str>,
    ) -> Result<Self, TargetIdError> {
        let supported_functions = supported_functions
            .into_iter()
            .map(TargetId::parse)
            .collect::<Result<_, _>>()?;
        Ok(Self {
            supported_functions,
        })
    }

    /// Whether `target` is listed as supported.
    pub fn supports(&self, target: &TargetId) -> bool {
        self.supported_functions.contains(target)
    }

    /// All supported targets, in lexicographic order.
    pub fn supported_functions(&self) -> impl Iterator<Item = &TargetId> {
        self.supported_functions.iter()
    }
}
