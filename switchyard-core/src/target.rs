//! Target identifiers for dispatchable functions.

use crate::error::TargetIdError;
use std::{borrow::Borrow, fmt, str::FromStr};

/// The one nested namespace that is public in its own right.
///
/// Everything else in a host library is exposed at most two segments deep
/// (`crate.module`), so functions defined further down fold into their
/// parent. Rank filters are addressed as their own unit instead.
pub const RANK_NAMESPACE: &str = "switchyard_image.filters.rank";

/// Stable key identifying a dispatchable function: `<module>:<function>`.
///
/// # Example
///
/// ```rust
/// use switchyard_core::TargetId;
///
/// let target = TargetId::for_function(
///     "switchyard_image::restoration::deconvolution",
///     "richardson_lucy",
/// );
/// assert_eq!(target.as_str(), "switchyard_image.restoration:richardson_lucy");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TargetId(String);

impl TargetId {
    /// Compute the identifier of `function` declared in `module_path`.
    ///
    /// `module_path` may use Rust (`a::b::c`) or dotted (`a.b.c`) separators.
    pub fn for_function(module_path: &str, function: &str) -> Self {
        let module = public_module(module_path);
        Self(format!("{module}:{function}"))
    }

    /// Parse an externally supplied identifier such as `pkg.module:func`.
    pub fn parse(raw: &str) -> Result<Self, TargetIdError> {
        let Some((module, function)) = raw.rsplit_once(':') else {
            return Err(TargetIdError::MissingSeparator(raw.to_owned()));
        };
        if module.is_empty() {
            return Err(TargetIdError::EmptyModule(raw.to_owned()));
        }
        if function.is_empty() {
            return Err(TargetIdError::EmptyFunction(raw.to_owned()));
        }
        Ok(Self(raw.to_owned()))
    }

    /// The identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The public module part, before the `:`.
    pub fn module(&self) -> &str {
        self.0.rsplit_once(':').map_or("", |(module, _)| module)
    }

    /// The function name, after the `:`.
    pub fn function(&self) -> &str {
        self.0.rsplit_once(':').map_or(&self.0, |(_, function)| function)
    }
}

/// Public module path for a declared module path.
fn public_module(module_path: &str) -> String {
    let dotted = module_path.replace("::", ".");
    if dotted.starts_with(RANK_NAMESPACE) {
        return RANK_NAMESPACE.to_owned();
    }
    dotted.split('.').take(2).collect::<Vec<_>>().join(".")
}

impl fmt::Display for TargetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TargetId {
    type Err = TargetIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Borrow<str> for TargetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for TargetId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_segment_public_path() {
        let target = TargetId::for_function(
            "switchyard_image::restoration::deconvolution",
            "richardson_lucy",
        );
        assert_eq!(target.as_str(), "switchyard_image.restoration:richardson_lucy");
        assert_eq!(target.module(), "switchyard_image.restoration");
        assert_eq!(target.function(), "richardson_lucy");
    }

    #[test]
    fn test_rank_namespace_is_kept_whole() {
        let target = TargetId::for_function("switchyard_image::filters::rank::generic", "median");
        assert_eq!(target.as_str(), "switchyard_image.filters.rank:median");

        let target = TargetId::for_function("switchyard_image.filters.rank", "mean");
        assert_eq!(target.as_str(), "switchyard_image.filters.rank:mean");
    }

    #[test]
    fn test_parent_of_rank_namespace_folds() {
        let target = TargetId::for_function("switchyard_image::filters::edges", "sobel");
        assert_eq!(target.as_str(), "switchyard_image.filters:sobel");
    }

    #[test]
    fn test_short_paths() {
        assert_eq!(TargetId::for_function("pkg", "foo").as_str(), "pkg:foo");
        assert_eq!(TargetId::for_function("pkg::sub", "foo").as_str(), "pkg.sub:foo");
    }

    #[test]
    fn test_parse_valid_and_invalid() {
        let target: TargetId = "pkg.mod:foo".parse().unwrap();
        assert_eq!(target, TargetId::for_function("pkg::mod::inner", "foo"));

        assert_eq!(
            TargetId::parse("pkg.mod.foo"),
            Err(TargetIdError::MissingSeparator("pkg.mod.foo".into()))
        );
        assert_eq!(
            TargetId::parse(":foo"),
            Err(TargetIdError::EmptyModule(":foo".into()))
        );
        assert_eq!(
            TargetId::parse("pkg.mod:"),
            Err(TargetIdError::EmptyFunction("pkg.mod:".into()))
        );
    }
}
