//! Built-in audit rules.
//!
//! Rules run in the order listed here.

pub mod duplicate;
pub mod heavy;
pub mod stdlib;

pub use duplicate::DuplicatePackageRule;
pub use heavy::HeavyInMainRule;
pub use stdlib::StdlibAsDependencyRule;
