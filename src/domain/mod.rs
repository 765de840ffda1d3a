//! Domain types - pure values with no I/O

pub mod analysis;
pub mod commit;
pub mod prerelease;
pub mod tag;
pub mod version;

pub use analysis::{Analysis, Category};
pub use commit::{Commit, CommitKind, CommitType};
pub use prerelease::{PreRelease, PreReleaseType};
pub use tag::TagPattern;
pub use version::{BumpType, Version};
