//! Output tree layout

mod builder;

pub use builder::CollectedWheel;
pub use builder::METADATA_SUFFIX;
pub use builder::RepositoryBuilder;
pub use builder::SIMPLE_DIR;
pub use builder::find_wheels;
