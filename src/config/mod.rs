mod filesystem;
mod loader;
mod model;
mod validation;

pub use filesystem::{FileSystem, RealFileSystem};
pub use loader::{ChartLoader, FileChartLoader, parse_chart};
pub use model::{ChartFile, StyleSection};
pub use validation::validate_chart_semantics;
