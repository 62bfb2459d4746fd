//! Shared value types: the dense n-dimensional image buffer, labels,
//! priorities, connectivity modes and the watershed options record.

mod connectivity;
pub use connectivity::*;

mod label;
pub use label::*;

mod nd_image;
pub use nd_image::*;

mod options;
pub use options::*;

mod priority;
pub use priority::*;
