//! The two priority queues driving the flooding engines: a hierarchical
//! FIFO-bucket queue for Meyer flooding, and a value-addressable queue for
//! the image foresting transform.

mod addressable;
pub use addressable::*;

mod hierarchical;
pub use hierarchical::*;
