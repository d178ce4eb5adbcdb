pub mod artifact;
pub mod definition;
pub mod entry;

pub use artifact::*;
pub use definition::*;
pub use entry::*;
