pub mod error;
pub mod rows;
pub mod tree;

pub use error::FormError;
pub use rows::*;
pub use tree::*;
