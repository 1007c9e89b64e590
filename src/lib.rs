//! Levenshtein edit distance between symbol sequences, and reconstruction of a
//! minimal edit script turning one sequence into the other.
//!
//! ```
//! use editdist::{distance, edit_path, optimized_distance, Operation};
//!
//! let a = b"abc";
//! let b = b"abd";
//! assert_eq!(distance(a, b), 1);
//! assert_eq!(optimized_distance(a, b), 1);
//! assert_eq!(edit_path(a, b)[2], Operation::Substitute { from: b'c', to: b'd' });
//! ```

pub mod cs;
pub mod error;

pub use cs::dynamic;
pub use cs::dynamic::*;
pub use error::{Error, Result};
