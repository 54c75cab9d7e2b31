
mod error;
mod rand_compat;
mod sub55;

pub use error::*;
pub use sub55::*;
