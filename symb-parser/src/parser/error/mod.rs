pub mod kind;

pub use symb_error::Error;
