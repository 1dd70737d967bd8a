pub mod arg_type;
mod grammar;
pub mod math;
pub mod value;

pub use arg_type::*;
pub use math::*;
pub use value::*;
