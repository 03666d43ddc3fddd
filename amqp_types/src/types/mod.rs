mod encode;

mod described;
mod map;
mod symbol;
mod uuid;
mod value;

pub use encode::*;

pub use described::*;
pub use map::*;
pub use symbol::*;
pub use uuid::*;
pub use value::*;
