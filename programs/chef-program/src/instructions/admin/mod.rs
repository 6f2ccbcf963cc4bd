pub mod add_pool;
pub mod set_weight;

pub use add_pool::*;
pub use set_weight::*;
