pub mod admin;
pub mod initialize;
pub mod staker;
pub mod update_pools;
pub mod views;

pub use admin::*;
pub use initialize::*;
pub use staker::*;
pub use update_pools::*;
pub use views::*;
