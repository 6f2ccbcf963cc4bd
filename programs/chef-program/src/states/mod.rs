pub mod emission;
pub mod pool_info;
pub mod position;
pub mod reward_ledger;

pub use emission::*;
pub use pool_info::*;
pub use position::*;
pub use reward_ledger::*;
