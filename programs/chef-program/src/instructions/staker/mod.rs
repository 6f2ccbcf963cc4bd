pub mod deposit;
pub mod emergency_withdraw;
pub mod withdraw;

pub use deposit::*;
pub use emergency_withdraw::*;
pub use withdraw::*;
