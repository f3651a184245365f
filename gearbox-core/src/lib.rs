pub mod money;
pub mod response;

pub use money::{round_money, MONEY_DP};
pub use response::{ApiResponse, ErrorCode};
