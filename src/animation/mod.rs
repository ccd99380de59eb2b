pub mod ease;
pub mod lag;
pub mod verb;
