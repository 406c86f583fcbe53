pub mod admin_gate;
pub mod initialize_ledger;
pub mod update_ledger_config;
pub mod register;
pub mod membership;
pub mod investment;
pub mod withdrawal;
pub mod maintenance;

pub use admin_gate::*;
pub use initialize_ledger::*;
pub use update_ledger_config::*;
pub use register::*;
pub use membership::*;
pub use investment::*;
pub use withdrawal::*;
pub use maintenance::*;
