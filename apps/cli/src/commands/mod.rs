//! 命令定义和实现

pub mod roster;
pub mod run;

pub use roster::RosterCommand;
pub use run::RunCommand;
