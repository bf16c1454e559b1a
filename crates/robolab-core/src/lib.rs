//! # Robolab Core
//!
//! 机器人仿真核心库：有状态的机器人实体、移动机器人特化、
//! 操作事件和按花名册运行的驱动序列。
//!
//! ## 模块
//!
//! - `robot` - 基础机器人和 `Entity` trait（动态分派入口）
//! - `mobile` - 移动机器人（坐标 + 移动，重写 `describe`）
//! - `event` - 操作结果事件和事件接收端
//! - `roster` - 花名册配置（TOML）
//! - `driver` - 驱动序列
//! - `error` - 错误类型
//!
//! ## 使用示例
//!
//! ```rust
//! use robolab_core::{ConsoleSink, RosterConfig, run_roster};
//!
//! let config = RosterConfig::default();
//! let mut sink = ConsoleSink::new();
//! let summary = run_roster(&config, &mut sink).unwrap();
//! assert_eq!(summary.entities, 4);
//! ```

pub mod driver;
pub mod error;
pub mod event;
pub mod mobile;
pub mod robot;
pub mod roster;

// 重新导出常用类型
pub use driver::{Driver, RunSummary, run_roster};
pub use error::{Result, RobotError};
pub use event::{ConsoleSink, EventSink, RobotEvent, WriterSink, report};
pub use mobile::{MOVE_ENERGY_COST, MobileRobot};
pub use robot::{DEFAULT_ENERGY, Entity, EntityKind, MAX_ENERGY, Robot};
pub use roster::{RobotSpec, RosterConfig, ScenarioConfig};
