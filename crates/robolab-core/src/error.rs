//! 错误类型定义
//!
//! 实体操作本身不会失败（被拒绝的操作只产生一条失败事件），
//! 这里的错误只出现在构造校验、花名册加载和事件输出这些边界上。

use thiserror::Error;

/// robolab 核心错误类型
#[derive(Error, Debug)]
pub enum RobotError {
    /// 名称为空（或只有空白字符）
    #[error("Robot name must not be empty")]
    EmptyName,

    /// 电量超出 [0, 100] 范围
    #[error("Invalid energy for robot '{name}': {energy} (must be within 0..=100)")]
    InvalidEnergy { name: String, energy: u32 },

    /// 花名册中出现重复名称
    #[error("Duplicate robot name in roster: '{0}'")]
    DuplicateName(String),

    /// 花名册为空
    #[error("Roster contains no robots")]
    EmptyRoster,

    /// 普通机器人配置了坐标
    #[error("Robot '{0}' is not mobile and cannot have a position")]
    UnexpectedPosition(String),

    /// 读取配置文件失败
    #[error("Failed to read roster file: {0}")]
    Io(#[from] std::io::Error),

    /// TOML 解析失败
    #[error("Failed to parse roster: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML 序列化失败
    #[error("Failed to serialize roster: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// 事件输出失败（stdout 被关闭等）
    #[error("Failed to write event: {0}")]
    Output(std::io::Error),
}

/// 核心库的 Result 别名
pub type Result<T> = std::result::Result<T, RobotError>;
