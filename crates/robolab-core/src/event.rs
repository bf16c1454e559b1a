//! 事件系统（Event System）
//!
//! 每个实体操作都返回一个 [`RobotEvent`]，描述操作结果。
//! 事件的 `Display` 就是控制台上打印的那一行文本。
//!
//! 事件通过 [`EventSink`] trait object 分发，内置三种接收端：
//!
//! - [`ConsoleSink`]: 写到 stdout，每个事件一行
//! - [`WriterSink`]: 写到任意 `std::io::Write`
//! - `Vec<RobotEvent>`: 内存录制，主要用于测试
//!
//! # 使用示例
//!
//! ```rust
//! use robolab_core::event::{RobotEvent, report};
//! use robolab_core::Robot;
//!
//! let mut robot = Robot::new("R2D2", 80);
//! let mut recorded: Vec<RobotEvent> = Vec::new();
//!
//! report(&mut recorded, robot.power_on()).unwrap();
//! assert_eq!(recorded[0].to_string(), "R2D2 is powered on.");
//! ```

use std::fmt;
use std::io::{self, Write};

use tracing::{debug, warn};

use crate::error::{Result, RobotError};

/// 操作结果事件
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RobotEvent {
    /// `describe()` 的输出
    Described { description: String },

    /// 上电成功
    PoweredOn { name: String },

    /// 电量为 0，拒绝上电
    PowerOnRefused { name: String },

    /// 已断电（无条件成功）
    PoweredOff { name: String },

    /// 充电完成，`energy` 为充电后的电量
    Recharged { name: String, energy: u8 },

    /// 打招呼
    Greeted { name: String },

    /// 移动成功，`(x, y)` 为新坐标
    Moved { name: String, x: i32, y: i32 },

    /// 未上电或没电，拒绝移动
    MoveRefused { name: String },
}

impl RobotEvent {
    /// 是否为"前置条件不满足"的拒绝事件
    pub fn is_refusal(&self) -> bool {
        matches!(
            self,
            RobotEvent::PowerOnRefused { .. } | RobotEvent::MoveRefused { .. }
        )
    }
}

impl fmt::Display for RobotEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RobotEvent::Described { description } => f.write_str(description),
            RobotEvent::PoweredOn { name } => write!(f, "{} is powered on.", name),
            RobotEvent::PowerOnRefused { name } => {
                write!(f, "{} cannot power on: battery depleted.", name)
            },
            RobotEvent::PoweredOff { name } => write!(f, "{} powered off.", name),
            RobotEvent::Recharged { name, energy } => {
                write!(f, "{} has been recharged. Current battery: {}%", name, energy)
            },
            RobotEvent::Greeted { name } => {
                write!(f, "Hello, I am {} and I am ready to serve you.", name)
            },
            RobotEvent::Moved { name, x, y } => write!(f, "{} moved to ({}, {}).", name, x, y),
            RobotEvent::MoveRefused { name } => {
                write!(f, "{} cannot move (powered off or out of battery).", name)
            },
        }
    }
}

/// 事件接收端 Trait
///
/// 驱动序列把每个事件按顺序交给接收端。实现只负责"写出去"，
/// 日志由 [`report`] 统一处理。
pub trait EventSink {
    /// 接收一个事件
    fn emit(&mut self, event: RobotEvent) -> Result<()>;
}

/// 内存录制
impl EventSink for Vec<RobotEvent> {
    fn emit(&mut self, event: RobotEvent) -> Result<()> {
        self.push(event);
        Ok(())
    }
}

/// 写到任意 `io::Write` 的接收端
pub struct WriterSink<W: Write> {
    writer: W,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// 取回内部 writer
    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> EventSink for WriterSink<W> {
    fn emit(&mut self, event: RobotEvent) -> Result<()> {
        writeln!(self.writer, "{}", event).map_err(RobotError::Output)
    }
}

/// stdout 接收端
///
/// 每次写入都锁一次 stdout，保证逐行输出顺序与调用顺序一致。
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for ConsoleSink {
    fn emit(&mut self, event: RobotEvent) -> Result<()> {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        writeln!(handle, "{}", event).map_err(RobotError::Output)
    }
}

/// 记录日志并把事件交给接收端
pub fn report(sink: &mut dyn EventSink, event: RobotEvent) -> Result<()> {
    if event.is_refusal() {
        warn!(event = ?event, "operation refused");
    } else {
        debug!(event = ?event, "operation completed");
    }
    sink.emit(event)
}
