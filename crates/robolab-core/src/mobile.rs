//! 移动机器人
//!
//! `MobileRobot` 内嵌一份 [`Robot`] 基础记录，并增加二维坐标和移动能力。
//! `describe()` 被重写为包含坐标的版本。

use std::fmt;

use tracing::trace;

use crate::error::Result;
use crate::event::RobotEvent;
use crate::robot::{DEFAULT_ENERGY, Entity, EntityKind, Robot};

/// 每次移动消耗的电量（百分比）
pub const MOVE_ENERGY_COST: u8 = 10;

/// 可在二维平面移动的机器人
///
/// # 不变量
///
/// 只有在已上电且电量大于 0 时，`move_by` 才会改变坐标和电量。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MobileRobot {
    base: Robot,
    x: i32,
    y: i32,
}

impl MobileRobot {
    /// 创建位于原点的移动机器人
    pub fn new(name: impl Into<String>, energy: u8) -> Self {
        Self::with_position(name, energy, 0, 0)
    }

    /// 以默认电量创建位于原点的移动机器人
    pub fn with_default_energy(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_ENERGY)
    }

    /// 创建位于指定坐标的移动机器人
    pub fn with_position(name: impl Into<String>, energy: u8, x: i32, y: i32) -> Self {
        Self {
            base: Robot::new(name, energy),
            x,
            y,
        }
    }

    /// 带校验的构造，规则同 [`Robot::try_new`]
    pub fn try_new(name: impl Into<String>, energy: u32, x: i32, y: i32) -> Result<Self> {
        Ok(Self {
            base: Robot::try_new(name, energy)?,
            x,
            y,
        })
    }

    /// 当前坐标 `(x, y)`
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// 是否满足移动的前置条件
    pub fn can_move(&self) -> bool {
        self.base.is_powered_on() && self.base.energy() > 0
    }

    /// 移动 `(dx, dy)`，成功时消耗 [`MOVE_ENERGY_COST`] 电量
    ///
    /// 坐标按饱和加法计算。前置条件不满足时不改变任何状态。
    pub fn move_by(&mut self, dx: i32, dy: i32) -> RobotEvent {
        if !self.can_move() {
            return RobotEvent::MoveRefused {
                name: self.base.name().to_string(),
            };
        }

        self.x = self.x.saturating_add(dx);
        self.y = self.y.saturating_add(dy);
        self.base.drain(MOVE_ENERGY_COST);
        trace!(
            robot = %self.base.name(),
            x = self.x,
            y = self.y,
            energy = self.base.energy(),
            "moved"
        );

        RobotEvent::Moved {
            name: self.base.name().to_string(),
            x: self.x,
            y: self.y,
        }
    }

    /// 包含坐标的状态摘要（替换基础版本）
    pub fn describe(&self) -> String {
        format!(
            "MobileRobot {} | Position: ({}, {}) | Battery: {}% | State: {}",
            self.base.name(),
            self.x,
            self.y,
            self.base.energy(),
            self.base.state_label()
        )
    }
}

impl fmt::Display for MobileRobot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Entity for MobileRobot {
    fn base(&self) -> &Robot {
        &self.base
    }

    fn base_mut(&mut self) -> &mut Robot {
        &mut self.base
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Mobile
    }

    fn describe(&self) -> String {
        MobileRobot::describe(self)
    }

    fn as_mobile(&self) -> Option<&MobileRobot> {
        Some(self)
    }

    fn as_mobile_mut(&mut self) -> Option<&mut MobileRobot> {
        Some(self)
    }
}
