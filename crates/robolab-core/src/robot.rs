//! 基础机器人实体与 `Entity` trait
//!
//! [`Robot`] 是所有实体共享的基础记录（名称、电量、上电状态）。
//! [`Entity`] 是驱动序列看到的统一接口：通过 `&dyn Entity` 调用
//! `describe()` 时，总是分派到最具体类型的实现。

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::error::{Result, RobotError};
use crate::event::RobotEvent;
use crate::mobile::MobileRobot;

/// 电量上限（百分比）
pub const MAX_ENERGY: u8 = 100;

/// 未指定电量时的默认值
pub const DEFAULT_ENERGY: u8 = MAX_ENERGY;

// ==================== 实体类型标签 ====================

/// 实体的具体类型
///
/// 驱动序列用它做"是不是移动机器人"的类型判断，
/// 配置文件里也用它区分两种实体。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    /// 普通机器人
    #[default]
    Robot,
    /// 可在二维平面移动的机器人
    Mobile,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKind::Robot => f.write_str("robot"),
            EntityKind::Mobile => f.write_str("mobile"),
        }
    }
}

// ==================== Entity trait ====================

/// 所有实体的统一接口
///
/// 只有 `base`/`base_mut`/`kind` 必须实现，其余操作默认转发给
/// 共享的 [`Robot`] 记录。特化类型按需重写（例如 `describe`）。
pub trait Entity: fmt::Debug {
    /// 共享的基础记录
    fn base(&self) -> &Robot;

    /// 共享的基础记录（可变）
    fn base_mut(&mut self) -> &mut Robot;

    /// 具体类型
    fn kind(&self) -> EntityKind;

    fn name(&self) -> &str {
        self.base().name()
    }

    fn energy(&self) -> u8 {
        self.base().energy()
    }

    fn is_powered_on(&self) -> bool {
        self.base().is_powered_on()
    }

    /// 状态摘要
    fn describe(&self) -> String {
        self.base().describe()
    }

    fn power_on(&mut self) -> RobotEvent {
        self.base_mut().power_on()
    }

    fn power_off(&mut self) -> RobotEvent {
        self.base_mut().power_off()
    }

    fn recharge(&mut self, amount: u32) -> RobotEvent {
        self.base_mut().recharge(amount)
    }

    fn greet(&self) -> RobotEvent {
        self.base().greet()
    }

    /// 向下转换到移动机器人（只有 `MobileRobot` 返回 `Some`）
    fn as_mobile(&self) -> Option<&MobileRobot> {
        None
    }

    /// 向下转换到移动机器人（可变）
    fn as_mobile_mut(&mut self) -> Option<&mut MobileRobot> {
        None
    }
}

// ==================== Robot ====================

/// 基础机器人
///
/// # 不变量
///
/// - `energy` 始终在 `0..=MAX_ENERGY` 内
/// - `energy == 0` 时不能上电
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Robot {
    name: String,
    energy: u8,
    powered_on: bool,
}

impl Robot {
    /// 创建机器人，初始为断电状态
    ///
    /// 超过上限的电量会被截断到 `MAX_ENERGY`。需要校验时使用 [`Robot::try_new`]。
    pub fn new(name: impl Into<String>, energy: u8) -> Self {
        Self {
            name: name.into(),
            energy: energy.min(MAX_ENERGY),
            powered_on: false,
        }
    }

    /// 以默认电量（`DEFAULT_ENERGY`）创建机器人
    pub fn with_default_energy(name: impl Into<String>) -> Self {
        Self::new(name, DEFAULT_ENERGY)
    }

    /// 带校验的构造
    ///
    /// 名称不能为空白，电量必须在 `0..=100` 内。
    pub fn try_new(name: impl Into<String>, energy: u32) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(RobotError::EmptyName);
        }
        if energy > u32::from(MAX_ENERGY) {
            return Err(RobotError::InvalidEnergy { name, energy });
        }
        // energy <= 100，转换不会丢失
        Ok(Self::new(name, energy as u8))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn energy(&self) -> u8 {
        self.energy
    }

    pub fn is_powered_on(&self) -> bool {
        self.powered_on
    }

    /// "on" / "off"
    pub fn state_label(&self) -> &'static str {
        if self.powered_on { "on" } else { "off" }
    }

    /// 上电：只有电量大于 0 时才成功
    pub fn power_on(&mut self) -> RobotEvent {
        if self.energy > 0 {
            self.powered_on = true;
            trace!(robot = %self.name, "powered on");
            RobotEvent::PoweredOn {
                name: self.name.clone(),
            }
        } else {
            RobotEvent::PowerOnRefused {
                name: self.name.clone(),
            }
        }
    }

    /// 断电（无条件）
    pub fn power_off(&mut self) -> RobotEvent {
        self.powered_on = false;
        trace!(robot = %self.name, "powered off");
        RobotEvent::PoweredOff {
            name: self.name.clone(),
        }
    }

    pub fn describe(&self) -> String {
        format!(
            "Robot {} | Battery: {}% | State: {}",
            self.name,
            self.energy,
            self.state_label()
        )
    }

    /// 充电，结果截断到 `MAX_ENERGY`
    pub fn recharge(&mut self, amount: u32) -> RobotEvent {
        let charged = u32::from(self.energy).saturating_add(amount);
        self.energy = charged.min(u32::from(MAX_ENERGY)) as u8;
        trace!(robot = %self.name, energy = self.energy, "recharged");
        RobotEvent::Recharged {
            name: self.name.clone(),
            energy: self.energy,
        }
    }

    pub fn greet(&self) -> RobotEvent {
        RobotEvent::Greeted {
            name: self.name.clone(),
        }
    }

    /// 消耗电量，下限为 0
    pub(crate) fn drain(&mut self, amount: u8) {
        self.energy = self.energy.saturating_sub(amount);
    }
}

impl fmt::Display for Robot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe())
    }
}

impl Entity for Robot {
    fn base(&self) -> &Robot {
        self
    }

    fn base_mut(&mut self) -> &mut Robot {
        self
    }

    fn kind(&self) -> EntityKind {
        EntityKind::Robot
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_robot_is_off() {
        let robot = Robot::new("R2D2", 80);
        assert_eq!(robot.name(), "R2D2");
        assert_eq!(robot.energy(), 80);
        assert!(!robot.is_powered_on());
        assert_eq!(robot.describe(), "Robot R2D2 | Battery: 80% | State: off");
    }

    #[test]
    fn test_new_clamps_energy() {
        let robot = Robot::new("Overcharged", 250);
        assert_eq!(robot.energy(), MAX_ENERGY);
    }

    #[test]
    fn test_default_energy_constructor() {
        let robot = Robot::with_default_energy("R2D2");
        assert_eq!(robot.energy(), DEFAULT_ENERGY);
        assert_eq!(robot.energy(), 100);
        assert!(!robot.is_powered_on());
        assert_eq!(robot, Robot::new("R2D2", 100));
    }

    #[test]
    fn test_try_new_validation() {
        assert!(Robot::try_new("R2D2", 100).is_ok());
        assert!(matches!(
            Robot::try_new("  ", 50),
            Err(RobotError::EmptyName)
        ));
        match Robot::try_new("R2D2", 101) {
            Err(RobotError::InvalidEnergy { name, energy }) => {
                assert_eq!(name, "R2D2");
                assert_eq!(energy, 101);
            },
            other => panic!("Expected InvalidEnergy, got {:?}", other),
        }
    }

    #[test]
    fn test_power_on_reflected_in_describe() {
        let mut robot = Robot::new("R2D2", 80);
        let event = robot.power_on();
        assert_eq!(event.to_string(), "R2D2 is powered on.");
        assert!(robot.is_powered_on());
        assert_eq!(robot.describe(), "Robot R2D2 | Battery: 80% | State: on");
    }

    #[test]
    fn test_power_on_refused_without_energy() {
        let mut robot = Robot::new("Empty", 0);
        let event = robot.power_on();
        assert!(event.is_refusal());
        assert!(!robot.is_powered_on());
        assert_eq!(robot.energy(), 0);
    }

    #[test]
    fn test_power_off_is_unconditional() {
        let mut robot = Robot::new("R2D2", 80);
        assert_eq!(robot.power_off().to_string(), "R2D2 powered off.");
        assert!(!robot.is_powered_on());

        let _ = robot.power_on();
        let _ = robot.power_off();
        assert!(!robot.is_powered_on());
    }

    #[test]
    fn test_recharge_clamps_at_max() {
        let mut robot = Robot::new("Robot IIE", 90);
        let event = robot.recharge(20);
        assert_eq!(robot.energy(), 100);
        assert_eq!(
            event.to_string(),
            "Robot IIE has been recharged. Current battery: 100%"
        );

        let _ = robot.recharge(u32::MAX);
        assert_eq!(robot.energy(), 100);
    }

    #[test]
    fn test_recharge_zero_is_noop() {
        let mut robot = Robot::new("Robocop", 70);
        let _ = robot.recharge(0);
        assert_eq!(robot.energy(), 70);
    }

    #[test]
    fn test_greet_does_not_change_state() {
        let robot = Robot::new("R2D2", 80);
        let before = robot.clone();
        assert_eq!(
            robot.greet().to_string(),
            "Hello, I am R2D2 and I am ready to serve you."
        );
        assert_eq!(robot, before);
    }

    #[test]
    fn test_display_matches_describe() {
        let robot = Robot::new("R2D2", 80);
        assert_eq!(robot.to_string(), robot.describe());
    }

    #[test]
    fn test_equality_includes_power_state() {
        let a = Robot::new("R2D2", 80);
        let mut b = Robot::new("R2D2", 80);
        assert_eq!(a, b);
        let _ = b.power_on();
        assert_ne!(a, b);
    }

    #[test]
    fn test_plain_robot_has_no_mobile_view() {
        let mut robot = Robot::new("R2D2", 80);
        assert_eq!(robot.kind(), EntityKind::Robot);
        assert!(robot.as_mobile().is_none());
        assert!(robot.as_mobile_mut().is_none());
    }
}
