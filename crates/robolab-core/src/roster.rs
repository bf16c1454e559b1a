//! # 花名册配置
//!
//! 描述驱动序列要运行的实体列表以及序列参数（移动距离、充电量）。
//!
//! 配置文件示例（TOML）：
//!
//! ```toml
//! [scenario]
//! move_dx = 2
//! move_dy = 3
//! recharge_amount = 20
//!
//! [[robots]]
//! name = "R2D2"
//! kind = "robot"
//! energy = 80
//!
//! [[robots]]
//! name = "Wall-E"
//! kind = "mobile"
//! energy = 50
//! ```

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Result, RobotError};
use crate::mobile::MobileRobot;
use crate::robot::{DEFAULT_ENERGY, Entity, EntityKind, MAX_ENERGY, Robot};

/// 花名册配置
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RosterConfig {
    /// 序列参数
    #[serde(default)]
    pub scenario: ScenarioConfig,

    /// 按顺序运行的实体
    #[serde(default)]
    pub robots: Vec<RobotSpec>,
}

impl Default for RosterConfig {
    /// 内置花名册：R2D2、Wall-E、Robocop、Robot IIE
    fn default() -> Self {
        Self {
            scenario: ScenarioConfig::default(),
            robots: vec![
                RobotSpec::robot("R2D2", 80),
                RobotSpec::mobile("Wall-E", 50),
                RobotSpec::robot("Robocop", 70),
                RobotSpec::robot("Robot IIE", 90),
            ],
        }
    }
}

impl RosterConfig {
    /// 从 TOML 文本解析
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: RosterConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// 从文件加载并校验
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&content)?;
        config.validate()?;
        debug!(path = %path.display(), robots = config.robots.len(), "roster loaded");
        Ok(config)
    }

    /// 序列化为 TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string(self)?)
    }

    /// 校验花名册
    ///
    /// - 至少一个实体
    /// - 名称非空且不重复
    /// - 电量不超过上限
    /// - 只有移动机器人可以配置坐标
    pub fn validate(&self) -> Result<()> {
        if self.robots.is_empty() {
            return Err(RobotError::EmptyRoster);
        }

        let mut seen = HashSet::new();
        for spec in &self.robots {
            spec.validate()?;
            if !seen.insert(spec.name.as_str()) {
                return Err(RobotError::DuplicateName(spec.name.clone()));
            }
        }

        Ok(())
    }

    /// 校验后构造实体列表
    pub fn build_entities(&self) -> Result<Vec<Box<dyn Entity>>> {
        self.validate()?;
        self.robots.iter().map(RobotSpec::build).collect()
    }
}

/// 序列参数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScenarioConfig {
    /// 移动机器人每轮的 x 位移
    pub move_dx: i32,

    /// 移动机器人每轮的 y 位移
    pub move_dy: i32,

    /// 每轮充电量（百分比）
    pub recharge_amount: u32,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            move_dx: 2,
            move_dy: 3,
            recharge_amount: 20,
        }
    }
}

/// 单个实体的配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RobotSpec {
    pub name: String,

    #[serde(default)]
    pub kind: EntityKind,

    #[serde(default = "default_energy")]
    pub energy: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub x: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub y: Option<i32>,
}

fn default_energy() -> u32 {
    u32::from(DEFAULT_ENERGY)
}

impl RobotSpec {
    pub fn robot(name: impl Into<String>, energy: u8) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Robot,
            energy: u32::from(energy),
            x: None,
            y: None,
        }
    }

    pub fn mobile(name: impl Into<String>, energy: u8) -> Self {
        Self {
            kind: EntityKind::Mobile,
            ..Self::robot(name, energy)
        }
    }

    /// 指定初始坐标
    pub fn at(mut self, x: i32, y: i32) -> Self {
        self.x = Some(x);
        self.y = Some(y);
        self
    }

    fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(RobotError::EmptyName);
        }
        if self.energy > u32::from(MAX_ENERGY) {
            return Err(RobotError::InvalidEnergy {
                name: self.name.clone(),
                energy: self.energy,
            });
        }
        if self.kind == EntityKind::Robot && (self.x.is_some() || self.y.is_some()) {
            return Err(RobotError::UnexpectedPosition(self.name.clone()));
        }
        Ok(())
    }

    fn build(&self) -> Result<Box<dyn Entity>> {
        let entity: Box<dyn Entity> = match self.kind {
            EntityKind::Robot => Box::new(Robot::try_new(self.name.clone(), self.energy)?),
            EntityKind::Mobile => Box::new(MobileRobot::try_new(
                self.name.clone(),
                self.energy,
                self.x.unwrap_or(0),
                self.y.unwrap_or(0),
            )?),
        };
        Ok(entity)
    }
}
