//! 驱动序列
//!
//! 按顺序遍历花名册，对每个实体执行同一组操作：
//!
//! 1. 打印状态摘要
//! 2. 上电
//! 3. 如果是移动机器人，移动 `(move_dx, move_dy)`
//! 4. 打招呼
//! 5. 充电 `recharge_amount`
//! 6. 再次打印状态摘要
//! 7. 断电
//!
//! 第 3 步是按具体类型判断的（[`EntityKind::Mobile`]），而不是按能力判断。

use tracing::{info, info_span, warn};

use crate::error::Result;
use crate::event::{EventSink, RobotEvent, report};
use crate::robot::{Entity, EntityKind};
use crate::roster::{RosterConfig, ScenarioConfig};

/// 一次运行的统计
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    /// 处理的实体数
    pub entities: usize,
    /// 输出的事件数
    pub events: usize,
    /// 其中被拒绝的操作数
    pub refusals: usize,
}

/// 驱动器：持有序列参数和事件接收端
pub struct Driver<'a> {
    scenario: ScenarioConfig,
    sink: &'a mut dyn EventSink,
    summary: RunSummary,
}

impl<'a> Driver<'a> {
    pub fn new(scenario: ScenarioConfig, sink: &'a mut dyn EventSink) -> Self {
        Self {
            scenario,
            sink,
            summary: RunSummary::default(),
        }
    }

    /// 依次对所有实体运行序列
    pub fn run(mut self, entities: &mut [Box<dyn Entity>]) -> Result<RunSummary> {
        for entity in entities.iter_mut() {
            self.run_entity(entity.as_mut())?;
        }
        info!(
            entities = self.summary.entities,
            events = self.summary.events,
            refusals = self.summary.refusals,
            "sequence finished"
        );
        Ok(self.summary)
    }

    /// 对单个实体运行序列
    pub fn run_entity(&mut self, entity: &mut dyn Entity) -> Result<()> {
        let span = info_span!("entity", robot = %entity.name(), kind = %entity.kind());
        let _guard = span.enter();

        self.emit(RobotEvent::Described {
            description: entity.describe(),
        })?;
        self.emit(entity.power_on())?;

        if entity.kind() == EntityKind::Mobile {
            match entity.as_mobile_mut() {
                Some(mobile) => {
                    let event = mobile.move_by(self.scenario.move_dx, self.scenario.move_dy);
                    self.emit(event)?;
                },
                None => warn!("entity reports kind=mobile but has no mobile view, move skipped"),
            }
        }

        self.emit(entity.greet())?;
        self.emit(entity.recharge(self.scenario.recharge_amount))?;
        self.emit(RobotEvent::Described {
            description: entity.describe(),
        })?;
        self.emit(entity.power_off())?;

        self.summary.entities += 1;
        Ok(())
    }

    fn emit(&mut self, event: RobotEvent) -> Result<()> {
        self.summary.events += 1;
        if event.is_refusal() {
            self.summary.refusals += 1;
        }
        report(&mut *self.sink, event)
    }
}

/// 按配置构造实体并运行序列
pub fn run_roster(config: &RosterConfig, sink: &mut dyn EventSink) -> Result<RunSummary> {
    let mut entities = config.build_entities()?;
    Driver::new(config.scenario, sink).run(&mut entities)
}
