//! 默认花名册的完整输出测试
//!
//! 验证驱动序列对内置花名册产生的逐行输出。

use robolab_core::{
    Driver, Entity, MobileRobot, Robot, RobotEvent, RosterConfig, ScenarioConfig, WriterSink,
    run_roster,
};

const EXPECTED_TRANSCRIPT: &str = "\
Robot R2D2 | Battery: 80% | State: off
R2D2 is powered on.
Hello, I am R2D2 and I am ready to serve you.
R2D2 has been recharged. Current battery: 100%
Robot R2D2 | Battery: 100% | State: on
R2D2 powered off.
MobileRobot Wall-E | Position: (0, 0) | Battery: 50% | State: off
Wall-E is powered on.
Wall-E moved to (2, 3).
Hello, I am Wall-E and I am ready to serve you.
Wall-E has been recharged. Current battery: 60%
MobileRobot Wall-E | Position: (2, 3) | Battery: 60% | State: on
Wall-E powered off.
Robot Robocop | Battery: 70% | State: off
Robocop is powered on.
Hello, I am Robocop and I am ready to serve you.
Robocop has been recharged. Current battery: 90%
Robot Robocop | Battery: 90% | State: on
Robocop powered off.
Robot Robot IIE | Battery: 90% | State: off
Robot IIE is powered on.
Hello, I am Robot IIE and I am ready to serve you.
Robot IIE has been recharged. Current battery: 100%
Robot Robot IIE | Battery: 100% | State: on
Robot IIE powered off.
";

#[test]
fn test_default_roster_transcript() {
    let mut sink = WriterSink::new(Vec::new());
    let summary = run_roster(&RosterConfig::default(), &mut sink).unwrap();

    let output = String::from_utf8(sink.into_inner()).unwrap();
    assert_eq!(output, EXPECTED_TRANSCRIPT);
    assert_eq!(output.lines().count(), 25);
    assert_eq!(summary.entities, 4);
    assert_eq!(summary.events, 25);
    assert_eq!(summary.refusals, 0);
}

/// 手工构造的实体列表与配置构造的结果一致
#[test]
fn test_literal_roster_matches_config() {
    let mut entities: Vec<Box<dyn Entity>> = vec![
        Box::new(Robot::new("R2D2", 80)),
        Box::new(MobileRobot::new("Wall-E", 50)),
        Box::new(Robot::new("Robocop", 70)),
        Box::new(Robot::new("Robot IIE", 90)),
    ];
    let mut recorded: Vec<RobotEvent> = Vec::new();
    Driver::new(ScenarioConfig::default(), &mut recorded)
        .run(&mut entities)
        .unwrap();

    let joined: String = recorded.iter().map(|e| format!("{}\n", e)).collect();
    assert_eq!(joined, EXPECTED_TRANSCRIPT);
}

/// 只有移动机器人的描述包含坐标
#[test]
fn test_describe_position_only_for_mobile() {
    let entities: Vec<Box<dyn Entity>> = RosterConfig::default().build_entities().unwrap();
    for entity in &entities {
        let has_position = entity.describe().contains("Position:");
        assert_eq!(has_position, entity.as_mobile().is_some(), "{}", entity.name());
    }
}
