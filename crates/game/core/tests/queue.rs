mod common;

use common::*;
use tohit_core::action::report::codes;
use tohit_core::env::{Location, Posture, Side, UnitClass};
use tohit_core::{
    ActionQueue, AttackAction, AttackKind, Coords, EntityId, EquipmentId, Facing, QueueError,
    QueueState, Report, ReportArg, TargetRef, ToHitResult,
};

fn armed_duel() -> Scenario {
    let mut scenario = Scenario::duel();
    scenario.attacker().equipment.push(laser(30, Location::RightArm));
    scenario.attacker().equipment.push(laser(31, Location::CenterTorso));
    scenario.attacker().equipment.push(searchlight(20));
    scenario
}

#[test]
fn add_requires_a_selected_unit() {
    let scenario = armed_duel();
    let mut queue = ActionQueue::new();

    assert_eq!(
        queue.add(scenario.env(), &scenario.flags, fire(30)),
        Err(QueueError::NoEntitySelected)
    );
    assert_eq!(queue.abort(), Err(QueueError::NoEntitySelected));
    assert_eq!(queue.state(), QueueState::Empty);
}

#[test]
fn add_rejects_declarations_by_other_units() {
    let scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(TARGET);

    assert_eq!(
        queue.add(scenario.env(), &scenario.flags, fire(30)),
        Err(QueueError::WrongAttacker {
            selected: TARGET,
            actual: ATTACKER,
        })
    );
}

#[test]
fn add_rejects_illegal_declarations_with_their_reason() {
    let mut scenario = armed_duel();
    scenario.attacker().posture = Posture::PRONE;
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);

    assert_eq!(
        queue.add(scenario.env(), &scenario.flags, punch(Side::Left)),
        Err(QueueError::Illegal {
            reason: "Attacker is prone".into()
        })
    );
    assert!(queue.is_empty());
}

#[test]
fn add_reports_faults_separately() {
    let scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);

    let err = queue
        .add(scenario.env(), &scenario.flags, fire(99))
        .expect_err("weapon 99 does not exist");
    assert!(matches!(err, QueueError::Fault(_)));
}

#[test]
fn queued_marks_constrain_later_additions() {
    let scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);

    let preview = queue
        .add(scenario.env(), &scenario.flags, fire(30))
        .expect("first shot is legal");
    assert!(preview.value().is_some());

    assert_eq!(
        queue.add(scenario.env(), &scenario.flags, fire(30)),
        Err(QueueError::Illegal {
            reason: "Weapon already fired this round".into()
        })
    );
    assert_eq!(
        queue.add(scenario.env(), &scenario.flags, punch(Side::Right)),
        Err(QueueError::Illegal {
            reason: "Weapons fired from arm this turn".into()
        })
    );
    queue
        .add(scenario.env(), &scenario.flags, punch(Side::Left))
        .expect("left arm is free");

    queue
        .add(
            scenario.env(),
            &scenario.flags,
            declare(AttackAction::Searchlight),
        )
        .expect("searchlight is lit");
    assert_eq!(
        queue.add(
            scenario.env(),
            &scenario.flags,
            declare(AttackAction::Searchlight)
        ),
        Err(QueueError::Illegal {
            reason: "Searchlight already used this round".into()
        })
    );

    assert_eq!(queue.len(), 3);
    assert!(scenario.flags.is_empty());
}

#[test]
fn commit_resolves_forward_targets_first_and_applies_marks() {
    let mut scenario = armed_duel()
        .with_unit(mek(EntityId(3), RED, 4, 7).facing_to(Facing::N));
    scenario
        .attacker()
        .equipment
        .push(laser(33, Location::CenterTorso).rear());

    let rear_shot = tohit_core::AttackDeclaration::against(
        ATTACKER,
        EntityId(3),
        AttackAction::WeaponFire {
            weapon: EquipmentId(33),
            aim: None,
        },
    );

    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    queue
        .add(scenario.env(), &scenario.flags, rear_shot)
        .expect("rear-mounted laser covers the rear arc");
    queue
        .add(scenario.env(), &scenario.flags, punch(Side::Left))
        .expect("punch is legal");

    let mut reports: Vec<Report> = Vec::new();
    let outcome = queue
        .commit(scenario.battlefield.env(), &mut scenario.flags, &mut reports)
        .expect("unit is selected");

    let order: Vec<_> = outcome
        .resolved
        .iter()
        .map(|(declaration, _)| declaration.kind())
        .collect();
    assert_eq!(order, [AttackKind::Punch, AttackKind::WeaponFire]);
    assert!(outcome.dropped.is_empty());
    assert_eq!(queue.state(), QueueState::Committed(ATTACKER));
    assert!(queue.is_empty());

    assert!(scenario.flags.weapon_fired(ATTACKER, EquipmentId(33)));
    assert!(scenario.flags.fired_from(ATTACKER, Location::CenterTorso));
    assert!(!scenario.flags.fired_from(ATTACKER, Location::LeftArm));

    assert_eq!(reports.len(), 2);
    assert!(reports.iter().all(|r| r.code == codes::ATTACK_COMMITTED));
    assert_eq!(reports[0].args[0], ReportArg::Entity(TARGET));
    assert_eq!(reports[1].args[0], ReportArg::Entity(EntityId(3)));
}

#[test]
fn commit_classifies_arcs_from_the_torso_facing_at_commit_time() {
    // Two hexes due east: outside the forward arc, inside the right-arm arc.
    let east = Coords::new(4, 5).translated(Facing::NE).translated(Facing::SE);
    let mut scenario = armed_duel().with_unit(
        mek(EntityId(3), RED, east.x, east.y).facing_to(Facing::N),
    );

    let side_shot = tohit_core::AttackDeclaration::against(
        ATTACKER,
        EntityId(3),
        AttackAction::WeaponFire {
            weapon: EquipmentId(30),
            aim: None,
        },
    );

    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    queue
        .add(scenario.env(), &scenario.flags, side_shot)
        .expect("right-arm laser covers the right side");
    queue
        .add(scenario.env(), &scenario.flags, punch(Side::Left))
        .expect("punch is legal");

    // Torso twist to the north-east brings both targets into the forward arc.
    scenario.attacker().secondary_facing = Some(Facing::NE);

    let mut reports: Vec<Report> = Vec::new();
    let outcome = queue
        .commit(scenario.battlefield.env(), &mut scenario.flags, &mut reports)
        .expect("unit is selected");

    let order: Vec<_> = outcome
        .resolved
        .iter()
        .map(|(declaration, _)| declaration.kind())
        .collect();
    assert_eq!(order, [AttackKind::WeaponFire, AttackKind::Punch]);
    assert!(outcome.dropped.is_empty());
    assert_eq!(reports[0].args[0], ReportArg::Entity(EntityId(3)));
    assert_eq!(reports[1].args[0], ReportArg::Entity(TARGET));
}

#[test]
fn commit_reports_illuminated_units() {
    let mut scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    queue
        .add(
            scenario.env(),
            &scenario.flags,
            declare(AttackAction::Searchlight),
        )
        .expect("searchlight is lit");

    let mut reports: Vec<Report> = Vec::new();
    queue
        .commit(scenario.battlefield.env(), &mut scenario.flags, &mut reports)
        .expect("unit is selected");

    assert!(scenario.flags.searchlight_used(ATTACKER));
    assert!(scenario.flags.is_illuminated(TARGET));
    assert_eq!(
        reports.last(),
        Some(&Report::new(codes::SEARCHLIGHT_ILLUMINATES, ATTACKER).entity(TARGET))
    );
}

#[test]
fn commit_drops_declarations_that_became_impossible() {
    let mut scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    queue
        .add(scenario.env(), &scenario.flags, fire(31))
        .expect("legal when queued");
    queue
        .add(
            scenario.env(),
            &scenario.flags,
            declare(AttackAction::Searchlight),
        )
        .expect("legal when queued");

    scenario.attacker().equipment[1].destroyed = true;
    scenario.attacker().equipment[2].mode = Some("Off".into());

    let mut reports: Vec<Report> = Vec::new();
    let outcome = queue
        .commit(scenario.battlefield.env(), &mut scenario.flags, &mut reports)
        .expect("unit is selected");

    assert!(outcome.resolved.is_empty());
    let reasons: Vec<_> = outcome.dropped.iter().map(|(_, r)| r.as_str()).collect();
    assert_eq!(reasons, ["Weapon is destroyed", "Searchlight is not lit"]);
    assert!(scenario.flags.is_empty());

    assert_eq!(
        reports,
        [
            Report::new(codes::ATTACK_DROPPED, ATTACKER)
                .text("weapon_fire")
                .text("Weapon is destroyed"),
            Report::new(codes::SEARCHLIGHT_IMPOSSIBLE, ATTACKER).text("Searchlight is not lit"),
        ]
    );
}

#[test]
fn abort_discards_without_touching_flags() {
    let scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    queue
        .add(scenario.env(), &scenario.flags, fire(30))
        .expect("legal");
    queue
        .add(scenario.env(), &scenario.flags, fire(31))
        .expect("legal");

    assert_eq!(queue.abort(), Ok(2));
    assert_eq!(queue.state(), QueueState::Aborted(ATTACKER));
    assert!(scenario.flags.is_empty());

    let mut flags = scenario.flags.clone();
    let mut reports: Vec<Report> = Vec::new();
    assert_eq!(
        queue
            .commit(scenario.env(), &mut flags, &mut reports)
            .map(|outcome| outcome.resolved.len()),
        Err(QueueError::NoEntitySelected)
    );
}

#[test]
fn select_starts_a_fresh_queue() {
    let scenario = armed_duel();
    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    queue
        .add(scenario.env(), &scenario.flags, fire(30))
        .expect("legal");

    queue.select(ATTACKER);
    assert!(queue.is_empty());
    queue
        .add(scenario.env(), &scenario.flags, fire(30))
        .expect("marks from the discarded queue no longer apply");
    assert_eq!(queue.pending().count(), 1);
}

#[test]
fn pending_capacity_is_bounded() {
    let mut attacker = mek(ATTACKER, BLUE, 4, 5).facing_to(Facing::N);
    attacker.posture = Posture::PRONE;
    let scenario = Scenario::new()
        .with_unit(attacker)
        .with_unit(unit(TARGET, UnitClass::Infantry, RED, 4, 5));

    let mut queue = ActionQueue::new();
    queue.select(ATTACKER);
    let thrash = declare_at(TargetRef::Entity(TARGET), AttackAction::Thrash);
    for _ in 0..tohit_core::RulesConfig::MAX_PENDING_ACTIONS {
        let preview = queue
            .add(scenario.env(), &scenario.flags, thrash)
            .expect("thrash leaves no marks");
        assert!(matches!(preview, ToHitResult::AutomaticSuccess { .. }));
    }
    assert_eq!(
        queue.add(scenario.env(), &scenario.flags, thrash),
        Err(QueueError::QueueFull)
    );
}
