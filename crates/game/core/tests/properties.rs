mod common;

use common::*;
use proptest::prelude::*;
use tohit_core::env::{Actuator, Location, MoveMode, Movement, Posture, Side};
use tohit_core::geometry::{Bearing, is_in_arc, select_side_table};
use tohit_core::{Arc, Coords, Facing, SideTable, ToHitResult};

fn facing() -> impl Strategy<Value = Facing> {
    prop::sample::select(vec![
        Facing::N,
        Facing::NE,
        Facing::SE,
        Facing::S,
        Facing::SW,
        Facing::NW,
    ])
}

fn move_mode() -> impl Strategy<Value = MoveMode> {
    prop::sample::select(vec![
        MoveMode::Stationary,
        MoveMode::Walked,
        MoveMode::Ran,
        MoveMode::Jumped,
    ])
}

fn arm_actuator() -> impl Strategy<Value = Actuator> {
    prop::sample::select(vec![Actuator::UpperArm, Actuator::LowerArm, Actuator::Hand])
}

proptest! {
    /// Forward, both sides and rear cover the circle without overlap.
    #[test]
    fn prop_arcs_partition_the_circle(
        x in -8i32..8,
        y in -8i32..8,
        facing in facing(),
    ) {
        let origin = Coords::new(0, 0);
        let target = Coords::new(x, y);
        prop_assume!(target != origin);

        let hits = [Arc::Forward, Arc::RightSide, Arc::Rear, Arc::LeftSide]
            .into_iter()
            .filter(|&arc| is_in_arc(origin, facing, target, arc))
            .count();
        prop_assert_eq!(hits, 1);

        if is_in_arc(origin, facing, target, Arc::Forward) {
            prop_assert!(
                is_in_arc(origin, facing, target, Arc::LeftArm)
                    && is_in_arc(origin, facing, target, Arc::RightArm)
            );
        }
    }

    /// Swapping the two hexes turns the bearing around.
    #[test]
    fn prop_bearings_are_antisymmetric(x in -8i32..8, y in -8i32..8) {
        let origin = Coords::new(3, 3);
        let target = Coords::new(x, y);
        prop_assume!(target != origin);

        let there = Bearing::between(origin, target).map(Bearing::steps);
        let back = Bearing::between(target, origin).map(Bearing::steps);
        prop_assert_eq!(back, there.map(|steps| (steps + 12) % 24));
        prop_assert_eq!(origin.distance(target), target.distance(origin));
    }

    /// An attacker straight ahead of the target always strikes the front.
    #[test]
    fn prop_attack_from_ahead_hits_front(facing in facing(), steps in 1i32..5) {
        let target = Coords::new(6, 6);
        let mut attacker = target;
        for _ in 0..steps {
            attacker = attacker.translated(facing);
        }
        prop_assert_eq!(select_side_table(attacker, target, Some(facing)), SideTable::Front);
    }

    /// Target number equals base plus every listed delta, stages never go
    /// backwards, and resolving twice gives the same answer.
    #[test]
    fn prop_punch_breakdown_is_consistent(
        weight in 20u32..=100,
        piloting in 0i32..8,
        attacker_mode in move_mode(),
        target_mode in move_mode(),
        target_hexes in 0u32..30,
        destroyed in prop::collection::vec(arm_actuator(), 0..3),
        evading in any::<bool>(),
        arm in prop::sample::select(vec![Side::Left, Side::Right]),
    ) {
        let mut scenario = Scenario::duel();
        {
            let attacker = scenario.attacker();
            attacker.weight = weight;
            attacker.piloting = piloting;
            attacker.movement = Movement::new(attacker_mode, 2);
            for actuator in destroyed {
                attacker.destroy_actuator(Location::arm(arm), actuator);
            }
        }
        {
            let target = scenario.target();
            target.movement = Movement::new(target_mode, target_hexes);
            if evading {
                target.posture = Posture::EVADING;
            }
        }

        let first = scenario.resolve(punch(arm));
        let second = scenario.resolve(punch(arm));
        prop_assert_eq!(&first, &second);

        let ToHitResult::Value(breakdown) = &first else {
            return Err(TestCaseError::fail(format!("punch should be legal: {first}")));
        };
        prop_assert!(breakdown.is_consistent());
        prop_assert!(breakdown
            .modifiers
            .windows(2)
            .all(|pair| pair[0].stage <= pair[1].stage));
        prop_assert!(breakdown.modifiers.iter().all(|m| m.delta != 0));
    }
}
