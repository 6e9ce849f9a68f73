//! In-memory scenario builder shared by the integration tests.
#![allow(dead_code)]

use tohit_core::env::{
    AmmoBin, EquipmentKind, HexTerrain, Mounted, Munition, UnitClass, WeaponProfile, modes,
};
use tohit_core::{
    AttackAction, AttackDeclaration, BattlefieldSnapshot, BoardSnapshot, Coords, EntityId, Env,
    EquipmentId, Facing, MeleeKind, OptionsSnapshot, PlayerId, RoundUsageFlags, TargetRef,
    ToHitResult, UnitSnapshot, env::Location, env::Side, resolve,
};

pub const BLUE: PlayerId = PlayerId(1);
pub const RED: PlayerId = PlayerId(2);

pub const ATTACKER: EntityId = EntityId(1);
pub const TARGET: EntityId = EntityId(2);

pub fn mek(id: EntityId, owner: PlayerId, x: i32, y: i32) -> UnitSnapshot {
    UnitSnapshot::new(id, UnitClass::BipedMek)
        .with_owner(owner)
        .at(Coords::new(x, y))
}

pub fn unit(id: EntityId, class: UnitClass, owner: PlayerId, x: i32, y: i32) -> UnitSnapshot {
    UnitSnapshot::new(id, class)
        .with_owner(owner)
        .at(Coords::new(x, y))
}

pub fn melee(id: u32, kind: MeleeKind, location: Location) -> Mounted {
    Mounted::new(
        EquipmentId(id),
        kind.to_string(),
        EquipmentKind::Melee(kind),
        location,
    )
}

/// Energy weapon: short 3, medium 6, long 9.
pub fn laser(id: u32, location: Location) -> Mounted {
    Mounted::new(
        EquipmentId(id),
        "Medium Laser",
        EquipmentKind::Weapon(WeaponProfile {
            min_range: 0,
            short: 3,
            medium: 6,
            long: 9,
            uses_ammo: false,
        }),
        location,
    )
}

/// Ammunition-fed launcher with a minimum range of 3, linked to `ammo`.
pub fn launcher(id: u32, ammo: u32, location: Location) -> Mounted {
    Mounted::new(
        EquipmentId(id),
        "LRM 10",
        EquipmentKind::Weapon(WeaponProfile {
            min_range: 3,
            short: 7,
            medium: 14,
            long: 21,
            uses_ammo: true,
        }),
        location,
    )
    .linked_to(EquipmentId(ammo))
}

pub fn ammo(id: u32, munition: Munition, shots: u32) -> Mounted {
    Mounted::new(
        EquipmentId(id),
        format!("{munition} ammo"),
        EquipmentKind::Ammo(AmmoBin { munition, shots }),
        Location::LeftTorso,
    )
}

pub fn searchlight(id: u32) -> Mounted {
    Mounted::new(
        EquipmentId(id),
        "Searchlight",
        EquipmentKind::Searchlight,
        Location::CenterTorso,
    )
    .with_mode(modes::ON)
}

pub fn gear(id: u32, kind: EquipmentKind, location: Location) -> Mounted {
    Mounted::new(EquipmentId(id), format!("{kind:?}"), kind, location)
}

pub fn terrain(level: i32) -> HexTerrain {
    HexTerrain {
        level,
        ..HexTerrain::OPEN
    }
}

/// A 12 by 12 open board plus the usage flags of the current round.
pub struct Scenario {
    pub battlefield: BattlefieldSnapshot,
    pub flags: RoundUsageFlags,
}

impl Scenario {
    pub fn new() -> Self {
        Self {
            battlefield: BattlefieldSnapshot {
                board: BoardSnapshot::new(12, 12),
                ..BattlefieldSnapshot::default()
            },
            flags: RoundUsageFlags::new(),
        }
    }

    /// Blue mek at (4, 5) facing north, red mek directly north of it facing
    /// south. Both are stationary 50-ton meks with piloting 5, gunnery 4.
    pub fn duel() -> Self {
        Self::new()
            .with_unit(mek(ATTACKER, BLUE, 4, 5).facing_to(Facing::N))
            .with_unit(mek(TARGET, RED, 4, 4).facing_to(Facing::S))
    }

    pub fn with_unit(mut self, unit: UnitSnapshot) -> Self {
        self.battlefield.roster.units.push(unit);
        self
    }

    pub fn with_options(mut self, options: OptionsSnapshot) -> Self {
        self.battlefield.options = options;
        self
    }

    pub fn unit_mut(&mut self, id: EntityId) -> &mut UnitSnapshot {
        self.battlefield
            .roster
            .unit_mut(id)
            .expect("unit is part of the scenario")
    }

    pub fn attacker(&mut self) -> &mut UnitSnapshot {
        self.unit_mut(ATTACKER)
    }

    pub fn target(&mut self) -> &mut UnitSnapshot {
        self.unit_mut(TARGET)
    }

    pub fn set_hex(&mut self, x: i32, y: i32, hex: HexTerrain) {
        self.battlefield.board.set_hex(Coords::new(x, y), hex);
    }

    pub fn env(&self) -> Env<'_> {
        self.battlefield.env()
    }

    pub fn resolve(&self, declaration: AttackDeclaration) -> ToHitResult {
        resolve(self.env(), &declaration, &self.flags).expect("declaration references exist")
    }

    /// Reason of an impossible result, if any.
    pub fn rejection(&self, declaration: AttackDeclaration) -> Option<String> {
        match self.resolve(declaration) {
            ToHitResult::Impossible { reason } => Some(reason),
            _ => None,
        }
    }
}

pub fn declare(action: AttackAction) -> AttackDeclaration {
    AttackDeclaration::against(ATTACKER, TARGET, action)
}

pub fn declare_at(target: TargetRef, action: AttackAction) -> AttackDeclaration {
    AttackDeclaration::new(ATTACKER, target, action)
}

pub fn punch(arm: Side) -> AttackDeclaration {
    declare(AttackAction::Punch { arm })
}

pub fn kick(leg: Side) -> AttackDeclaration {
    declare(AttackAction::Kick { leg })
}

pub fn club(id: u32) -> AttackDeclaration {
    declare(AttackAction::Club {
        club: EquipmentId(id),
    })
}

pub fn fire(weapon: u32) -> AttackDeclaration {
    declare(AttackAction::WeaponFire {
        weapon: EquipmentId(weapon),
        aim: None,
    })
}

pub fn labels(result: &ToHitResult) -> Vec<&str> {
    result.modifiers().iter().map(|m| m.label.as_str()).collect()
}
