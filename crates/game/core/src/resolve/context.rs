//! Everything one resolution reads, looked up once.
use super::error::ResolveError;
use crate::action::{AttackAction, AttackDeclaration, TargetRef};
use crate::env::{
    BoardView, Building, EntityView, Env, EquipmentKind, GameOptionsView, Location, Mounted,
    UnitClass, keys,
};
use crate::geometry::{Arc, Coords, Facing, derive_elevation, is_in_arc};
use crate::state::{PodId, RoundUsageFlags};

/// Resolved target of a declaration.
#[derive(Clone, Copy)]
pub enum Target<'a> {
    Unit(&'a dyn EntityView),
    Hex(Coords),
    Building {
        coords: Coords,
        building: &'a Building,
    },
    Pod {
        carrier: &'a dyn EntityView,
        pod: PodId,
    },
}

impl<'a> Target<'a> {
    pub fn position(&self) -> Coords {
        match self {
            Self::Unit(unit) => unit.position(),
            Self::Hex(coords) | Self::Building { coords, .. } => *coords,
            Self::Pod { carrier, .. } => carrier.position(),
        }
    }

    pub fn unit(&self) -> Option<&'a dyn EntityView> {
        match self {
            Self::Unit(unit) => Some(*unit),
            _ => None,
        }
    }
}

/// Attacker, target, referenced equipment and views for one declaration.
pub struct AttackContext<'a> {
    pub env: Env<'a>,
    pub declaration: AttackDeclaration,
    pub attacker: &'a dyn EntityView,
    pub target: Target<'a>,
    pub flags: &'a RoundUsageFlags,
    /// Club, weapon or searchlight named by the declaration.
    pub equipment: Option<&'a Mounted>,
    /// Ammunition bin linked to `equipment`.
    pub ammo: Option<&'a Mounted>,
    /// Limb location that delivers a punch, kick, brush-off or club blow.
    pub limb: Option<Location>,
}

impl<'a> AttackContext<'a> {
    /// Looks up every reference in `declaration`.
    ///
    /// # Errors
    ///
    /// Fails when the attacker, target or referenced equipment does not exist,
    /// or the equipment is of the wrong type for the attack.
    pub fn build(
        env: Env<'a>,
        declaration: &AttackDeclaration,
        flags: &'a RoundUsageFlags,
    ) -> Result<Self, ResolveError> {
        let attacker = env
            .entity(declaration.attacker())
            .ok_or(ResolveError::AttackerNotFound(declaration.attacker()))?;
        let target = resolve_target(env, declaration.target())?;
        let (equipment, ammo) = resolve_equipment(attacker, declaration.action())?;
        let limb = striking_limb(attacker, declaration.action(), equipment);

        Ok(Self {
            env,
            declaration: *declaration,
            attacker,
            target,
            flags,
            equipment,
            ammo,
            limb,
        })
    }

    pub fn board(&self) -> &'a dyn BoardView {
        self.env.board()
    }

    pub fn options(&self) -> &'a dyn GameOptionsView {
        self.env.options()
    }

    pub fn target_unit(&self) -> Option<&'a dyn EntityView> {
        self.target.unit()
    }

    pub fn distance(&self) -> u32 {
        self.attacker.position().distance(self.target.position())
    }

    pub fn attacker_level(&self) -> i32 {
        derive_elevation(self.board(), self.attacker)
    }

    pub fn attacker_top(&self) -> i32 {
        self.attacker_level() + self.attacker.height()
    }

    pub fn target_level(&self) -> i32 {
        match self.target {
            Target::Unit(unit) => derive_elevation(self.board(), unit),
            Target::Pod { carrier, .. } => derive_elevation(self.board(), carrier),
            Target::Hex(coords) | Target::Building { coords, .. } => self.board().level(coords),
        }
    }

    pub fn target_height(&self) -> i32 {
        match self.target {
            Target::Unit(unit) => unit.height(),
            Target::Building { building, .. } => building.height,
            Target::Hex(_) | Target::Pod { .. } => 0,
        }
    }

    pub fn target_top(&self) -> i32 {
        self.target_level() + self.target_height()
    }

    pub fn targets_self(&self) -> bool {
        self.target_unit()
            .is_some_and(|unit| unit.id() == self.attacker.id())
    }

    pub fn target_is_friendly(&self) -> bool {
        self.target_unit()
            .is_some_and(|unit| unit.id() != self.attacker.id() && self.attacker.is_friendly_to(unit))
    }

    pub fn friendly_fire_allowed(&self) -> bool {
        self.options().is_enabled(keys::FRIENDLY_FIRE)
    }

    /// Weapons fired from `location` this turn, per the host or this round's commits.
    pub fn fired_from(&self, location: Location) -> bool {
        self.attacker.weapon_fired_from(location)
            || self.flags.fired_from(self.attacker.id(), location)
    }

    /// Arc test from the attacker's hex. Units without a facing see all around.
    pub fn target_in_arc(&self, facing: Option<Facing>, arc: Arc) -> bool {
        match facing {
            Some(facing) => is_in_arc(self.attacker.position(), facing, self.target.position(), arc),
            None => true,
        }
    }
}

fn resolve_target<'a>(env: Env<'a>, target: TargetRef) -> Result<Target<'a>, ResolveError> {
    match target {
        TargetRef::Entity(id) => env
            .entity(id)
            .map(Target::Unit)
            .ok_or_else(|| ResolveError::missing_entity(id)),
        TargetRef::Hex(coords) => env
            .board()
            .hex(coords)
            .map(|_| Target::Hex(coords))
            .ok_or_else(|| ResolveError::missing_hex(coords)),
        TargetRef::Building(coords) => env
            .board()
            .building_at(coords)
            .map(|building| Target::Building { coords, building })
            .ok_or_else(|| ResolveError::TargetNotFound(format!("building at {coords}"))),
        TargetRef::Pod { carrier, pod } => env
            .entity(carrier)
            .filter(|unit| unit.attached_pods().contains(&pod))
            .map(|carrier| Target::Pod { carrier, pod })
            .ok_or_else(|| ResolveError::TargetNotFound(format!("pod {} on {carrier}", pod.0))),
    }
}

/// Quads kick with their front legs, which live in the arm locations.
fn striking_limb(
    attacker: &dyn EntityView,
    action: AttackAction,
    equipment: Option<&Mounted>,
) -> Option<Location> {
    match action {
        AttackAction::Punch { arm } | AttackAction::BrushOff { arm } => Some(Location::arm(arm)),
        AttackAction::Kick { leg } if attacker.class() == UnitClass::QuadMek => {
            Some(Location::arm(leg))
        }
        AttackAction::Kick { leg } => Some(Location::leg(leg)),
        AttackAction::Club { .. } => equipment.map(|club| club.location),
        _ => None,
    }
}

type ResolvedEquipment<'a> = (Option<&'a Mounted>, Option<&'a Mounted>);

fn resolve_equipment<'a>(
    attacker: &'a dyn EntityView,
    action: AttackAction,
) -> Result<ResolvedEquipment<'a>, ResolveError> {
    match action {
        AttackAction::Club { club } => {
            let mounted = find_mounted(attacker, club)?;
            expect_kind(attacker, mounted, "melee weapon", |kind| {
                matches!(kind, EquipmentKind::Melee(_))
            })?;
            Ok((Some(mounted), None))
        }
        AttackAction::WeaponFire { weapon, .. } | AttackAction::GuidedFire { weapon } => {
            let mounted = find_mounted(attacker, weapon)?;
            expect_kind(attacker, mounted, "weapon", |kind| {
                matches!(kind, EquipmentKind::Weapon(_))
            })?;
            let ammo = match mounted.linked_ammo {
                Some(bin) => {
                    let bin = find_mounted(attacker, bin)?;
                    expect_kind(attacker, bin, "ammunition bin", |kind| {
                        matches!(kind, EquipmentKind::Ammo(_))
                    })?;
                    Some(bin)
                }
                None => None,
            };
            Ok((Some(mounted), ammo))
        }
        AttackAction::Searchlight => Ok((attacker.searchlight(), None)),
        _ => Ok((None, None)),
    }
}

fn find_mounted(
    attacker: &dyn EntityView,
    id: crate::state::EquipmentId,
) -> Result<&Mounted, ResolveError> {
    attacker
        .mounted(id)
        .ok_or(ResolveError::EquipmentNotFound {
            entity: attacker.id(),
            equipment: id,
        })
}

fn expect_kind(
    attacker: &dyn EntityView,
    mounted: &Mounted,
    expected: &'static str,
    is_kind: fn(&EquipmentKind) -> bool,
) -> Result<(), ResolveError> {
    if is_kind(&mounted.kind) {
        Ok(())
    } else {
        Err(ResolveError::WrongEquipment {
            entity: attacker.id(),
            equipment: mounted.id,
            expected,
        })
    }
}
