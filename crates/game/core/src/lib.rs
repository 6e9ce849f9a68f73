//! Deterministic attack resolution for armored tabletop combat.
//!
//! `tohit-core` decides whether an attack declaration is legal and, if it is,
//! computes its target number as a base skill plus an ordered, labelled chain
//! of modifiers. Resolution reads the battlefield through the view traits in
//! [`env`] and never writes to them; the only mutable state the core owns is
//! [`RoundUsageFlags`], written by [`ActionQueue::commit`].
pub mod action;
pub mod combat;
pub mod config;
pub mod env;
pub mod error;
pub mod geometry;
pub mod resolve;
pub mod state;
pub mod tohit;

pub use action::{
    ActionQueue, AttackAction, AttackDeclaration, AttackKind, CommitOutcome, QueueError,
    QueueState, Report, ReportArg, ReportSink, TargetRef,
};
pub use combat::{MeleeKind, MeleeSpec, expected_damage};
pub use config::{RulesConfig, WeightClass};
pub use env::{
    BattlefieldSnapshot, BoardSnapshot, BoardView, EntityView, Env, GameOptionsView,
    OptionsSnapshot, RosterSnapshot, RosterView, UnitSnapshot,
};
pub use error::{ErrorSeverity, GameError};
pub use geometry::{Arc, Coords, Facing, HitTable, SideTable};
pub use resolve::{
    AttackContext, Gate, Rejection, ResolveError, check_legality, is_legal, resolve, usage_marks,
};
pub use state::{EntityId, EquipmentId, PlayerId, RoundUsageFlags, TeamId, UsageMark};
pub use tohit::{Modifier, ModifierStack, ModifierStage, ToHitResult, ToHitValue};
