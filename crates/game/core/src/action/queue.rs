//! Per-unit declaration queue: SELECT, then ADD, then COMMIT or ABORT.
//!
//! ```text
//!            select            add*            commit
//!   Empty ───────────▶ Selected ────▶ Selected ─────────▶ Committed
//!                         │                   abort
//!                         └─────────────────────────────▶ Aborted
//! ```
//!
//! Queued declarations are validated against the round's usage flags with the
//! marks of earlier queued declarations overlaid, so a unit cannot queue the
//! same weapon twice. Nothing touches [`RoundUsageFlags`] until commit, which
//! re-resolves every declaration, front-arc targets first, and writes the
//! surviving marks back in one step.
use arrayvec::ArrayVec;
use tracing::{debug, warn};

use super::declaration::{AttackDeclaration, AttackKind, TargetRef};
use super::error::QueueError;
use super::report::{Report, ReportSink, codes};
use crate::config::RulesConfig;
use crate::env::Env;
use crate::geometry::{Arc, Coords, is_in_arc};
use crate::resolve::{self, ResolveError};
use crate::state::{EntityId, RoundUsageFlags, UsageMark};
use crate::tohit::ToHitResult;

/// Where the queue is in its lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueueState {
    #[default]
    Empty,
    Selected(EntityId),
    Committed(EntityId),
    Aborted(EntityId),
}

#[derive(Clone, Debug, PartialEq, Eq)]
struct PendingAction {
    declaration: AttackDeclaration,
    marks: Vec<UsageMark>,
}

/// What a commit did with each queued declaration, in commit order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CommitOutcome {
    pub entity: EntityId,
    pub resolved: Vec<(AttackDeclaration, ToHitResult)>,
    /// Declarations that stopped being legal between ADD and COMMIT.
    pub dropped: Vec<(AttackDeclaration, String)>,
}

#[derive(Clone, Debug, Default)]
pub struct ActionQueue {
    state: QueueState,
    pending: ArrayVec<PendingAction, { RulesConfig::MAX_PENDING_ACTIONS }>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> QueueState {
        self.state
    }

    pub fn selected(&self) -> Option<EntityId> {
        match self.state {
            QueueState::Selected(entity) => Some(entity),
            _ => None,
        }
    }

    /// Queued declarations in the order they were added.
    pub fn pending(&self) -> impl Iterator<Item = &AttackDeclaration> {
        self.pending.iter().map(|action| &action.declaration)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    /// Starts a new queue for `entity`, discarding anything still pending.
    pub fn select(&mut self, entity: EntityId) {
        if !self.pending.is_empty() {
            debug!(
                previous = ?self.state,
                discarded = self.pending.len(),
                "selection replaced pending declarations"
            );
        }
        self.pending.clear();
        self.state = QueueState::Selected(entity);
        debug!(%entity, "queue selected");
    }

    /// Validates and queues a declaration by the selected unit.
    ///
    /// Returns the preview result. `flags` is only read.
    ///
    /// # Errors
    ///
    /// - [`QueueError::NoEntitySelected`] outside the `Selected` state
    /// - [`QueueError::WrongAttacker`] for another unit's declaration
    /// - [`QueueError::QueueFull`] past the pending capacity
    /// - [`QueueError::Illegal`] when a gate rejects the declaration
    /// - [`QueueError::Fault`] for dangling references
    pub fn add(
        &mut self,
        env: Env<'_>,
        flags: &RoundUsageFlags,
        declaration: AttackDeclaration,
    ) -> Result<ToHitResult, QueueError> {
        let selected = self.selected().ok_or(QueueError::NoEntitySelected)?;
        if declaration.attacker() != selected {
            return Err(QueueError::WrongAttacker {
                selected,
                actual: declaration.attacker(),
            });
        }
        if self.pending.is_full() {
            return Err(QueueError::QueueFull);
        }

        let speculative = flags.overlay(self.pending.iter().flat_map(|action| &action.marks));
        let result = resolve::resolve(env, &declaration, &speculative)?;
        if let ToHitResult::Impossible { reason } = &result {
            return Err(QueueError::Illegal {
                reason: reason.clone(),
            });
        }
        let marks = resolve::usage_marks(env, &declaration, &speculative)?;

        debug!(
            entity = %selected,
            kind = %declaration.kind(),
            pending = self.pending.len() + 1,
            "declaration queued"
        );
        self.pending.push(PendingAction { declaration, marks });
        Ok(result)
    }

    /// Resolves and applies every queued declaration.
    ///
    /// Declarations against targets in the attacker's forward arc go first;
    /// ties keep declaration order. Each one is resolved again against the
    /// flags as updated by those before it, and any that no longer pass their
    /// gates is dropped and reported. `flags` is written once, at the end.
    ///
    /// # Errors
    ///
    /// [`QueueError::NoEntitySelected`] outside the `Selected` state.
    pub fn commit(
        &mut self,
        env: Env<'_>,
        flags: &mut RoundUsageFlags,
        sink: &mut dyn ReportSink,
    ) -> Result<CommitOutcome, QueueError> {
        let entity = self.selected().ok_or(QueueError::NoEntitySelected)?;
        let pending = std::mem::take(&mut self.pending);

        let (front, rear): (Vec<_>, Vec<_>) = pending
            .into_iter()
            .map(|action| action.declaration)
            .partition(|declaration| in_forward_arc(env, declaration));

        let mut working = flags.clone();
        let mut outcome = CommitOutcome {
            entity,
            resolved: Vec::new(),
            dropped: Vec::new(),
        };

        for declaration in front.into_iter().chain(rear) {
            match commit_one(env, &declaration, &working) {
                Ok((result, marks)) => {
                    sink.report(committed_report(&declaration, &result));
                    for mark in &marks {
                        if let UsageMark::Illuminated(lit) = *mark {
                            sink.report(
                                Report::new(codes::SEARCHLIGHT_ILLUMINATES, entity).entity(lit),
                            );
                        }
                        working.apply(mark);
                    }
                    outcome.resolved.push((declaration, result));
                }
                Err(reason) => {
                    warn!(
                        %entity,
                        kind = %declaration.kind(),
                        %reason,
                        "queued declaration dropped at commit"
                    );
                    sink.report(dropped_report(&declaration, &reason));
                    outcome.dropped.push((declaration, reason));
                }
            }
        }

        *flags = working;
        self.state = QueueState::Committed(entity);
        debug!(
            %entity,
            resolved = outcome.resolved.len(),
            dropped = outcome.dropped.len(),
            "queue committed"
        );
        Ok(outcome)
    }

    /// Discards every queued declaration. Returns how many were dropped.
    ///
    /// # Errors
    ///
    /// [`QueueError::NoEntitySelected`] outside the `Selected` state.
    pub fn abort(&mut self) -> Result<usize, QueueError> {
        let entity = self.selected().ok_or(QueueError::NoEntitySelected)?;
        let discarded = self.pending.len();
        self.pending.clear();
        self.state = QueueState::Aborted(entity);
        debug!(%entity, discarded, "queue aborted");
        Ok(discarded)
    }
}

/// Re-resolves one declaration at commit time.
///
/// The error string is the reason it no longer applies.
fn commit_one(
    env: Env<'_>,
    declaration: &AttackDeclaration,
    flags: &RoundUsageFlags,
) -> Result<(ToHitResult, Vec<UsageMark>), String> {
    let describe = |err: ResolveError| err.to_string();
    let result = resolve::resolve(env, declaration, flags).map_err(describe)?;
    if let ToHitResult::Impossible { reason } = result {
        return Err(reason);
    }
    let marks = resolve::usage_marks(env, declaration, flags).map_err(describe)?;
    Ok((result, marks))
}

/// Target inside the attacker's forward arc, measured from the torso.
///
/// Declarations whose references no longer resolve sort with the rear group.
fn in_forward_arc(env: Env<'_>, declaration: &AttackDeclaration) -> bool {
    let Some(attacker) = env.entity(declaration.attacker()) else {
        return false;
    };
    let Some(target) = target_position(env, declaration.target()) else {
        return false;
    };
    match attacker.secondary_facing() {
        Some(facing) => is_in_arc(attacker.position(), facing, target, Arc::Forward),
        None => true,
    }
}

fn target_position(env: Env<'_>, target: TargetRef) -> Option<Coords> {
    match target {
        TargetRef::Entity(id) | TargetRef::Pod { carrier: id, .. } => {
            env.entity(id).map(|unit| unit.position())
        }
        TargetRef::Hex(coords) | TargetRef::Building(coords) => Some(coords),
    }
}

fn with_target(report: Report, target: TargetRef) -> Report {
    match target {
        TargetRef::Entity(id) | TargetRef::Pod { carrier: id, .. } => report.entity(id),
        TargetRef::Hex(coords) => report.text(format!("hex {coords}")),
        TargetRef::Building(coords) => report.text(format!("building at {coords}")),
    }
}

fn committed_report(declaration: &AttackDeclaration, result: &ToHitResult) -> Report {
    with_target(
        Report::new(codes::ATTACK_COMMITTED, declaration.attacker()),
        declaration.target(),
    )
    .text(declaration.kind().to_string())
    .text(result.to_string())
}

fn dropped_report(declaration: &AttackDeclaration, reason: &str) -> Report {
    match declaration.kind() {
        AttackKind::Searchlight => {
            Report::new(codes::SEARCHLIGHT_IMPOSSIBLE, declaration.attacker()).text(reason)
        }
        kind => Report::new(codes::ATTACK_DROPPED, declaration.attacker())
            .text(kind.to_string())
            .text(reason),
    }
}
