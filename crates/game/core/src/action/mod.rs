//! Attack declarations and the per-unit queue that commits them.
//!
//! - `declaration`: what one attack is (attacker, target, kind payload)
//! - `queue`: SELECT → ADD → COMMIT/ABORT state machine
//! - `report`: structured records emitted on commit
//! - `error`: queue protocol errors

mod declaration;
mod error;
mod queue;
pub mod report;

pub use declaration::{AttackAction, AttackDeclaration, AttackKind, TargetRef};
pub use error::QueueError;
pub use queue::{ActionQueue, CommitOutcome, QueueState};
pub use report::{Report, ReportArg, ReportSink};
