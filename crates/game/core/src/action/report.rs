//! Structured report records.
//!
//! The core only emits codes and ordered arguments; wording and localization
//! belong to whoever renders them.
use crate::state::EntityId;

/// Report codes emitted by the commit step.
pub mod codes {
    /// An attack was committed. Args: target, kind, result text.
    pub const ATTACK_COMMITTED: u16 = 3000;
    /// A queued attack became impossible before commit. Args: kind, reason.
    pub const ATTACK_DROPPED: u16 = 3005;
    /// A queued searchlight could not be used. Args: reason.
    pub const SEARCHLIGHT_IMPOSSIBLE: u16 = 3445;
    /// A searchlight lit a unit. Args: illuminated unit.
    pub const SEARCHLIGHT_ILLUMINATES: u16 = 3450;
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ReportArg {
    Entity(EntityId),
    Int(i32),
    Text(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Report {
    pub code: u16,
    pub subject: EntityId,
    pub args: Vec<ReportArg>,
}

impl Report {
    pub fn new(code: u16, subject: EntityId) -> Self {
        Self {
            code,
            subject,
            args: Vec::new(),
        }
    }

    pub fn entity(mut self, id: EntityId) -> Self {
        self.args.push(ReportArg::Entity(id));
        self
    }

    pub fn int(mut self, value: i32) -> Self {
        self.args.push(ReportArg::Int(value));
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.args.push(ReportArg::Text(text.into()));
        self
    }
}

/// Receives reports; implemented by the host's report log.
pub trait ReportSink {
    fn report(&mut self, report: Report);
}

impl ReportSink for Vec<Report> {
    fn report(&mut self, report: Report) {
        self.push(report);
    }
}
