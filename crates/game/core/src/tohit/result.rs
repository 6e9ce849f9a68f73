use std::fmt;

use super::modifiers::Modifier;
use crate::geometry::{HitTable, SideTable};

/// Outcome of resolving one declaration.
///
/// Sentinels are ordinary answers, not failures, and carry no modifiers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "outcome", rename_all = "snake_case"))]
pub enum ToHitResult {
    Impossible { reason: String },
    AutomaticSuccess { reason: String },
    AutomaticFail { reason: String },
    Value(ToHitValue),
}

/// A finite target number and the breakdown that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ToHitValue {
    pub value: i32,
    pub base: i32,
    pub base_label: String,
    pub modifiers: Vec<Modifier>,
    pub hit_table: HitTable,
    pub side_table: SideTable,
}

impl ToHitValue {
    /// `value == base + Σ deltas`.
    pub fn is_consistent(&self) -> bool {
        self.value == self.base + self.modifiers.iter().map(|m| m.delta).sum::<i32>()
    }
}

impl ToHitResult {
    pub fn impossible(reason: impl Into<String>) -> Self {
        Self::Impossible {
            reason: reason.into(),
        }
    }

    pub fn automatic_success(reason: impl Into<String>) -> Self {
        Self::AutomaticSuccess {
            reason: reason.into(),
        }
    }

    pub fn automatic_fail(reason: impl Into<String>) -> Self {
        Self::AutomaticFail {
            reason: reason.into(),
        }
    }

    pub fn is_impossible(&self) -> bool {
        matches!(self, Self::Impossible { .. })
    }

    pub fn value(&self) -> Option<i32> {
        match self {
            Self::Value(v) => Some(v.value),
            _ => None,
        }
    }

    pub fn as_value(&self) -> Option<&ToHitValue> {
        match self {
            Self::Value(v) => Some(v),
            _ => None,
        }
    }

    /// Reason of a sentinel result.
    pub fn reason(&self) -> Option<&str> {
        match self {
            Self::Impossible { reason }
            | Self::AutomaticSuccess { reason }
            | Self::AutomaticFail { reason } => Some(reason),
            Self::Value(_) => None,
        }
    }

    pub fn modifiers(&self) -> &[Modifier] {
        match self {
            Self::Value(v) => &v.modifiers,
            _ => &[],
        }
    }
}

impl fmt::Display for ToHitResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Impossible { reason } => write!(f, "impossible: {reason}"),
            Self::AutomaticSuccess { reason } => write!(f, "automatic success: {reason}"),
            Self::AutomaticFail { reason } => write!(f, "automatic failure: {reason}"),
            Self::Value(v) => {
                write!(f, "{} = {} ({})", v.value, v.base, v.base_label)?;
                for m in &v.modifiers {
                    write!(f, " {:+} ({})", m.delta, m.label)?;
                }
                write!(f, " [{} table, {}]", v.hit_table, v.side_table)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tohit::ModifierStack;

    #[test]
    fn sentinels_carry_a_reason_and_no_modifiers() {
        let result = ToHitResult::impossible("Attacker is prone");
        assert!(result.is_impossible());
        assert_eq!(result.reason(), Some("Attacker is prone"));
        assert!(result.modifiers().is_empty());
        assert_eq!(result.value(), None);
    }

    #[test]
    fn display_lists_the_breakdown_in_order() {
        let mut stack = ModifierStack::new(5, "base");
        stack.add(2, "lower arm actuator destroyed");
        stack.add(-1, "exoskeleton assist");
        let result = stack.finish();

        assert_eq!(
            result.to_string(),
            "6 = 5 (base) +2 (lower arm actuator destroyed) -1 (exoskeleton assist) [NORMAL table, FRONT]"
        );
    }
}
