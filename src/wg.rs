//! Working-group membership reconciliation.
//!
//! The profile form exposes one checkbox per working group. Reconciliation
//! diffs the submitted selection against current membership and applies only
//! the changes, inside a single transaction.

use sqlx::PgPool;
use uuid::Uuid;

use crate::db;

pub const PLACES_WG: &str = "Places WG";
pub const PEOPLE_WG: &str = "People WG";
pub const PROCEDURES_WG: &str = "Procedures WG";
pub const PARTICIPATION_WG: &str = "Participation WG";

/// Desired (or current) membership across the four working groups.
///
/// Kept as four parallel booleans rather than a set, so each form field maps
/// to one well-known group.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WgSelection {
    pub places: bool,
    pub people: bool,
    pub procedures: bool,
    pub participation: bool,
}

impl WgSelection {
    /// Build the current selection from the user's membership rows.
    pub fn from_groups<S: AsRef<str>>(names: &[S]) -> Self {
        let has = |wanted: &str| names.iter().any(|n| n.as_ref() == wanted);
        WgSelection {
            places: has(PLACES_WG),
            people: has(PEOPLE_WG),
            procedures: has(PROCEDURES_WG),
            participation: has(PARTICIPATION_WG),
        }
    }

    fn entries(&self) -> [(&'static str, bool); 4] {
        [
            (PLACES_WG, self.places),
            (PEOPLE_WG, self.people),
            (PROCEDURES_WG, self.procedures),
            (PARTICIPATION_WG, self.participation),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MembershipOp {
    Add(&'static str),
    Remove(&'static str),
}

/// Minimal add/remove set turning `current` into `desired`. Groups already in
/// the desired state produce no op.
pub fn membership_ops(current: WgSelection, desired: WgSelection) -> Vec<MembershipOp> {
    current
        .entries()
        .into_iter()
        .zip(desired.entries())
        .filter_map(|((group, now), (_, wanted))| match (now, wanted) {
            (false, true) => Some(MembershipOp::Add(group)),
            (true, false) => Some(MembershipOp::Remove(group)),
            _ => None,
        })
        .collect()
}

/// Apply the membership diff for `user_id`. All updates commit together or
/// not at all.
pub async fn reconcile(
    pool: &PgPool,
    user_id: Uuid,
    current: WgSelection,
    desired: WgSelection,
) -> Result<(), sqlx::Error> {
    let ops = membership_ops(current, desired);
    if ops.is_empty() {
        return Ok(());
    }

    let mut tx = pool.begin().await?;
    for op in ops {
        match op {
            MembershipOp::Add(group) => db::groups::add_member(&mut *tx, user_id, group).await?,
            MembershipOp::Remove(group) => {
                db::groups::remove_member(&mut *tx, user_id, group).await?
            }
        }
    }
    tx.commit().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_from_group_names() {
        let current = WgSelection::from_groups(&[PEOPLE_WG, PARTICIPATION_WG]);
        assert_eq!(
            current,
            WgSelection { places: false, people: true, procedures: false, participation: true }
        );
    }

    #[test]
    fn unrelated_group_names_are_ignored() {
        let current = WgSelection::from_groups(&["Finance Committee", PLACES_WG]);
        assert!(current.places);
        assert!(!current.people);
    }

    #[test]
    fn matching_states_produce_no_ops() {
        let state = WgSelection { places: true, people: false, procedures: true, participation: false };
        assert!(membership_ops(state, state).is_empty());
    }

    #[test]
    fn diff_emits_adds_and_removes_only_where_needed() {
        let current = WgSelection::from_groups(&[PEOPLE_WG, PARTICIPATION_WG]);
        let desired =
            WgSelection { places: true, people: false, procedures: true, participation: false };

        let ops = membership_ops(current, desired);
        assert_eq!(ops.len(), 4);
        assert!(ops.contains(&MembershipOp::Add(PLACES_WG)));
        assert!(ops.contains(&MembershipOp::Add(PROCEDURES_WG)));
        assert!(ops.contains(&MembershipOp::Remove(PEOPLE_WG)));
        assert!(ops.contains(&MembershipOp::Remove(PARTICIPATION_WG)));
    }

    #[test]
    fn diff_is_idempotent() {
        let current = WgSelection { places: false, people: true, procedures: false, participation: true };
        let desired = WgSelection { places: true, people: true, procedures: false, participation: false };

        // Applying the ops yields `desired`; diffing again yields nothing.
        assert!(!membership_ops(current, desired).is_empty());
        assert!(membership_ops(desired, desired).is_empty());
    }

    #[test]
    fn join_all_from_empty_is_four_adds() {
        let desired = WgSelection { places: true, people: true, procedures: true, participation: true };
        let ops = membership_ops(WgSelection::default(), desired);
        assert_eq!(ops.len(), 4);
        assert!(ops.iter().all(|op| matches!(op, MembershipOp::Add(_))));
    }
}
