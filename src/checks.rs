//! Account advisory checks: profile completeness and lease validity.
//!
//! These are pure over the rows handed to them; handlers fetch the data and
//! pass an explicit notice sink, so nothing here touches request state.

use chrono::NaiveDate;

use crate::models::{LeaseRecord, Profile, User};
use crate::notices::Notice;

/// Warn about missing profile fields and an unrecorded share purchase.
///
/// At most two notices fire, in this order: profile-incomplete, then
/// share-missing.
pub fn check_profile(user: &User, profile: &Profile, notices: &mut Vec<Notice>) {
    if user.first_name.is_empty()
        || user.last_name.is_empty()
        || profile.phone_number.is_empty()
        || profile.perm_address.is_empty()
    {
        notices.push(Notice::warning_html(
            "Your <a href=\"/profile\" class=\"alert-link\">Profile</a> is missing \
             information. Go fill in extra info!",
        ));
    }
    if !profile.share_received {
        notices.push(Notice::warning(
            "We have not yet received your share. Have you bought one?",
        ));
    }
}

/// Evaluate the user's leases against `today`.
///
/// Returns whether any lease is active. Emits at most one missing-inventory
/// warning (for the first lease without one), a warning when no lease is
/// active, and an info notice when the user has no leases at all. The last
/// two both fire for a user with zero leases.
pub fn evaluate_leases(
    leases: &[LeaseRecord],
    today: NaiveDate,
    notices: &mut Vec<Notice>,
) -> bool {
    let has_valid_lease = leases.iter().any(|lease| lease.is_active(today));

    if leases.iter().any(|lease| !lease.has_inventory) {
        notices.push(Notice::warning("One of your leases is missing an inventory!"));
    }

    if !has_valid_lease {
        notices.push(Notice::warning(
            "You do not have a valid lease registered! Have you signed one?",
        ));
    }

    if leases.is_empty() {
        notices.push(Notice::info(
            "You do not have any leases registered. They will appear here when you do.",
        ));
    }

    has_valid_lease
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};
    use uuid::Uuid;

    use super::*;
    use crate::notices::Severity;

    fn user(first: &str, last: &str) -> User {
        User {
            id: Uuid::now_v7(),
            email: "member@example.coop".to_string(),
            password_hash: String::new(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            created_at: Utc::now(),
        }
    }

    fn profile(phone: &str, address: &str, share: bool) -> Profile {
        Profile {
            user_id: Uuid::now_v7(),
            phone_number: phone.to_string(),
            perm_address: address.to_string(),
            share_received: share,
        }
    }

    fn lease(start: NaiveDate, end: NaiveDate, has_inventory: bool) -> LeaseRecord {
        LeaseRecord {
            id: Uuid::now_v7(),
            user_id: Uuid::now_v7(),
            label: "Flat 1".to_string(),
            start_date: start,
            end_date: end,
            has_inventory,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    #[test]
    fn complete_profile_emits_nothing() {
        let mut notices = Vec::new();
        check_profile(
            &user("Ada", "Lovelace"),
            &profile("07000000000", "1 Cooperative Close", true),
            &mut notices,
        );
        assert!(notices.is_empty());
    }

    #[test]
    fn any_empty_field_emits_one_profile_warning() {
        for (first, last, phone, address) in [
            ("", "Lovelace", "07", "addr"),
            ("Ada", "", "07", "addr"),
            ("Ada", "Lovelace", "", "addr"),
            ("Ada", "Lovelace", "07", ""),
        ] {
            let mut notices = Vec::new();
            check_profile(&user(first, last), &profile(phone, address, true), &mut notices);
            assert_eq!(notices.len(), 1);
            assert_eq!(notices[0].severity, Severity::Warning);
            assert!(notices[0].safe, "profile notice carries a trusted link");
        }
    }

    #[test]
    fn missing_share_emits_share_warning() {
        let mut notices = Vec::new();
        check_profile(
            &user("Ada", "Lovelace"),
            &profile("07", "addr", false),
            &mut notices,
        );
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text.contains("share"));
    }

    #[test]
    fn incomplete_profile_and_missing_share_emit_both_in_order() {
        let mut notices = Vec::new();
        check_profile(&user("", ""), &profile("", "", false), &mut notices);
        assert_eq!(notices.len(), 2);
        assert!(notices[0].text.contains("Profile"));
        assert!(notices[1].text.contains("share"));
    }

    #[test]
    fn lease_spanning_today_is_valid() {
        let yesterday = today() - Duration::days(1);
        let tomorrow = today() + Duration::days(1);
        let leases = [lease(yesterday, tomorrow, true)];

        let mut notices = Vec::new();
        assert!(evaluate_leases(&leases, today(), &mut notices));
        assert!(notices.is_empty());
    }

    #[test]
    fn boundary_dates_are_inclusive() {
        let leases = [lease(today(), today(), true)];
        let mut notices = Vec::new();
        assert!(evaluate_leases(&leases, today(), &mut notices));
    }

    #[test]
    fn expired_lease_is_not_valid() {
        let leases = [lease(
            today() - Duration::days(400),
            today() - Duration::days(30),
            true,
        )];
        let mut notices = Vec::new();
        assert!(!evaluate_leases(&leases, today(), &mut notices));
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text.contains("valid lease"));
    }

    #[test]
    fn missing_inventory_warns_once_even_for_multiple() {
        let yesterday = today() - Duration::days(1);
        let tomorrow = today() + Duration::days(1);
        let leases = [
            lease(yesterday, tomorrow, false),
            lease(yesterday, tomorrow, false),
        ];

        let mut notices = Vec::new();
        assert!(evaluate_leases(&leases, today(), &mut notices));
        let inventory_warnings = notices
            .iter()
            .filter(|n| n.text.contains("inventory"))
            .count();
        assert_eq!(inventory_warnings, 1);
    }

    #[test]
    fn valid_lease_without_inventory_warns_only_about_inventory() {
        let leases = [lease(today() - Duration::days(1), today() + Duration::days(1), false)];

        let mut notices = Vec::new();
        assert!(evaluate_leases(&leases, today(), &mut notices));
        assert_eq!(notices.len(), 1);
        assert!(notices[0].text.contains("inventory"));
    }

    #[test]
    fn no_leases_emits_both_no_valid_and_no_leases_notices() {
        let mut notices = Vec::new();
        assert!(!evaluate_leases(&[], today(), &mut notices));
        assert_eq!(notices.len(), 2);
        assert_eq!(notices[0].severity, Severity::Warning);
        assert!(notices[0].text.contains("valid lease"));
        assert_eq!(notices[1].severity, Severity::Info);
        assert!(notices[1].text.contains("any leases"));
    }
}
