use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::member::Member;

/// Session classes each subscription tier may attend. The MMA track is
/// inclusive downward: every tier keeps the access of the tier below it.
/// A subscription not listed here grants access to its own class only.
const CLASS_HIERARCHY: &[(&str, &[&str])] = &[
    ("mma beginners", &["mma beginners", "bjj men", "wrestling"]),
    (
        "mma intermediate",
        &[
            "mma beginners",
            "bjj men",
            "wrestling",
            "mma intermediate",
            "adv/inter. mma grappling",
        ],
    ),
    (
        "mma advanced",
        &[
            "mma beginners",
            "bjj men",
            "wrestling",
            "mma intermediate",
            "adv/inter. mma grappling",
            "mma advanced",
        ],
    ),
];

/// Open to every active member regardless of subscription.
const OPEN_SESSION: &str = "sparring";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CheckinStatus {
    Accepted,
    Expired,
    NotAllowed,
    Invalid,
    NotFound,
    Error,
}

impl CheckinStatus {
    /// String form used for audit rows and logging
    pub fn as_str(&self) -> &'static str {
        match self {
            CheckinStatus::Accepted => "accepted",
            CheckinStatus::Expired => "expired",
            CheckinStatus::NotAllowed => "not_allowed",
            CheckinStatus::Invalid => "invalid",
            CheckinStatus::NotFound => "not_found",
            CheckinStatus::Error => "error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScreenColor {
    Green,
    Red,
}

/// What the kiosk shows after a scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckinOutcome {
    pub status: CheckinStatus,
    pub message: String,
    pub screen_color: ScreenColor,
}

impl CheckinOutcome {
    fn accept(message: String) -> Self {
        Self {
            status: CheckinStatus::Accepted,
            message,
            screen_color: ScreenColor::Green,
        }
    }

    fn reject(status: CheckinStatus, message: String) -> Self {
        Self {
            status,
            message,
            screen_color: ScreenColor::Red,
        }
    }

    /// Outcome shown when a collaborator (directory lookup) failed.
    /// Distinct from every business outcome.
    pub fn server_error() -> Self {
        Self::reject(
            CheckinStatus::Error,
            "A server error occurred. Please check the logs.".to_string(),
        )
    }
}

/// Decides a check-in attempt. Pure function of its arguments: no I/O,
/// no hidden state.
///
/// The expiry comparison is inclusive: a membership expiring today is
/// still active.
pub fn evaluate(member: Option<&Member>, session_class: &str, today: NaiveDate) -> CheckinOutcome {
    let member = match member {
        Some(m) => m,
        None => {
            return CheckinOutcome::reject(CheckinStatus::NotFound, "Member not found.".to_string())
        }
    };

    let expiry = match member.membership_expiry_date {
        Some(d) => d,
        None => {
            return CheckinOutcome::reject(
                CheckinStatus::Invalid,
                format!("No expiry date found for {}.", member.name),
            )
        }
    };

    if today > expiry {
        return CheckinOutcome::reject(
            CheckinStatus::Expired,
            format!("❌ Membership expired for {}. Please renew.", member.name),
        );
    }

    let requested = session_class.trim().to_lowercase();

    if requested == OPEN_SESSION {
        return CheckinOutcome::accept(format!(
            "✅ Welcome, {} — Membership active.",
            member.name
        ));
    }

    // Subscribed class comes from a spreadsheet, so trim before comparing
    let subscribed = match member.subscribed_class.as_deref().map(str::trim) {
        Some(c) if !c.is_empty() => c.to_lowercase(),
        _ => {
            return CheckinOutcome::reject(
                CheckinStatus::NotAllowed,
                format!("❌ No class subscription found for {}.", member.name),
            )
        }
    };

    if is_allowed(&subscribed, &requested) {
        CheckinOutcome::accept(format!(
            "✅ Welcome, {} — Membership active.",
            member.name
        ))
    } else {
        CheckinOutcome::reject(
            CheckinStatus::NotAllowed,
            format!(
                "❌ {}'s subscription does not include {}.",
                member.name, requested
            ),
        )
    }
}

/// Both arguments must already be lowercased.
fn is_allowed(subscribed: &str, requested: &str) -> bool {
    // Every class covers itself, listed in the hierarchy or not
    if subscribed == requested {
        return true;
    }

    CLASS_HIERARCHY
        .iter()
        .find(|(class, _)| *class == subscribed)
        .map(|(_, sessions)| sessions.contains(&requested))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn member(expiry: Option<&str>, class: Option<&str>) -> Member {
        Member {
            id: Uuid::new_v4(),
            phone_number: "15551234567".to_string(),
            name: "Jordan Reyes".to_string(),
            membership_expiry_date: expiry.map(|d| d.parse().expect("valid date literal")),
            subscribed_class: class.map(String::from),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    #[test]
    fn unknown_member_is_not_found() {
        let outcome = evaluate(None, "MMA Beginners", today());
        assert_eq!(outcome.status, CheckinStatus::NotFound);
        assert_eq!(outcome.screen_color, ScreenColor::Red);
    }

    #[test]
    fn missing_expiry_is_invalid() {
        let m = member(None, Some("MMA Beginners"));
        let outcome = evaluate(Some(&m), "MMA Beginners", today());
        assert_eq!(outcome.status, CheckinStatus::Invalid);
    }

    #[test]
    fn past_expiry_is_expired_regardless_of_class() {
        let m = member(Some("2025-01-31"), Some("MMA Advanced"));
        for class in ["Sparring", "MMA Advanced", "Wrestling"] {
            let outcome = evaluate(Some(&m), class, today());
            assert_eq!(outcome.status, CheckinStatus::Expired, "class {class}");
            assert_eq!(outcome.screen_color, ScreenColor::Red);
        }
    }

    #[test]
    fn expiry_day_itself_is_still_active() {
        let m = member(Some("2025-06-15"), Some("MMA Beginners"));
        let outcome = evaluate(Some(&m), "MMA Beginners", today());
        assert_eq!(outcome.status, CheckinStatus::Accepted);
    }

    #[test]
    fn sparring_is_open_to_any_active_member() {
        let m = member(Some("2999-01-01"), Some("Boxing"));
        for spelling in ["Sparring", "sparring", "SPARRING", "  sparring "] {
            let outcome = evaluate(Some(&m), spelling, today());
            assert_eq!(outcome.status, CheckinStatus::Accepted, "spelling {spelling:?}");
            assert_eq!(outcome.screen_color, ScreenColor::Green);
        }
    }

    #[test]
    fn sparring_does_not_require_a_subscription() {
        let m = member(Some("2999-01-01"), None);
        let outcome = evaluate(Some(&m), "Sparring", today());
        assert_eq!(outcome.status, CheckinStatus::Accepted);
    }

    #[test]
    fn no_subscription_is_rejected_for_regular_sessions() {
        let m = member(Some("2999-01-01"), None);
        let outcome = evaluate(Some(&m), "Wrestling", today());
        assert_eq!(outcome.status, CheckinStatus::NotAllowed);
    }

    #[test]
    fn blank_subscription_is_treated_as_none() {
        let m = member(Some("2999-01-01"), Some("   "));
        let outcome = evaluate(Some(&m), "Wrestling", today());
        assert_eq!(outcome.status, CheckinStatus::NotAllowed);
    }

    #[test]
    fn beginners_may_attend_bjj_and_wrestling() {
        let m = member(Some("2999-01-01"), Some("MMA Beginners"));
        for class in ["BJJ Men", "Wrestling", "MMA Beginners"] {
            let outcome = evaluate(Some(&m), class, today());
            assert_eq!(outcome.status, CheckinStatus::Accepted, "class {class}");
        }
    }

    #[test]
    fn beginners_may_not_attend_higher_tiers() {
        let m = member(Some("2999-01-01"), Some("MMA Beginners"));
        for class in ["MMA Intermediate", "MMA Advanced", "Adv/Inter. MMA Grappling"] {
            let outcome = evaluate(Some(&m), class, today());
            assert_eq!(outcome.status, CheckinStatus::NotAllowed, "class {class}");
        }
    }

    #[test]
    fn intermediate_covers_wrestling() {
        let m = member(Some("2999-01-01"), Some("mma intermediate"));
        let outcome = evaluate(Some(&m), "wrestling", today());
        assert_eq!(outcome.status, CheckinStatus::Accepted);
    }

    #[test]
    fn advanced_covers_the_whole_track() {
        let m = member(Some("2999-01-01"), Some("MMA Advanced"));
        for class in [
            "MMA Beginners",
            "BJJ Men",
            "Wrestling",
            "MMA Intermediate",
            "Adv/Inter. MMA Grappling",
            "MMA Advanced",
        ] {
            let outcome = evaluate(Some(&m), class, today());
            assert_eq!(outcome.status, CheckinStatus::Accepted, "class {class}");
        }
    }

    #[test]
    fn unlisted_class_covers_only_itself() {
        let m = member(Some("2999-01-01"), Some("Boxing"));
        assert_eq!(
            evaluate(Some(&m), "Boxing", today()).status,
            CheckinStatus::Accepted
        );
        assert_eq!(
            evaluate(Some(&m), "Wrestling", today()).status,
            CheckinStatus::NotAllowed
        );
    }

    #[test]
    fn identical_inputs_yield_identical_outcomes() {
        let m = member(Some("2999-01-01"), Some("MMA Intermediate"));
        let first = evaluate(Some(&m), "Wrestling", today());
        let second = evaluate(Some(&m), "Wrestling", today());
        assert_eq!(first.status, second.status);
        assert_eq!(first.message, second.message);
    }

    #[test]
    fn outcome_serializes_to_the_kiosk_contract() {
        let m = member(Some("2999-01-01"), Some("MMA Beginners"));
        let outcome = evaluate(Some(&m), "BJJ Men", today());
        let json = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["status"], "accepted");
        assert_eq!(json["screen_color"], "green");
        assert!(json["message"].as_str().unwrap().contains("Jordan Reyes"));

        let rejected = evaluate(None, "BJJ Men", today());
        let json = serde_json::to_value(&rejected).unwrap();
        assert_eq!(json["status"], "not_found");
        assert_eq!(json["screen_color"], "red");
    }
}
