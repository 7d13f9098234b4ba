use chrono::NaiveDate;

use crate::models::checkin::CreateCheckinData;
use crate::services::audit::CheckinAudit;
use crate::services::directory::MemberDirectory;
use crate::services::eligibility::{self, CheckinOutcome};

/// Name written to the audit trail when the scanned phone matched nobody
const UNKNOWN_MEMBER: &str = "Unknown Member";

/// Orchestrates a check-in attempt: directory lookup, eligibility
/// decision, audit record.
#[derive(Clone)]
pub struct CheckinService {
    directory: MemberDirectory,
    audit: CheckinAudit,
}

impl CheckinService {
    pub fn new(directory: MemberDirectory, audit: CheckinAudit) -> Self {
        Self { directory, audit }
    }

    /// Decides a check-in attempt and records it.
    ///
    /// A directory failure yields the generic server-error outcome, never
    /// a business outcome. The attempt is audited in every case; audit
    /// failures never alter the outcome already computed.
    pub async fn handle(
        &self,
        phone_number: &str,
        session_class: &str,
        today: NaiveDate,
    ) -> CheckinOutcome {
        let (member, outcome) = match self.directory.lookup(phone_number).await {
            Ok(member) => {
                let outcome = eligibility::evaluate(member.as_ref(), session_class, today);
                (member, outcome)
            }
            Err(e) => {
                tracing::error!(error = %e, phone_number, "Member lookup failed");
                (None, CheckinOutcome::server_error())
            }
        };

        tracing::info!(
            phone_number,
            requested_class = session_class,
            status = outcome.status.as_str(),
            "Check-in evaluated"
        );

        self.audit
            .record(CreateCheckinData {
                member_id: member.as_ref().map(|m| m.id),
                phone_number_scanned: phone_number.to_string(),
                member_name: member
                    .as_ref()
                    .map(|m| m.name.clone())
                    .unwrap_or_else(|| UNKNOWN_MEMBER.to_string()),
                subscribed_class: member.as_ref().and_then(|m| m.subscribed_class.clone()),
                requested_class: session_class.to_string(),
                status: outcome.status.as_str().to_string(),
            })
            .await;

        outcome
    }
}
