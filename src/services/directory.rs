use sqlx::PgPool;

use crate::models::member::Member;

/// Read-only view of the member directory. The underlying table is
/// populated by the external roster sync.
#[derive(Clone)]
pub struct MemberDirectory {
    pool: PgPool,
}

impl MemberDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Resolves a phone number to at most one member.
    ///
    /// A store failure comes back as `Err`, distinct from `Ok(None)`
    /// for a phone number nobody is registered under.
    pub async fn lookup(&self, phone_number: &str) -> Result<Option<Member>, sqlx::Error> {
        Member::find_by_phone(&self.pool, phone_number).await
    }
}
