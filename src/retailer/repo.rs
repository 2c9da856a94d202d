//! The Credential Store: lookup, insert and partial update of retailer rows.
//!
//! Flows talk to the [`CredentialStore`] trait so the orchestration can be
//! exercised against an in-memory store in tests; [`PgCredentialStore`] is the
//! production implementation. All SQL is fixed and parameterized — the patch
//! is applied with per-column COALESCE, never string-built clauses.

use crate::flows::FlowError;
use crate::retailer::models::{NewRetailer, Retailer, RetailerPatch};
use sqlx::{postgres::PgRow, PgPool, Row};
use uuid::Uuid;

const RETAILER_COLUMNS: &str = "id, first_name, last_name, company_name, email, phone, address, \
     company_logo, profile_image, password_hash, created_at, updated_at";

#[allow(async_fn_in_trait)]
pub trait CredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<Retailer>, FlowError>;

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Retailer>, FlowError>;

    async fn insert(&self, retailer: NewRetailer) -> Result<(), FlowError>;

    /// Apply a normalized patch and refresh `updated_at`, even when the patch
    /// is empty. Returns the post-update row, or `None` for an unknown id.
    async fn apply_patch(
        &self,
        id: Uuid,
        patch: &RetailerPatch,
    ) -> Result<Option<Retailer>, FlowError>;

    /// Replace the stored credential. Returns false for an unknown id.
    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, FlowError>;
}

/// Postgres-backed credential store borrowing the shared bounded pool for the
/// duration of one flow.
#[derive(Debug, Clone, Copy)]
pub struct PgCredentialStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PgCredentialStore<'a> {
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }
}

impl CredentialStore for PgCredentialStore<'_> {
    async fn find_by_email(&self, email: &str) -> Result<Option<Retailer>, FlowError> {
        let row = sqlx::query(&format!(
            "SELECT {RETAILER_COLUMNS} FROM retailers WHERE email = $1"
        ))
        .bind(email)
        .fetch_optional(self.pool)
        .await?;

        row.map(|row| retailer_from_row(&row)).transpose()
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Retailer>, FlowError> {
        let row = sqlx::query(&format!(
            "SELECT {RETAILER_COLUMNS} FROM retailers WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        row.map(|row| retailer_from_row(&row)).transpose()
    }

    async fn insert(&self, retailer: NewRetailer) -> Result<(), FlowError> {
        sqlx::query(
            "INSERT INTO retailers \
             (id, first_name, last_name, company_name, email, phone, address, \
              company_logo, profile_image, password_hash) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)",
        )
        .bind(retailer.id)
        .bind(&retailer.first_name)
        .bind(&retailer.last_name)
        .bind(&retailer.company_name)
        .bind(&retailer.email)
        .bind(&retailer.phone)
        .bind(&retailer.address)
        .bind(&retailer.company_logo)
        .bind(&retailer.profile_image)
        .bind(&retailer.password_hash)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    async fn apply_patch(
        &self,
        id: Uuid,
        patch: &RetailerPatch,
    ) -> Result<Option<Retailer>, FlowError> {
        let row = sqlx::query(&format!(
            "UPDATE retailers SET \
             updated_at = NOW(), \
             first_name = COALESCE($2, first_name), \
             last_name = COALESCE($3, last_name), \
             company_name = COALESCE($4, company_name), \
             phone = COALESCE($5, phone), \
             address = COALESCE($6, address), \
             company_logo = COALESCE($7, company_logo), \
             profile_image = COALESCE($8, profile_image) \
             WHERE id = $1 \
             RETURNING {RETAILER_COLUMNS}"
        ))
        .bind(id)
        .bind(&patch.first_name)
        .bind(&patch.last_name)
        .bind(&patch.company_name)
        .bind(&patch.phone)
        .bind(&patch.address)
        .bind(&patch.company_logo)
        .bind(&patch.profile_image)
        .fetch_optional(self.pool)
        .await?;

        row.map(|row| retailer_from_row(&row)).transpose()
    }

    async fn update_password(&self, id: Uuid, password_hash: &str) -> Result<bool, FlowError> {
        let result =
            sqlx::query("UPDATE retailers SET password_hash = $2, updated_at = NOW() WHERE id = $1")
                .bind(id)
                .bind(password_hash)
                .execute(self.pool)
                .await?;

        Ok(result.rows_affected() > 0)
    }
}

fn retailer_from_row(row: &PgRow) -> Result<Retailer, FlowError> {
    Ok(Retailer {
        id: row.try_get("id")?,
        first_name: row.try_get("first_name")?,
        last_name: row.try_get("last_name")?,
        company_name: row.try_get("company_name")?,
        email: row.try_get("email")?,
        phone: row.try_get("phone")?,
        address: row.try_get("address")?,
        company_logo: row.try_get("company_logo")?,
        profile_image: row.try_get("profile_image")?,
        password_hash: row.try_get("password_hash")?,
        created_at: row.try_get("created_at")?,
        updated_at: row.try_get("updated_at")?,
    })
}
