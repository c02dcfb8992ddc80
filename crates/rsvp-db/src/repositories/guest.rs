//! PostgreSQL implementation of GuestRepository

use async_trait::async_trait;
use sqlx::PgPool;
use tracing::instrument;

use rsvp_core::traits::{GuestRepository, RepoResult, SortOrder};
use rsvp_core::{GuestId, GuestRecord, NewGuest};

use crate::mappers::GuestInsert;
use crate::models::GuestModel;

use super::error::{guest_not_found, map_db_error};

/// PostgreSQL implementation of GuestRepository
#[derive(Clone)]
pub struct PgGuestRepository {
    pool: PgPool,
}

impl PgGuestRepository {
    /// Create a new PgGuestRepository
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GuestRepository for PgGuestRepository {
    #[instrument(skip(self, guest), fields(attending = guest.is_attending()))]
    async fn insert(&self, guest: &NewGuest) -> RepoResult<GuestRecord> {
        let row = GuestInsert::new(guest);

        let model = sqlx::query_as::<_, GuestModel>(
            r"
            INSERT INTO guest_list (name, email, phone, number_of_guests, attending, comments)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING id, name, email, phone, number_of_guests, attending, attended,
                      comments, created_at
            ",
        )
        .bind(row.name)
        .bind(row.email)
        .bind(row.phone)
        .bind(row.number_of_guests)
        .bind(row.attending)
        .bind(row.comments)
        .fetch_one(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(GuestRecord::from(model))
    }

    #[instrument(skip(self))]
    async fn find_all(&self, order: SortOrder) -> RepoResult<Vec<GuestRecord>> {
        // Ties on created_at fall back to id so repeated reads agree
        let sql = format!(
            r"
            SELECT id, name, email, phone, number_of_guests, attending, attended,
                   comments, created_at
            FROM guest_list
            ORDER BY created_at {dir}, id {dir}
            ",
            dir = order.as_sql()
        );

        let models = sqlx::query_as::<_, GuestModel>(&sql)
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(GuestRecord::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: GuestId) -> RepoResult<Option<GuestRecord>> {
        let result = sqlx::query_as::<_, GuestModel>(
            r"
            SELECT id, name, email, phone, number_of_guests, attending, attended,
                   comments, created_at
            FROM guest_list
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_db_error)?;

        Ok(result.map(GuestRecord::from))
    }

    #[instrument(skip(self))]
    async fn mark_attended(&self, id: GuestId) -> RepoResult<()> {
        let result = sqlx::query(
            r"
            UPDATE guest_list
            SET attended = TRUE
            WHERE id = $1
            ",
        )
        .bind(id.into_inner())
        .execute(&self.pool)
        .await
        .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(guest_not_found(id));
        }

        Ok(())
    }

    #[instrument(skip(self))]
    async fn ping(&self) -> RepoResult<()> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;
        Ok(())
    }
}
