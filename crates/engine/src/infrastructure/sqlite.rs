//! SQLite-backed player storage.

use async_trait::async_trait;
use roster_domain::{Player, PlayerDraft, PlayerId, PlayerProfile, Profession, Race};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqlitePool};

use crate::infrastructure::ports::{PlayerRepo, RepoError};

const COLUMNS: &str = "id, name, title, race, profession, birthday, banned, experience";

/// SQLite implementation of the player store.
///
/// Level stats are not persisted; they are derived again when a row is read.
pub struct SqlitePlayerRepo {
    pool: SqlitePool,
}

impl SqlitePlayerRepo {
    pub async fn new(db_path: &str) -> Result<Self, RepoError> {
        let pool = SqlitePool::connect(&format!("sqlite:{}?mode=rwc", db_path))
            .await
            .map_err(|e| RepoError::database("connect", e))?;
        Self::with_pool(pool).await
    }

    pub async fn with_pool(pool: SqlitePool) -> Result<Self, RepoError> {
        // AUTOINCREMENT keeps ids of deleted rows from being reissued
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS player (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                title TEXT NOT NULL,
                race TEXT NOT NULL,
                profession TEXT NOT NULL,
                birthday INTEGER NOT NULL,
                banned INTEGER NOT NULL,
                experience INTEGER NOT NULL
            )
            "#,
        )
        .execute(&pool)
        .await
        .map_err(|e| RepoError::database("migrate", e))?;

        Ok(Self { pool })
    }

    fn row_to_player(row: &SqliteRow) -> Result<Player, RepoError> {
        let id: i64 = row.get("id");
        let race: String = row.get("race");
        let profession: String = row.get("profession");

        let draft = PlayerDraft {
            name: row.get("name"),
            title: row.get("title"),
            race: race.parse::<Race>().map_err(RepoError::serialization)?,
            profession: profession
                .parse::<Profession>()
                .map_err(RepoError::serialization)?,
            birthday: row.get("birthday"),
            banned: row.get("banned"),
            experience: row.get("experience"),
        };

        let profile = PlayerProfile::restore(draft).map_err(RepoError::serialization)?;
        Ok(Player::new(PlayerId::from_trusted(id), profile))
    }
}

#[async_trait]
impl PlayerRepo for SqlitePlayerRepo {
    async fn find_by_id(&self, id: PlayerId) -> Result<Option<Player>, RepoError> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM player WHERE id = ?"))
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("find_by_id", e))?;

        row.as_ref().map(Self::row_to_player).transpose()
    }

    async fn exists_by_id(&self, id: PlayerId) -> Result<bool, RepoError> {
        let row = sqlx::query("SELECT 1 FROM player WHERE id = ?")
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| RepoError::database("exists_by_id", e))?;
        Ok(row.is_some())
    }

    async fn scan_all(&self) -> Result<Vec<Player>, RepoError> {
        let rows = sqlx::query(&format!("SELECT {COLUMNS} FROM player ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| RepoError::database("scan_all", e))?;

        rows.iter().map(Self::row_to_player).collect()
    }

    async fn insert(&self, profile: PlayerProfile) -> Result<Player, RepoError> {
        let result = sqlx::query(
            r#"
            INSERT INTO player (name, title, race, profession, birthday, banned, experience)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(profile.name())
        .bind(profile.title())
        .bind(profile.race().as_str())
        .bind(profile.profession().as_str())
        .bind(profile.birthday().timestamp_millis())
        .bind(profile.banned())
        .bind(i64::from(profile.experience()))
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("insert", e))?;

        let id = PlayerId::from_trusted(result.last_insert_rowid());
        Ok(Player::new(id, profile))
    }

    async fn save(&self, player: &Player) -> Result<(), RepoError> {
        let result = sqlx::query(
            r#"
            UPDATE player
            SET name = ?, title = ?, race = ?, profession = ?,
                birthday = ?, banned = ?, experience = ?
            WHERE id = ?
            "#,
        )
        .bind(player.name())
        .bind(player.title())
        .bind(player.race().as_str())
        .bind(player.profession().as_str())
        .bind(player.birthday().timestamp_millis())
        .bind(player.banned())
        .bind(i64::from(player.experience()))
        .bind(player.id().get())
        .execute(&self.pool)
        .await
        .map_err(|e| RepoError::database("save", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", player.id()));
        }
        Ok(())
    }

    async fn delete_by_id(&self, id: PlayerId) -> Result<(), RepoError> {
        let result = sqlx::query("DELETE FROM player WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| RepoError::database("delete_by_id", e))?;

        if result.rows_affected() == 0 {
            return Err(RepoError::not_found("Player", id));
        }
        Ok(())
    }
}
