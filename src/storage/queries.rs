// Basearch - GitHub repository browser core
// Copyright (C) 2025 Henning Berge
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE. See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program. If not, see <https://www.gnu.org/licenses/>.


//! Database query functions

use crate::domain::entities::{Owner, Repo};
use crate::error::Result;
use sqlx::{FromRow, SqlitePool};

/// Settings key of the last successful remote sync
pub const LAST_SYNC_DATE_KEY: &str = "last_sync_date";

/// Row shape of the `Repos` table
#[derive(Debug, Clone, FromRow)]
struct RepoRow {
    repo_id: i64,
    name: String,
    full_name: String,
    description: Option<String>,
    html_url: String,
    stargazers_count: i64,
    forks_count: i64,
    owner_id: i64,
    owner_login: String,
    owner_avatar_url: Option<String>,
}

impl From<RepoRow> for Repo {
    fn from(row: RepoRow) -> Self {
        Repo {
            id: row.repo_id,
            name: row.name,
            full_name: row.full_name,
            description: row.description,
            html_url: row.html_url,
            stargazers_count: row.stargazers_count,
            forks_count: row.forks_count,
            owner: Owner {
                id: row.owner_id,
                login: row.owner_login,
                avatar_url: row.owner_avatar_url,
            },
        }
    }
}

// ============================================================================
// REPO QUERIES
// ============================================================================

/// Replace the cached repos with `repos` in one transaction
pub async fn replace_repos(pool: &SqlitePool, repos: &[Repo]) -> Result<()> {
    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM Repos").execute(&mut *tx).await?;

    for repo in repos {
        sqlx::query(
            r#"
            INSERT OR REPLACE INTO Repos (
                repo_id, name, full_name, description, html_url,
                stargazers_count, forks_count, owner_id, owner_login, owner_avatar_url
            ) VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(repo.id)
        .bind(&repo.name)
        .bind(&repo.full_name)
        .bind(&repo.description)
        .bind(&repo.html_url)
        .bind(repo.stargazers_count)
        .bind(repo.forks_count)
        .bind(repo.owner.id)
        .bind(&repo.owner.login)
        .bind(&repo.owner.avatar_url)
        .execute(&mut *tx)
        .await?;
    }

    tx.commit().await?;
    Ok(())
}

/// All cached repos, most starred first
pub async fn list_repos(pool: &SqlitePool) -> Result<Vec<Repo>> {
    let rows = sqlx::query_as::<_, RepoRow>(
        r#"
        SELECT repo_id, name, full_name, description, html_url,
               stargazers_count, forks_count, owner_id, owner_login, owner_avatar_url
        FROM Repos
        ORDER BY stargazers_count DESC, repo_id ASC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Repo::from).collect())
}

// ============================================================================
// SETTINGS QUERIES
// ============================================================================

/// Insert or overwrite a setting
pub async fn set_setting(pool: &SqlitePool, key: &str, value: &str) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO Settings (key, value) VALUES (?, ?)
        ON CONFLICT(key) DO UPDATE SET
            value = excluded.value,
            updated_at = CURRENT_TIMESTAMP
        "#,
    )
    .bind(key)
    .bind(value)
    .execute(pool)
    .await?;

    Ok(())
}

pub async fn get_setting(pool: &SqlitePool, key: &str) -> Result<Option<String>> {
    let value: Option<String> = sqlx::query_scalar("SELECT value FROM Settings WHERE key = ?")
        .bind(key)
        .fetch_optional(pool)
        .await?;

    Ok(value)
}

/// Record the last successful remote sync (already formatted for the cache)
pub async fn save_last_sync_date(pool: &SqlitePool, value: &str) -> Result<()> {
    set_setting(pool, LAST_SYNC_DATE_KEY, value).await
}

pub async fn get_last_sync_date(pool: &SqlitePool) -> Result<Option<String>> {
    get_setting(pool, LAST_SYNC_DATE_KEY).await
}
