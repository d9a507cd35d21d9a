//! Message repository: persistence and queries for messages and action records.
//!
//! Uses SqlitePoolManager and the row models. Implements the host collaborator traits
//! ([`RecentMessageSource`], [`ActionRecorder`]) so a standalone run can stand in for the host.
//! External: SQLite via sqlx.

use async_trait::async_trait;
use react_core::{ActionRecord, ActionRecorder, RecentMessage, RecentMessageSource};
use tracing::{info, instrument};

use crate::error::StorageError;
use crate::models::{ActionRecordRow, MessageRecord};
use crate::sqlite_pool::SqlitePoolManager;

#[derive(Clone)]
pub struct MessageRepository {
    pool_manager: SqlitePoolManager,
}

impl MessageRepository {
    pub async fn new(database_url: &str) -> Result<Self, StorageError> {
        let pool_manager = SqlitePoolManager::new(database_url).await?;
        let repo = Self { pool_manager };
        repo.init().await?;
        Ok(repo)
    }

    async fn init(&self) -> Result<(), StorageError> {
        info!("Creating database tables if not exist");

        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS messages (
                id TEXT PRIMARY KEY,
                chat_id TEXT NOT NULL,
                message_id TEXT NOT NULL,
                user_nickname TEXT NOT NULL,
                content TEXT NOT NULL,
                created_at TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS action_records (
                id TEXT PRIMARY KEY,
                chat_id TEXT NOT NULL,
                action_name TEXT NOT NULL,
                action_build_into_prompt INTEGER NOT NULL,
                action_prompt_display TEXT NOT NULL,
                action_done INTEGER NOT NULL,
                thinking_id TEXT NOT NULL,
                action_data TEXT NOT NULL,
                time TEXT NOT NULL
            )
            "#,
        )
        .execute(pool)
        .await?;

        sqlx::query(
            r#"
            CREATE INDEX IF NOT EXISTS idx_messages_chat_id ON messages(chat_id);
            CREATE INDEX IF NOT EXISTS idx_messages_created_at ON messages(created_at);
            CREATE INDEX IF NOT EXISTS idx_action_records_chat_id ON action_records(chat_id);
            "#,
        )
        .execute(pool)
        .await?;

        info!("Database tables created successfully");
        Ok(())
    }

    pub async fn save(&self, message: &MessageRecord) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO messages (id, chat_id, message_id, user_nickname, content, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&message.id)
        .bind(&message.chat_id)
        .bind(&message.message_id)
        .bind(&message.user_nickname)
        .bind(&message.content)
        .bind(message.created_at)
        .execute(pool)
        .await?;

        info!(
            chat_id = %message.chat_id,
            message_id = %message.message_id,
            "Saved message"
        );
        Ok(())
    }

    /// Most recent messages of a chat, newest first.
    pub async fn get_recent_messages_by_chat(
        &self,
        chat_id: &str,
        limit: i64,
    ) -> Result<Vec<MessageRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let messages: Vec<MessageRecord> = sqlx::query_as::<_, MessageRecord>(
            "SELECT id, chat_id, message_id, user_nickname, content, created_at FROM messages WHERE chat_id = ? ORDER BY created_at DESC, rowid DESC LIMIT ?",
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(pool)
        .await?;

        info!(
            "Retrieved {} recent messages for chat {}",
            messages.len(),
            chat_id
        );

        Ok(messages)
    }

    pub async fn save_action(&self, row: &ActionRecordRow) -> Result<(), StorageError> {
        let pool = self.pool_manager.pool();

        sqlx::query(
            r#"
            INSERT INTO action_records (id, chat_id, action_name, action_build_into_prompt, action_prompt_display, action_done, thinking_id, action_data, time)
            VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&row.id)
        .bind(&row.chat_id)
        .bind(&row.action_name)
        .bind(row.action_build_into_prompt)
        .bind(&row.action_prompt_display)
        .bind(row.action_done)
        .bind(&row.thinking_id)
        .bind(&row.action_data)
        .bind(row.time)
        .execute(pool)
        .await?;

        info!(
            chat_id = %row.chat_id,
            action_name = %row.action_name,
            "Saved action record"
        );
        Ok(())
    }

    /// Action records of a chat, oldest first.
    pub async fn get_actions_by_chat(&self, chat_id: &str) -> Result<Vec<ActionRecord>, StorageError> {
        let pool = self.pool_manager.pool();

        let rows: Vec<ActionRecordRow> = sqlx::query_as::<_, ActionRecordRow>(
            "SELECT id, chat_id, action_name, action_build_into_prompt, action_prompt_display, action_done, thinking_id, action_data, time FROM action_records WHERE chat_id = ? ORDER BY time ASC, rowid ASC",
        )
        .bind(chat_id)
        .fetch_all(pool)
        .await?;

        rows.into_iter().map(ActionRecordRow::into_record).collect()
    }
}

#[async_trait]
impl RecentMessageSource for MessageRepository {
    #[instrument(skip(self))]
    async fn get_recent_messages(
        &self,
        chat_id: &str,
        limit: usize,
    ) -> react_core::Result<Vec<RecentMessage>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let mut records = self.get_recent_messages_by_chat(chat_id, limit).await?;
        records.reverse();
        Ok(records.into_iter().map(RecentMessage::from).collect())
    }
}

#[async_trait]
impl ActionRecorder for MessageRepository {
    #[instrument(skip(self, record), fields(chat_id = %record.chat_id, action_name = %record.action_name))]
    async fn store_action_info(&self, record: ActionRecord) -> react_core::Result<()> {
        self.save_action(&ActionRecordRow::from_record(&record))
            .await
            .map_err(Into::into)
    }
}
