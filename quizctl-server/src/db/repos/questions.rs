//! PostgreSQL store for questions and choices
//!
//! - create: question + choices in one transaction (no partial writes)
//! - reads: single query each, connection returned to the pool on drop

use async_trait::async_trait;
use sqlx::PgPool;

use super::{DbError, QuizStore};
use crate::models::{Choice, NewQuestion, Question};

/// Quiz store backed by a PostgreSQL pool
#[derive(Clone)]
pub struct PgQuizStore {
    pool: PgPool,
}

impl PgQuizStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl QuizStore for PgQuizStore {
    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        let question = sqlx::query_as::<_, Question>(
            r#"
            SELECT id, question_text
            FROM questions
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(question)
    }

    async fn list_choices(&self, question_id: i32) -> Result<Vec<Choice>, DbError> {
        let choices = sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, choice_text, is_correct, question_id
            FROM choices
            WHERE question_id = $1
            ORDER BY id
            "#,
        )
        .bind(question_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(choices)
    }

    /// Insert the question and its choices (atomic).
    ///
    /// The transaction rolls back on drop, so any early return leaves
    /// neither the question nor its choices behind.
    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tx = self.pool.begin().await?;

        let question: Question = sqlx::query_as(
            r#"
            INSERT INTO questions (question_text)
            VALUES ($1)
            RETURNING id, question_text
            "#,
        )
        .bind(&new.question_text)
        .fetch_one(&mut *tx)
        .await?;

        for choice in &new.choices {
            sqlx::query(
                r#"
                INSERT INTO choices (choice_text, is_correct, question_id)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(&choice.choice_text)
            .bind(choice.is_correct)
            .bind(question.id)
            .execute(&mut *tx)
            .await?;
        }

        tx.commit().await?;
        Ok(question)
    }

    async fn find_choice(
        &self,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Option<Choice>, DbError> {
        let choice = sqlx::query_as::<_, Choice>(
            r#"
            SELECT id, choice_text, is_correct, question_id
            FROM choices
            WHERE id = $1 AND question_id = $2
            "#,
        )
        .bind(choice_id)
        .bind(question_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(choice)
    }

    async fn ping(&self) -> Result<(), DbError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DatabaseConfig;
    use crate::db::{create_pool, schema};
    use crate::models::NewChoice;

    // Integration tests - run with DATABASE_URL set
    // cargo test -p quizctl-server -- --ignored

    async fn store() -> PgQuizStore {
        let config = DatabaseConfig {
            url: Some(std::env::var("DATABASE_URL").expect("DATABASE_URL required")),
            ..DatabaseConfig::default()
        };
        let pool = create_pool(&config).await.expect("pool creation failed");
        schema::migrate(&pool).await.expect("migration failed");
        PgQuizStore::new(pool)
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn create_then_read_back() {
        let store = store().await;
        let question = store
            .create_question(NewQuestion {
                question_text: "Largest planet?".into(),
                choices: vec![
                    NewChoice {
                        choice_text: "Mars".into(),
                        is_correct: false,
                    },
                    NewChoice {
                        choice_text: "Jupiter".into(),
                        is_correct: true,
                    },
                ],
            })
            .await
            .unwrap();

        let fetched = store.get_question(question.id).await.unwrap().unwrap();
        assert_eq!(fetched.question_text, "Largest planet?");

        let choices = store.list_choices(question.id).await.unwrap();
        assert_eq!(choices.len(), 2);
        assert!(choices[0].id < choices[1].id);

        let right = store
            .find_choice(question.id, choices[1].id)
            .await
            .unwrap()
            .unwrap();
        assert!(right.is_correct);
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn find_choice_requires_matching_question() {
        let store = store().await;
        let a = store
            .create_question(NewQuestion {
                question_text: "A?".into(),
                choices: vec![NewChoice {
                    choice_text: "a".into(),
                    is_correct: true,
                }],
            })
            .await
            .unwrap();
        let b = store
            .create_question(NewQuestion {
                question_text: "B?".into(),
                choices: vec![],
            })
            .await
            .unwrap();

        let choice_id = store.list_choices(a.id).await.unwrap()[0].id;
        assert!(store.find_choice(b.id, choice_id).await.unwrap().is_none());
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn ping_succeeds() {
        store().await.ping().await.unwrap();
    }
}
