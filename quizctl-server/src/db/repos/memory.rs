//! In-memory quiz store
//!
//! Ids are assigned from 1 in insertion order, like SERIAL columns. A
//! create holds the write lock for the whole insert, so readers never see a
//! question without its choices.

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{DbError, QuizStore};
use crate::models::{Choice, NewQuestion, Question};

#[derive(Default)]
struct Tables {
    questions: Vec<Question>,
    choices: Vec<Choice>,
    next_question_id: i32,
    next_choice_id: i32,
}

/// Quiz store kept in process memory
#[derive(Default)]
pub struct MemoryQuizStore {
    tables: RwLock<Tables>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl QuizStore for MemoryQuizStore {
    async fn get_question(&self, id: i32) -> Result<Option<Question>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables.questions.iter().find(|q| q.id == id).cloned())
    }

    async fn list_choices(&self, question_id: i32) -> Result<Vec<Choice>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .filter(|c| c.question_id == question_id)
            .cloned()
            .collect())
    }

    async fn create_question(&self, new: NewQuestion) -> Result<Question, DbError> {
        let mut tables = self.tables.write().await;

        tables.next_question_id += 1;
        let question = Question {
            id: tables.next_question_id,
            question_text: new.question_text,
        };
        tables.questions.push(question.clone());

        for choice in new.choices {
            tables.next_choice_id += 1;
            let id = tables.next_choice_id;
            tables.choices.push(Choice {
                id,
                choice_text: choice.choice_text,
                is_correct: choice.is_correct,
                question_id: question.id,
            });
        }

        Ok(question)
    }

    async fn find_choice(
        &self,
        question_id: i32,
        choice_id: i32,
    ) -> Result<Option<Choice>, DbError> {
        let tables = self.tables.read().await;
        Ok(tables
            .choices
            .iter()
            .find(|c| c.id == choice_id && c.question_id == question_id)
            .cloned())
    }

    async fn ping(&self) -> Result<(), DbError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::NewChoice;

    fn new_question(text: &str, choices: &[(&str, bool)]) -> NewQuestion {
        NewQuestion {
            question_text: text.into(),
            choices: choices
                .iter()
                .map(|(t, ok)| NewChoice {
                    choice_text: (*t).into(),
                    is_correct: *ok,
                })
                .collect(),
        }
    }

    #[tokio::test]
    async fn ids_are_sequential_across_questions() {
        let store = MemoryQuizStore::new();
        let first = store
            .create_question(new_question("1+1?", &[("2", true), ("3", false)]))
            .await
            .unwrap();
        let second = store
            .create_question(new_question("2+2?", &[("4", true)]))
            .await
            .unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);

        let ids: Vec<i32> = store
            .list_choices(second.id)
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![3]);
    }

    #[tokio::test]
    async fn find_choice_checks_owner() {
        let store = MemoryQuizStore::new();
        store
            .create_question(new_question("a?", &[("x", true)]))
            .await
            .unwrap();
        store.create_question(new_question("b?", &[])).await.unwrap();

        assert!(store.find_choice(1, 1).await.unwrap().is_some());
        assert!(store.find_choice(2, 1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn missing_question_has_no_choices() {
        let store = MemoryQuizStore::new();
        assert!(store.get_question(42).await.unwrap().is_none());
        assert!(store.list_choices(42).await.unwrap().is_empty());
    }
}
