//! Shared test doubles for the service-layer tests: an in-memory quiz
//! store, a recording notifier, and a recording navigator.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use quizforge_types::error::RepositoryError;
use quizforge_types::quiz::{Quiz, QuizId};

use crate::navigate::Navigator;
use crate::notify::{Notifier, Severity};
use crate::storage::QuizStore;

/// In-memory `QuizStore` with optional read/write failure injection.
#[derive(Clone, Default)]
pub(crate) struct MemoryQuizStore {
    quizzes: Arc<Mutex<Vec<Quiz>>>,
    fail_writes: Arc<AtomicBool>,
    fail_reads: Arc<AtomicBool>,
}

impl MemoryQuizStore {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    pub(crate) fn fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::SeqCst);
    }

    fn check_writable(&self) -> Result<(), RepositoryError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            Err(RepositoryError::Query("disk full".to_string()))
        } else {
            Ok(())
        }
    }

    fn check_readable(&self) -> Result<(), RepositoryError> {
        if self.fail_reads.load(Ordering::SeqCst) {
            Err(RepositoryError::Query("invalid quiz payload".to_string()))
        } else {
            Ok(())
        }
    }
}

impl QuizStore for MemoryQuizStore {
    async fn get_all(&self) -> Result<Vec<Quiz>, RepositoryError> {
        self.check_readable()?;
        Ok(self.quizzes.lock().unwrap().clone())
    }

    async fn get_by_id(&self, id: &QuizId) -> Result<Option<Quiz>, RepositoryError> {
        self.check_readable()?;
        Ok(self
            .quizzes
            .lock()
            .unwrap()
            .iter()
            .find(|q| &q.id == id)
            .cloned())
    }

    async fn upsert(&self, quiz: &Quiz) -> Result<(), RepositoryError> {
        self.check_writable()?;
        let mut quizzes = self.quizzes.lock().unwrap();
        match quizzes.iter_mut().find(|q| q.id == quiz.id) {
            Some(existing) => *existing = quiz.clone(),
            None => quizzes.push(quiz.clone()),
        }
        Ok(())
    }

    async fn remove(&self, id: &QuizId) -> Result<(), RepositoryError> {
        self.check_writable()?;
        self.quizzes.lock().unwrap().retain(|q| &q.id != id);
        Ok(())
    }
}

/// Notifier that records every message for assertions.
#[derive(Clone, Default)]
pub(crate) struct RecordingNotifier {
    notifications: Arc<Mutex<Vec<(String, Severity)>>>,
}

impl RecordingNotifier {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn messages(&self) -> Vec<(String, Severity)> {
        self.notifications.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str, severity: Severity) {
        self.notifications
            .lock()
            .unwrap()
            .push((message.to_string(), severity));
    }
}

/// Navigator that records requested routes.
#[derive(Clone, Default)]
pub(crate) struct RecordingNavigator {
    routes: Arc<Mutex<Vec<String>>>,
}

impl RecordingNavigator {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn routes(&self) -> Vec<String> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn go_to_list(&self) {
        self.routes.lock().unwrap().push("list".to_string());
    }

    fn go_to_editor(&self, id: Option<&QuizId>) {
        let route = match id {
            Some(id) => format!("editor/{id}"),
            None => "editor".to_string(),
        };
        self.routes.lock().unwrap().push(route);
    }

    fn go_to_player(&self, id: &QuizId) {
        self.routes.lock().unwrap().push(format!("player/{id}"));
    }
}
