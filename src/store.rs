//! Quiz attempts and report access, held in memory
//!
//! An attempt keeps its answers and the ranked matches computed at
//! submission time. Premium content (the full report and per-model
//! explanations) is gated per attempt by `ReportAccess`.

use chrono::{DateTime, Utc};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::sync::RwLock;
use uuid::Uuid;

use crate::error::{Result, ScoringError};
use crate::quiz::QuizData;
use crate::scorer::ModelScore;

/// One completed questionnaire submission
#[derive(Debug, Clone, Serialize)]
pub struct QuizAttempt {
    pub id: Uuid,
    pub email: Option<String>,
    pub quiz: QuizData,
    /// Ranked matches, best first
    pub matches: Vec<ModelScore>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    FullReport,
    ModelExplanations,
}

/// Unlock state of one attempt; `None` means locked
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ReportAccess {
    pub full_report: Option<DateTime<Utc>>,
    pub model_explanations: Option<DateTime<Utc>>,
}

impl ReportAccess {
    pub fn is_unlocked(&self, report_type: ReportType) -> bool {
        self.slot(report_type).is_some()
    }

    fn slot(&self, report_type: ReportType) -> &Option<DateTime<Utc>> {
        match report_type {
            ReportType::FullReport => &self.full_report,
            ReportType::ModelExplanations => &self.model_explanations,
        }
    }

    fn slot_mut(&mut self, report_type: ReportType) -> &mut Option<DateTime<Utc>> {
        match report_type {
            ReportType::FullReport => &mut self.full_report,
            ReportType::ModelExplanations => &mut self.model_explanations,
        }
    }
}

#[derive(Debug)]
struct StoredAttempt {
    attempt: QuizAttempt,
    access: ReportAccess,
}

/// In-memory attempt store
///
/// Locks are never held across an await; callers clone what they need out.
#[derive(Debug, Default)]
pub struct AttemptStore {
    attempts: RwLock<FxHashMap<Uuid, StoredAttempt>>,
}

impl AttemptStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Persist a scored submission under a fresh id
    pub fn create_attempt(
        &self,
        quiz: QuizData,
        email: Option<String>,
        matches: Vec<ModelScore>,
    ) -> Result<QuizAttempt> {
        let attempt = QuizAttempt {
            id: Uuid::new_v4(),
            email: email.map(|e| e.trim().to_lowercase()).filter(|e| !e.is_empty()),
            quiz,
            matches,
            created_at: Utc::now(),
        };

        let mut attempts = self.attempts.write().map_err(|_| ScoringError::LockPoisoned)?;
        attempts.insert(
            attempt.id,
            StoredAttempt {
                attempt: attempt.clone(),
                access: ReportAccess::default(),
            },
        );
        tracing::info!("Stored quiz attempt {}", attempt.id);

        Ok(attempt)
    }

    pub fn get_attempt(&self, id: Uuid) -> Result<QuizAttempt> {
        let attempts = self.attempts.read().map_err(|_| ScoringError::LockPoisoned)?;
        attempts
            .get(&id)
            .map(|stored| stored.attempt.clone())
            .ok_or(ScoringError::AttemptNotFound(id))
    }

    /// Attempts submitted with this email, oldest first
    pub fn list_attempts_for_email(&self, email: &str) -> Result<Vec<QuizAttempt>> {
        let email = email.trim().to_lowercase();
        let attempts = self.attempts.read().map_err(|_| ScoringError::LockPoisoned)?;

        let mut found: Vec<QuizAttempt> = attempts
            .values()
            .filter(|stored| stored.attempt.email.as_deref() == Some(email.as_str()))
            .map(|stored| stored.attempt.clone())
            .collect();
        found.sort_by_key(|a| a.created_at);

        Ok(found)
    }

    /// Unlock a report type; returns whether this call changed anything
    ///
    /// A repeat unlock keeps the original timestamp.
    pub fn unlock(&self, id: Uuid, report_type: ReportType) -> Result<bool> {
        let mut attempts = self.attempts.write().map_err(|_| ScoringError::LockPoisoned)?;
        let stored = attempts.get_mut(&id).ok_or(ScoringError::AttemptNotFound(id))?;

        let slot = stored.access.slot_mut(report_type);
        if slot.is_some() {
            tracing::debug!("{:?} already unlocked for attempt {}", report_type, id);
            return Ok(false);
        }

        *slot = Some(Utc::now());
        tracing::info!("Unlocked {:?} for attempt {}", report_type, id);
        Ok(true)
    }

    pub fn access(&self, id: Uuid) -> Result<ReportAccess> {
        let attempts = self.attempts.read().map_err(|_| ScoringError::LockPoisoned)?;
        attempts
            .get(&id)
            .map(|stored| stored.access.clone())
            .ok_or(ScoringError::AttemptNotFound(id))
    }

    pub fn is_unlocked(&self, id: Uuid, report_type: ReportType) -> Result<bool> {
        Ok(self.access(id)?.is_unlocked(report_type))
    }

    pub fn len(&self) -> usize {
        self.attempts.read().map(|a| a.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
