use crate::{
    api::{ApiOperation, StudentApi},
    crud::Prompt,
    data::student::{StudentDraft, StudentId, StudentRecord},
    error::{RosterError, RosterResult},
};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::sync::Mutex;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    List,
    Create(StudentDraft),
    Update(StudentId, StudentDraft),
    Delete(StudentId),
}

/// In-memory backend that records every call and can be told to fail specific operations.
#[derive(Debug, Default)]
pub struct FakeApi {
    records: Mutex<Vec<StudentRecord>>,
    calls: Mutex<Vec<Call>>,
    failing: Mutex<Vec<ApiOperation>>,
    next_id: Mutex<u64>,
}

impl FakeApi {
    pub fn with_records(records: Vec<StudentRecord>) -> Self {
        let next_id = records.len() as u64;
        Self {
            records: Mutex::new(records),
            next_id: Mutex::new(next_id),
            ..Self::default()
        }
    }

    pub fn fail(&self, operation: ApiOperation) {
        self.failing.lock().unwrap().push(operation);
    }

    pub fn recover(&self) {
        self.failing.lock().unwrap().clear();
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn records(&self) -> Vec<StudentRecord> {
        self.records.lock().unwrap().clone()
    }

    fn record_call(&self, call: Call, operation: ApiOperation) -> RosterResult<()> {
        self.calls.lock().unwrap().push(call);
        if self.failing.lock().unwrap().contains(&operation) {
            return Err(RosterError::Rejected {
                operation,
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

#[async_trait]
impl StudentApi for FakeApi {
    async fn list(&self) -> RosterResult<Vec<StudentRecord>> {
        self.record_call(Call::List, ApiOperation::List)?;
        Ok(self.records())
    }

    async fn create(&self, draft: &StudentDraft) -> RosterResult<()> {
        self.record_call(Call::Create(draft.clone()), ApiOperation::Create)?;

        let id = {
            let mut next_id = self.next_id.lock().unwrap();
            *next_id += 1;
            *next_id
        };
        self.records.lock().unwrap().push(StudentRecord {
            id: StudentId::new(id.to_string()),
            name: draft.name.clone(),
            email: draft.email.clone(),
            age: draft.age.clone(),
        });
        Ok(())
    }

    async fn update(&self, id: &StudentId, draft: &StudentDraft) -> RosterResult<()> {
        self.record_call(
            Call::Update(id.clone(), draft.clone()),
            ApiOperation::Update,
        )?;

        if let Some(record) = self
            .records
            .lock()
            .unwrap()
            .iter_mut()
            .find(|record| &record.id == id)
        {
            record.name.clone_from(&draft.name);
            record.email.clone_from(&draft.email);
            record.age.clone_from(&draft.age);
        }
        Ok(())
    }

    async fn delete(&self, id: &StudentId) -> RosterResult<()> {
        self.record_call(Call::Delete(id.clone()), ApiOperation::Delete)?;
        self.records.lock().unwrap().retain(|record| &record.id != id);
        Ok(())
    }
}

/// Answers every confirmation with a fixed choice and keeps what it was asked and told.
#[derive(Debug, Default)]
pub struct ScriptedPrompt {
    pub answer: bool,
    pub confirmations: Vec<String>,
    pub alerts: Vec<String>,
}

impl ScriptedPrompt {
    pub fn answering(answer: bool) -> Self {
        Self {
            answer,
            ..Self::default()
        }
    }
}

impl Prompt for ScriptedPrompt {
    fn confirm(&mut self, message: &str) -> bool {
        self.confirmations.push(message.to_string());
        self.answer
    }

    fn alert(&mut self, message: &str) {
        self.alerts.push(message.to_string());
    }
}

pub fn student(id: &str, name: &str, email: &str, age: &str) -> StudentRecord {
    StudentRecord {
        id: StudentId::new(id),
        name: name.into(),
        email: email.into(),
        age: age.into(),
    }
}
