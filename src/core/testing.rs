//! In-memory doubles shared by unit tests.

use std::cell::{Cell, RefCell};

use crate::core::git::Repository;
use crate::core::p4::{Backend, Session};
use crate::core::prompt::Prompter;
use crate::error::{ProcessError, Result};

/// Prompter answering from a fixed script and recording every call.
pub struct Scripted {
    answers: RefCell<Vec<String>>,
    pub titles: RefCell<Vec<String>>,
    pub masked: RefCell<Vec<bool>>,
}

impl Scripted {
    pub fn new(answers: &[&str]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().rev().map(|s| s.to_string()).collect()),
            titles: RefCell::new(Vec::new()),
            masked: RefCell::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> usize {
        self.titles.borrow().len()
    }
}

impl Prompter for Scripted {
    fn read_line(&self, title: &str, masked: bool) -> Result<String> {
        self.titles.borrow_mut().push(title.to_string());
        self.masked.borrow_mut().push(masked);
        Ok(self
            .answers
            .borrow_mut()
            .pop()
            .expect("prompted more often than scripted"))
    }
}

/// Backend recording logins instead of running `p4`.
#[derive(Default)]
pub struct RecordingBackend {
    pub logins: RefCell<Vec<(Session, String)>>,
    pub reject: bool,
}

impl RecordingBackend {
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }
}

impl Backend for RecordingBackend {
    fn login(&self, session: &Session, password: &str) -> Result<()> {
        self.logins
            .borrow_mut()
            .push((session.clone(), password.to_string()));
        if self.reject {
            return Err(ProcessError::Exited {
                command: "p4 login".to_string(),
                status: "exit status: 1".to_string(),
            }
            .into());
        }
        Ok(())
    }
}

/// Repository holding a single tip commit message.
pub struct FakeRepo {
    pub message: RefCell<String>,
    pub amends: Cell<usize>,
    pub notes: RefCell<Vec<(String, Option<String>)>>,
    pub fail_amend: bool,
}

impl FakeRepo {
    pub fn new(message: &str) -> Self {
        Self {
            message: RefCell::new(message.to_string()),
            amends: Cell::new(0),
            notes: RefCell::new(Vec::new()),
            fail_amend: false,
        }
    }

    pub fn failing_amend(message: &str) -> Self {
        Self {
            fail_amend: true,
            ..Self::new(message)
        }
    }
}

impl Repository for FakeRepo {
    fn head_message(&self) -> Result<String> {
        Ok(self.message.borrow().clone())
    }

    fn amend(&self, message: &str) -> Result<()> {
        if self.fail_amend {
            return Err(ProcessError::Exited {
                command: "git commit --amend".to_string(),
                status: "exit status: 1".to_string(),
            }
            .into());
        }
        *self.message.borrow_mut() = message.to_string();
        self.amends.set(self.amends.get() + 1);
        Ok(())
    }

    fn add_note(&self, payload: &str, target: Option<&str>) -> Result<()> {
        self.notes
            .borrow_mut()
            .push((payload.to_string(), target.map(str::to_string)));
        Ok(())
    }
}
