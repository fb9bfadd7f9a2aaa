//! Scripted host for installer tests.

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use crate::shell::display_command;

use super::InstallerContext;

/// Records every command and URL; answers from canned outputs.
#[derive(Debug, Default)]
pub struct FakeHost {
    outputs: HashMap<String, String>,
    failing: HashSet<String>,
    ran: RefCell<Vec<String>>,
    opened: RefCell<Vec<String>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// `program --version` prints `output`.
    pub fn with_output(mut self, program: &str, output: &str) -> Self {
        self.outputs.insert(program.to_string(), output.to_string());
        self
    }

    /// A host with `python` answering as Python 3.11.4.
    pub fn with_python() -> Self {
        Self::new().with_output("python", "Python 3.11.4")
    }

    /// The command rendered as `command` exits non-zero.
    pub fn failing(mut self, command: &str) -> Self {
        self.failing.insert(command.to_string());
        self
    }

    pub fn ran(&self) -> Vec<String> {
        self.ran.borrow().clone()
    }

    pub fn opened(&self) -> Vec<String> {
        self.opened.borrow().clone()
    }

    pub fn context(&self) -> InstallerContext<'_> {
        InstallerContext {
            run_command: Box::new(|program: &str, args: &[&str]| {
                let command = display_command(program, args);
                let ok = !self.failing.contains(&command);
                self.ran.borrow_mut().push(command);
                ok
            }),
            capture_output: Box::new(|program: &str, _args: &[&str]| self.outputs.get(program).cloned()),
            open_url: Box::new(|url: &str| {
                self.opened.borrow_mut().push(url.to_string());
                true
            }),
        }
    }
}
