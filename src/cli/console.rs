use std::collections::VecDeque;

use rustyline::{error::ReadlineError, DefaultEditor};

use crate::errors::WizardError;

/// Line-oriented question/answer seam between the wizard and the terminal.
///
/// One call prints one question line and returns one raw answer line.
/// Trimming and interpretation belong to the caller.
pub trait Console {
    fn ask(&mut self, question: &str) -> Result<String, WizardError>;
}

/// Interactive console over stdin/stdout, backed by a rustyline editor.
pub struct StdConsole {
    editor: DefaultEditor,
}

impl StdConsole {
    pub fn new() -> Result<Self, WizardError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl Console for StdConsole {
    fn ask(&mut self, question: &str) -> Result<String, WizardError> {
        println!("{question}");
        match self.editor.readline("") {
            Ok(line) => Ok(line),
            // Ctrl-C and a closed stdin both mean the user is done with us.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                Err(WizardError::Interrupted)
            }
            Err(err) => Err(err.into()),
        }
    }
}

/// Scripted console used by the test suites.
///
/// Pops pre-seeded answers in order and records every question it was
/// asked; an exhausted script behaves like a closed stdin.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    questions: Vec<String>,
}

impl ScriptedConsole {
    pub fn with_answers<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
        }
    }

    /// Every question asked so far, in order.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

impl Console for ScriptedConsole {
    fn ask(&mut self, question: &str) -> Result<String, WizardError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(WizardError::Interrupted)
    }
}
