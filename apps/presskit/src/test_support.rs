//! Scripted collaborators shared by the unit tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::console::Console;
use crate::errors::AppError;
use crate::llm_client::{LlmError, TextGenerator};
use crate::search::{NewsResult, NewsSearch, SearchError, SearchQuery};

/// Replays a fixed list of answers. Running out behaves like a closed stdin.
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    questions: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            questions: Vec::new(),
            output: Vec::new(),
        }
    }

    pub fn questions(&self) -> Vec<&str> {
        self.questions.iter().map(String::as_str).collect()
    }

    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }

    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn ask(&mut self, question: &str) -> Result<String, AppError> {
        self.questions.push(question.to_string());
        self.answers.pop_front().ok_or(AppError::Interrupted)
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}

type Responder = Box<dyn Fn(&str) -> Result<String, LlmError> + Send + Sync>;

/// Answers prompts with a closure and records every prompt it saw.
pub struct ScriptedGenerator {
    responder: Responder,
    prompts: Mutex<Vec<String>>,
}

impl ScriptedGenerator {
    pub fn new(responder: impl Fn(&str) -> Result<String, LlmError> + Send + Sync + 'static) -> Self {
        Self {
            responder: Box::new(responder),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Replies with `text` to every prompt.
    pub fn fixed(text: &str) -> Self {
        let text = text.to_string();
        Self::new(move |_| Ok(text.clone()))
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

#[async_trait]
impl TextGenerator for ScriptedGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        (self.responder)(prompt)
    }
}

/// Search provider with a canned outcome.
pub struct StaticSearch {
    outcome: Result<Vec<NewsResult>, u16>,
    queries: Mutex<Vec<SearchQuery>>,
}

impl StaticSearch {
    pub fn returning(results: Vec<NewsResult>) -> Self {
        Self {
            outcome: Ok(results),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16) -> Self {
        Self {
            outcome: Err(status),
            queries: Mutex::new(Vec::new()),
        }
    }

    pub fn queries(&self) -> Vec<SearchQuery> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl NewsSearch for StaticSearch {
    async fn search_news(&self, query: &SearchQuery) -> Result<Vec<NewsResult>, SearchError> {
        self.queries.lock().unwrap().push(query.clone());
        match &self.outcome {
            Ok(results) => Ok(results.clone()),
            Err(status) => Err(SearchError::Api { status: *status }),
        }
    }
}

pub fn news(title: &str, source: &str) -> NewsResult {
    NewsResult {
        title: title.to_string(),
        source: source.to_string(),
    }
}
