use std::fmt;

use crate::error::CoreError;

/// System prompt for the HTML report pipeline.
pub const HTML_SYSTEM_PROMPT: &str =
    "You are a professional PDF document generator and structured HTML documents.";

/// System prompt for the plain-text document pipeline.
pub const TEXT_SYSTEM_PROMPT: &str = "You are an expert content creator.";

/// Default topic for the HTML report pipeline.
pub const DEFAULT_REPORT_TOPIC: &str = "Таблиця звичок (дата + виконано/не виконано)";

/// Default topic for the document pipeline, wrapped by [`Prompt::checklist_guide`].
pub const DEFAULT_GUIDE_TOPIC: &str = "Як ефективно планувати день";

/// A free-form description of the document to generate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt(String);

impl Prompt {
    /// Wrap raw prompt text. Whitespace-only text is rejected.
    pub fn new(text: impl Into<String>) -> Result<Self, CoreError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(CoreError::EmptyPrompt);
        }
        Ok(Self(text))
    }

    /// Request a complete, self-styled HTML document about `topic`.
    pub fn html_document(topic: &str) -> Result<Self, CoreError> {
        if topic.trim().is_empty() {
            return Err(CoreError::EmptyPrompt);
        }
        Ok(Self(format!(
            "Generate an HTML template for a PDF document on the topic: {topic}. \
             HTML should be complete: \
             - Full structure (`<!DOCTYPE html>`, `<html>`, `<head>`, `<body>`) \
             - Beautifully designed header \
             - Tables, lists or blocks for structuring data \
             - Add examples of filling. \
             Do not use CSS frameworks, only basic inline-CSS. \
             Generate text in English."
        )))
    }

    /// Request a detailed checklist-style guide about `topic`.
    pub fn checklist_guide(topic: &str) -> Result<Self, CoreError> {
        if topic.trim().is_empty() {
            return Err(CoreError::EmptyPrompt);
        }
        Ok(Self(format!(
            "Створи детальний гайд про {topic} у форматі чек-листа."
        )))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Prompt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
