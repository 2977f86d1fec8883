pub mod content;
pub mod prompt;
pub mod template;
