use sbom_licenses::prelude::*;
use std::sync::{Arc, Mutex};

/// Mock UserLogger for testing that captures messages
#[derive(Default, Clone)]
pub struct MockUserLogger {
    pub messages: Arc<Mutex<Vec<String>>>,
}

impl MockUserLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_messages(&self) -> Vec<String> {
        self.messages.lock().unwrap().clone()
    }

    pub fn error_messages(&self) -> Vec<String> {
        self.get_messages()
            .into_iter()
            .filter(|m| m.starts_with("Error: "))
            .collect()
    }
}

impl UserLogger for MockUserLogger {
    fn info(&self, message: &str) {
        self.messages.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.messages
            .lock()
            .unwrap()
            .push(format!("Error: {}", message));
    }
}
