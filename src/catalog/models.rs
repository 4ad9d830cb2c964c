/// Data models for projects and communication records
///
/// Records arrive from mail, chat, and task sources with uneven fields, so
/// everything optional really is an Option here. No empty-string sentinels.

use serde::{Deserialize, Serialize};

/// Where a record came from
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum RecordKind {
    Email,
    Message,
    Task,
}

impl std::fmt::Display for RecordKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RecordKind::Email => "email",
            RecordKind::Message => "message",
            RecordKind::Task => "task",
        };
        write!(f, "{}", s)
    }
}

/// An incoming communication record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub kind: RecordKind,
    /// Explicit project tag set upstream (group sync, task forms)
    pub project_name: Option<String>,
    pub subject: Option<String>,
    pub body: Option<String>,
    /// Chat message text
    pub text: Option<String>,
    pub sender: Option<String>,
    pub created_at: Option<String>, // ISO 8601
}

impl Record {
    pub fn email(subject: &str, body: &str) -> Self {
        Record {
            kind: RecordKind::Email,
            project_name: None,
            subject: Some(subject.to_string()),
            body: Some(body.to_string()),
            text: None,
            sender: None,
            created_at: None,
        }
    }

    pub fn message(text: &str) -> Self {
        Record {
            kind: RecordKind::Message,
            project_name: None,
            subject: None,
            body: None,
            text: Some(text.to_string()),
            sender: None,
            created_at: None,
        }
    }

    pub fn task(subject: &str) -> Self {
        Record {
            kind: RecordKind::Task,
            project_name: None,
            subject: Some(subject.to_string()),
            body: None,
            text: None,
            sender: None,
            created_at: None,
        }
    }

    /// The record's leading line: subject for emails and tasks,
    /// message text for chat.
    pub fn headline(&self) -> Option<&str> {
        self.subject.as_deref().or(self.text.as_deref())
    }
}

/// A construction project as the catalog knows it
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub name: String,
    /// Short code, e.g. "AGR-GEM"
    pub code: Option<String>,
    /// Venue or site, e.g. "Grand Egyptian Museum"
    pub venue: Option<String>,
    /// Free-form lookup keywords, used by hint search only
    #[serde(default)]
    pub keywords: Vec<String>,
}

impl Project {
    pub fn new(name: &str) -> Self {
        Project {
            name: name.to_string(),
            code: None,
            venue: None,
            keywords: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_headline() {
        let email = Record::email("Invoice #4", "see attached");
        assert_eq!(email.headline(), Some("Invoice #4"));

        let msg = Record::message("crane arrives tomorrow");
        assert_eq!(msg.headline(), Some("crane arrives tomorrow"));

        let mut task = Record::task("Order rebar");
        assert_eq!(task.headline(), Some("Order rebar"));
        task.subject = None;
        assert_eq!(task.headline(), None);
    }

    #[test]
    fn test_record_kind_display() {
        assert_eq!(RecordKind::Email.to_string(), "email");
        assert_eq!(RecordKind::Message.to_string(), "message");
    }

    #[test]
    fn test_record_json_roundtrip() {
        let json = r#"{"type":"email","subject":"AGR-GEM Invoice #4","sender":"pm@site.example"}"#;
        let record: Record = serde_json::from_str(json).unwrap();
        assert_eq!(record.kind, RecordKind::Email);
        assert_eq!(record.subject.as_deref(), Some("AGR-GEM Invoice #4"));
        assert!(record.body.is_none());
        assert!(record.project_name.is_none());
    }

    #[test]
    fn test_project_json_defaults() {
        let json = r#"{"name":"Agora","code":"AGR-GEM","venue":"Grand Egyptian Museum"}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert_eq!(project.name, "Agora");
        assert_eq!(project.code.as_deref(), Some("AGR-GEM"));
        assert!(project.keywords.is_empty());

        let json = r#"{"name":"Sidewalk Repair","code":null}"#;
        let project: Project = serde_json::from_str(json).unwrap();
        assert!(project.code.is_none());
        assert!(project.venue.is_none());
    }
}
