use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Where a decompiled project currently sits in its edit cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Uploaded,
    Modified,
    Compiled,
    Signed,
}

impl ProjectStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Uploaded => "Uploaded",
            ProjectStatus::Modified => "Modified",
            ProjectStatus::Compiled => "Compiled",
            ProjectStatus::Signed => "Signed",
        }
    }
}

/// One decompiled APK project as listed by `GET /projects`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSummary {
    pub id: Uuid,
    pub name: String,
    pub original_filename: String,
    pub uploaded_at: DateTime<Utc>,
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_project_list_entry() {
        let body = r#"{
            "id": "6f2a7a3e-24a8-4f7d-9f34-1d1f1c2e5b10",
            "name": "MyGame",
            "original_filename": "my_game.apk",
            "uploaded_at": "2025-03-15T14:02:26Z",
            "status": "signed"
        }"#;
        let project: ProjectSummary = serde_json::from_str(body).unwrap();
        assert_eq!(project.name, "MyGame");
        assert_eq!(project.status, ProjectStatus::Signed);
        assert_eq!(project.status.label(), "Signed");
    }

    #[test]
    fn status_round_trips_lowercase() {
        assert_eq!(
            serde_json::to_string(&ProjectStatus::Uploaded).unwrap(),
            r#""uploaded""#
        );
    }
}
