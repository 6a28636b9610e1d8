use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A news post. `id` and `create_date` are assigned when the post is first saved.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BlogPost {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

impl BlogPost {
    pub fn draft<T, B>(title: T, body: B) -> Self
    where
        T: Into<String>,
        B: Into<String>,
    {
        Self {
            id: None,
            title: title.into(),
            body: body.into(),
            author: None,
            create_date: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

/// A message left by a site visitor. Same id and date conventions as [`BlogPost`].
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Feedback {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ip_address: Option<String>,
    pub title: String,
    pub body: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_date: Option<DateTime<Utc>>,
}

impl Feedback {
    pub fn draft<T, B>(title: T, body: B) -> Self
    where
        T: Into<String>,
        B: Into<String>,
    {
        Self {
            id: None,
            email: None,
            ip_address: None,
            title: title.into(),
            body: body.into(),
            create_date: None,
        }
    }

    pub fn is_persisted(&self) -> bool {
        self.id.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn draft_serializes_without_server_assigned_fields() {
        let value = serde_json::to_value(BlogPost::draft("New data", "Added 40 compounds")).unwrap();

        assert_eq!(json!({"title": "New data", "body": "Added 40 compounds"}), value);
    }

    #[test]
    fn persisted_post_round_trips_create_date() {
        let post = BlogPost {
            id: Some(3),
            author: Some("admin".into()),
            create_date: Some(Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap()),
            ..BlogPost::draft("t", "b")
        };

        let value = serde_json::to_value(&post).unwrap();
        assert_eq!(json!("2024-05-01T12:30:00Z"), value["createDate"]);

        let back: BlogPost = serde_json::from_value(value).unwrap();
        assert_eq!(post, back);
        assert!(back.is_persisted());
    }

    #[test]
    fn feedback_uses_camel_case_ip_address() {
        let feedback = Feedback {
            ip_address: Some("10.0.0.1".into()),
            ..Feedback::draft("t", "b")
        };

        let value = serde_json::to_value(&feedback).unwrap();

        assert_eq!(json!("10.0.0.1"), value["ipAddress"]);
        assert!(!feedback.is_persisted());
    }
}
