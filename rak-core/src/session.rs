use crate::search::SearchFilter;
use engine::patch_field_schema;
use optional_field::{Field, serde_optional_fields};
use serde::{Deserialize, Serialize};
use tracing::debug;
use utoipa::ToSchema;

/// Client-side state for one browsing session.
///
/// `lightbox_image` is always serialized; `null` means the lightbox is closed.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RakState {
    pub user: String,
    pub lightbox_image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lightbox_title: Option<String>,
    pub filters: SearchFilter,
    pub last_admin_route_name: String,
}

impl RakState {
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            ..Self::default()
        }
    }

    pub fn open_lightbox(&mut self, image: impl Into<String>, title: Option<String>) {
        self.lightbox_image = Some(image.into());
        self.lightbox_title = title;
    }

    pub fn close_lightbox(&mut self) {
        self.lightbox_image = None;
        self.lightbox_title = None;
    }

    pub fn is_lightbox_open(&self) -> bool {
        self.lightbox_image.is_some()
    }

    /// Applies a partial update. Fields missing from `update` are left alone.
    pub fn apply_user(&mut self, update: UserRep) {
        if let Some(user_name) = update.user_name {
            debug!("session user changed");
            self.user = user_name;
        }

        match update.lightbox_image {
            Field::Present(Some(image)) => {
                self.lightbox_image = Some(image);
            }
            Field::Present(None) => self.close_lightbox(),
            Field::Missing => {}
        }
    }

    pub fn set_filters(&mut self, filters: SearchFilter) {
        self.filters = filters;
    }

    pub fn remember_admin_route(&mut self, route_name: impl Into<String>) {
        self.last_admin_route_name = route_name.into();
    }
}

/// Partial update of the session user. An explicit `null` lightbox image closes the lightbox.
#[serde_optional_fields]
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct UserRep {
    pub user_name: Option<String>,
    #[schema(schema_with = patch_field_schema)]
    pub lightbox_image: Field<String>,
}
