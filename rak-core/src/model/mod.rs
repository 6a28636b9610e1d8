mod activity_profile;
mod compound;
mod kinase;
mod submission;

pub use activity_profile::{ActivityProfile, ProfileKey};
pub use compound::{Compound, CompoundCountPair};
pub use kinase::Kinase;
pub use submission::{BlogPost, Feedback};

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// An organization credited on the site.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Eq)]
pub struct Partner {
    pub id: i64,
    pub name: String,
    pub url: String,
}
