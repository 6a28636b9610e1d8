use crate::list_filter::{
    ActivityProfileFilter, ActivityProfileListCriteria, CompoundFilter, CompoundListCriteria,
};
use engine::PageWindow;
use engine::list_criteria::ListFilter;
use engine::value::FieldValue;
use error_stack::Report;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use utoipa::ToSchema;

/// Which measurement a kinase search thresholds on.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchByKinaseSecondComponent {
    #[serde(rename = "kd")]
    Kd,
    #[default]
    #[serde(rename = "percentControl")]
    PercentControl,
}

impl SearchByKinaseSecondComponent {
    pub const fn as_str(&self) -> &'static str {
        match self {
            SearchByKinaseSecondComponent::Kd => "kd",
            SearchByKinaseSecondComponent::PercentControl => "percentControl",
        }
    }
}

impl Display for SearchByKinaseSecondComponent {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown search component '{0}', expected 'kd' or 'percentControl'")]
pub struct UnknownSecondComponent(pub String);

impl FromStr for SearchByKinaseSecondComponent {
    type Err = UnknownSecondComponent;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "kd" => Ok(SearchByKinaseSecondComponent::Kd),
            "percentControl" => Ok(SearchByKinaseSecondComponent::PercentControl),
            other => Err(UnknownSecondComponent(other.to_owned())),
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SearchFilterError {
    #[error("the {0} threshold must be a number")]
    InvalidThreshold(SearchByKinaseSecondComponent),
}

/// The user's current query against compounds and their activity profiles.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SearchFilter {
    pub inhibitor: String,
    pub kinase: String,
    #[schema(value_type = Option<Object>)]
    pub activity: Option<FieldValue>,
    #[schema(value_type = Option<Object>)]
    pub kd: Option<FieldValue>,
    pub activity_or_kd: SearchByKinaseSecondComponent,
}

impl SearchFilter {
    pub fn by_inhibitor(inhibitor: impl Into<String>) -> Self {
        Self {
            inhibitor: inhibitor.into(),
            ..Self::default()
        }
    }

    pub fn by_kinase_activity(kinase: impl Into<String>, activity: impl Into<FieldValue>) -> Self {
        Self {
            kinase: kinase.into(),
            activity: Some(activity.into()),
            activity_or_kd: SearchByKinaseSecondComponent::PercentControl,
            ..Self::default()
        }
    }

    pub fn by_kinase_kd(kinase: impl Into<String>, kd: impl Into<FieldValue>) -> Self {
        Self {
            kinase: kinase.into(),
            kd: Some(kd.into()),
            activity_or_kd: SearchByKinaseSecondComponent::Kd,
            ..Self::default()
        }
    }

    /// The threshold on the axis `activity_or_kd` selects.
    pub fn threshold(&self) -> Result<Option<f64>, Report<SearchFilterError>> {
        let value = match self.activity_or_kd {
            SearchByKinaseSecondComponent::Kd => self.kd.as_ref(),
            SearchByKinaseSecondComponent::PercentControl => self.activity.as_ref(),
        };

        match value {
            None => Ok(None),
            Some(FieldValue::Text(s)) if s.trim().is_empty() => Ok(None),
            Some(v) => v.as_f64().map(Some).ok_or_else(|| {
                Report::new(SearchFilterError::InvalidThreshold(self.activity_or_kd))
                    .attach(format!("received '{v}'"))
            }),
        }
    }

    /// Turns the filter into compound listing criteria.
    ///
    /// An inhibitor name wins over everything else. A kinase only narrows the listing
    /// when the selected threshold is also given; otherwise all compounds are listed.
    pub fn compound_criteria(
        &self,
        window: PageWindow,
    ) -> Result<CompoundListCriteria, Report<SearchFilterError>> {
        let criteria = CompoundFilter::criteria(window);

        let inhibitor = self.inhibitor.trim();
        if !inhibitor.is_empty() {
            return Ok(criteria.with(CompoundFilter::NameContains(inhibitor.to_owned())));
        }

        let kinase = self.kinase.trim();
        if kinase.is_empty() {
            return Ok(criteria);
        }

        let criteria = match (self.threshold()?, self.activity_or_kd) {
            (None, _) => criteria,
            (Some(t), SearchByKinaseSecondComponent::PercentControl) => criteria
                .with(CompoundFilter::Kinase(kinase.to_owned()))
                .with(CompoundFilter::PercentControlAtMost(t)),
            (Some(t), SearchByKinaseSecondComponent::Kd) => criteria
                .with(CompoundFilter::Kinase(kinase.to_owned()))
                .with(CompoundFilter::KdAtMost(t)),
        };
        Ok(criteria)
    }
}

/// Query for listing activity profiles.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ActivityProfileSearch {
    #[serde(default)]
    pub compound: Option<String>,
    #[serde(default)]
    pub kinase_ids: Vec<i64>,
    #[serde(default)]
    pub percent_control: Option<f64>,
}

impl ActivityProfileSearch {
    /// The named compound, if one was given and is not blank.
    pub fn compound_name(&self) -> Option<&str> {
        self.compound
            .as_deref()
            .map(str::trim)
            .filter(|c| !c.is_empty())
    }

    pub fn criteria(&self, window: PageWindow) -> ActivityProfileListCriteria {
        let mut criteria = ActivityProfileFilter::criteria(window);
        if let Some(compound) = self.compound_name() {
            criteria.add(ActivityProfileFilter::Compound(compound.to_owned()));
        }
        if !self.kinase_ids.is_empty() {
            criteria.add(ActivityProfileFilter::KinaseIds(self.kinase_ids.clone()));
        }
        if let Some(percent_control) = self.percent_control {
            criteria.add(ActivityProfileFilter::PercentControlAtMost(percent_control));
        }
        criteria
    }
}
