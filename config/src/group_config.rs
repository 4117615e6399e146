use serde::{
    Deserialize,
    Serialize,
};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCountConfig {
    /// Count projects of nested sub-groups as well.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub include_subgroups: Option<bool>,
}

impl ProjectCountConfig {
    pub fn include_subgroups(&self) -> bool {
        self.include_subgroups.unwrap_or(false)
    }
}

/// Marker, member counting has no options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCountConfig {}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupConfig {
    /// Numeric id or full path of the group.
    #[serde(deserialize_with = "crate::scalar::string_or_number")]
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_count: Option<ProjectCountConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub member_count: Option<MemberCountConfig>,
}

impl GroupConfig {
    pub fn new(id: impl ToString) -> Self {
        Self {
            id: id.to_string(),
            ..Default::default()
        }
    }

    pub fn with_project_count(mut self, include_subgroups: Option<bool>) -> Self {
        self.project_count = Some(ProjectCountConfig { include_subgroups });
        self
    }

    pub fn with_member_count(mut self) -> Self {
        self.member_count = Some(MemberCountConfig {});
        self
    }

    /// A group without any metric spec produces no samples.
    pub fn is_noop(&self) -> bool {
        self.project_count.is_none() && self.member_count.is_none()
    }
}
