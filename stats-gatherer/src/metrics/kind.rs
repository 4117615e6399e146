use gitlab_stats_config::GroupConfig;
use strum::{
    Display,
    EnumIter,
};

/// The statistics we know how to collect for a group.
///
/// Variants are declared in evaluation order, `MetricKind::iter()` yields
/// project count before member count.
#[derive(Debug, Clone, Copy, Display, EnumIter, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[strum(serialize_all = "snake_case")]
pub enum MetricKind {
    ProjectCount,
    MemberCount,
}

impl MetricKind {
    pub fn metric_name(&self) -> &'static str {
        match self {
            MetricKind::ProjectCount => "gitlab_group_project_count",
            MetricKind::MemberCount => "gitlab_group_members_count",
        }
    }

    pub fn help(&self) -> &'static str {
        match self {
            MetricKind::ProjectCount => "Number of projects in the GitLab group",
            MetricKind::MemberCount => "Number of members in the GitLab group",
        }
    }

    /// Whether the group opted into this metric by declaring its spec.
    pub fn is_enabled_for(&self, group: &GroupConfig) -> bool {
        match self {
            MetricKind::ProjectCount => group.project_count.is_some(),
            MetricKind::MemberCount => group.member_count.is_some(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn project_count_is_evaluated_first() {
        let kinds: Vec<_> = MetricKind::iter().collect();
        assert_eq!(kinds, vec![MetricKind::ProjectCount, MetricKind::MemberCount]);
    }

    #[test]
    fn enabled_by_presence() {
        let group = GroupConfig::new("1").with_member_count();
        assert!(!MetricKind::ProjectCount.is_enabled_for(&group));
        assert!(MetricKind::MemberCount.is_enabled_for(&group));

        let group = group.with_project_count(None);
        assert!(MetricKind::ProjectCount.is_enabled_for(&group));
    }

    #[test]
    fn display_names() {
        assert_eq!(MetricKind::ProjectCount.to_string(), "project_count");
        assert_eq!(MetricKind::MemberCount.to_string(), "member_count");
    }
}
