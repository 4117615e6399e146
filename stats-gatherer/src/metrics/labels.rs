use super::Labels;

/// Label carrying the group a sample was collected for.
pub const GROUP_ID_LABEL: &str = "group_id";

/// Merges label sets in order, later sets win on key collisions.
pub fn merge_labels<'a>(label_sets: impl IntoIterator<Item = &'a Labels>) -> Labels {
    let mut merged = Labels::new();
    for labels in label_sets {
        merged.extend(labels.iter().map(|(name, value)| (name.clone(), value.clone())));
    }
    merged
}

/// The labels specific to one group, applied on top of the defaults.
pub fn group_labels(group_id: &str) -> Labels {
    Labels::from([(GROUP_ID_LABEL.to_string(), group_id.to_string())])
}
