use crate::models::QuestionRecord;

/// Raw dataset labels and the names shown to the user instead.
pub const DISPLAY_LABELS: &[(&str, &str)] = &[
    ("overconcept", "appropriateness"),
    ("inconsistency", "coherency"),
];

/// Display name for a raw label, if the table renames it.
pub fn display_label(raw: &str) -> Option<&'static str> {
    DISPLAY_LABELS
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}

/// Rename `attribute` and `l2-category` in place. Other fields are untouched.
pub fn remap_labels(record: &mut QuestionRecord) {
    for field in [&mut record.attribute, &mut record.l2_category] {
        if let Some(to) = display_label(field) {
            *field = to.to_string();
        }
    }
}
