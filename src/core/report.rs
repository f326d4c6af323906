use crate::models::ResponseEntry;
use serde::Serialize;
use std::collections::BTreeMap;

/// Field a response breakdown is grouped on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupField {
    Category,
    Attribute,
    L2,
}

impl GroupField {
    pub const ALL: [GroupField; 3] = [GroupField::Category, GroupField::Attribute, GroupField::L2];

    pub fn key(&self) -> &'static str {
        match self {
            GroupField::Category => "category",
            GroupField::Attribute => "attribute",
            GroupField::L2 => "l2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            GroupField::Category => "Category",
            GroupField::Attribute => "Attribute",
            GroupField::L2 => "L2 Category",
        }
    }

    fn value<'a>(&self, entry: &'a ResponseEntry) -> &'a str {
        match self {
            GroupField::Category => &entry.category,
            GroupField::Attribute => &entry.attribute,
            GroupField::L2 => &entry.l2,
        }
    }
}

/// Correct and total answers for one label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupAggregate {
    pub label: String,
    pub correct: usize,
    pub total: usize,
}

impl GroupAggregate {
    /// Share of correct answers in percent, 0 for an empty group.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 * 100.0 / self.total as f64
        }
    }
}

/// Group responses on `field`, labels in ascending order.
pub fn group_by(responses: &[ResponseEntry], field: GroupField) -> Vec<GroupAggregate> {
    let mut groups: BTreeMap<&str, (usize, usize)> = BTreeMap::new();

    for entry in responses {
        let slot = groups.entry(field.value(entry)).or_default();
        if entry.correct {
            slot.0 += 1;
        }
        slot.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, (correct, total))| GroupAggregate {
            label: label.to_string(),
            correct,
            total,
        })
        .collect()
}

/// Final score and the three breakdowns shown when a quiz is complete.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreReport {
    pub score: usize,
    pub total: usize,
    pub by_category: Vec<GroupAggregate>,
    pub by_attribute: Vec<GroupAggregate>,
    pub by_l2: Vec<GroupAggregate>,
}

impl ScoreReport {
    /// `total` is the number of questions in the quiz, not the number of responses.
    pub fn build(responses: &[ResponseEntry], total: usize) -> Self {
        Self {
            score: responses.iter().filter(|r| r.correct).count(),
            total,
            by_category: group_by(responses, GroupField::Category),
            by_attribute: group_by(responses, GroupField::Attribute),
            by_l2: group_by(responses, GroupField::L2),
        }
    }

    pub fn grouping(&self, field: GroupField) -> &[GroupAggregate] {
        match field {
            GroupField::Category => &self.by_category,
            GroupField::Attribute => &self.by_attribute,
            GroupField::L2 => &self.by_l2,
        }
    }
}
