use serde::Deserialize;
use std::collections::HashMap;
use std::rc::Rc;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct ProjectRecord {
    pub id: String,
    pub company: String,
    pub title: String,
    /// Short blurb shown on the card itself.
    pub summary: String,
    pub description: String,
    pub features: Vec<String>,
    pub tech: Vec<String>,
    /// Cards flagged hidden only appear once "Show More" is expanded.
    #[serde(default)]
    pub hidden: bool,
}

/// Read-only project table, keyed by id, in display order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectCatalog {
    records: Vec<Rc<ProjectRecord>>,
    by_id: HashMap<String, usize>,
}

impl ProjectCatalog {
    /// Returns the first id seen twice, if any.
    pub fn build(records: Vec<ProjectRecord>) -> Result<Self, String> {
        let mut catalog = Self::default();

        for record in records {
            if catalog.by_id.contains_key(&record.id) {
                return Err(record.id);
            }
            catalog.by_id.insert(record.id.clone(), catalog.records.len());
            catalog.records.push(Rc::new(record));
        }

        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&Rc<ProjectRecord>> {
        self.by_id.get(id).and_then(|index| self.records.get(*index))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rc<ProjectRecord>> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn has_hidden(&self) -> bool {
        self.records.iter().any(|record| record.hidden)
    }
}

const SHOW_MORE_LABEL: &str = "Show More Projects";
const SHOW_LESS_LABEL: &str = "Show Less";

/// Expansion state of the extra project cards.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ShowMore {
    expanded: bool,
}

impl ShowMore {
    pub fn toggle(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn expanded(self) -> bool {
        self.expanded
    }

    pub fn label(self) -> &'static str {
        if self.expanded {
            SHOW_LESS_LABEL
        } else {
            SHOW_MORE_LABEL
        }
    }

    /// Whether a card carries the `show` class on top of `project-hidden`.
    pub fn reveals(self, record: &ProjectRecord) -> bool {
        record.hidden && self.expanded
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, hidden: bool) -> ProjectRecord {
        ProjectRecord {
            id: id.to_string(),
            company: "Acme".to_string(),
            title: format!("Project {id}"),
            summary: String::new(),
            description: String::new(),
            features: vec!["one".to_string(), "two".to_string()],
            tech: vec!["Rust".to_string()],
            hidden,
        }
    }

    #[test]
    fn catalog_keeps_display_order_and_indexes_by_id() {
        let catalog =
            ProjectCatalog::build(vec![record("b", false), record("a", true)]).expect("unique ids");

        let order: Vec<&str> = catalog.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(order, ["b", "a"]);
        assert_eq!(catalog.get("a").map(|record| record.title.as_str()), Some("Project a"));
        assert!(catalog.get("missing").is_none());
        assert!(catalog.has_hidden());
    }

    #[test]
    fn duplicate_ids_are_reported() {
        let result = ProjectCatalog::build(vec![record("a", false), record("a", false)]);

        assert_eq!(result.err().as_deref(), Some("a"));
    }

    #[test]
    fn show_more_swaps_label_and_only_reveals_hidden_cards() {
        let mut show_more = ShowMore::default();
        let hidden = record("x", true);
        let visible = record("y", false);

        assert_eq!(show_more.label(), "Show More Projects");
        assert!(!show_more.reveals(&hidden));

        show_more.toggle();
        assert_eq!(show_more.label(), "Show Less");
        assert!(show_more.reveals(&hidden));
        assert!(!show_more.reveals(&visible));

        show_more.toggle();
        assert!(!show_more.expanded());
    }
}
