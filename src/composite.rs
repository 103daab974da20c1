//! Composite: items and groups of items priced through one contract.
//!
//! Groups own their children outright, leaves in one list and nested groups
//! in another, and every traversal visits leaves before subgroups.

pub trait Component {
    fn price(&self) -> f64;
    fn describe(&self) -> String;
}

pub struct Item {
    name: String,
    price: f64,
}

impl Item {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Component for Item {
    fn price(&self) -> f64 {
        self.price
    }

    fn describe(&self) -> String {
        format!("{}: {}", self.name, self.price)
    }
}

#[derive(Default)]
pub struct Group {
    items: Vec<Item>,
    groups: Vec<Group>,
}

impl Group {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_item(&mut self, item: Item) {
        self.items.push(item);
    }

    pub fn add_group(&mut self, group: Group) {
        self.groups.push(group);
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty() && self.groups.is_empty()
    }
}

impl Component for Group {
    // Recursion bottoms out in groups with no children.
    fn price(&self) -> f64 {
        let leaves: f64 = self.items.iter().map(Component::price).sum();
        let nested: f64 = self.groups.iter().map(Component::price).sum();
        leaves + nested
    }

    fn describe(&self) -> String {
        let mut lines = Vec::new();
        for item in &self.items {
            lines.push(item.describe());
        }
        for group in &self.groups {
            lines.push(group.describe());
        }
        lines.join("\n")
    }
}

/// Owner of one root group, forwarding the component contract to it.
pub struct Inventory {
    root: Group,
}

impl Inventory {
    pub fn new(root: Group) -> Self {
        Self { root }
    }

    pub fn total(&self) -> f64 {
        self.root.price()
    }

    pub fn describe(&self) -> String {
        self.root.describe()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_group() -> Group {
        let mut nested = Group::new();
        nested.add_item(Item::new("pen", 3.0));

        let mut root = Group::new();
        root.add_item(Item::new("book", 5.0));
        root.add_group(nested);
        root
    }

    #[test]
    fn test_nested_price_sums_to_aggregate() {
        assert_eq!(sample_group().price(), 8.0);
    }

    #[test]
    fn test_leaves_described_before_subgroups() {
        let lines: Vec<String> = sample_group()
            .describe()
            .lines()
            .map(str::to_string)
            .collect();
        assert_eq!(lines, vec!["book: 5", "pen: 3"]);
    }

    #[test]
    fn test_empty_group_prices_to_zero() {
        let group = Group::new();
        assert!(group.is_empty());
        assert_eq!(group.price(), 0.0);
        assert_eq!(group.describe(), "");
    }

    #[test]
    fn test_inventory_forwards_to_root() {
        let inventory = Inventory::new(sample_group());
        assert_eq!(inventory.total(), 8.0);
        assert!(inventory.describe().starts_with("book: 5"));
    }

    #[test]
    fn test_deeper_nesting() {
        let mut inner = Group::new();
        inner.add_item(Item::new("eraser", 1.0));

        let mut middle = Group::new();
        middle.add_item(Item::new("pen", 3.0));
        middle.add_group(inner);

        let mut root = Group::new();
        root.add_item(Item::new("book", 5.0));
        root.add_group(middle);

        assert_eq!(root.price(), 9.0);
        let described = root.describe();
        let book = described.find("book").unwrap();
        let pen = described.find("pen").unwrap();
        let eraser = described.find("eraser").unwrap();
        assert!(book < pen && pen < eraser);
    }
}
