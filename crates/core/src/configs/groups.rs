//! Groups file parsing
//!
//! The groups file is a restricted line-oriented subset of YAML syntax: a
//! mapping key per group, a dash-prefixed list item per package filter,
//! nothing nested. The parser is a pure function over the file text and never
//! fails; lines it does not recognize are skipped, so malformed input yields
//! whatever partial table can be derived from it.

/// A named group of package filters, in file order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupConfig {
    pub name: String,
    pub filters: Vec<String>,
}

/// The parsed groups file: every group in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupsFileConfig {
    pub groups: Vec<GroupConfig>,
}

impl GroupsFileConfig {
    /// Look up a group by its exact name.
    pub fn get(&self, name: &str) -> Option<&GroupConfig> {
        self.groups.iter().find(|g| g.name == name)
    }

    /// Group names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.groups.iter().map(|g| g.name.as_str()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Register `name` as the active group, resetting its filter list if the
    /// name was already present. Returns the entry's index.
    fn register(&mut self, name: &str) -> usize {
        if let Some(index) = self.groups.iter().position(|g| g.name == name) {
            self.groups[index].filters.clear();
            return index;
        }

        self.groups.push(GroupConfig {
            name: name.to_string(),
            filters: Vec::new(),
        });
        self.groups.len() - 1
    }
}

/// Parse groups file text into a [`GroupsFileConfig`].
///
/// Per line, after trimming surrounding whitespace:
/// - empty lines and `#` comments are skipped,
/// - a line ending in `:` starts a new group (everything before the colon is
///   the name, taken verbatim),
/// - a line starting with `-` appends its trimmed remainder to the active
///   group, if one exists and the remainder is non-empty,
/// - anything else is ignored.
pub fn parse_groups_config(text: &str) -> GroupsFileConfig {
    let mut config = GroupsFileConfig::default();
    let mut active: Option<usize> = None;

    for line in text.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        if let Some(name) = trimmed.strip_suffix(':') {
            active = Some(config.register(name));
        } else if let Some(rest) = trimmed.strip_prefix('-') {
            // A list item before any header has no group to attach to.
            let Some(index) = active else { continue };

            let filter = rest.trim();
            if !filter.is_empty() {
                config.groups[index].filters.push(filter.to_string());
            }
        }
    }

    config
}
