//! Recently searched skill names.

/// Skill names from recent searches, newest search first.
///
/// Names are unique and the list never grows past its capacity.
///
/// # Example
///
/// ```
/// use armorsmith::RecentSkills;
///
/// let mut recent = RecentSkills::new(3);
/// recent.record(["Attack", "Guard"]);
/// recent.record(["Focus", "Attack"]);
/// assert_eq!(recent.names(), ["Focus", "Attack", "Guard"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecentSkills {
    names: Vec<String>,
    capacity: usize,
}

impl RecentSkills {
    pub fn new(capacity: usize) -> Self {
        Self {
            names: Vec::new(),
            capacity,
        }
    }

    /// Restores a previously saved list, oldest entries past `capacity` dropped.
    pub fn with_names<I, S>(capacity: usize, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut recent = Self::new(capacity);
        for name in names {
            recent.push_unique(name.into());
        }
        recent.names.truncate(capacity);
        recent
    }

    /// Moves the skills of a new search to the front.
    pub fn record<I, S>(&mut self, searched: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let previous = std::mem::take(&mut self.names);
        for name in searched {
            self.push_unique(name.as_ref().to_string());
        }
        for name in previous {
            self.push_unique(name);
        }
        self.names.truncate(self.capacity);
    }

    fn push_unique(&mut self, name: String) {
        if !self.names.contains(&name) {
            self.names.push(name);
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

#[cfg(test)]
#[path = "recent_tests.rs"]
mod tests;
