use serde::Serialize;

/// Per-category commit counters for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Analysis {
    pub breaking_changes: usize,
    pub features: usize,
    pub fixes: usize,
    pub other: usize,
    pub malformed: usize,
}

/// Counter a single commit lands in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Breaking,
    Feature,
    Fix,
    Other,
    Malformed,
}

impl Analysis {
    /// Count one commit in `category`
    pub fn record(&mut self, category: Category) {
        match category {
            Category::Breaking => self.breaking_changes += 1,
            Category::Feature => self.features += 1,
            Category::Fix => self.fixes += 1,
            Category::Other => self.other += 1,
            Category::Malformed => self.malformed += 1,
        }
    }

    /// Sum two sets of counters
    pub fn merge(self, other: Analysis) -> Analysis {
        Analysis {
            breaking_changes: self.breaking_changes + other.breaking_changes,
            features: self.features + other.features,
            fixes: self.fixes + other.fixes,
            other: self.other + other.other,
            malformed: self.malformed + other.malformed,
        }
    }

    pub fn total(&self) -> usize {
        self.breaking_changes + self.features + self.fixes + self.other + self.malformed
    }
}
