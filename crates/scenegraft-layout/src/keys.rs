//! Child key assignment.

use std::collections::HashSet;

/// Hands out unique child keys within one container.
#[derive(Debug, Default)]
pub struct KeyAllocator {
    used: HashSet<String>,
}

impl KeyAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Key for the child at document position `index`.
    ///
    /// The base name is used as-is when free; otherwise `_<index>` is
    /// appended until the key is unique.
    pub fn assign(&mut self, base: &str, index: usize) -> String {
        let mut key = base.to_string();
        while self.used.contains(&key) {
            key = format!("{key}_{index}");
        }
        self.used.insert(key.clone());
        key
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_appends_index() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.assign("icon", 0), "icon");
        assert_eq!(keys.assign("icon", 1), "icon_1");
        assert_eq!(keys.assign("label", 2), "label");
    }

    #[test]
    fn test_suffix_collision_is_resolved() {
        let mut keys = KeyAllocator::new();
        assert_eq!(keys.assign("icon_2", 0), "icon_2");
        assert_eq!(keys.assign("icon", 1), "icon");
        // "icon_2" is taken by the first child, so the suffix repeats.
        assert_eq!(keys.assign("icon", 2), "icon_2_2");
    }
}
