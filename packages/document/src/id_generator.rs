use crate::element::{ElementId, ElementType};

/// Sequential id generator for the elements of one document.
///
/// Ids are `<type>-<n>`; `n` grows until it would overflow, then restarts at 1.
/// Uniqueness inside a document is checked by the document itself.
#[derive(Debug, Clone, Default)]
pub struct IdGenerator {
    count: u64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Generate the next id for an element of `element_type`
    pub fn new_id(&mut self, element_type: ElementType) -> ElementId {
        self.count = self.count.checked_add(1).unwrap_or(1);
        ElementId::new(format!("{}-{}", element_type.as_str(), self.count))
    }

    /// Account for an id that already exists so later ids cannot collide with it
    pub fn observe(&mut self, id: &ElementId) {
        let suffix = id
            .as_str()
            .rsplit_once('-')
            .and_then(|(_, n)| n.parse::<u64>().ok());

        if let Some(n) = suffix {
            self.count = self.count.max(n);
        }
    }

    pub fn count(&self) -> u64 {
        self.count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut gen = IdGenerator::new();

        let id1 = gen.new_id(ElementType::Text);
        let id2 = gen.new_id(ElementType::Button);
        let id3 = gen.new_id(ElementType::Text);

        assert_eq!(id1.as_str(), "text-1");
        assert_eq!(id2.as_str(), "button-2");
        assert_eq!(id3.as_str(), "text-3");
    }

    #[test]
    fn test_observed_ids_are_skipped() {
        let mut gen = IdGenerator::new();
        gen.observe(&ElementId::new("header-41"));
        gen.observe(&ElementId::new("hero"));
        gen.observe(&ElementId::new("text-7"));

        assert_eq!(gen.count(), 41);
        assert_eq!(gen.new_id(ElementType::Text).as_str(), "text-42");
    }

    #[test]
    fn test_counter_restarts_instead_of_overflowing() {
        let mut gen = IdGenerator::new();
        gen.observe(&ElementId::new("text-18446744073709551615"));

        assert_eq!(gen.count(), u64::MAX);
        assert_eq!(gen.new_id(ElementType::Text).as_str(), "text-1");
    }
}
