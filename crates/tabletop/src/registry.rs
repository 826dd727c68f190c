//! Fill cache.
//!
//! Every distinct [`FillKey`] is realized at most once. Shapes hold `Rc`
//! handles to the cached fill, so applying the same choice twice yields the
//! very same instance.

use std::collections::HashMap;
use std::rc::Rc;

use crate::error::Result;
use crate::fill::{Fill, FillKey, PatternFill};

/// Owns every fill created during a session.
///
/// Entries are never evicted or mutated. Insertion order is kept so the SVG
/// `<defs>` section comes out the same way every time.
#[derive(Debug, Default)]
pub struct FillRegistry {
    fills: HashMap<FillKey, Rc<Fill>>,
    order: Vec<FillKey>,
}

impl FillRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return the cached fill for `key`, creating it on first use.
    ///
    /// Generation errors propagate and leave the registry unchanged.
    pub fn resolve(&mut self, key: &FillKey) -> Result<Rc<Fill>> {
        let key = key.normalized();

        if let Some(fill) = self.fills.get(&key) {
            log::debug!("fill cache hit: {}", key.fill_id());
            return Ok(Rc::clone(fill));
        }

        let fill = if key.pattern.is_solid() {
            Fill::Solid(key.background)
        } else {
            let template = key.pattern.generate()?;
            Fill::Pattern(PatternFill::from_template(key, template))
        };

        log::debug!("fill cache miss: created {}", key.fill_id());
        let fill = Rc::new(fill);
        self.fills.insert(key, Rc::clone(&fill));
        self.order.push(key);
        Ok(fill)
    }

    /// Look up a fill without creating it.
    pub fn get(&self, key: &FillKey) -> Option<Rc<Fill>> {
        self.fills.get(&key.normalized()).cloned()
    }

    pub fn contains(&self, key: &FillKey) -> bool {
        self.fills.contains_key(&key.normalized())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.fills.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.fills.is_empty()
    }

    /// Pattern fills in the order they were first created.
    pub fn pattern_fills(&self) -> impl Iterator<Item = &PatternFill> + '_ {
        self.order
            .iter()
            .filter_map(|key| self.fills.get(key))
            .filter_map(|fill| fill.as_pattern())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;
    use crate::patterns::PatternKind;
    use crate::rotation::Rotation;

    fn lines_key(rotation: i64) -> FillKey {
        FillKey::new(PatternKind::Lines, Color::BLACK, Color::WHITE, Rotation::new(rotation).unwrap())
    }

    #[test]
    fn resolving_twice_returns_the_same_instance() {
        let mut registry = FillRegistry::new();
        let a = registry.resolve(&lines_key(45)).unwrap();
        let b = registry.resolve(&lines_key(45)).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn solid_foreground_does_not_split_entries() {
        let mut registry = FillRegistry::new();
        let a = registry.resolve(&FillKey::solid(Color::WHITE, Color::BLACK)).unwrap();
        let b = registry.resolve(&FillKey::solid(Color::WHITE, Color::rgb(1, 1, 1))).unwrap();
        assert!(Rc::ptr_eq(&a, &b));
        assert_eq!(*a, Fill::Solid(Color::WHITE));
        assert_eq!(registry.pattern_fills().count(), 0);
    }

    #[test]
    fn pattern_fills_keep_creation_order() {
        let mut registry = FillRegistry::new();
        registry.resolve(&lines_key(90)).unwrap();
        registry.resolve(&FillKey::solid(Color::WHITE, Color::BLACK)).unwrap();
        registry.resolve(&lines_key(0)).unwrap();
        registry.resolve(&lines_key(90)).unwrap();

        let ids: Vec<&str> = registry.pattern_fills().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["lines-bg000000-fgFFFFFF-rot90", "lines-bg000000-fgFFFFFF-rot0"]);
    }

    #[test]
    fn get_does_not_create() {
        let mut registry = FillRegistry::new();
        assert!(registry.get(&lines_key(0)).is_none());
        assert!(registry.is_empty());
        registry.resolve(&lines_key(0)).unwrap();
        assert!(registry.contains(&lines_key(0)));
        assert!(registry.get(&lines_key(0)).is_some());
    }
}
