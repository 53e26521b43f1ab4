//! Animal categories and per-category data storage.
//!
//! ## Category
//!
//! The closed set of outcomes a quiz can resolve to. The declaration order
//! is significant: it is the order used when breaking ties between
//! categories with the same tally.
//!
//! ## CategoryMap
//!
//! Per-category data backed by a fixed array for O(1) access.
//! Supports iteration (in enumeration order) and indexing by `Category`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};
use std::str::FromStr;

/// An animal a quiz answer can be attributed to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Cat,
    Dog,
    Fox,
    Hamster,
    Horse,
}

impl Category {
    /// Number of categories.
    pub const COUNT: usize = 5;

    /// Every category, in enumeration order.
    pub const ALL: [Category; Category::COUNT] = [
        Category::Cat,
        Category::Dog,
        Category::Fox,
        Category::Hamster,
        Category::Horse,
    ];

    /// Position of this category in `Category::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase name, as used in image paths and result text.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Category::Cat => "cat",
            Category::Dog => "dog",
            Category::Fox => "fox",
            Category::Hamster => "hamster",
            Category::Horse => "horse",
        }
    }

    /// Capitalized name, as used for option labels.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Category::Cat => "Cat",
            Category::Dog => "Dog",
            Category::Fox => "Fox",
            Category::Hamster => "Hamster",
            Category::Horse => "Horse",
        }
    }

    /// Iterate over all categories in enumeration order.
    ///
    /// ```
    /// use animal_quiz::core::Category;
    ///
    /// let all: Vec<_> = Category::all().collect();
    /// assert_eq!(all.first(), Some(&Category::Cat));
    /// assert_eq!(all.last(), Some(&Category::Horse));
    /// ```
    pub fn all() -> impl Iterator<Item = Category> {
        Category::ALL.into_iter()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when parsing an unknown category name.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("unknown category: {0}")]
pub struct UnknownCategory(pub String);

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::all()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

/// Per-category data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use animal_quiz::core::{Category, CategoryMap};
///
/// let mut tally: CategoryMap<u32> = CategoryMap::default();
/// tally[Category::Fox] += 1;
///
/// assert_eq!(tally[Category::Fox], 1);
/// assert_eq!(tally.total(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CategoryMap<T> {
    data: [T; Category::COUNT],
}

impl<T> CategoryMap<T> {
    /// Create a new map with values from a factory function.
    pub fn new(factory: impl Fn(Category) -> T) -> Self {
        Self {
            data: Category::ALL.map(factory),
        }
    }

    /// Create a new map with all entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Get a reference to a category's data.
    #[must_use]
    pub fn get(&self, category: Category) -> &T {
        &self.data[category.index()]
    }

    /// Get a mutable reference to a category's data.
    pub fn get_mut(&mut self, category: Category) -> &mut T {
        &mut self.data[category.index()]
    }

    /// Iterate over (Category, &T) pairs in enumeration order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &T)> {
        Category::ALL.into_iter().zip(self.data.iter())
    }

    /// Iterate over values in enumeration order.
    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.data.iter()
    }
}

impl CategoryMap<u32> {
    /// Sum of all counts.
    #[must_use]
    pub fn total(&self) -> u32 {
        self.data.iter().sum()
    }

    /// First category, in enumeration order, holding the highest count.
    ///
    /// When several categories share the maximum the earliest one wins,
    /// so an all-zero map resolves to `Category::Cat`.
    #[must_use]
    pub fn leader(&self) -> Category {
        let max = self.data.iter().copied().max().unwrap_or(0);
        self.iter()
            .find(|&(_, &count)| count == max)
            .map_or(Category::Cat, |(category, _)| category)
    }
}

impl<T> Index<Category> for CategoryMap<T> {
    type Output = T;

    fn index(&self, category: Category) -> &Self::Output {
        self.get(category)
    }
}

impl<T> IndexMut<Category> for CategoryMap<T> {
    fn index_mut(&mut self, category: Category) -> &mut Self::Output {
        self.get_mut(category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order() {
        let all: Vec<_> = Category::all().collect();
        assert_eq!(
            all,
            vec![Category::Cat, Category::Dog, Category::Fox, Category::Hamster, Category::Horse]
        );
        for (i, c) in Category::all().enumerate() {
            assert_eq!(c.index(), i);
        }
    }

    #[test]
    fn test_category_names() {
        assert_eq!(format!("{}", Category::Hamster), "hamster");
        assert_eq!(Category::Horse.label(), "Horse");
        assert_eq!("fox".parse::<Category>(), Ok(Category::Fox));
        assert_eq!("DOG".parse::<Category>(), Ok(Category::Dog));
        assert!("owl".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde_lowercase() {
        let json = serde_json::to_string(&Category::Cat).unwrap();
        assert_eq!(json, "\"cat\"");
        let back: Category = serde_json::from_str("\"horse\"").unwrap();
        assert_eq!(back, Category::Horse);
    }

    #[test]
    fn test_category_map_new() {
        let map = CategoryMap::new(|c| c.index() as u32 * 10);
        assert_eq!(map[Category::Cat], 0);
        assert_eq!(map[Category::Horse], 40);
    }

    #[test]
    fn test_category_map_mutation_and_total() {
        let mut map: CategoryMap<u32> = CategoryMap::with_value(0);
        map[Category::Dog] += 2;
        map[Category::Fox] += 1;

        assert_eq!(map.total(), 3);
        let pairs: Vec<_> = map.iter().map(|(c, &v)| (c, v)).collect();
        assert_eq!(pairs[1], (Category::Dog, 2));
        assert_eq!(pairs[2], (Category::Fox, 1));
    }

    #[test]
    fn test_leader_picks_max() {
        let mut map: CategoryMap<u32> = CategoryMap::default();
        map[Category::Fox] = 2;
        map[Category::Horse] = 1;
        assert_eq!(map.leader(), Category::Fox);
    }

    #[test]
    fn test_leader_tie_breaks_on_enumeration_order() {
        let mut map: CategoryMap<u32> = CategoryMap::default();
        map[Category::Horse] = 2;
        map[Category::Dog] = 2;
        assert_eq!(map.leader(), Category::Dog);

        let all_equal: CategoryMap<u32> = CategoryMap::with_value(1);
        assert_eq!(all_equal.leader(), Category::Cat);

        let empty: CategoryMap<u32> = CategoryMap::default();
        assert_eq!(empty.leader(), Category::Cat);
    }

    #[test]
    fn test_category_map_serialization() {
        let map = CategoryMap::new(|c| c.index() as u32);
        let json = serde_json::to_string(&map).unwrap();
        let back: CategoryMap<u32> = serde_json::from_str(&json).unwrap();
        assert_eq!(map, back);
    }
}
