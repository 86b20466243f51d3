use derive_more::Display;
use indexmap::{IndexMap, map::Entry};
use log::debug;

use crate::PayloadError;

const SEPARATOR: char = '|';
const ESCAPE: char = '\\';
const MAX_NAME_LEN: usize = 64;

/// Identity of a cart entry, derived from the workout name, its context (e.g. the equipment) and
/// its difficulty.
#[derive(Display, Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CartKey(String);

/// Joins the trimmed fields with a separator. Separator and escape characters inside a field are
/// escaped, so two distinct triples never result in the same key.
#[must_use]
pub fn derive_key(name: &str, context: &str, difficulty: &str) -> CartKey {
    let mut key = String::with_capacity(name.len() + context.len() + difficulty.len() + 2);
    for (i, field) in [name, context, difficulty].into_iter().enumerate() {
        if i > 0 {
            key.push(SEPARATOR);
        }
        for c in field.trim().chars() {
            if c == SEPARATOR || c == ESCAPE {
                key.push(ESCAPE);
            }
            key.push(c);
        }
    }
    CartKey(key)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkoutPayload {
    pub name: String,
    pub duration_label: String,
    pub description: String,
    pub plan_text: String,
    pub image_ref: String,
    pub rationale_text: String,
    pub context_label: String,
    pub difficulty_label: String,
    pub source_category_label: String,
    pub mood_label: String,
    pub tips: Vec<String>,
}

/// A validated snapshot of a workout. The key is always derived from the payload itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartEntry {
    key: CartKey,
    payload: WorkoutPayload,
}

impl CartEntry {
    #[must_use]
    pub fn key(&self) -> &CartKey {
        &self.key
    }

    #[must_use]
    pub fn payload(&self) -> &WorkoutPayload {
        &self.payload
    }
}

impl TryFrom<WorkoutPayload> for CartEntry {
    type Error = PayloadError;

    fn try_from(mut payload: WorkoutPayload) -> Result<Self, Self::Error> {
        payload.name = required("name", &payload.name)?;
        let len = payload.name.chars().count();
        if len > MAX_NAME_LEN {
            return Err(PayloadError::TooLong {
                field: "name",
                len,
                max: MAX_NAME_LEN,
            });
        }
        payload.context_label = required("context", &payload.context_label)?;
        payload.difficulty_label = required("difficulty", &payload.difficulty_label)?;

        let key = derive_key(
            &payload.name,
            &payload.context_label,
            &payload.difficulty_label,
        );

        Ok(Self { key, payload })
    }
}

fn required(field: &'static str, value: &str) -> Result<String, PayloadError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(PayloadError::MissingField(field));
    }
    Ok(value.to_string())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CartStatus {
    Add,
    InCart,
}

impl CartStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            CartStatus::Add => "Add",
            CartStatus::InCart => "In cart",
        }
    }
}

/// Insertion-ordered set of cart entries. Adding a key that is already present leaves the
/// stored snapshot untouched.
#[derive(Debug, Default)]
pub struct CartStore {
    entries: IndexMap<CartKey, CartEntry>,
}

impl CartStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn has(&self, key: &CartKey) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn get(&self, key: &CartKey) -> Option<&CartEntry> {
        self.entries.get(key)
    }

    #[must_use]
    pub fn status(&self, key: &CartKey) -> CartStatus {
        if self.has(key) {
            CartStatus::InCart
        } else {
            CartStatus::Add
        }
    }

    /// Returns `false` if an entry with the same key is already present.
    pub fn add(&mut self, entry: CartEntry) -> bool {
        match self.entries.entry(entry.key.clone()) {
            Entry::Occupied(_) => {
                debug!("ignored duplicate cart entry {}", entry.key);
                false
            }
            Entry::Vacant(vacant) => {
                debug!("added cart entry {}", entry.key);
                vacant.insert(entry);
                true
            }
        }
    }

    /// Returns `false` if no entry with the given key exists.
    pub fn remove(&mut self, key: &CartKey) -> bool {
        // Shifting keeps the insertion order of the remaining entries.
        let removed = self.entries.shift_remove(key).is_some();
        if removed {
            debug!("removed cart entry {key}");
        }
        removed
    }

    pub fn clear(&mut self) {
        debug!("cleared {} cart entries", self.entries.len());
        self.entries.clear();
    }

    pub fn list(&self) -> impl ExactSizeIterator<Item = &CartEntry> {
        self.entries.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    #[test]
    fn test_derive_key_is_stable() {
        assert_eq!(
            derive_key("Goblet Squat", "Dumbbells", "beginner"),
            derive_key("Goblet Squat", "Dumbbells", "beginner")
        );
        assert_eq!(
            derive_key("Goblet Squat", "Dumbbells", "beginner").to_string(),
            "Goblet Squat|Dumbbells|beginner"
        );
    }

    #[rstest]
    #[case(" Plank ", "Bodyweight", "beginner")]
    #[case("Plank", " Bodyweight", "beginner ")]
    #[case("\tPlank\n", "Bodyweight", "beginner")]
    fn test_derive_key_ignores_surrounding_whitespace(
        #[case] name: &str,
        #[case] context: &str,
        #[case] difficulty: &str,
    ) {
        assert_eq!(
            derive_key(name, context, difficulty),
            derive_key("Plank", "Bodyweight", "beginner")
        );
        assert_eq!(
            CartEntry::try_from(payload(name, context, difficulty))
                .unwrap()
                .key(),
            &derive_key(name, context, difficulty)
        );
    }

    #[rstest]
    #[case(("a|b", "c", "d"), ("a", "b|c", "d"))]
    #[case(("a", "b", "c|d"), ("a", "b|c", "d"))]
    #[case(("a\\", "b", "c"), ("a", "\\b", "c"))]
    #[case(("a\\|b", "c", "d"), ("a\\", "b", "c|d"))]
    #[case(("", "a", "b"), ("a", "", "b"))]
    #[case(("Goblet Squat", "Dumbbells", "beginner"), ("Goblet Squat", "Kettlebell", "beginner"))]
    #[case(("Goblet Squat", "Dumbbells", "beginner"), ("Goblet Squat", "Dumbbells", "advanced"))]
    fn test_derive_key_distinct_triples(
        #[case] a: (&str, &str, &str),
        #[case] b: (&str, &str, &str),
    ) {
        assert!(derive_key(a.0, a.1, a.2) != derive_key(b.0, b.1, b.2));
    }

    #[rstest]
    #[case::missing_name(
        payload("  ", "Dumbbells", "beginner"),
        Err(PayloadError::MissingField("name"))
    )]
    #[case::missing_context(
        payload("Goblet Squat", "", "beginner"),
        Err(PayloadError::MissingField("context"))
    )]
    #[case::missing_difficulty(
        payload("Goblet Squat", "Dumbbells", " "),
        Err(PayloadError::MissingField("difficulty"))
    )]
    #[case::name_too_long(
        payload(&"A".repeat(65), "Dumbbells", "beginner"),
        Err(PayloadError::TooLong { field: "name", len: 65, max: 64 })
    )]
    #[case::valid(
        payload("Goblet Squat", "Dumbbells", "beginner"),
        Ok(derive_key("Goblet Squat", "Dumbbells", "beginner"))
    )]
    #[case::surrounding_whitespace(
        payload(" Goblet Squat ", "Dumbbells ", " beginner"),
        Ok(derive_key("Goblet Squat", "Dumbbells", "beginner"))
    )]
    fn test_cart_entry_try_from(
        #[case] payload: WorkoutPayload,
        #[case] expected: Result<CartKey, PayloadError>,
    ) {
        assert_eq!(
            CartEntry::try_from(payload).map(|e| e.key().clone()),
            expected
        );
    }

    #[test]
    fn test_cart_store_add_is_idempotent() {
        let mut cart = CartStore::new();
        let e = entry("Goblet Squat", "Dumbbells", "beginner");
        let mut changed = payload("Goblet Squat", "Dumbbells", "beginner");
        changed.plan_text = "5 rounds".to_string();
        let e_changed = CartEntry::try_from(changed).unwrap();

        assert!(cart.add(e.clone()));
        assert!(!cart.add(e.clone()));
        assert!(!cart.add(e_changed));

        assert_eq!(cart.len(), 1);
        assert_eq!(cart.get(e.key()), Some(&e));
    }

    #[test]
    fn test_cart_store_re_add_after_remove() {
        let mut cart = CartStore::new();
        let e = entry("Goblet Squat", "Dumbbells", "beginner");
        let mut changed = payload("Goblet Squat", "Dumbbells", "beginner");
        changed.mood_label = "Energized".to_string();
        let e2 = CartEntry::try_from(changed).unwrap();
        assert_eq!(e.key(), e2.key());

        assert!(cart.add(e.clone()));
        assert!(cart.remove(e.key()));
        assert!(!cart.has(e.key()));
        assert!(cart.add(e2.clone()));

        assert!(cart.has(e.key()));
        assert_eq!(cart.get(e.key()), Some(&e2));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_cart_store_remove_absent_key() {
        let mut cart = CartStore::new();
        cart.add(entry("Plank", "Bodyweight", "beginner"));

        assert!(!cart.remove(&derive_key("Plank", "Bodyweight", "advanced")));
        assert_eq!(cart.len(), 1);
    }

    #[test]
    fn test_cart_store_list_keeps_insertion_order() {
        let mut cart = CartStore::new();
        let a = entry("Goblet Squat", "Dumbbells", "beginner");
        let b = entry("Dumbbell Row", "Dumbbells", "beginner");
        let c = entry("Plank", "Bodyweight", "beginner");
        let d = entry("Push-Up", "Bodyweight", "beginner");

        cart.add(a.clone());
        cart.add(b.clone());
        cart.add(c.clone());
        cart.remove(b.key());

        assert_eq!(cart.list().collect::<Vec<_>>(), vec![&a, &c]);

        cart.add(d.clone());
        cart.add(b.clone());
        cart.remove(a.key());

        assert_eq!(cart.list().collect::<Vec<_>>(), vec![&c, &d, &b]);
    }

    #[test]
    fn test_cart_store_status() {
        let mut cart = CartStore::new();
        let e = entry("Kettlebell Swing", "Kettlebell", "beginner");

        assert_eq!(cart.status(e.key()), CartStatus::Add);
        assert_eq!(cart.status(e.key()).label(), "Add");

        cart.add(e.clone());

        assert_eq!(cart.status(e.key()), CartStatus::InCart);
        assert_eq!(cart.status(e.key()).label(), "In cart");

        cart.remove(e.key());

        assert_eq!(cart.status(e.key()), CartStatus::Add);
    }

    #[test]
    fn test_cart_store_clear() {
        let mut cart = CartStore::new();
        cart.add(entry("Goblet Squat", "Dumbbells", "beginner"));
        cart.add(entry("Plank", "Bodyweight", "beginner"));

        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.list().count(), 0);
    }

    fn entry(name: &str, context: &str, difficulty: &str) -> CartEntry {
        CartEntry::try_from(payload(name, context, difficulty)).unwrap()
    }

    fn payload(name: &str, context: &str, difficulty: &str) -> WorkoutPayload {
        WorkoutPayload {
            name: name.to_string(),
            duration_label: "20 min".to_string(),
            description: "Description".to_string(),
            plan_text: "3 rounds".to_string(),
            image_ref: "image.png".to_string(),
            rationale_text: "Rationale".to_string(),
            context_label: context.to_string(),
            difficulty_label: difficulty.to_string(),
            source_category_label: "Strength".to_string(),
            mood_label: "Focused".to_string(),
            tips: vec!["Tip".to_string()],
        }
    }
}
