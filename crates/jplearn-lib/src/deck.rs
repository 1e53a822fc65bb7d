use rand::seq::SliceRandom;
use rand::Rng;

/// Items being studied together with the position of the current one.
///
/// Moving past either end wraps around.
#[derive(Debug, Clone)]
pub struct Deck<T> {
    items: Vec<T>,
    index: usize,
}

impl<T> Deck<T> {
    /// Construct a deck positioned at its first item.
    pub fn new(items: Vec<T>) -> Self {
        Self { items, index: 0 }
    }

    /// The current item, or `None` if the deck is empty.
    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    /// Position of the current item.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Move to the next item and return it.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }

        self.index = (self.index + 1) % self.items.len();
        self.current()
    }

    /// Move to the previous item and return it.
    pub fn prev(&mut self) -> Option<&T> {
        if self.items.is_empty() {
            return None;
        }

        self.index = self.index.checked_sub(1).unwrap_or(self.items.len() - 1);
        self.current()
    }

    /// Shuffle the items and move back to the first one.
    pub fn shuffle<R>(&mut self, rng: &mut R)
    where
        R: ?Sized + Rng,
    {
        self.items.shuffle(rng);
        self.index = 0;
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate over the items in deck order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> IntoIterator for Deck<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<T> FromIterator<T> for Deck<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn wraps_around() {
        let mut deck = Deck::new(vec!['a', 'b', 'c']);

        assert_eq!(deck.current(), Some(&'a'));
        assert_eq!(deck.prev(), Some(&'c'));
        assert_eq!(deck.next(), Some(&'a'));
        assert_eq!(deck.next(), Some(&'b'));
        assert_eq!(deck.next(), Some(&'c'));
        assert_eq!(deck.next(), Some(&'a'));
        assert_eq!(deck.index(), 0);
    }

    #[test]
    fn empty() {
        let mut deck = Deck::<u32>::new(Vec::new());
        assert!(deck.is_empty());
        assert_eq!(deck.current(), None);
        assert_eq!(deck.next(), None);
        assert_eq!(deck.prev(), None);
    }

    #[test]
    fn shuffle_resets_position() {
        let mut deck = (0..20).collect::<Deck<u32>>();
        deck.next();
        deck.next();
        deck.shuffle(&mut StdRng::seed_from_u64(1));

        assert_eq!(deck.index(), 0);
        assert_eq!(deck.len(), 20);

        let mut items = deck.iter().copied().collect::<Vec<_>>();
        items.sort();
        assert_eq!(items, (0..20).collect::<Vec<_>>());
    }
}
