use core::fmt;

/// A concatenation of borrowed string fragments with fixed size storage.
///
/// Empty fragments are never stored, so two concatenations compare equal if
/// the characters they spell out are equal.
#[derive(Clone, Copy)]
pub(crate) struct Concat<'a, const N: usize> {
    storage: [&'a str; N],
    len: usize,
}

impl<const N: usize> Default for Concat<'_, N> {
    #[inline]
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, const N: usize> Concat<'a, N> {
    /// Construct an empty concatenation.
    pub(crate) const fn empty() -> Self {
        Concat {
            storage: [""; N],
            len: 0,
        }
    }

    /// Push a fragment.
    ///
    /// # Panics
    ///
    /// Panics if more than `N` non-empty fragments are pushed.
    pub(crate) fn push(&mut self, string: &'a str) {
        if !string.is_empty() {
            assert!(self.len < N, "Capacity overflow");
            self.storage[self.len] = string;
            self.len += 1;
        }
    }

    /// The stored fragments.
    #[inline]
    pub(crate) fn as_slice(&self) -> &[&'a str] {
        &self.storage[..self.len]
    }

    /// Iterate over characters in the concatenation.
    pub(crate) fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.as_slice().iter().flat_map(|s| s.chars())
    }

    /// Length in bytes of the concatenated string.
    pub(crate) fn byte_len(&self) -> usize {
        self.as_slice().iter().map(|s| s.len()).sum()
    }
}

impl<'a, const N: usize> FromIterator<&'a str> for Concat<'a, N> {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut this = Self::empty();

        for string in iter {
            this.push(string);
        }

        this
    }
}

impl<'a, const A: usize, const B: usize> PartialEq<Concat<'a, A>> for Concat<'_, B> {
    fn eq(&self, other: &Concat<'a, A>) -> bool {
        self.chars().eq(other.chars())
    }
}

impl<const N: usize> Eq for Concat<'_, N> {}

impl<const N: usize> fmt::Display for Concat<'_, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for string in self.as_slice() {
            string.fmt(f)?;
        }

        Ok(())
    }
}

impl<const N: usize> fmt::Debug for Concat<'_, N> {
    #[inline]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.to_string())
    }
}

#[test]
fn skips_empty_fragments() {
    let a = Concat::<3>::from_iter(["書", "", "い", "た"]);
    let b = Concat::<2>::from_iter(["書い", "た"]);
    assert_eq!(a.as_slice(), ["書", "い", "た"]);
    assert!(a == b);
    assert_eq!(a.byte_len(), "書いた".len());
    assert!(Concat::<1>::from_iter([""]).as_slice().is_empty());
}
