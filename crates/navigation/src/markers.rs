/// Set of event indices whose markers are on the map, backed by a bitset.
///
/// Ordering contract:
/// - Iteration yields indices in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerSet {
    words: Vec<u64>,
    len: usize,
}

impl MarkerSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// All indices in `0..count`.
    pub fn all(count: usize) -> Self {
        Self::from_range(0..count)
    }

    pub fn from_range(range: std::ops::Range<usize>) -> Self {
        let mut s = Self::default();
        for i in range {
            s.insert(i);
        }
        s
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn contains(&self, index: usize) -> bool {
        let (word, bit) = word_bit(index);
        self.words
            .get(word)
            .is_some_and(|w| (w & (1u64 << bit)) != 0)
    }

    /// Returns `true` if the set changed.
    pub fn insert(&mut self, index: usize) -> bool {
        let (word, bit) = word_bit(index);
        if self.words.len() <= word {
            self.words.resize(word + 1, 0);
        }
        let mask = 1u64 << bit;
        let w = &mut self.words[word];
        if (*w & mask) != 0 {
            return false;
        }
        *w |= mask;
        self.len += 1;
        true
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        MarkerIter {
            words: &self.words,
            word_index: 0,
            current_word: 0,
            base_index: 0,
        }
    }

    pub fn to_vec(&self) -> Vec<usize> {
        self.iter().collect()
    }
}

fn word_bit(index: usize) -> (usize, u32) {
    (index / 64, (index % 64) as u32)
}

struct MarkerIter<'a> {
    words: &'a [u64],
    word_index: usize,
    current_word: u64,
    base_index: usize,
}

impl Iterator for MarkerIter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.current_word != 0 {
                let tz = self.current_word.trailing_zeros();
                self.current_word &= !(1u64 << tz);
                return Some(self.base_index + tz as usize);
            }

            let w = *self.words.get(self.word_index)?;
            self.current_word = w;
            self.base_index = self.word_index * 64;
            self.word_index += 1;
        }
    }
}
