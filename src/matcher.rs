//! Literal and placeholder scanning.
//!
//! Insertion only ever needs [`common_prefix_len`]. Lookups additionally use
//! [`Pattern`] to read labels such as `users/@id/posts` as templates: the
//! placeholder (`@`) opens a named segment, the delimiter (`/`) closes both
//! the name in the label and the captured value in the input.

use smallvec::SmallVec;

/// Byte length of the longest common leading run of characters.
///
/// The result always falls on a char boundary of both strings.
#[inline]
pub fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// Placeholder/delimiter pair used by dynamic lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern {
    placeholder: char,
    delimiter: char,
}

impl Pattern {
    pub const fn new(placeholder: char, delimiter: char) -> Self {
        Self {
            placeholder,
            delimiter,
        }
    }

    #[inline]
    pub fn placeholder(&self) -> char {
        self.placeholder
    }

    #[inline]
    pub fn delimiter(&self) -> char {
        self.delimiter
    }

    /// A pattern whose placeholder equals its delimiter treats every label as a
    /// plain literal.
    #[inline]
    pub fn is_literal(&self) -> bool {
        self.placeholder == self.delimiter
    }

    /// Whether `label` has to be matched as a template under this pattern.
    #[inline]
    pub fn is_dynamic(&self, label: &str) -> bool {
        !self.is_literal() && label.contains(self.placeholder)
    }

    /// Match `label` against the head of `input`.
    ///
    /// Returns the number of input bytes consumed. Captures are written to
    /// `params` only when the whole label matches.
    ///
    /// A name with no closing delimiter runs to the end of the label, and a
    /// value with no closing delimiter runs to the end of the input. Whatever
    /// literal text follows the last placeholder must be a prefix of what is
    /// left of the input.
    pub fn match_label(&self, label: &str, input: &str, params: &mut Params) -> Option<usize> {
        if !self.is_dynamic(label) {
            return input.starts_with(label).then_some(label.len());
        }

        let mut captured: SmallVec<[(&str, &str); 4]> = SmallVec::new();
        let mut l = label;
        let mut s = input;

        while let Some(at) = l.find(self.placeholder) {
            s = s.strip_prefix(&l[..at])?;
            l = &l[at + self.placeholder.len_utf8()..];

            let name_end = l.find(self.delimiter).unwrap_or(l.len());
            let value_end = s.find(self.delimiter).unwrap_or(s.len());
            captured.push((&l[..name_end], &s[..value_end]));

            l = &l[name_end..];
            s = &s[value_end..];
        }

        let s = s.strip_prefix(l)?;
        for (name, value) in captured {
            params.insert(name, value);
        }
        Some(input.len() - s.len())
    }
}

/// Named parameters captured by a dynamic lookup, in capture order.
///
/// A name captured twice keeps its position and takes the later value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params {
    pairs: SmallVec<[(String, String); 4]>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    pub(crate) fn insert(&mut self, name: &str, value: &str) {
        match self.pairs.iter_mut().find(|(n, _)| n == name) {
            Some((_, v)) => {
                v.clear();
                v.push_str(value);
            }
            None => self.pairs.push((name.to_owned(), value.to_owned())),
        }
    }
}

impl<'a> IntoIterator for &'a Params {
    type Item = (&'a str, &'a str);
    type IntoIter = std::iter::Map<
        std::slice::Iter<'a, (String, String)>,
        fn(&'a (String, String)) -> (&'a str, &'a str),
    >;

    fn into_iter(self) -> Self::IntoIter {
        fn as_strs(pair: &(String, String)) -> (&str, &str) {
            (pair.0.as_str(), pair.1.as_str())
        }
        self.pairs
            .iter()
            .map(as_strs as fn(&'a (String, String)) -> (&'a str, &'a str))
    }
}
