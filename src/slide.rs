/// Ordered, read-only list of slide image URLs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlideSet {
    urls: Vec<String>,
}

impl SlideSet {
    pub fn new<I, S>(urls: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            urls: urls.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.urls.get(index).map(String::as_str)
    }

    /// Index that follows `index`, wrapping at the end. `None` for an empty set.
    pub fn next_index(&self, index: usize) -> Option<usize> {
        if self.urls.is_empty() {
            None
        } else {
            Some((index + 1) % self.urls.len())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_index_wraps() {
        let slides = SlideSet::new(["a.jpg", "b.jpg", "c.jpg"]);
        assert_eq!(slides.next_index(0), Some(1));
        assert_eq!(slides.next_index(2), Some(0));
    }

    #[test]
    fn single_slide_wraps_to_itself() {
        let slides = SlideSet::new(["only.jpg"]);
        assert_eq!(slides.next_index(0), Some(0));
    }

    #[test]
    fn empty_set_has_no_next() {
        let slides = SlideSet::default();
        assert!(slides.is_empty());
        assert_eq!(slides.next_index(0), None);
        assert_eq!(slides.get(0), None);
    }
}
