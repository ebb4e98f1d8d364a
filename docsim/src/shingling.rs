/// Iterator over overlapping windows of `window_size` consecutive tokens.
pub struct ShingleIter<'a, T> {
    tokens: &'a [T],
    window_size: usize,
    position: usize,
}

impl<'a, T> ShingleIter<'a, T> {
    pub fn new(tokens: &'a [T], window_size: usize) -> Self {
        debug_assert!(window_size >= 1);
        Self {
            tokens,
            window_size,
            position: 0,
        }
    }

    fn remaining(&self) -> usize {
        (self.tokens.len() + 1).saturating_sub(self.position + self.window_size)
    }
}

impl<'a, T> Iterator for ShingleIter<'a, T> {
    type Item = &'a [T];

    fn next(&mut self) -> Option<Self::Item> {
        if self.tokens.len() < self.position + self.window_size {
            return None;
        }
        let window = &self.tokens[self.position..self.position + self.window_size];
        self.position += 1;
        Some(window)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.remaining();
        (n, Some(n))
    }
}

impl<'a, T> ExactSizeIterator for ShingleIter<'a, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_w2() {
        let tokens = vec!["quick", "brown", "fox"];
        let mut iter = ShingleIter::new(&tokens, 2);
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.next(), Some(&tokens[0..2]));
        assert_eq!(iter.len(), 1);
        assert_eq!(iter.next(), Some(&tokens[1..3]));
        assert_eq!(iter.next(), None);
        assert_eq!(iter.len(), 0);
    }

    #[test]
    fn test_w5() {
        let tokens = vec!["a", "b", "c", "d", "e", "f"];
        let windows: Vec<_> = ShingleIter::new(&tokens, 5).collect();
        assert_eq!(windows, vec![&tokens[0..5], &tokens[1..6]]);
    }

    #[test]
    fn test_too_short() {
        let tokens = vec!["a", "b", "c"];
        let mut iter = ShingleIter::new(&tokens, 4);
        assert_eq!(iter.len(), 0);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn test_empty() {
        let tokens: Vec<&str> = vec![];
        assert_eq!(ShingleIter::new(&tokens, 1).count(), 0);
    }
}
