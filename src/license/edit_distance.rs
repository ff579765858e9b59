//! Nearest-reference matching by Levenshtein distance.

/// Levenshtein distance between `a` and `b`, counted in chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, &ac) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b.iter().enumerate() {
            let cost = usize::from(ac != bc);
            curr[j + 1] = (prev[j + 1] + 1).min(curr[j] + 1).min(prev[j] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

fn prefix(text: &str, take: usize) -> &str {
    match text.char_indices().nth(take) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

/// Pick the candidate whose reference text is closest to `text`, comparing
/// only the first `take` characters of each. The earliest candidate wins ties.
pub fn closest<'a, I>(text: &str, candidates: I, take: usize) -> Option<&'a str>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let head = prefix(text, take);
    let mut best: Option<(&'a str, usize)> = None;

    for (name, reference) in candidates {
        let score = levenshtein(head, prefix(reference, take));
        match best {
            Some((_, best_score)) if best_score <= score => {}
            _ => best = Some((name, score)),
        }
    }

    best.map(|(name, _)| name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_levenshtein() {
        assert_eq!(levenshtein("", ""), 0);
        assert_eq!(levenshtein("abc", ""), 3);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
        assert_eq!(levenshtein("héllo", "hello"), 1);
    }

    #[test]
    fn test_prefix_respects_char_boundaries() {
        assert_eq!(prefix("héllo", 2), "hé");
        assert_eq!(prefix("abc", 10), "abc");
    }

    #[test]
    fn test_closest_picks_minimum() {
        let refs = [("one", "the quick brown fox"), ("two", "lorem ipsum dolor")];
        assert_eq!(closest("lorem ipsum dolour", refs, 500), Some("two"));
        assert_eq!(closest("the quick brown cat", refs, 500), Some("one"));
    }

    #[test]
    fn test_closest_first_wins_ties_and_empty_is_none() {
        let refs = [("a", "xyz"), ("b", "xyz")];
        assert_eq!(closest("xyz", refs, 500), Some("a"));
        assert_eq!(closest("xyz", std::iter::empty::<(&str, &str)>(), 500), None);
    }

    #[test]
    fn test_closest_only_compares_prefix() {
        let refs = [("a", "abcdef-tail-one"), ("b", "zzzzzz")];
        assert_eq!(closest("abcdef-something-else", refs, 6), Some("a"));
    }
}
