//! Levenshtein edit distance and the similarity ratio derived from it.
//!
//! Both operate on Unicode scalar values, so "café" has length 4.

/// Calculate Levenshtein distance between two strings.
///
/// Insertions, deletions and substitutions each cost 1.
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    // Keep the shorter string in the inner loop so the rows stay small.
    let (outer, inner) = if a_chars.len() >= b_chars.len() {
        (&a_chars, &b_chars)
    } else {
        (&b_chars, &a_chars)
    };

    let n = inner.len();
    if n == 0 {
        return outer.len();
    }

    let mut prev = (0..=n).collect::<Vec<_>>();
    let mut curr = vec![0; n + 1];

    for (i, oc) in outer.iter().enumerate() {
        curr[0] = i + 1;

        for (j, ic) in inner.iter().enumerate() {
            let cost = usize::from(oc != ic);

            curr[j + 1] = (prev[j + 1] + 1) // deletion
                .min(curr[j] + 1) // insertion
                .min(prev[j] + cost); // substitution
        }

        std::mem::swap(&mut prev, &mut curr);
    }

    prev[n]
}

/// Similarity between 0.0 and 1.0 based on edit distance.
///
/// Two empty strings are perfectly similar.
pub fn similarity(a: &str, b: &str) -> f64 {
    let max_len = a.chars().count().max(b.chars().count());
    if max_len == 0 {
        return 1.0;
    }

    let distance = edit_distance(a, b);
    let ratio = (max_len as f64 - distance as f64) / max_len as f64;
    ratio.clamp(0.0, 1.0)
}
