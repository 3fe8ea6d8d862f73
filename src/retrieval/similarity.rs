//! Ratcliff/Obershelp similarity over characters.
//!
//! The score is `2 * M / T` where `M` is the total length of the matching
//! blocks found by repeatedly taking the longest common substring and
//! recursing on both sides, and `T` is the combined length of both strings.
//! For a second sequence of 200 or more characters, characters occurring in
//! more than 1% of its positions are not used to seed matches, although a
//! match found elsewhere may still be extended across them.

use std::collections::HashMap;

const AUTOJUNK_MIN_LEN: usize = 200;

/// Similarity ratio of `a` and `b` in `[0.0, 1.0]`; `1.0` for identical input.
pub fn ratio(a: &str, b: &str) -> f64 {
    if a == b {
        return 1.0;
    }
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let total = a.len() + b.len();
    let matched = Matcher::new(&a, &b).matching_chars();
    2.0 * matched as f64 / total as f64
}

struct Matcher<'s> {
    a: &'s [char],
    b: &'s [char],
    /// Positions in `b` of every non-popular character, ascending.
    b2j: HashMap<char, Vec<usize>>,
}

impl<'s> Matcher<'s> {
    fn new(a: &'s [char], b: &'s [char]) -> Self {
        let mut b2j: HashMap<char, Vec<usize>> = HashMap::new();
        for (j, &c) in b.iter().enumerate() {
            b2j.entry(c).or_default().push(j);
        }

        if b.len() >= AUTOJUNK_MIN_LEN {
            let limit = b.len() / 100 + 1;
            b2j.retain(|_, positions| positions.len() <= limit);
        }

        Self { a, b, b2j }
    }

    /// Longest block `a[i..i+k] == b[j..j+k]` within the given ranges.
    ///
    /// Among equally long blocks the one starting earliest in `a`, then in
    /// `b`, wins.
    fn longest_match(
        &self,
        alo: usize,
        ahi: usize,
        blo: usize,
        bhi: usize,
    ) -> (usize, usize, usize) {
        let (mut best_i, mut best_j, mut best_k) = (alo, blo, 0);
        let mut j2len: HashMap<usize, usize> = HashMap::new();

        for i in alo..ahi {
            let mut next: HashMap<usize, usize> = HashMap::new();
            if let Some(positions) = self.b2j.get(&self.a[i]) {
                for &j in positions {
                    if j < blo {
                        continue;
                    }
                    if j >= bhi {
                        break;
                    }
                    let run = j.checked_sub(1).and_then(|p| j2len.get(&p)).copied();
                    let k = run.unwrap_or(0) + 1;
                    next.insert(j, k);
                    if k > best_k {
                        best_i = i + 1 - k;
                        best_j = j + 1 - k;
                        best_k = k;
                    }
                }
            }
            j2len = next;
        }

        while best_i > alo && best_j > blo && self.a[best_i - 1] == self.b[best_j - 1] {
            best_i -= 1;
            best_j -= 1;
            best_k += 1;
        }
        while best_i + best_k < ahi
            && best_j + best_k < bhi
            && self.a[best_i + best_k] == self.b[best_j + best_k]
        {
            best_k += 1;
        }

        (best_i, best_j, best_k)
    }

    fn matching_chars(&self) -> usize {
        let mut total = 0;
        let mut pending = vec![(0, self.a.len(), 0, self.b.len())];
        while let Some((alo, ahi, blo, bhi)) = pending.pop() {
            let (i, j, k) = self.longest_match(alo, ahi, blo, bhi);
            if k == 0 {
                continue;
            }
            total += k;
            if alo < i && blo < j {
                pending.push((alo, i, blo, j));
            }
            if i + k < ahi && j + k < bhi {
                pending.push((i + k, ahi, j + k, bhi));
            }
        }
        total
    }
}
