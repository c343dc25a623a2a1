/// Occurrences of each vowel in a piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VowelCounts {
    pub a: usize,
    pub e: usize,
    pub i: usize,
    pub o: usize,
    pub u: usize,
}

/// Count the vowels of the text, case-insensitively
pub fn vowel_counts(text: &str) -> VowelCounts {
    let mut counts = VowelCounts::default();
    for ch in text.chars() {
        match ch.to_ascii_lowercase() {
            'a' => counts.a += 1,
            'e' => counts.e += 1,
            'i' => counts.i += 1,
            'o' => counts.o += 1,
            'u' => counts.u += 1,
            _ => {}
        }
    }
    counts
}

impl VowelCounts {
    /// One-line summary in the `a - N, e - N, ...` report format
    pub fn summary(&self) -> String {
        format!(
            "a - {}, e - {}, i - {}, o - {}, u - {}",
            self.a, self.e, self.i, self.o, self.u
        )
    }
}
