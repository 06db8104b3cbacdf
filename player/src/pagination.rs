use std::{num::NonZeroUsize, str::SplitWhitespace};

pub const DEFAULT_WORDS_PER_PAGE: NonZeroUsize = match NonZeroUsize::new(500) {
    Some(words) => words,
    None => panic!("page size must be non-zero"),
};

/// Pages of at most `words_per_page` words, rejoined with single spaces.
/// Pages are produced lazily; to start over, paginate again.
pub struct Pages<'a> {
    words: SplitWhitespace<'a>,
    words_per_page: usize,
}

impl<'a> Iterator for Pages<'a> {
    type Item = String;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<&str> = self.words.by_ref().take(self.words_per_page).collect();
        if page.is_empty() {
            None
        } else {
            Some(page.join(" "))
        }
    }
}

pub fn paginate(text: &str, words_per_page: NonZeroUsize) -> Pages<'_> {
    Pages {
        words: text.split_whitespace(),
        words_per_page: words_per_page.get(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: usize) -> String {
        (1..=n).map(|i| format!("w{}", i)).collect::<Vec<_>>().join(" ")
    }

    #[test]
    fn one_word_over_makes_a_second_page() {
        let text = words(501);

        let pages: Vec<String> = paginate(&text, DEFAULT_WORDS_PER_PAGE).collect();

        assert_eq!(pages.len(), 2);
        assert_eq!(pages[0].split(' ').count(), 500);
        assert_eq!(pages[1], "w501");
    }

    #[test]
    fn exact_fit_is_one_page() {
        let text = words(500);

        assert_eq!(paginate(&text, DEFAULT_WORDS_PER_PAGE).count(), 1);
    }

    #[test]
    fn whitespace_collapses_to_single_spaces() {
        let pages: Vec<String> =
            paginate("a\n\nb\t c   d ", NonZeroUsize::new(3).unwrap()).collect();

        assert_eq!(pages, vec!["a b c", "d"]);
    }

    #[test]
    fn empty_text_has_no_pages() {
        assert_eq!(paginate("  \n", DEFAULT_WORDS_PER_PAGE).count(), 0);
    }
}
