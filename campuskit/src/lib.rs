//! Pure utility functions from the standalone lab exercises.
//!
//! This crate collects the browser-side one-offs: a noun pluralizer, a
//! vowel counter, a month-name converter, a tax/price calculator, the
//! consonant-doubling translator, and the stack/queue demo structures.
//! They have no shared design and no dependencies; the lab server mounts
//! them as small demo pages.
//!
/// Noun pluralizer
pub mod pluralize;
/// Vowel counting
pub mod vowels;
/// Month-number to month-name conversion
pub mod month;
/// Price and tax calculator
pub mod price;
/// Consonant-doubling translator
pub mod translate;
/// Stack and queue demo structures
pub mod stack_queue;

#[cfg(test)]
mod tests {
    use crate::month::{month_converter, month_name};
    use crate::pluralize::pluralize;
    use crate::price::price_calculator;
    use crate::stack_queue::{Queue, Stack};
    use crate::translate::translate;
    use crate::vowels::vowel_counts;

    /// Each pluralizer rule class: count 1, unchanging, irregular, and the
    /// suffix rules
    #[test]
    fn pluralize_covers_every_rule() {
        assert_eq!(pluralize("church", 1), "1 church");
        assert_eq!(pluralize("sheep", 4), "4 sheep");
        assert_eq!(pluralize("goose", 2), "2 geese");
        assert_eq!(pluralize("child", 3), "3 children");
        assert_eq!(pluralize("box", 2), "2 boxes");
        assert_eq!(pluralize("bus", 2), "2 buses");
        assert_eq!(pluralize("church", 2), "2 churches");
        assert_eq!(pluralize("city", 2), "2 cities");
        assert_eq!(pluralize("boy", 2), "2 boys");
        assert_eq!(pluralize("wolf", 2), "2 wolves");
        assert_eq!(pluralize("knife", 2), "2 knives");
        assert_eq!(pluralize("cat", 2), "2 cats");
        assert_eq!(pluralize("deer", 0), "0 deer");
    }

    #[test]
    fn vowel_counts_are_case_insensitive() {
        let counts = vowel_counts("Education");
        assert_eq!(counts.a, 1);
        assert_eq!(counts.e, 1);
        assert_eq!(counts.i, 1);
        assert_eq!(counts.o, 1);
        assert_eq!(counts.u, 1);
        assert_eq!(counts.summary(), "a - 1, e - 1, i - 1, o - 1, u - 1");

        let none = vowel_counts("xyz");
        assert_eq!(none.summary(), "a - 0, e - 0, i - 0, o - 0, u - 0");
    }

    #[test]
    fn month_name_is_bounded() {
        assert_eq!(month_name(1), Some("January"));
        assert_eq!(month_name(12), Some("December"));
        assert_eq!(month_name(0), None);
        assert_eq!(month_name(13), None);
    }

    /// The closure converter floors before the range check
    #[test]
    fn month_converter_floors_its_input() {
        let convert = month_converter();
        assert_eq!(convert(3.9), Some("March"));
        assert_eq!(convert(12.0), Some("December"));
        assert_eq!(convert(0.9), None);
        assert_eq!(convert(13.2), None);
    }

    #[test]
    fn price_calculator_applies_the_rate() {
        let with_gst = price_calculator(18.0);
        let breakdown = with_gst(200.0);
        assert_eq!(breakdown.original_price, 200.0);
        assert_eq!(breakdown.tax, 36.0);
        assert_eq!(breakdown.net_price, 236.0);

        let tax_free = price_calculator(0.0);
        assert_eq!(tax_free(99.5).net_price, 99.5);
    }

    /// Vowels pass through; every other character is doubled around an `o`
    #[test]
    fn translate_doubles_non_vowels() {
        assert_eq!(translate("hello"), "hohelollolo");
        assert_eq!(translate("aeiou"), "aeiou");
        assert_eq!(translate(""), "");
    }

    #[test]
    fn stack_is_last_in_first_out() {
        let mut stack = Stack::new();
        assert!(stack.is_empty());
        stack.push("a");
        stack.push("b");
        assert_eq!(stack.peek(), Some(&"b"));
        assert_eq!(stack.items(), &["a", "b"]);
        assert_eq!(stack.pop(), Some("b"));
        assert_eq!(stack.pop(), Some("a"));
        assert_eq!(stack.pop(), None);
    }

    #[test]
    fn queue_is_first_in_first_out() {
        let mut queue = Queue::new();
        queue.enqueue(1);
        queue.enqueue(2);
        assert_eq!(queue.front(), Some(&1));
        assert_eq!(queue.len(), 2);
        assert_eq!(queue.dequeue(), Some(1));
        assert_eq!(queue.dequeue(), Some(2));
        assert_eq!(queue.dequeue(), None);
    }
}
