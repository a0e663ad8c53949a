use crate::quiz::Question;

/// Test utilities for creating questions and question lists
pub struct TestDataBuilder;

impl TestDataBuilder {
    /// Creates a basic two-option question with the first option correct
    pub fn two_option_question(prompt: &str) -> Question {
        Question::new(prompt, &["Right answer", "Wrong answer"], 0)
    }

    /// Creates a four-option question with the third option correct
    pub fn four_option_question(prompt: &str) -> Question {
        Question::new(
            prompt,
            &["First", "Second", "The right one", "Fourth"],
            2,
        )
    }

    /// Creates a list of `count` two-option questions with alternating
    /// correct indices
    pub fn question_list(count: usize) -> Vec<Question> {
        (0..count)
            .map(|i| Question::new(&format!("Question {i}?"), &["Yes", "No"], i % 2))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builders_produce_valid_questions() {
        let q = TestDataBuilder::two_option_question("Two?");
        assert_eq!(q.options().len(), 2);
        assert_eq!(q.correct_index(), 0);

        let q = TestDataBuilder::four_option_question("Four?");
        assert_eq!(q.options().len(), 4);
        assert_eq!(q.options()[q.correct_index()], "The right one");

        let list = TestDataBuilder::question_list(5);
        assert_eq!(list.len(), 5);
        assert_eq!(list[0].correct_index(), 0);
        assert_eq!(list[1].correct_index(), 1);
    }
}
