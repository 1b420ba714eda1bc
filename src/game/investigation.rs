use super::conversation::Question;

/// Count the answers that match each question's loyal option.
pub fn score(questions: &[Question], answers: &[usize]) -> usize {
    questions
        .iter()
        .zip(answers)
        .filter(|(question, &answer)| question.is_correct(answer))
        .count()
}

pub fn passes(score: usize, threshold: usize) -> bool {
    score >= threshold
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::catalog;

    #[test]
    fn test_quiz_pass_boundary() {
        let campaign = catalog::surveillance_state();
        let questions = campaign.question_set();
        assert_eq!(questions.len(), 3);
        let threshold = campaign.investigation.as_ref().unwrap().pass_threshold;

        let loyal: Vec<usize> = questions.iter().map(|q| q.correct).collect();
        let wrong: Vec<usize> = questions.iter().map(|q| (q.correct + 1) % q.options.len()).collect();

        let two_of_three = vec![loyal[0], loyal[1], wrong[2]];
        assert_eq!(score(questions, &two_of_three), 2);
        assert!(passes(score(questions, &two_of_three), threshold));

        let one_of_three = vec![wrong[0], loyal[1], wrong[2]];
        assert_eq!(score(questions, &one_of_three), 1);
        assert!(!passes(score(questions, &one_of_three), threshold));

        assert_eq!(score(questions, &loyal), 3);
        assert_eq!(score(questions, &wrong), 0);
    }

    #[test]
    fn test_out_of_range_answer_scores_nothing() {
        let questions = vec![Question::new("Loyal?", &["Yes", "No"], 0)];
        assert_eq!(score(&questions, &[9]), 0);
    }
}
