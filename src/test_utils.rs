use crate::models::domain::form::Form;
use crate::models::domain::question::{NestingLevel, Question, QuestionType, SubQuestion};

#[cfg(test)]
pub mod fixtures {
    use super::*;

    pub fn form(id: i64, title: &str, questions: Vec<Question>) -> Form {
        Form {
            id,
            title: title.to_string(),
            description: None,
            is_quiz: false,
            passing_score: 0,
            show_score: false,
            questions,
        }
    }

    pub fn question(id: i64, text: &str, question_type: QuestionType, order: i16) -> Question {
        Question {
            id,
            question_text: text.to_string(),
            question_type,
            options: Vec::new(),
            required: false,
            order,
            is_quiz_question: false,
            correct_answer: None,
            points: 0,
            feedback: None,
            subquestions: Vec::new(),
        }
    }

    pub fn subquestion(
        id: i64,
        text: &str,
        question_type: QuestionType,
        parent_option: &str,
        level: NestingLevel,
        order: i16,
    ) -> SubQuestion {
        SubQuestion {
            id,
            question_text: text.to_string(),
            question_type,
            options: Vec::new(),
            required: false,
            order,
            parent_option: parent_option.to_string(),
            level,
        }
    }

    /// Three free-text questions, nothing conditional.
    pub fn plain_form() -> Form {
        form(
            1,
            "Contact",
            vec![
                question(1, "Name?", QuestionType::Text, 0),
                question(2, "Phone?", QuestionType::Tel, 1),
                question(3, "Email?", QuestionType::Email, 2),
            ],
        )
    }

    /// Radio question with one follow-up under "Dog".
    pub fn pet_form() -> Form {
        let mut pet = question(1, "Pet?", QuestionType::Radio, 0);
        pet.options = vec!["Dog".to_string(), "Cat".to_string()];
        pet.subquestions = vec![subquestion(
            2,
            "Breed?",
            QuestionType::Text,
            "Dog",
            NestingLevel::One,
            0,
        )];

        form(1, "Pets", vec![pet])
    }

    /// Two nesting levels: Dog reveals a size choice, and each size
    /// reveals its own follow-up.
    pub fn two_level_form() -> Form {
        let mut pet = question(1, "Pet?", QuestionType::Radio, 0);
        pet.options = vec!["Dog".to_string(), "Cat".to_string()];

        let mut size = subquestion(2, "Size?", QuestionType::Radio, "Dog", NestingLevel::One, 0);
        size.options = vec!["Large".to_string(), "Small".to_string()];

        pet.subquestions = vec![
            size,
            subquestion(
                3,
                "Crate size?",
                QuestionType::Text,
                "Dog|Large",
                NestingLevel::Two,
                0,
            ),
            subquestion(
                4,
                "Carrier?",
                QuestionType::Text,
                "Dog|Small",
                NestingLevel::Two,
                0,
            ),
        ];

        form(1, "Pets", vec![pet])
    }

    /// Checkbox question where two options carry their own follow-up.
    pub fn activities_form() -> Form {
        let mut activities = question(1, "Activities?", QuestionType::Checkbox, 0);
        activities.options = vec![
            "Walks".to_string(),
            "Fetch".to_string(),
            "Swimming".to_string(),
        ];
        activities.subquestions = vec![
            subquestion(
                2,
                "How often?",
                QuestionType::Text,
                "Walks",
                NestingLevel::One,
                0,
            ),
            subquestion(
                3,
                "Favourite toy?",
                QuestionType::Text,
                "Fetch",
                NestingLevel::One,
                1,
            ),
        ];

        form(1, "Activities", vec![activities])
    }

    /// Quiz with one indexed-key choice question (10 points, "B" correct)
    /// and one exact-text question (5 points, "Paris" correct).
    pub fn quiz_form() -> Form {
        let mut letters = question(1, "Pick the letter B", QuestionType::Radio, 0);
        letters.options = vec!["A".to_string(), "B".to_string(), "C".to_string()];
        letters.is_quiz_question = true;
        letters.correct_answer = Some("1".to_string());
        letters.points = 10;
        letters.feedback = Some("The answer was B.".to_string());

        let mut capital = question(2, "Capital of France?", QuestionType::Text, 1);
        capital.is_quiz_question = true;
        capital.correct_answer = Some("Paris".to_string());
        capital.points = 5;

        let mut quiz = form(2, "Warm-up quiz", vec![letters, capital]);
        quiz.is_quiz = true;
        quiz.passing_score = 60;
        quiz.show_score = true;
        quiz
    }
}
