//! The dinner question bank.
//!
//! Questions are grouped into categories and carry a minimum age so the
//! picker can hide questions that are over a child's head.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

/// Category of a dinner question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionCategory {
    /// Silly and light
    Fun,
    /// Thankfulness prompts
    Gratitude,
    /// Feelings and harder topics
    Deep,
    /// Learning and curiosity
    Learn,
    /// Aspirations and plans
    Goals,
    /// Who we are as people and as a family
    Identity,
    /// Either-or dilemmas
    #[serde(rename = "would-you-rather")]
    WouldYouRather,
}

impl QuestionCategory {
    /// Display emoji for the category chip.
    pub fn emoji(&self) -> &'static str {
        match self {
            Self::Fun => "🎉",
            Self::Gratitude => "🙏",
            Self::Deep => "💭",
            Self::Learn => "📚",
            Self::Goals => "🎯",
            Self::Identity => "🪞",
            Self::WouldYouRather => "🤔",
        }
    }

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Fun => "Fun",
            Self::Gratitude => "Gratitude",
            Self::Deep => "Deep",
            Self::Learn => "Learning",
            Self::Goals => "Goals",
            Self::Identity => "Identity",
            Self::WouldYouRather => "Would You Rather",
        }
    }

    /// All categories in display order.
    pub fn all() -> Vec<Self> {
        vec![
            Self::Fun,
            Self::Gratitude,
            Self::Deep,
            Self::Learn,
            Self::Goals,
            Self::Identity,
            Self::WouldYouRather,
        ]
    }
}

/// A single dinner question.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    /// Stable id (`q-*`)
    pub id: String,
    /// The question text
    pub text: String,
    /// Category
    pub category: QuestionCategory,
    /// Youngest age this question works for
    pub min_age: u8,
}

fn q(id: &str, text: &str, category: QuestionCategory, min_age: u8) -> Question {
    Question {
        id: id.to_string(),
        text: text.to_string(),
        category,
        min_age,
    }
}

/// The bundled question bank.
pub static QUESTIONS: LazyLock<Vec<Question>> = LazyLock::new(|| {
    use QuestionCategory::*;
    vec![
        q("q-1", "What made you laugh today?", Fun, 3),
        q("q-2", "If you could have any superpower, what would it be?", Fun, 3),
        q("q-3", "If you could be any animal for a day, which would you choose?", Fun, 4),
        q("q-5", "If our family had a theme song, what would it be?", Fun, 4),
        q("q-8", "If you could eat only one food for a week, what would it be?", Fun, 3),
        q("q-10", "If you found a magic lamp with one wish, what would you wish for?", Fun, 4),
        q("q-13", "What is the funniest thing that happened this week?", Fun, 3),
        q("q-14", "What are you grateful for today?", Gratitude, 4),
        q("q-15", "Who made you feel good today?", Gratitude, 4),
        q("q-16", "What was the best part of your day?", Gratitude, 3),
        q("q-18", "What is one thing about our family that makes you happy?", Gratitude, 4),
        q("q-21", "What is a simple thing that made you smile today?", Gratitude, 3),
        q("q-22", "What is something beautiful you noticed today?", Gratitude, 4),
        q("q-23", "What was the hardest part of your day?", Deep, 6),
        q("q-26", "What is something that scared you, but you did it anyway?", Deep, 6),
        q("q-27", "When do you feel the most brave?", Deep, 5),
        q("q-30", "What is something hard that you are proud you got through?", Deep, 7),
        q("q-31", "What is something new you learned recently?", Learn, 5),
        q("q-32", "What is a mistake you made that taught you something?", Learn, 6),
        q("q-33", "What is something you want to learn how to do?", Learn, 4),
        q("q-36", "What is a question you have been thinking about?", Learn, 6),
        q("q-38", "What is a goal you are working towards?", Goals, 8),
        q("q-39", "What do you want to get better at?", Goals, 6),
        q("q-43", "What is one small thing you could do tomorrow to make someone happy?", Goals, 5),
        q("q-44", "What makes our family special?", Identity, 5),
        q("q-45", "What is something you love about yourself?", Identity, 5),
        q("q-46", "What is a tradition our family should start?", Identity, 6),
        q("q-47", "What is your favorite family memory?", Identity, 4),
        q("q-51", "Would you rather fly or be invisible?", WouldYouRather, 4),
        q("q-53", "Would you rather be able to talk to animals or speak every language?", WouldYouRather, 4),
        q("q-54", "Would you rather have a pet dragon or a pet unicorn?", WouldYouRather, 3),
        q("q-57", "Would you rather explore space or the bottom of the ocean?", WouldYouRather, 5),
    ]
});

/// Look up a question by id.
pub fn question(id: &str) -> Option<&'static Question> {
    QUESTIONS.iter().find(|question| question.id == id)
}

/// Questions in a category.
pub fn by_category(category: QuestionCategory) -> Vec<&'static Question> {
    QUESTIONS.iter().filter(|question| question.category == category).collect()
}

/// Questions suitable for a youngest participant of `age`.
pub fn for_age(age: u8) -> Vec<&'static Question> {
    QUESTIONS.iter().filter(|question| question.min_age <= age).collect()
}
