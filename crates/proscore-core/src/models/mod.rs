pub mod answer;
pub mod questionnaire;
pub mod score;
pub mod submission;
