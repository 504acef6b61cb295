//! Task-specific prompt templates.
//!
//! Each helper pairs a fixed instructional preamble with the caller's
//! inputs. Wrapped prompts go through the same resolution chain as any
//! chat message, so a prompt that happens to match the curated dataset
//! or the geographic index is answered locally before any provider is
//! consulted.

/// General persona sent as the system instruction on chat completions.
pub const GUIDE_PREAMBLE: &str = "You are a knowledgeable cultural heritage guide specializing in Indian culture, traditions, arts, crafts, festivals, and historical monuments. Keep answers short, friendly, and informative (2-3 paragraphs).";

pub const HINT_PREAMBLE: &str =
    "You are a quiz assistant for Indian culture. Give a small hint, NOT the answer. Max 2 lines.";

pub const STORY_PREAMBLE: &str =
    "You are a storyteller for Indian culture. Create an engaging cultural story in 3-4 paragraphs.";

pub const ITINERARY_PREAMBLE: &str =
    "You are a travel guide for Indian cultural tourism. Provide a day-wise (3-5 days) itinerary.";

pub const PERSPECTIVE_PREAMBLE: &str =
    "You are describing Indian culture from 200 years ago. Keep it historical and immersive.";

pub const SEARCH_PREAMBLE: &str =
    "You are a cultural search assistant. Provide relevant Indian cultural suggestions.";

#[must_use]
pub fn quiz_hint(question: &str, options: &[String]) -> String {
    format!(
        "{HINT_PREAMBLE}\n\nQuestion: {question}\nOptions: {}",
        options.join(", ")
    )
}

#[must_use]
pub fn cultural_story(topic: &str, context: &str) -> String {
    format!("{STORY_PREAMBLE}\n\nTopic: {topic}\nContext: {context}")
}

#[must_use]
pub fn travel_itinerary(state: &str, duration_days: u32) -> String {
    format!("{ITINERARY_PREAMBLE}\n\nCreate a {duration_days}-day plan for {state}")
}

#[must_use]
pub fn historical_perspective(tradition: &str, context: &str) -> String {
    format!("{PERSPECTIVE_PREAMBLE}\n\nTradition: {tradition}\nContext: {context}")
}

#[must_use]
pub fn cultural_search(query: &str) -> String {
    format!("{SEARCH_PREAMBLE}\n\nUser Query: {query}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hint_prompt_lists_question_and_options() {
        let prompt = quiz_hint(
            "Which state is famous for Kathakali?",
            &["Kerala".to_string(), "Punjab".to_string()],
        );
        assert!(prompt.starts_with(HINT_PREAMBLE));
        assert!(prompt.contains("Question: Which state is famous for Kathakali?"));
        assert!(prompt.ends_with("Options: Kerala, Punjab"));
    }

    #[test]
    fn itinerary_prompt_carries_duration_and_state() {
        let prompt = travel_itinerary("Odisha", 3);
        assert!(prompt.ends_with("Create a 3-day plan for Odisha"));
    }

    #[test]
    fn story_and_perspective_prompts_embed_context() {
        assert!(cultural_story("Diwali", "for children").contains("Topic: Diwali\nContext: for children"));
        assert!(historical_perspective("Bhangra", "harvest").contains("Tradition: Bhangra\nContext: harvest"));
    }

    #[test]
    fn search_prompt_wraps_the_query() {
        assert!(cultural_search("temple towns").ends_with("User Query: temple towns"));
    }
}
