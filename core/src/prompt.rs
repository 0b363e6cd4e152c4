//! Prompt builder
//!
//! Pure mapping from (mode, topic) to a fully formed instruction string
//! for the generative-language provider. No I/O; callers validate the
//! mode and trim the topic before reaching this point.

use crate::mode::Mode;

/// Shared academic-teacher preamble, topic embedded verbatim
fn base_prompt(topic: &str) -> String {
    format!(
        r#"You are an expert academic teacher.

The topic is: "{topic}"

If the topic is ambiguous, assume the MOST COMMON ACADEMIC meaning
(e.g. "current" = electric current in physics).

Rules:
- No generic study advice
- No vague explanations
- Use real academic knowledge
- Be clear, factual, and structured
"#
    )
}

/// Build the full instruction string for one generation request
///
/// Deterministic: the same (mode, topic) pair always produces the same
/// prompt. The trimmed topic appears verbatim inside the preamble.
pub fn build_prompt(mode: Mode, topic: &str) -> String {
    let base = base_prompt(topic.trim());

    match mode {
        Mode::Explain => format!(
            "{base}\nExplain the topic in detail.\nInclude definition, process, formulas (if any), and examples.\n"
        ),
        Mode::Summarize => format!(
            "{base}\nSummarize the topic using bullet points.\nInclude key definitions and processes.\n"
        ),
        Mode::Quiz => format!(
            "{base}\nCreate 5 multiple-choice questions.\nEach question must have 4 options (A-D).\nClearly mark the correct answer.\n"
        ),
        Mode::Flashcard => format!(
            "{base}\nCreate 5 study flashcards.\n\nFormat exactly:\nFront: ...\nBack: ...\n"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_mode_embeds_topic_verbatim() {
        for mode in Mode::ALL {
            let prompt = build_prompt(mode, "photosynthesis");
            assert!(
                prompt.contains("\"photosynthesis\""),
                "{mode} prompt must embed the topic"
            );
        }
    }

    #[test]
    fn test_topic_is_trimmed() {
        let prompt = build_prompt(Mode::Explain, "  ohm's law \n");
        assert!(prompt.contains("The topic is: \"ohm's law\""));
    }

    #[test]
    fn test_explain_markers() {
        let prompt = build_prompt(Mode::Explain, "entropy");
        assert!(prompt.contains("Explain the topic in detail."));
        assert!(prompt.contains("definition, process, formulas"));
    }

    #[test]
    fn test_summarize_markers() {
        let prompt = build_prompt(Mode::Summarize, "entropy");
        assert!(prompt.contains("bullet points"));
        assert!(prompt.contains("key definitions and processes"));
    }

    #[test]
    fn test_quiz_requests_five_questions_four_options() {
        let prompt = build_prompt(Mode::Quiz, "entropy");
        assert!(prompt.contains("5 multiple-choice questions"));
        assert!(prompt.contains("4 options (A-D)"));
        assert!(prompt.contains("mark the correct answer"));
    }

    #[test]
    fn test_flashcard_fixed_layout() {
        let prompt = build_prompt(Mode::Flashcard, "entropy");
        assert!(prompt.contains("5 study flashcards"));
        assert!(prompt.contains("Front: ..."));
        assert!(prompt.contains("Back: ..."));
    }

    #[test]
    fn test_deterministic() {
        let a = build_prompt(Mode::Quiz, "mitosis");
        let b = build_prompt(Mode::Quiz, "mitosis");
        assert_eq!(a, b);
    }
}
