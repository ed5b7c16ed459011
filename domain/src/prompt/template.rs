//! Prompt template for pet name generation

use crate::record::parsing::ResponseField;
use crate::request::entities::GenerationRequest;

/// Builds the instruction string sent to the generation provider
pub struct PromptTemplate;

impl PromptTemplate {
    /// Build the prompt for a request.
    ///
    /// Deterministic: traits come from an ordered set, so the same request
    /// always yields the same string. The answer layout requested here is
    /// exactly what [`parse_response`](crate::record::parsing::parse_response)
    /// reads back.
    pub fn build_prompt(request: &GenerationRequest) -> String {
        let mut prompt = format!(
            "I need a creative and fitting name for my {} {}.\n",
            request.color(),
            request.pet_type()
        );

        if request.personality_traits().is_empty() {
            prompt.push_str(
                "I haven't described its personality, so pick a name that suits a friendly, lovable companion.\n",
            );
        } else {
            let traits = request
                .personality_traits()
                .iter()
                .map(String::as_str)
                .collect::<Vec<_>>()
                .join(", ");
            prompt.push_str(&format!("Its personality is: {}.\n", traits));
        }

        prompt.push_str(request.style().directive());
        prompt.push('\n');

        prompt.push_str(
            r#"The name should be easy to call out and appropriate for the animal's appearance.
Consider the following aspects:
- The animal's color and type
- Cultural references that might be fun
- How the name sounds when called out
"#,
        );

        prompt.push_str(&Self::answer_layout());
        prompt
    }

    /// The labelled answer layout the provider is asked to follow
    pub fn answer_layout() -> String {
        let mut layout = String::from(
            "\nRespond using exactly these four lines and nothing else:\n",
        );
        for field in ResponseField::ALL {
            let hint = match field {
                ResponseField::Name => "<the name>",
                ResponseField::Explanation => "<one or two sentences on why it fits>",
                ResponseField::FunFact => "<a fun fact related to the name>",
                ResponseField::Nicknames => "<two or three nicknames, comma separated>",
            };
            layout.push_str(&format!("{}: {}\n", field.label(), hint));
        }
        layout
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::value_objects::NameStyle;

    fn dog_request() -> GenerationRequest {
        GenerationRequest::new("dog", "brown")
            .unwrap()
            .with_traits(["playful"])
    }

    #[test]
    fn test_prompt_contains_request_fields() {
        let prompt = PromptTemplate::build_prompt(&dog_request());
        assert!(prompt.contains("dog"));
        assert!(prompt.contains("brown"));
        assert!(prompt.contains("playful"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let a = GenerationRequest::new("cat", "black")
            .unwrap()
            .with_traits(["shy", "curious"]);
        let b = GenerationRequest::new("cat", "black")
            .unwrap()
            .with_traits(["curious", "shy"]);
        assert_eq!(PromptTemplate::build_prompt(&a), PromptTemplate::build_prompt(&a));
        assert_eq!(PromptTemplate::build_prompt(&a), PromptTemplate::build_prompt(&b));
    }

    #[test]
    fn test_prompt_requests_every_label() {
        let prompt = PromptTemplate::build_prompt(&dog_request());
        for field in ResponseField::ALL {
            assert!(prompt.contains(&format!("{}:", field.label())));
        }
    }

    #[test]
    fn test_prompt_without_traits_uses_generic_framing() {
        let request = GenerationRequest::new("hamster", "golden").unwrap();
        let prompt = PromptTemplate::build_prompt(&request);
        assert!(prompt.contains("friendly, lovable companion"));
        assert!(!prompt.contains("Its personality is"));
    }

    #[test]
    fn test_answer_in_requested_layout_parses_back() {
        use crate::record::parsing::parse_response;

        let values = [
            (ResponseField::Name, "Biscuit"),
            (ResponseField::Explanation, "playful and warm"),
            (ResponseField::FunFact, "loves fetch"),
            (ResponseField::Nicknames, "Bix, Cookie"),
        ];
        let answer = values
            .iter()
            .map(|(field, value)| format!("{}: {}", field.label(), value))
            .collect::<Vec<_>>()
            .join("\n");

        let parsed = parse_response(&answer);
        assert_eq!(parsed.name, "Biscuit");
        assert_eq!(parsed.explanation, "playful and warm");
        assert_eq!(parsed.fun_fact, "loves fetch");
        assert_eq!(parsed.nicknames, vec!["Bix".to_string(), "Cookie".to_string()]);
    }

    #[test]
    fn test_prompt_includes_style_directive() {
        let request = dog_request().with_style(NameStyle::Foodie);
        let prompt = PromptTemplate::build_prompt(&request);
        assert!(prompt.contains(NameStyle::Foodie.directive()));
    }
}
