//! Response parsing for generated names.
//!
//! Turns the provider's free-form answer into a [`ParsedName`]. The prompt
//! asks for one labelled line per field; this module finds those lines and
//! never fails. Missing labels leave their field empty, and anything that
//! is not a recognised label is ignored.
//!
//! | Label | Field |
//! |-------|-------|
//! | `Name:` | [`ParsedName::name`] |
//! | `Explanation:` | [`ParsedName::explanation`] |
//! | `Fun Fact:` | [`ParsedName::fun_fact`] |
//! | `Nicknames:` | [`ParsedName::nicknames`] (comma separated) |

use super::entities::ParsedName;

/// A labelled section of the provider answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResponseField {
    Name,
    Explanation,
    FunFact,
    Nicknames,
}

impl ResponseField {
    pub const ALL: [ResponseField; 4] = [
        ResponseField::Name,
        ResponseField::Explanation,
        ResponseField::FunFact,
        ResponseField::Nicknames,
    ];

    /// Label as it should appear in the provider answer
    pub fn label(&self) -> &'static str {
        match self {
            ResponseField::Name => "Name",
            ResponseField::Explanation => "Explanation",
            ResponseField::FunFact => "Fun Fact",
            ResponseField::Nicknames => "Nicknames",
        }
    }

    /// Match a line prefix (text before the first `:`) against the labels.
    ///
    /// Comparison ignores case, whitespace, `-`, `_` and markdown emphasis,
    /// so `**Fun-fact**` and `fun fact` both resolve to [`ResponseField::FunFact`].
    fn from_key(key: &str) -> Option<Self> {
        let squashed: String = key
            .chars()
            .filter(|c| c.is_alphanumeric())
            .flat_map(char::to_lowercase)
            .collect();

        match squashed.as_str() {
            "name" | "petname" => Some(ResponseField::Name),
            "explanation" | "reason" | "why" => Some(ResponseField::Explanation),
            "funfact" => Some(ResponseField::FunFact),
            "nicknames" | "nickname" => Some(ResponseField::Nicknames),
            _ => None,
        }
    }
}

/// Parse a provider answer into its labelled fields.
///
/// Total: any input, including the empty string, yields a [`ParsedName`].
/// The first filled-in occurrence of each label wins. A label with nothing
/// after the colon takes the line directly below it, unless that line is
/// blank or another label.
///
/// When no `Name:` value is found, the legacy `Name | explanation` layout
/// is tried on the first non-empty line, provided it is not a label.
///
/// # Examples
///
/// ```
/// use petname_domain::record::parsing::parse_response;
///
/// let parsed = parse_response("Name: Biscuit\nNicknames: Bix, Cookie");
/// assert_eq!(parsed.name, "Biscuit");
/// assert_eq!(parsed.nicknames, vec!["Bix", "Cookie"]);
/// assert!(parse_response("").is_empty());
/// ```
pub fn parse_response(raw: &str) -> ParsedName {
    let mut parsed = ParsedName::default();
    let mut seen: Vec<ResponseField> = Vec::new();
    let mut pending: Option<ResponseField> = None;

    for line in raw.lines() {
        let line = strip_decoration(line);
        // A continuation must sit directly under its empty label
        let waiting = pending.take();
        if line.is_empty() {
            continue;
        }

        if let Some((field, value)) = split_labelled(line) {
            if seen.contains(&field) {
                continue;
            }
            if value.is_empty() {
                pending = Some(field);
            } else {
                seen.push(field);
                assign(&mut parsed, field, value);
            }
            continue;
        }

        if let Some(field) = waiting {
            seen.push(field);
            assign(&mut parsed, field, line);
        }
    }

    if !seen.contains(&ResponseField::Name) {
        apply_legacy_layout(raw, &mut parsed);
    }

    parsed
}

/// Split nickname text on commas, dropping blanks
pub fn split_nicknames(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(clean_value)
        .filter(|n| !n.is_empty())
        .map(str::to_string)
        .collect()
}

fn assign(parsed: &mut ParsedName, field: ResponseField, value: &str) {
    match field {
        ResponseField::Name => parsed.name = clean_value(value).to_string(),
        ResponseField::Explanation => parsed.explanation = clean_value(value).to_string(),
        ResponseField::FunFact => parsed.fun_fact = clean_value(value).to_string(),
        ResponseField::Nicknames => parsed.nicknames = split_nicknames(value),
    }
}

fn split_labelled(line: &str) -> Option<(ResponseField, &str)> {
    let (key, value) = line.split_once(':')?;
    let field = ResponseField::from_key(key)?;
    // "**Name:** Biscuit" leaves the closing emphasis on the value side
    let value = value.trim().trim_start_matches('*').trim();
    Some((field, value))
}

fn strip_decoration(line: &str) -> &str {
    let line = line.trim();
    let line = line
        .strip_prefix("- ")
        .or_else(|| line.strip_prefix("* "))
        .or_else(|| line.strip_prefix("• "))
        .unwrap_or(line);
    line.trim_start_matches('#').trim()
}

fn clean_value(value: &str) -> &str {
    value
        .trim()
        .trim_matches(|c| c == '*' || c == '"' || c == '\'' || c == '`')
        .trim()
}

fn apply_legacy_layout(raw: &str, parsed: &mut ParsedName) {
    let Some(first) = raw.lines().map(strip_decoration).find(|l| !l.is_empty()) else {
        return;
    };
    if split_labelled(first).is_some() {
        return;
    }
    let Some((name, explanation)) = first.split_once('|') else {
        return;
    };

    let name = clean_value(name);
    if parsed.name.is_empty() && !name.is_empty() {
        parsed.name = name.to_string();
    }
    let explanation = clean_value(explanation);
    if parsed.explanation.is_empty() && !explanation.is_empty() {
        parsed.explanation = explanation.to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_labelled_answer() {
        let raw = "Name: Biscuit\nExplanation: playful and warm\nFun Fact: loves fetch\nNicknames: Bix, Cookie";
        let parsed = parse_response(raw);
        assert_eq!(parsed.name, "Biscuit");
        assert_eq!(parsed.explanation, "playful and warm");
        assert_eq!(parsed.fun_fact, "loves fetch");
        assert_eq!(parsed.nicknames, vec!["Bix".to_string(), "Cookie".to_string()]);
    }

    #[test]
    fn test_parse_empty_input() {
        assert_eq!(parse_response(""), ParsedName::default());
    }

    #[test]
    fn test_parse_without_labels() {
        let parsed = parse_response("Sure! Here is a lovely name for your dog.");
        assert!(parsed.is_empty());
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let parsed = parse_response("Name: Pepper\nNicknames: Pep");
        assert_eq!(parsed.name, "Pepper");
        assert_eq!(parsed.explanation, "");
        assert_eq!(parsed.fun_fact, "");
        assert_eq!(parsed.nicknames, vec!["Pep".to_string()]);
    }

    #[test]
    fn test_extra_text_is_ignored() {
        let raw = "Here you go!\n\nName: Luna\nExplanation: silver like the moon\nHope you like it.\nFun Fact: moons are cool\nNicknames: Lu\n\nEnjoy your cat!";
        let parsed = parse_response(raw);
        assert_eq!(parsed.name, "Luna");
        assert_eq!(parsed.explanation, "silver like the moon");
        assert_eq!(parsed.fun_fact, "moons are cool");
        assert_eq!(parsed.nicknames, vec!["Lu".to_string()]);
    }

    #[test]
    fn test_markdown_decoration_is_tolerated() {
        let raw = "- **Name:** **Mochi**\n* **Fun-fact**: rice cakes are chewy\n## Nicknames: Mo ,  Mochi-chan , ";
        let parsed = parse_response(raw);
        assert_eq!(parsed.name, "Mochi");
        assert_eq!(parsed.fun_fact, "rice cakes are chewy");
        assert_eq!(
            parsed.nicknames,
            vec!["Mo".to_string(), "Mochi-chan".to_string()]
        );
    }

    #[test]
    fn test_labels_are_case_insensitive() {
        let parsed = parse_response("NAME: Rex\nexplanation: king of the yard");
        assert_eq!(parsed.name, "Rex");
        assert_eq!(parsed.explanation, "king of the yard");
    }

    #[test]
    fn test_first_label_occurrence_wins() {
        let parsed = parse_response("Name: Olive\nName: Pickle");
        assert_eq!(parsed.name, "Olive");
    }

    #[test]
    fn test_value_on_following_line() {
        let parsed = parse_response("Explanation:\n  named after a sunny afternoon\nName: Sunny");
        assert_eq!(parsed.explanation, "named after a sunny afternoon");
        assert_eq!(parsed.name, "Sunny");
    }

    #[test]
    fn test_colon_inside_value_is_kept() {
        let parsed = parse_response("Fun Fact: ratio 2:1 of naps to zoomies");
        assert_eq!(parsed.fun_fact, "ratio 2:1 of naps to zoomies");
    }

    #[test]
    fn test_legacy_pipe_layout() {
        let parsed =
            parse_response("Shadow | This name reflects both the cat's dark color and mysterious nature");
        assert_eq!(parsed.name, "Shadow");
        assert_eq!(
            parsed.explanation,
            "This name reflects both the cat's dark color and mysterious nature"
        );
    }

    #[test]
    fn test_legacy_layout_does_not_override_labels() {
        let parsed = parse_response("Biscuit | crunchy\nExplanation: from the label");
        assert_eq!(parsed.name, "Biscuit");
        assert_eq!(parsed.explanation, "from the label");
    }

    #[test]
    fn test_pipe_inside_labelled_line_is_not_a_name() {
        let parsed = parse_response("Explanation: warm | cozy\nFun Fact: likes naps");
        assert_eq!(parsed.name, "");
        assert_eq!(parsed.explanation, "warm | cozy");
        assert_eq!(parsed.fun_fact, "likes naps");
    }

    #[test]
    fn test_empty_label_does_not_take_closing_remark() {
        let parsed = parse_response("Name: Biscuit\nFun Fact:\n\nHope you like it!");
        assert_eq!(parsed.name, "Biscuit");
        assert_eq!(parsed.fun_fact, "");
    }

    #[test]
    fn test_empty_label_takes_only_the_next_line() {
        let parsed = parse_response("Explanation:\nshort and sweet\nEnjoy your new friend!");
        assert_eq!(parsed.explanation, "short and sweet");
    }

    #[test]
    fn test_repeated_label_fills_earlier_empty_one() {
        assert_eq!(parse_response("Name:\nName: Rex").name, "Rex");
        assert_eq!(parse_response("Name:\n\nName: Rex\nName: Max").name, "Rex");
    }

    #[test]
    fn test_split_nicknames() {
        assert_eq!(split_nicknames(""), Vec::<String>::new());
        assert_eq!(
            split_nicknames("\"Bix\", 'Cookie',,"),
            vec!["Bix".to_string(), "Cookie".to_string()]
        );
    }
}
