//! Prompt assembly: a fixed template with two substitution points.
//!
//! The template is filled verbatim; no escaping, truncation, or length
//! budgeting happens here. If the joined context exceeds what the model
//! accepts, the model client's behavior applies.

/// The prompt template sent to the model. Substitution points are
/// `{context}` and `{question}`.
pub const PROMPT_TEMPLATE: &str = "
Answer the question based only on the following context:

{context}

---

Answer the question based on the above context: {question}
";

/// Separator placed between chunk texts when building the context block.
pub const CONTEXT_DELIMITER: &str = "\n\n---\n\n";

/// Join chunk texts into a single context block, most-similar first.
pub fn build_context<'a>(texts: impl IntoIterator<Item = &'a str>) -> String {
    texts.into_iter().collect::<Vec<_>>().join(CONTEXT_DELIMITER)
}

/// Fill the template with a context block and the raw question.
///
/// Substitution is a single scan over the template: placeholder-like text
/// inside `context` or `question` is copied through untouched.
pub fn build_prompt(context: &str, question: &str) -> String {
    let mut prompt =
        String::with_capacity(PROMPT_TEMPLATE.len() + context.len() + question.len());
    let mut rest = PROMPT_TEMPLATE;
    for (placeholder, value) in [("{context}", context), ("{question}", question)] {
        if let Some((head, tail)) = rest.split_once(placeholder) {
            prompt.push_str(head);
            prompt.push_str(value);
            rest = tail;
        }
    }
    prompt.push_str(rest);
    prompt
}
