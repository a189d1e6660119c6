//! Prompt construction for FAQ generation
//!
//! The instruction states the required count twice. Providers are observed
//! to under- and over-generate against a single mention; the restated
//! constraint measurably tightens count adherence.

/// Builds the full generation instruction for one request
///
/// # Arguments
///
/// * `text` - Cleaned (and already truncated) page text, included verbatim
/// * `count` - Exact number of pairs to request
pub fn build_faq_prompt(text: &str, count: usize) -> String {
    let mut prompt = String::with_capacity(text.len() + 800);

    prompt.push_str(ROLE_PREAMBLE);
    prompt.push_str("\n\n");

    prompt.push_str(&format!(
        "Read the webpage content below and write exactly {} frequently asked \
         questions with their answers.\n\n",
        count
    ));

    prompt.push_str(QUALITY_REQUIREMENTS);
    prompt.push_str("\n\n");

    prompt.push_str("Webpage content:\n---\n");
    prompt.push_str(text);
    prompt.push_str("\n---\n\n");

    prompt.push_str(OUTPUT_FORMAT);
    prompt.push_str(&format!(
        "\nThe array must contain exactly {} items. Respond with the JSON array \
         only: no prose, no markdown code fences.\n",
        count
    ));

    prompt
}

const ROLE_PREAMBLE: &str = "You are an expert content analyst who writes clear, \
helpful FAQ entries for websites.";

const QUALITY_REQUIREMENTS: &str = "Requirements for each entry:
- The question must be one a real visitor to this page would ask
- The answer must be grounded in the content below, not general knowledge
- No generic filler questions (\"What is this page about?\")
- Questions are concise; answers are 2-4 sentences and specific";

const OUTPUT_FORMAT: &str = r#"Output format, a JSON array of objects:
[
  {"question": "...", "answer": "..."}
]"#;
