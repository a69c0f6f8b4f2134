use crate::article::Article;
use crate::category::Category;

const INTRO: &str = "You are a professional news editor for a satirical website. All articles are satirical in nature.";
const ANSWER_RULE: &str = "The category must be a single word from the list provided. Do not provide any additional text or explanation, just the category name.";
const RULES_HEADER: &str = "Use these rules to guide your decision:";
const ANSWER_CUE: &str = "Category:";

/// Rule order shown to the model: Opinion first, Culture as the catch-all
/// right after it.
pub const PROMPT_ORDER: [Category; 6] = [
    Category::Opinion,
    Category::Culture,
    Category::Tech,
    Category::Finance,
    Category::Business,
    Category::Crypto,
];

/// Build the classification prompt for one article. Title and content are
/// embedded verbatim; missing fields become empty strings.
pub fn build_classify_prompt(article: &Article) -> String {
    let names = Category::ALL.map(|c| c.as_str());
    let (init, last) = names.split_at(names.len() - 1);
    let listed = format!("{}, or {}", init.join(", "), last.join(""));

    let rules = PROMPT_ORDER
        .iter()
        .map(|c| format!("- **{}:** {}", c, c.definition()))
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{intro} Your task is to read the following article and assign it to one of these six categories: {listed}.\n\n{answer_rule}\n\n{rules_header}\n{rules}\n\nArticle Title: {title}\nArticle Content: {content}\n\n{cue}\n",
        intro = INTRO,
        listed = listed,
        answer_rule = ANSWER_RULE,
        rules_header = RULES_HEADER,
        rules = rules,
        title = article.title().unwrap_or_default(),
        content = article.content().unwrap_or_default(),
        cue = ANSWER_CUE,
    )
}
