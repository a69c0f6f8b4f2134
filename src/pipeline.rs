use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};

use crate::article::Article;
use crate::category::Category;
use crate::classifier::Classifier;
use crate::consts::NO_TITLE;
use crate::inference::TokenUsage;
use crate::store::{load_articles, write_articles};

/// Tally of a finished run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub total: usize,
    pub counts: BTreeMap<Category, usize>,
    /// Articles filed under the fallback because classification failed.
    pub fallbacks: usize,
    pub usage: TokenUsage,
}

impl RunSummary {
    pub fn count(&self, category: Category) -> usize {
        self.counts.get(&category).copied().unwrap_or(0)
    }
}

/// Load, classify one article at a time, write.
pub struct Pipeline {
    classifier: Classifier,
}

impl Pipeline {
    pub fn new(classifier: Classifier) -> Self {
        Self { classifier }
    }

    /// Classify every article in order. The next request only starts once the
    /// previous one has finished or fallen back.
    pub async fn classify_all(&self, articles: Vec<Article>) -> (Vec<Article>, RunSummary) {
        let total = articles.len();
        let mut summary = RunSummary {
            total,
            ..RunSummary::default()
        };
        let mut updated = Vec::with_capacity(total);

        for (i, mut article) in articles.into_iter().enumerate() {
            let title = article.title().unwrap_or_else(|| NO_TITLE.to_string());
            println!("Processing article {}/{}: {}", i + 1, total, title);

            let verdict = self.classifier.classify(&article).await;
            if verdict.is_fallback() {
                summary.fallbacks += 1;
            }
            if let Some(usage) = verdict.usage {
                summary.usage.add(usage);
            }
            *summary.counts.entry(verdict.category).or_default() += 1;

            article.set_category(verdict.category);
            updated.push(article);

            println!("  -> Assigned category: {}", verdict.category);
        }

        (updated, summary)
    }

    /// The full cycle. Nothing is written if the input can't be loaded.
    pub async fn run(&self, input: &Path, output: &Path) -> Result<RunSummary> {
        let articles = load_articles(input)?;
        tracing::debug!(count = articles.len(), input = %input.display(), "loaded articles");

        println!("Starting categorization with Ollama. This may take a while...");
        let (updated, summary) = self.classify_all(articles).await;

        write_articles(output, &updated)
            .with_context(|| format!("failed to save {} articles", updated.len()))?;
        println!(
            "\nSuccessfully created a new file with organized articles: '{}'.",
            output.display()
        );

        Ok(summary)
    }
}
