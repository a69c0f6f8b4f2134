//! Startup banner and run summary display.

use std::path::Path;

use crate::category::Category;
use crate::consts::{AUTHOR, HOMEPAGE, REPO};
use crate::pipeline::RunSummary;

/// Run configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub endpoint: &'a str,
    pub model: &'a str,
    pub input: &'a Path,
    pub output: &'a Path,
}

/// The startup banner with run info.
pub fn format_banner(info: &BannerInfo) -> String {
    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║          O R G A N I Z E R            ║
   ║    satire, sorted by a local model    ║
   ╚═══════════════════════════════════════╝

   version   {}
   by        {}
   home      {}
   repo      {}
   endpoint  {}
   model     {}
   input     {}
   output    {}
"#,
        env!("CARGO_PKG_VERSION"),
        AUTHOR,
        HOMEPAGE,
        REPO,
        info.endpoint,
        info.model,
        info.input.display(),
        info.output.display(),
    )
}

pub fn print_banner(info: &BannerInfo) {
    println!("{}", format_banner(info));
}

/// One line per category, then fallbacks and token usage.
pub fn format_summary(summary: &RunSummary) -> String {
    let mut out = format!("summary: {} article(s)\n", summary.total);
    for category in Category::ALL {
        out.push_str(&format!(
            "   {:<9} {:>5}\n",
            category.as_str(),
            summary.count(category)
        ));
    }
    if summary.fallbacks > 0 {
        out.push_str(&format!(
            "   {} defaulted to {} after a failed classification\n",
            summary.fallbacks,
            Category::FALLBACK
        ));
    }
    if summary.usage.total() > 0 {
        out.push_str(&format!(
            "   tokens: {} input + {} output = {}\n",
            summary.usage.input_tokens,
            summary.usage.output_tokens,
            summary.usage.total()
        ));
    }
    out
}

pub fn print_summary(summary: &RunSummary) {
    print!("\n{}", format_summary(summary));
}
