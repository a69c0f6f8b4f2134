//! Article records as read from and written back to disk.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::category::Category;

pub const TITLE: &str = "title";
pub const CONTENT: &str = "content";
pub const CATEGORY: &str = "category";

/// A single article. Wraps the raw JSON object so fields this program
/// doesn't know about pass through untouched and in their original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Article(Map<String, Value>);

impl Article {
    /// Title text, or `None` when the field is missing or null.
    pub fn title(&self) -> Option<String> {
        self.text(TITLE)
    }

    /// Body text, or `None` when the field is missing or null.
    pub fn content(&self) -> Option<String> {
        self.text(CONTENT)
    }

    /// The stored category, if present and valid.
    pub fn category(&self) -> Option<Category> {
        self.0.get(CATEGORY)?.as_str()?.parse().ok()
    }

    /// Attach or overwrite the category. An existing key keeps its position.
    pub fn set_category(&mut self, category: Category) {
        self.0
            .insert(CATEGORY.to_string(), Value::String(category.to_string()));
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn into_fields(self) -> Map<String, Value> {
        self.0
    }

    // Non-string values are embedded as their JSON text.
    fn text(&self, key: &str) -> Option<String> {
        match self.0.get(key)? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn article(value: Value) -> Article {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn reads_title_and_content() {
        let a = article(json!({"title": "Man Buys Stock", "content": "He regrets it."}));
        assert_eq!(a.title().as_deref(), Some("Man Buys Stock"));
        assert_eq!(a.content().as_deref(), Some("He regrets it."));
    }

    #[test]
    fn missing_fields_are_none() {
        let a = article(json!({"author": "anon"}));
        assert!(a.title().is_none());
        assert!(a.content().is_none());
        assert!(a.category().is_none());
    }

    #[test]
    fn null_fields_are_none() {
        let a = article(json!({"title": null}));
        assert!(a.title().is_none());
    }

    #[test]
    fn non_string_fields_render_as_json() {
        let a = article(json!({"title": 42, "content": ["a", "b"]}));
        assert_eq!(a.title().as_deref(), Some("42"));
        assert_eq!(a.content().as_deref(), Some(r#"["a","b"]"#));
    }

    #[test]
    fn set_category_appends_new_field() {
        let mut a = article(json!({"title": "t", "content": "c"}));
        a.set_category(Category::Tech);
        let keys: Vec<&String> = a.fields().keys().collect();
        assert_eq!(keys, ["title", "content", "category"]);
        assert_eq!(a.category(), Some(Category::Tech));
    }

    #[test]
    fn set_category_overwrites_in_place() {
        let mut a = article(json!({"category": "Sports", "title": "t"}));
        a.set_category(Category::Culture);
        let keys: Vec<&String> = a.fields().keys().collect();
        assert_eq!(keys, ["category", "title"]);
        assert_eq!(a.fields()["category"], json!("Culture"));
    }

    #[test]
    fn other_fields_pass_through() {
        let mut a = article(json!({"title": "t", "id": 7, "tags": ["x"], "meta": {"k": true}}));
        a.set_category(Category::Crypto);
        let fields = a.into_fields();
        assert_eq!(fields["id"], json!(7));
        assert_eq!(fields["tags"], json!(["x"]));
        assert_eq!(fields["meta"], json!({"k": true}));
    }

    #[test]
    fn rejects_non_object() {
        let result: Result<Article, _> = serde_json::from_value(json!("just a string"));
        assert!(result.is_err());
    }
}
