//! Page listing for site model dumps.

use serde_json::Value;
use sv_graph::accessor::{display_text, is_truthy};

/// Host serving per-page JSON files.
pub const PAGES_BASE_URL: &str = "https://pages.parastorage.com/sites/";

const UNTITLED: &str = "(untitled)";

/// One page of a site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SitePage {
    pub title: String,
    pub page_id: String,
    /// Where the page's structure JSON lives, when the dump names a file.
    pub json_url: Option<String>,
}

impl SitePage {
    /// `title (pageId)`, as listed for the user.
    pub fn caption(&self) -> String {
        format!("{} ({})", self.title, self.page_id)
    }
}

/// Pages under `rendererModel.pageList.pages`; anything else yields none.
pub fn site_pages(site_models: &Value) -> Vec<SitePage> {
    let Some(pages) = site_models
        .pointer("/rendererModel/pageList/pages")
        .and_then(Value::as_array)
    else {
        return Vec::new();
    };
    pages.iter().map(site_page).collect()
}

fn site_page(page: &Value) -> SitePage {
    let text = |key: &str| {
        page.get(key)
            .filter(|value| is_truthy(value))
            .map(display_text)
    };
    SitePage {
        title: text("title").unwrap_or_else(|| UNTITLED.to_string()),
        page_id: text("pageId").unwrap_or_default(),
        json_url: text("pageJsonFileName").map(|file| format!("{}{}", PAGES_BASE_URL, file)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn lists_pages_with_fallbacks() {
        let models = json!({"rendererModel": {"pageList": {"pages": [
            {"title": "Home", "pageId": "c1dmp", "pageJsonFileName": "abc_1.json"},
            {"title": "", "pageId": "x2"},
            "garbage"
        ]}}});
        let pages = site_pages(&models);
        assert_eq!(pages.len(), 3);
        assert_eq!(pages[0].caption(), "Home (c1dmp)");
        assert_eq!(
            pages[0].json_url.as_deref(),
            Some("https://pages.parastorage.com/sites/abc_1.json")
        );
        assert_eq!(pages[1].title, "(untitled)");
        assert_eq!(pages[1].json_url, None);
        assert_eq!(pages[2].caption(), "(untitled) ()");
    }

    #[test]
    fn missing_page_list_is_empty() {
        assert!(site_pages(&json!({"rendererModel": {}})).is_empty());
        assert!(site_pages(&json!({"rendererModel": {"pageList": {"pages": {}}}})).is_empty());
    }
}
