//! Rendering of the current page for the terminal.

use serde::Serialize;

use docsearch_core::layout::Density;
use docsearch_core::{FacetCounts, QueryController, SearchHit, SearchIndex};

#[derive(Serialize)]
struct JsonHit<'a> {
    position: usize,
    score: f32,
    icon: &'static str,
    #[serde(flatten)]
    document: &'a docsearch_core::Document,
}

#[derive(Serialize)]
struct JsonPage<'a> {
    query: Option<&'a str>,
    total: usize,
    page_size: usize,
    page_number: usize,
    page_count: usize,
    results: Vec<JsonHit<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    facets: Option<FacetCounts>,
}

pub fn format_json<I: SearchIndex>(controller: &QueryController<I>, with_facets: bool) -> anyhow::Result<String> {
    let view = controller.page_view();
    let page = JsonPage {
        query: controller.query_state().text.as_deref(),
        total: controller.total_match_count(),
        page_size: view.page_size().get(),
        page_number: view.page_number(),
        page_count: controller.page_count(),
        results: controller
            .current_page_items()
            .iter()
            .map(|hit| JsonHit { position: hit.position, score: hit.score, icon: hit.document.category.icon(), document: &hit.document })
            .collect(),
        facets: with_facets.then(|| controller.facet_counts()),
    };
    Ok(serde_json::to_string_pretty(&page)?)
}

pub fn format_human<I: SearchIndex>(controller: &QueryController<I>, density: Density, with_facets: bool) -> String {
    let mut out = String::new();
    let query = controller.query_state().text.as_deref().unwrap_or("");
    let view = controller.page_view();
    if controller.total_match_count() == 0 {
        out.push_str(&format!("No results for \"{}\"\n", query));
    } else {
        out.push_str(&format!(
            "{} results for \"{}\" (page {}/{}, {} per page)\n",
            controller.total_match_count(),
            query,
            view.page_number(),
            controller.page_count(),
            view.page_size().get()
        ));
    }
    let offset = view.range().start;
    for (i, hit) in controller.current_page_items().iter().enumerate() {
        out.push_str(&format_hit(offset + i + 1, hit, density));
    }
    if with_facets {
        out.push_str(&format_facets(&controller.facet_counts()));
    }
    out
}

fn format_hit(rank: usize, hit: &SearchHit, density: Density) -> String {
    let doc = &hit.document;
    match density {
        Density::Sm => format!("{:>3}. {} [{}] {}\n", rank, doc.title, doc.category, doc.link),
        Density::Md => format!(
            "{:>3}. {}  score={:.3}  {} / {} / {}\n     {}\n     {}\n",
            rank,
            doc.title,
            hit.score,
            doc.category,
            doc.doc_type,
            doc.section,
            doc.link,
            preview(&doc.content, 120)
        ),
    }
}

pub fn format_facets(counts: &FacetCounts) -> String {
    let mut out = String::from("Facets:\n");
    for (name, count) in &counts.categories {
        out.push_str(&format!("  category {}: {}\n", name, count));
    }
    for (name, count) in &counts.types {
        out.push_str(&format!("  type {}: {}\n", name, count));
    }
    out
}

fn preview(content: &str, max_chars: usize) -> String {
    let mut chars = content.chars();
    let head: String = chars.by_ref().take(max_chars).collect();
    if chars.next().is_some() { format!("{}…", head) } else { head }
}

#[cfg(test)]
mod tests {
    use super::preview;

    #[test]
    fn preview_truncates_on_char_boundary() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("ééééé", 3), "ééé…");
    }
}
