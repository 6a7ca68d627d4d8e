use std::sync::OnceLock;

use regex::Regex;

/// Query phrasings the router understands, tried in order. The lazy group captures the name.
pub const QUERY_PATTERNS: &[&str] =
    &[r"(?i)Quão bom é o restaurante (.*?)\?", r"(?i)Qual é a avaliação média do (.*?)\?"];

fn compiled_patterns() -> &'static [Regex] {
    static PATTERNS: OnceLock<Vec<Regex>> = OnceLock::new();
    PATTERNS.get_or_init(|| {
        QUERY_PATTERNS.iter().filter_map(|pattern| Regex::new(pattern).ok()).collect()
    })
}

#[derive(Clone, Copy, Debug, Default)]
pub struct QueryRouter;

impl QueryRouter {
    pub fn new() -> Self {
        Self
    }

    /// The first pattern that matches anywhere in the query decides the outcome; an empty
    /// capture yields `None` without consulting later patterns.
    pub fn extract_restaurant_name(&self, query: &str) -> Option<String> {
        let captures = compiled_patterns().iter().find_map(|pattern| pattern.captures(query))?;
        let name = captures.get(1)?.as_str().trim();
        (!name.is_empty()).then(|| name.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::{compiled_patterns, QueryRouter, QUERY_PATTERNS};

    #[test]
    fn every_pattern_compiles() {
        assert_eq!(compiled_patterns().len(), QUERY_PATTERNS.len());
    }

    #[test]
    fn extracts_name_from_quality_question() {
        let router = QueryRouter::new();

        assert_eq!(
            router.extract_restaurant_name("Quão bom é o restaurante Bistro Azul?"),
            Some("Bistro Azul".to_string())
        );
    }

    #[test]
    fn extracts_name_from_average_rating_question() {
        let router = QueryRouter::new();

        assert_eq!(
            router.extract_restaurant_name("Qual é a avaliação média do  Cantina Roma ?"),
            Some("Cantina Roma".to_string())
        );
    }

    #[test]
    fn matching_is_case_insensitive_and_unanchored() {
        let router = QueryRouter::new();

        assert_eq!(
            router.extract_restaurant_name("Oi! QUÃO BOM É O RESTAURANTE Casa Nova? Obrigado"),
            Some("Casa Nova".to_string())
        );
    }

    #[test]
    fn capture_stops_at_first_question_mark() {
        let router = QueryRouter::new();

        assert_eq!(
            router.extract_restaurant_name("Quão bom é o restaurante Sabor? Mesmo?"),
            Some("Sabor".to_string())
        );
    }

    #[test]
    fn unmatched_query_yields_nothing() {
        let router = QueryRouter::new();

        assert_eq!(router.extract_restaurant_name("Qual restaurante você recomenda?"), None);
        assert_eq!(router.extract_restaurant_name("Quão bom é o restaurante Bistro Azul"), None);
    }

    #[test]
    fn blank_capture_yields_nothing() {
        let router = QueryRouter::new();

        assert_eq!(
            router.extract_restaurant_name(
                "Quão bom é o restaurante ? Qual é a avaliação média do Bistro Azul?"
            ),
            None
        );
    }
}
