#[derive(Debug, Clone)]
pub struct Query {
    /// Text matched against the corpus patterns.
    pub snippet: String,
    /// Limit result count.
    pub limit: Option<usize>,
    /// Drop results with a final score below this value.
    pub min_score: f64,
}

impl Query {
    pub fn new(snippet: &str) -> Self {
        Self {
            snippet: snippet.to_string(),
            limit: None,
            min_score: 0.0,
        }
    }

    pub fn limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }

    pub fn min_score(mut self, min_score: f64) -> Self {
        self.min_score = min_score;
        self
    }
}
