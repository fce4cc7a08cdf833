//! Analysis DTOs

use serde::{Deserialize, Serialize};

/// Parameters for triggering an analysis
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Group to analyze; `None` analyzes all logs
    pub group: Option<String>,
    /// Ignore the service's analysis cache
    pub refresh: bool,
}

impl AnalyzeRequest {
    pub fn for_group(group: impl Into<String>) -> Self {
        Self {
            group: Some(group.into()),
            refresh: false,
        }
    }

    pub fn refresh(mut self) -> Self {
        self.refresh = true;
        self
    }

    /// Query-string parameters; `refresh` is only sent when set
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(group) = self.group.as_deref().filter(|g| !g.is_empty()) {
            pairs.push(("group", group.to_string()));
        }
        if self.refresh {
            pairs.push(("refresh", "true".to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request_has_no_pairs() {
        assert!(AnalyzeRequest::default().to_query_pairs().is_empty());
    }

    #[test]
    fn test_group_and_refresh() {
        let req = AnalyzeRequest::for_group("restaurant-a:*").refresh();
        assert_eq!(
            req.to_query_pairs(),
            vec![
                ("group", "restaurant-a:*".to_string()),
                ("refresh", "true".to_string())
            ]
        );
    }
}
