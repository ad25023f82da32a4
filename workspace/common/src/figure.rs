use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Chart type of a trace
#[derive(Debug, Clone, Copy, Serialize, Deserialize, ToSchema, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum TraceKind {
    Line,
    Bar,
}

/// One data series of a chart
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Trace {
    pub kind: TraceKind,
    pub name: String,
    pub x: Vec<String>,
    pub y: Vec<f64>,
}

/// Description of a chart the dashboard draws.
///
/// A figure without traces is a placeholder; its title explains why there
/// is nothing to show.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct Figure {
    pub title: String,
    pub traces: Vec<Trace>,
}

impl Figure {
    pub fn new(title: impl Into<String>, traces: Vec<Trace>) -> Self {
        Self {
            title: title.into(),
            traces,
        }
    }

    pub fn placeholder(title: impl Into<String>) -> Self {
        Self::new(title, Vec::new())
    }

    pub fn is_placeholder(&self) -> bool {
        self.traces.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_has_no_traces() {
        let figure = Figure::placeholder("Nothing here");
        assert!(figure.is_placeholder());

        let json = serde_json::to_value(&figure).unwrap();
        assert_eq!(json["title"], "Nothing here");
        assert_eq!(json["traces"].as_array().map(|t| t.len()), Some(0));
    }

    #[test]
    fn test_trace_kind_is_lowercase() {
        let trace = Trace {
            kind: TraceKind::Bar,
            name: "price".to_string(),
            x: vec!["2023-01-01".to_string()],
            y: vec![1.5],
        };
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["kind"], "bar");
    }
}
