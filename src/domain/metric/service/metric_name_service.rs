use std::collections::HashMap;

use tracing::{debug, warn};

use crate::domain::metric::dto::query_model::{MetricSpec, QueryModel};
use crate::domain::metric::model::metric_agg_type::MetricAggType;
use crate::domain::metric::model::name_lookup::NameLookup;

/// Display names for every metric declared in `query`.
pub fn resolve_metric_names(query: &QueryModel) -> NameLookup {
    let mut lookup = NameLookup::new();

    if let Some(alias) = query.alias.as_deref().filter(|a| !a.is_empty()) {
        for metric in &query.metrics {
            lookup.insert(metric.id.as_str(), alias);
        }
        return lookup;
    }

    let mut resolver = NameResolver::new(&query.metrics);
    for metric in &query.metrics {
        let resolved = resolver.resolve(metric, &mut Vec::new());
        lookup.insert(metric.id.as_str(), resolved.name);
    }

    lookup
}

struct ResolvedName {
    name: String,
    /// A cyclic reference was cut while building `name`.
    cut: bool,
}

struct NameResolver<'q> {
    by_id: HashMap<&'q str, &'q MetricSpec>,
    resolved: HashMap<&'q str, String>,
}

impl<'q> NameResolver<'q> {
    fn new(metrics: &'q [MetricSpec]) -> Self {
        Self {
            by_id: metrics.iter().map(|m| (m.id.as_str(), m)).collect(),
            resolved: HashMap::new(),
        }
    }

    /// `path` holds the ids currently being resolved, outermost first.
    /// Names that depend on where a cycle was entered are not cached.
    fn resolve(&mut self, metric: &'q MetricSpec, path: &mut Vec<&'q str>) -> ResolvedName {
        if let Some(name) = self.resolved.get(metric.id.as_str()) {
            return ResolvedName {
                name: name.clone(),
                cut: false,
            };
        }

        let agg_type = MetricAggType::from_code(&metric.agg_type);
        let label = MetricAggType::label_for(&metric.agg_type);

        let resolved = match metric.pipeline_agg.as_deref() {
            None => ResolvedName {
                name: match metric.field.as_deref().filter(|f| !f.is_empty()) {
                    Some(field) => format!("{} {}", label, field),
                    None => label.to_string(),
                },
                cut: false,
            },
            Some(reference) => {
                if agg_type.is_some_and(|t| !t.is_pipeline()) {
                    debug!(id = %metric.id, agg_type = %metric.agg_type, "pipelineAgg set on a non-pipeline metric");
                }
                path.push(metric.id.as_str());
                let referenced = self.resolve_reference(reference, path);
                path.pop();
                ResolvedName {
                    name: format!("{} {}", label, referenced.name),
                    cut: referenced.cut,
                }
            }
        };

        if !resolved.cut {
            self.resolved.insert(metric.id.as_str(), resolved.name.clone());
        }
        resolved
    }

    fn resolve_reference(&mut self, reference: &'q str, path: &mut Vec<&'q str>) -> ResolvedName {
        if path.contains(&reference) {
            warn!(reference, ?path, "Cyclic pipelineAgg reference");
            return ResolvedName {
                name: reference.to_string(),
                cut: true,
            };
        }

        match self.by_id.get(reference).copied() {
            Some(target) => self.resolve(target, path),
            None => {
                debug!(reference, "pipelineAgg references an undeclared metric");
                ResolvedName {
                    name: reference.to_string(),
                    cut: false,
                }
            }
        }
    }
}
