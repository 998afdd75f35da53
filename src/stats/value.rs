use serde::{Serialize, Serializer};

use super::StatName;

/// Unit attached to a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Units {
    Characters,
    Posts,
}

impl Units {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Characters => "characters",
            Self::Posts => "posts",
        }
    }
}

/// One bucket of a split metric, e.g. the post count of a single ISO week.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SplitValue {
    #[serde(rename = "splitPeriod")]
    pub split_period: String,
    pub value: f64,
}

/// A node of the result tree.
///
/// A node is either a scalar metric, a metric split into sub-period buckets,
/// or a named container of other nodes.
#[derive(Debug, Clone, PartialEq)]
pub enum StatisticValue {
    Scalar {
        name: StatName,
        value: f64,
        units: Units,
    },
    Bucketed {
        name: StatName,
        units: Units,
        children: Vec<SplitValue>,
    },
    Composite {
        name: String,
        children: Vec<StatisticValue>,
    },
}

impl StatisticValue {
    #[must_use]
    pub const fn scalar(name: StatName, value: f64, units: Units) -> Self {
        Self::Scalar { name, value, units }
    }

    #[must_use]
    pub const fn bucketed(name: StatName, units: Units, children: Vec<SplitValue>) -> Self {
        Self::Bucketed {
            name,
            units,
            children,
        }
    }

    #[must_use]
    pub fn composite(name: impl Into<String>, children: Vec<Self>) -> Self {
        Self::Composite {
            name: name.into(),
            children,
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Scalar { name, .. } | Self::Bucketed { name, .. } => name.as_str(),
            Self::Composite { name, .. } => name,
        }
    }

    /// Scalar value of the node. Containers carry no scalar value.
    #[must_use]
    pub const fn value(&self) -> Option<f64> {
        match self {
            Self::Scalar { value, .. } => Some(*value),
            Self::Bucketed { .. } | Self::Composite { .. } => None,
        }
    }

    #[must_use]
    pub const fn units(&self) -> Option<Units> {
        match self {
            Self::Scalar { units, .. } | Self::Bucketed { units, .. } => Some(*units),
            Self::Composite { .. } => None,
        }
    }

    /// Child nodes of a composite node; empty for metrics.
    #[must_use]
    pub fn children(&self) -> &[Self] {
        match self {
            Self::Composite { children, .. } => children,
            Self::Scalar { .. } | Self::Bucketed { .. } => &[],
        }
    }

    /// Sub-period buckets of a split metric; empty for other nodes.
    #[must_use]
    pub fn splits(&self) -> &[SplitValue] {
        match self {
            Self::Bucketed { children, .. } => children,
            Self::Scalar { .. } | Self::Composite { .. } => &[],
        }
    }

    /// Look up a direct child by name.
    #[must_use]
    pub fn child(&self, name: &str) -> Option<&Self> {
        self.children().iter().find(|c| c.name() == name)
    }

    /// Look up the value of a bucket by its split period label.
    #[must_use]
    pub fn split(&self, split_period: &str) -> Option<f64> {
        self.splits()
            .iter()
            .find(|s| s.split_period == split_period)
            .map(|s| s.value)
    }

    /// Sum of all bucket values of a split metric.
    #[must_use]
    pub fn total(&self) -> Option<f64> {
        match self {
            Self::Bucketed { children, .. } => Some(children.iter().map(|s| s.value).sum()),
            Self::Scalar { .. } | Self::Composite { .. } => None,
        }
    }
}

/// Flat wire shape shared by every node kind.
#[derive(Serialize)]
struct WireNode<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<f64>,
    #[serde(rename = "splitPeriod", skip_serializing_if = "Option::is_none")]
    split_period: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    units: Option<&'static str>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<WireChild<'a>>,
}

#[derive(Serialize)]
#[serde(untagged)]
enum WireChild<'a> {
    Node(&'a StatisticValue),
    Split(WireSplit<'a>),
}

#[derive(Serialize)]
struct WireSplit<'a> {
    name: &'a str,
    value: f64,
    #[serde(rename = "splitPeriod")]
    split_period: &'a str,
    units: &'static str,
}

impl Serialize for StatisticValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let units = self.units().map(Units::as_str);
        let children = match self {
            Self::Scalar { .. } => Vec::new(),
            Self::Bucketed { name, units, children } => children
                .iter()
                .map(|s| {
                    WireChild::Split(WireSplit {
                        name: name.as_str(),
                        value: s.value,
                        split_period: &s.split_period,
                        units: units.as_str(),
                    })
                })
                .collect(),
            Self::Composite { children, .. } => children.iter().map(WireChild::Node).collect(),
        };

        WireNode {
            name: self.name(),
            value: self.value(),
            split_period: None,
            units,
            children,
        }
        .serialize(serializer)
    }
}

#[cfg(test)]
#[path = "value_tests.rs"]
mod tests;
