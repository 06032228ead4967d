use fnv::FnvHashMap;
use serde::Deserialize;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("catalog is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("duplicate project id `{0}`")]
    DuplicateId(String),
    #[error("project at position {0} has an empty id")]
    EmptyId(usize),
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtendedSection {
    pub title: String,
    #[serde(default)]
    pub content: String,
    /// File name under the project's image directory.
    #[serde(default)]
    pub image: Option<String>,
    /// Base-relative image paths shown as a strip under the section.
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyMetric {
    pub value: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub label: String,
    pub value: f32,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Research {
    #[serde(default)]
    pub key_metrics: Vec<KeyMetric>,
    #[serde(default)]
    pub findings: Vec<Finding>,
}

impl Research {
    pub fn is_empty(&self) -> bool {
        self.key_metrics.is_empty() && self.findings.is_empty()
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Link {
    pub name: String,
    pub url: String,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub year: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub short_description: String,
    #[serde(default)]
    pub tools: Vec<String>,
    #[serde(default)]
    pub thumbnail: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub duration: String,
    #[serde(default)]
    pub team_size: String,
    #[serde(default)]
    pub platform: Vec<String>,
    #[serde(default)]
    pub video_url: Option<String>,
    #[serde(default)]
    pub extended_sections: Vec<ExtendedSection>,
    #[serde(default)]
    pub features: Vec<String>,
    #[serde(default)]
    pub challenges: Vec<String>,
    #[serde(default)]
    pub solutions: Vec<String>,
    #[serde(default)]
    pub gallery: Vec<String>,
    #[serde(default)]
    pub research: Option<Research>,
    #[serde(default)]
    pub links: Vec<Link>,
    #[serde(default)]
    pub hidden: bool,
}

impl ProjectRecord {
    #[inline]
    pub fn has_overview(&self) -> bool {
        !self.overview.trim().is_empty()
    }
}

/// Circular neighbours of a record.
#[derive(Clone, Copy, Debug)]
pub struct Adjacent<'a> {
    pub previous: &'a ProjectRecord,
    pub next: &'a ProjectRecord,
}

/// Ordered, read-only project list.
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    records: Vec<ProjectRecord>,
    index: FnvHashMap<String, usize>,
}

impl Catalog {
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let records: Vec<ProjectRecord> = serde_json::from_str(json)?;
        Self::from_records(records)
    }

    pub fn from_records(records: Vec<ProjectRecord>) -> Result<Self, CatalogError> {
        let mut index = FnvHashMap::default();
        for (i, r) in records.iter().enumerate() {
            if r.id.trim().is_empty() {
                return Err(CatalogError::EmptyId(i));
            }
            if index.insert(r.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateId(r.id.clone()));
            }
        }
        Ok(Self { records, index })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn records(&self) -> &[ProjectRecord] {
        &self.records
    }

    pub fn ids(&self) -> Vec<String> {
        self.records.iter().map(|r| r.id.clone()).collect()
    }

    pub fn position(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub fn get(&self, id: &str) -> Option<&ProjectRecord> {
        self.position(id).map(|i| &self.records[i])
    }

    /// Previous and next records, wrapping at both ends. Hidden records
    /// take part in the ring like any other.
    pub fn adjacent(&self, id: &str) -> Option<Adjacent<'_>> {
        let i = self.position(id)?;
        let n = self.records.len();
        Some(Adjacent {
            previous: &self.records[(i + n - 1) % n],
            next: &self.records[(i + 1) % n],
        })
    }

    /// Records shown on the flat listing.
    pub fn listed(&self) -> impl Iterator<Item = &ProjectRecord> {
        self.records.iter().filter(|r| !r.hidden)
    }
}
