//! Content Catalog
//!
//! The read-only set of records served by the API. Built once at startup,
//! validated, then shared behind an `Arc` for the lifetime of the process.
//!
//! - `content`: embedded raw tables for the public site
//! - `Catalog::builtin()`: coerces the raw tables into response models
//! - `Catalog::new()`: builds from typed records (substitute catalogs in tests)

pub mod content;

use std::collections::HashSet;

use crate::lookup::{self, DocTopic, LookupError};
use crate::models::{AnalysisMethod, DocSection, DocSubsection, Feature, TeamMember};
use content::{DocEntry, FeatureEntry, MemberEntry, MethodEntry, SubsectionEntry};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("duplicate analysis method id '{0}'")]
    DuplicateMethodId(String),
    #[error("{kind} #{index} has an empty '{field}'")]
    EmptyField {
        kind: &'static str,
        index: usize,
        field: &'static str,
    },
}

/// One page per fixed documentation topic
#[derive(Debug, Clone)]
pub struct DocPages {
    pub overview: DocSection,
    pub installation: DocSection,
    pub schema: DocSection,
    pub citations: DocSection,
}

impl DocPages {
    pub fn get(&self, topic: DocTopic) -> &DocSection {
        match topic {
            DocTopic::Overview => &self.overview,
            DocTopic::Installation => &self.installation,
            DocTopic::Schema => &self.schema,
            DocTopic::Citations => &self.citations,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Catalog {
    methods: Vec<AnalysisMethod>,
    features: Vec<Feature>,
    docs: DocPages,
    team: Vec<TeamMember>,
}

impl Catalog {
    /// Build and validate a catalog from typed records.
    pub fn new(
        methods: Vec<AnalysisMethod>,
        features: Vec<Feature>,
        docs: DocPages,
        team: Vec<TeamMember>,
    ) -> Result<Self, CatalogError> {
        let catalog = Self { methods, features, docs, team };
        catalog.validate()?;
        Ok(catalog)
    }

    /// The OpenOA website content embedded in the binary.
    pub fn builtin() -> Result<Self, CatalogError> {
        let methods = content::ANALYSIS_METHODS.iter().map(AnalysisMethod::from).collect();
        let features = content::FEATURES.iter().map(Feature::from).collect();
        let docs = DocPages {
            overview: DocSection::from(&content::OVERVIEW),
            installation: DocSection::from(&content::INSTALLATION),
            schema: DocSection::from(&content::SCHEMA_INFO),
            citations: DocSection::from(&content::CITATIONS),
        };
        let team = content::TEAM_MEMBERS.iter().map(TeamMember::from).collect();

        Self::new(methods, features, docs, team)
    }

    pub fn analysis_methods(&self) -> &[AnalysisMethod] {
        &self.methods
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    pub fn doc(&self, topic: DocTopic) -> &DocSection {
        self.docs.get(topic)
    }

    pub fn find_analysis_method(&self, id: &str) -> Result<&AnalysisMethod, LookupError> {
        lookup::find_analysis_method(&self.methods, id)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        let mut seen = HashSet::new();
        for (index, method) in self.methods.iter().enumerate() {
            require("analysis method", index, "id", &method.id)?;
            require("analysis method", index, "name", &method.name)?;
            require("analysis method", index, "short_description", &method.short_description)?;
            if !seen.insert(method.id.as_str()) {
                return Err(CatalogError::DuplicateMethodId(method.id.clone()));
            }
        }

        for (index, feature) in self.features.iter().enumerate() {
            require("feature", index, "id", &feature.id)?;
            require("feature", index, "name", &feature.name)?;
        }

        for (index, member) in self.team.iter().enumerate() {
            require("team member", index, "name", &member.name)?;
            require("team member", index, "role", &member.role)?;
        }

        for (index, topic) in DocTopic::ALL.into_iter().enumerate() {
            require("doc section", index, "title", &self.docs.get(topic).title)?;
        }

        Ok(())
    }
}

fn require(kind: &'static str, index: usize, field: &'static str, value: &str) -> Result<(), CatalogError> {
    if value.trim().is_empty() {
        return Err(CatalogError::EmptyField { kind, index, field });
    }
    Ok(())
}

// ============================================================================
// Raw entry coercion
// ============================================================================

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl From<&MethodEntry> for AnalysisMethod {
    fn from(entry: &MethodEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            short_description: entry.short_description.to_string(),
            long_description: entry.long_description.to_string(),
            citations: owned(entry.citations),
            parameters: entry.parameters.map(owned),
            icon: entry.icon.to_string(),
        }
    }
}

impl From<&FeatureEntry> for Feature {
    fn from(entry: &FeatureEntry) -> Self {
        Self {
            id: entry.id.to_string(),
            name: entry.name.to_string(),
            description: entry.description.to_string(),
            icon: entry.icon.to_string(),
            category: entry.category.to_string(),
        }
    }
}

impl From<&SubsectionEntry> for DocSubsection {
    fn from(entry: &SubsectionEntry) -> Self {
        Self {
            title: entry.title.to_string(),
            content: entry.content.map(str::to_string),
            items: entry.items.map(owned),
            code: entry.code.map(str::to_string),
            text: entry.text.map(str::to_string),
            doi: entry.doi.map(str::to_string),
            subsections: entry.subsections.iter().map(DocSubsection::from).collect(),
        }
    }
}

impl From<&DocEntry> for DocSection {
    fn from(entry: &DocEntry) -> Self {
        Self {
            title: entry.title.to_string(),
            content: entry.content.to_string(),
            subsections: entry
                .subsections
                .map(|subs| subs.iter().map(DocSubsection::from).collect()),
        }
    }
}

impl From<&MemberEntry> for TeamMember {
    fn from(entry: &MemberEntry) -> Self {
        Self {
            name: entry.name.to_string(),
            role: entry.role.to_string(),
            orcid: entry.orcid.map(str::to_string),
        }
    }
}
