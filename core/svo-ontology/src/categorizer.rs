use std::fmt;

use svo_lexicon::{LexicalDatabase, SharedDatabase};
use svo_protocol::SenseId;
use tracing::debug;

use crate::ancestry::hypernym_ancestry;
use crate::category::{AnchorEntry, OntologyCategory, ANONYMOUS};
use crate::error::OntologyError;
use crate::record::{CategoryFlagRecord, ClassificationRecord, IsCat, OutputMode};
use crate::synset::CategorySpec;

/// An ordered set of categories over one lexical database.
///
/// Category names are not required to be unique; lookups by name return
/// the first match.
pub struct OntologyCategorizer {
    name: String,
    db: SharedDatabase,
    categories: Vec<OntologyCategory>,
}

impl OntologyCategorizer {
    pub fn new(name: impl Into<String>, db: SharedDatabase) -> Self {
        Self {
            name: name.into(),
            db,
            categories: Vec::new(),
        }
    }

    pub fn anonymous(db: SharedDatabase) -> Self {
        Self::new(ANONYMOUS, db)
    }

    /// Builds one category per spec, in order. A category whose anchors
    /// fail to resolve is still added, possibly with no anchors.
    pub fn from_specs<I>(name: impl Into<String>, db: SharedDatabase, specs: I) -> Self
    where
        I: IntoIterator<Item = CategorySpec>,
    {
        let mut categorizer = Self::new(name, db);
        for spec in specs {
            categorizer.add_category(&spec);
        }
        categorizer
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn database(&self) -> &SharedDatabase {
        &self.db
    }

    pub fn categories(&self) -> &[OntologyCategory] {
        &self.categories
    }

    pub fn category_names(&self) -> Vec<&str> {
        self.categories.iter().map(OntologyCategory::name).collect()
    }

    pub fn add_category(&mut self, spec: &CategorySpec) -> &mut OntologyCategory {
        let category = OntologyCategory::from_spec(self.db.as_ref(), spec);
        self.push_category(category)
    }

    pub fn push_category(&mut self, category: OntologyCategory) -> &mut OntologyCategory {
        debug!(
            categorizer = %self.name,
            category = category.name(),
            anchors = category.anchors().len(),
            "category added"
        );
        self.categories.push(category);
        let last = self.categories.len() - 1;
        &mut self.categories[last]
    }

    pub fn get_category(&self, name: &str) -> Result<&OntologyCategory, OntologyError> {
        self.categories
            .iter()
            .find(|c| c.name() == name)
            .ok_or_else(|| not_found(name))
    }

    pub fn get_category_mut(&mut self, name: &str) -> Result<&mut OntologyCategory, OntologyError> {
        self.categories
            .iter_mut()
            .find(|c| c.name() == name)
            .ok_or_else(|| not_found(name))
    }

    /// Removes the first category called `name`; `None` if there is none.
    pub fn remove_category(&mut self, name: &str) -> Option<OntologyCategory> {
        let position = self.categories.iter().position(|c| c.name() == name)?;
        Some(self.categories.remove(position))
    }

    pub fn add_anchor(&mut self, category: &str, term: &str, index: usize) -> Result<bool, OntologyError> {
        let category = self
            .categories
            .iter_mut()
            .find(|c| c.name() == category)
            .ok_or_else(|| not_found(category))?;
        category.add_anchor(self.db.as_ref(), term, index)
    }

    pub fn remove_anchor(
        &mut self,
        category: &str,
        term: &str,
        index: usize,
    ) -> Result<Option<AnchorEntry>, OntologyError> {
        Ok(self.get_category_mut(category)?.remove_anchor(term, index))
    }

    pub fn ancestry(&self, sense: SenseId) -> Vec<SenseId> {
        hypernym_ancestry(self.db.as_ref(), sense)
    }

    /// Match labels for `sense` against one category, or against every
    /// category in order when `category` is `None`.
    pub fn categorize_sense(&self, sense: SenseId, category: Option<&OntologyCategory>) -> Vec<String> {
        let ancestry = self.ancestry(sense);
        let db = self.db.as_ref();

        match category {
            Some(category) => category.is_hypernym_of(db, &ancestry),
            None => self
                .categories
                .iter()
                .flat_map(|c| c.is_hypernym_of(db, &ancestry))
                .collect(),
        }
    }

    pub fn is_sense_in_category(&self, sense: SenseId, category: &str) -> Result<bool, OntologyError> {
        let category = self.get_category(category)?;
        Ok(!self.categorize_sense(sense, Some(category)).is_empty())
    }

    /// Classifies every sense of `term` against all categories. Unknown
    /// terms give an empty list.
    pub fn what_is(&self, term: &str) -> Vec<ClassificationRecord> {
        self.db
            .senses_of(term)
            .into_iter()
            .enumerate()
            .map(|(sense_index, sense)| ClassificationRecord {
                term: term.to_string(),
                sense_index,
                sense,
                definition: self.definition_of(sense),
                pos: self.db.part_of_speech(sense),
                matched_labels: self.categorize_sense(sense, None),
            })
            .collect()
    }

    pub fn is_cat(&self, term: &str, category: &str, mode: OutputMode) -> Result<IsCat, OntologyError> {
        match mode {
            OutputMode::Long => self.is_cat_long(term, category).map(IsCat::Long),
            OutputMode::Short => self.is_cat_short(term, category).map(IsCat::Short),
        }
    }

    /// One membership row per sense of `term`. A term without senses gives
    /// no rows, whatever the category name.
    pub fn is_cat_long(&self, term: &str, category: &str) -> Result<Vec<CategoryFlagRecord>, OntologyError> {
        let senses = self.db.senses_of(term);
        if senses.is_empty() {
            return Ok(Vec::new());
        }
        let target = self.get_category(category)?;

        Ok(senses
            .into_iter()
            .enumerate()
            .map(|(sense_index, sense)| CategoryFlagRecord {
                term: term.to_string(),
                sense_index,
                sense,
                definition: self.definition_of(sense),
                pos: self.db.part_of_speech(sense),
                category: target.name().to_string(),
                member: !self.categorize_sense(sense, Some(target)).is_empty(),
            })
            .collect())
    }

    pub fn is_cat_short(&self, term: &str, category: &str) -> Result<bool, OntologyError> {
        Ok(self.is_cat_long(term, category)?.iter().any(|row| row.member))
    }

    fn definition_of(&self, sense: SenseId) -> String {
        self.db.definition(sense).unwrap_or_default().to_string()
    }
}

impl fmt::Debug for OntologyCategorizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OntologyCategorizer")
            .field("name", &self.name)
            .field("categories", &self.categories)
            .finish_non_exhaustive()
    }
}

fn not_found(name: &str) -> OntologyError {
    OntologyError::CategoryNotFound { name: name.to_string() }
}
