//! Read-only in-memory view of the reference dataset.

use std::collections::HashMap;

use tracing::debug;

use crate::division::{District, Division, Level, Province, Scheme, Ward};
use crate::error::DatasetError;
use crate::normalize::normalize;

/// Immutable index over one administrative-division dataset.
///
/// Built once from the bootstrap-loaded dataset and never mutated afterwards,
/// so it can be shared behind an `Arc` across any number of concurrent
/// resolution or filter calls without locking. Construction validates the
/// dataset: duplicate codes within a level and dangling parent references are
/// rejected with [`DatasetError`].
///
/// Normalized names are computed up front so match passes never
/// re-transliterate the dataset.
#[derive(Debug)]
pub struct DivisionIndex {
    scheme: Scheme,
    provinces: Vec<Province>,
    districts: Vec<District>,
    wards: Vec<Ward>,
    norm_provinces: Vec<String>,
    norm_districts: Vec<String>,
    norm_wards: Vec<String>,
    province_pos: HashMap<u32, usize>,
    district_pos: HashMap<u32, usize>,
    ward_pos: HashMap<u32, usize>,
    /// province code -> district positions, ordered by code
    districts_by_province: HashMap<u32, Vec<usize>>,
    /// district code (3-level) or province code (2-level) -> ward positions
    wards_by_parent: HashMap<u32, Vec<usize>>,
}

impl DivisionIndex {
    /// Builds a province -> district -> ward index.
    pub fn three_level(
        provinces: Vec<Province>,
        districts: Vec<District>,
        wards: Vec<Ward>,
    ) -> Result<Self, DatasetError> {
        let province_pos = position_by_code(&provinces, Level::Province)?;
        let district_pos = position_by_code(&districts, Level::District)?;
        let ward_pos = position_by_code(&wards, Level::Ward)?;

        check_parents(&districts, &province_pos)?;
        check_parents(&wards, &district_pos)?;

        let index = Self {
            scheme: Scheme::ThreeLevel,
            norm_provinces: normalized_names(&provinces),
            norm_districts: normalized_names(&districts),
            norm_wards: normalized_names(&wards),
            districts_by_province: group_children(&districts),
            wards_by_parent: group_children(&wards),
            provinces,
            districts,
            wards,
            province_pos,
            district_pos,
            ward_pos,
        };
        debug!(
            provinces = index.provinces.len(),
            districts = index.districts.len(),
            wards = index.wards.len(),
            "built three-level division index"
        );
        Ok(index)
    }

    /// Builds a province -> ward index (the 2025 two-tier scheme).
    pub fn two_level(provinces: Vec<Province>, wards: Vec<Ward>) -> Result<Self, DatasetError> {
        let province_pos = position_by_code(&provinces, Level::Province)?;
        let ward_pos = position_by_code(&wards, Level::Ward)?;

        check_parents(&wards, &province_pos)?;

        let index = Self {
            scheme: Scheme::TwoLevel,
            norm_provinces: normalized_names(&provinces),
            norm_districts: Vec::new(),
            norm_wards: normalized_names(&wards),
            districts_by_province: HashMap::new(),
            wards_by_parent: group_children(&wards),
            provinces,
            districts: Vec::new(),
            wards,
            province_pos,
            district_pos: HashMap::new(),
            ward_pos,
        };
        debug!(
            provinces = index.provinces.len(),
            wards = index.wards.len(),
            "built two-level division index"
        );
        Ok(index)
    }

    /// Hierarchy shape this index was built for.
    pub fn scheme(&self) -> Scheme {
        self.scheme
    }

    /// All provinces, in dataset-declared order.
    pub fn provinces(&self) -> &[Province] {
        &self.provinces
    }

    /// All districts, in dataset-declared order. Empty under
    /// [`Scheme::TwoLevel`].
    pub fn districts(&self) -> &[District] {
        &self.districts
    }

    /// All wards, in dataset-declared order.
    pub fn wards(&self) -> &[Ward] {
        &self.wards
    }

    pub fn province_by_code(&self, code: u32) -> Option<&Province> {
        self.province_pos.get(&code).map(|&pos| &self.provinces[pos])
    }

    pub fn district_by_code(&self, code: u32) -> Option<&District> {
        self.district_pos.get(&code).map(|&pos| &self.districts[pos])
    }

    pub fn ward_by_code(&self, code: u32) -> Option<&Ward> {
        self.ward_pos.get(&code).map(|&pos| &self.wards[pos])
    }

    /// Districts of one province, ordered by code.
    pub fn districts_of(&self, province_code: u32) -> impl Iterator<Item = &District> {
        child_positions(&self.districts_by_province, province_code)
            .iter()
            .map(|&pos| &self.districts[pos])
    }

    /// Wards of one parent (district or province, per scheme), ordered by code.
    pub fn wards_of(&self, parent_code: u32) -> impl Iterator<Item = &Ward> {
        child_positions(&self.wards_by_parent, parent_code)
            .iter()
            .map(|&pos| &self.wards[pos])
    }

    pub(crate) fn provinces_with_norm(&self) -> impl Iterator<Item = (&Province, &str)> {
        self.provinces
            .iter()
            .zip(self.norm_provinces.iter().map(String::as_str))
    }

    pub(crate) fn districts_of_with_norm(
        &self,
        province_code: u32,
    ) -> impl Iterator<Item = (&District, &str)> {
        child_positions(&self.districts_by_province, province_code)
            .iter()
            .map(|&pos| (&self.districts[pos], self.norm_districts[pos].as_str()))
    }

    pub(crate) fn wards_of_with_norm(
        &self,
        parent_code: u32,
    ) -> impl Iterator<Item = (&Ward, &str)> {
        child_positions(&self.wards_by_parent, parent_code)
            .iter()
            .map(|&pos| (&self.wards[pos], self.norm_wards[pos].as_str()))
    }
}

fn position_by_code<D: Division>(
    items: &[D],
    level: Level,
) -> Result<HashMap<u32, usize>, DatasetError> {
    let mut positions = HashMap::with_capacity(items.len());
    for (pos, item) in items.iter().enumerate() {
        if positions.insert(item.code(), pos).is_some() {
            return Err(DatasetError::DuplicateCode {
                level,
                code: item.code(),
            });
        }
    }
    Ok(positions)
}

fn check_parents<D: Division>(
    items: &[D],
    parents: &HashMap<u32, usize>,
) -> Result<(), DatasetError> {
    for item in items {
        // Provinces have no parent and never reach this check.
        if let Some(parent_code) = item.parent_code() {
            if !parents.contains_key(&parent_code) {
                return Err(DatasetError::UnknownParent {
                    level: item.level(),
                    code: item.code(),
                    parent_code,
                });
            }
        }
    }
    Ok(())
}

fn group_children<D: Division>(items: &[D]) -> HashMap<u32, Vec<usize>> {
    let mut children: HashMap<u32, Vec<usize>> = HashMap::new();
    for (pos, item) in items.iter().enumerate() {
        if let Some(parent_code) = item.parent_code() {
            children.entry(parent_code).or_default().push(pos);
        }
    }
    for positions in children.values_mut() {
        positions.sort_by_key(|&pos| items[pos].code());
    }
    children
}

fn normalized_names<D: Division>(items: &[D]) -> Vec<String> {
    items.iter().map(|item| normalize(item.name())).collect()
}

fn child_positions(children: &HashMap<u32, Vec<usize>>, parent_code: u32) -> &[usize] {
    children
        .get(&parent_code)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}
