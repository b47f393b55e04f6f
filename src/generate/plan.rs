//! Dry-run backend emitting a JSON scaffold plan.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::json;

use super::{FileMap, GenerateError, Generator};
use crate::db::SchemaInspect;
use crate::types::{Column, ColumnMeta, MappingBundle, RelationshipMapping};

/// Reference backend: page "contents" are JSON descriptors of exactly the
/// inputs, and the save step materializes a single `scaffold-plan.json`
/// manifest per module instead of final page sources.
///
/// Real page emission belongs to external backends implementing
/// [`Generator`]; this one keeps the CLI usable end-to-end and the
/// dispatch contract exercised.
#[derive(Debug, Default)]
pub struct PlanGenerator;

impl PlanGenerator {
    pub fn new() -> Self {
        Self
    }

    fn master_page(
        kind: &str,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
    ) -> String {
        serde_json::to_string_pretty(&json!({
            "page": kind,
            "table": mapping.master_table,
            "columns": master_cols,
            "mapping": mapping,
        }))
        .unwrap_or_default()
    }
}

impl Generator for PlanGenerator {
    fn generate_master_index(
        &mut self,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
    ) -> Result<String, GenerateError> {
        Ok(Self::master_page("index", mapping, master_cols))
    }

    fn generate_master_add(
        &mut self,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
        _inspector: &mut dyn SchemaInspect,
    ) -> Result<String, GenerateError> {
        Ok(Self::master_page("add", mapping, master_cols))
    }

    fn generate_master_edit(
        &mut self,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
    ) -> Result<String, GenerateError> {
        Ok(Self::master_page("edit", mapping, master_cols))
    }

    fn generate_master_delete(
        &mut self,
        mapping: &RelationshipMapping,
    ) -> Result<String, GenerateError> {
        Ok(Self::master_page("delete", mapping, &[]))
    }

    fn generate_detail_files(
        &mut self,
        bundle: &MappingBundle,
        _inspector: &mut dyn SchemaInspect,
    ) -> Result<FileMap, GenerateError> {
        let module = &bundle.mapping.module_name;
        let detail = &bundle.mapping.detail_table;

        let mut files = FileMap::new();
        for kind in ["index", "add", "edit", "delete"] {
            let content = serde_json::to_string_pretty(&json!({
                "page": kind,
                "table": detail,
                "columns": bundle.detail_cols,
                "mapping": bundle.mapping,
            }))
            .unwrap_or_default();
            files.insert(format!("{}/{}/{}.php", module, detail, kind), content);
        }
        Ok(files)
    }

    fn generate_crud_files(
        &mut self,
        table: &str,
        cols: &[Column],
        _inspector: &mut dyn SchemaInspect,
    ) -> Result<FileMap, GenerateError> {
        let mut files = FileMap::new();
        for kind in ["index", "add", "edit", "delete"] {
            let content = serde_json::to_string_pretty(&json!({
                "page": kind,
                "table": table,
                "columns": cols,
            }))
            .unwrap_or_default();
            files.insert(format!("{}/{}.php", table, kind), content);
        }
        Ok(files)
    }

    fn save_generated_files(
        &mut self,
        module_name: &str,
        master_files: &FileMap,
        detail_files: &FileMap,
        project_path: &Path,
    ) -> Result<Vec<PathBuf>, GenerateError> {
        let dir = project_path.join(module_name);
        fs::create_dir_all(&dir).map_err(|e| GenerateError::WriteFailed {
            path: dir.clone(),
            source: e,
        })?;

        let manifest = serde_json::to_string_pretty(&json!({
            "module": module_name,
            "master_files": master_files,
            "detail_files": detail_files,
        }))
        .unwrap_or_default();

        let manifest_path = dir.join("scaffold-plan.json");
        fs::write(&manifest_path, manifest).map_err(|e| GenerateError::WriteFailed {
            path: manifest_path.clone(),
            source: e,
        })?;

        Ok(vec![manifest_path])
    }
}
