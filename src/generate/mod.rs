//! Generation backend contract and dispatch.
//!
//! Page emission is owned by pluggable backends behind the [`Generator`]
//! trait, resolved at compile time. The dispatch sequence here fixes the
//! call order and the relative paths of the master pages; file content is
//! backend territory and is passed through uninterpreted.

mod plan;

pub use plan::PlanGenerator;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::db::SchemaInspect;
use crate::types::{Column, ColumnMeta, MappingBundle, RelationshipMapping};

/// Relative output path -> file content.
pub type FileMap = BTreeMap<String, String>;

/// Generation error types
#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("generation failed: {message}")]
    Failed { message: String },

    #[error("failed to write '{}': {source}", .path.display())]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// A code-generation backend.
///
/// The per-page entry points return file content; `add` pages also receive
/// the inspector so a backend can run lookups of its own (e.g. select
/// options for foreign keys). `save_generated_files` materializes content
/// under the project path and performs no validation on the maps it is
/// given: malformed backend output passes through uninterpreted.
pub trait Generator {
    fn generate_master_index(
        &mut self,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
    ) -> Result<String, GenerateError>;

    fn generate_master_add(
        &mut self,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
        inspector: &mut dyn SchemaInspect,
    ) -> Result<String, GenerateError>;

    fn generate_master_edit(
        &mut self,
        mapping: &RelationshipMapping,
        master_cols: &[ColumnMeta],
    ) -> Result<String, GenerateError>;

    fn generate_master_delete(
        &mut self,
        mapping: &RelationshipMapping,
    ) -> Result<String, GenerateError>;

    /// Detail-side pages, keyed by relative output path.
    fn generate_detail_files(
        &mut self,
        bundle: &MappingBundle,
        inspector: &mut dyn SchemaInspect,
    ) -> Result<FileMap, GenerateError>;

    /// Single-table CRUD pages, keyed by relative output path.
    fn generate_crud_files(
        &mut self,
        table: &str,
        cols: &[Column],
        inspector: &mut dyn SchemaInspect,
    ) -> Result<FileMap, GenerateError>;

    /// Materialize generated content under `project_path`.
    ///
    /// Returns the paths written.
    fn save_generated_files(
        &mut self,
        module_name: &str,
        master_files: &FileMap,
        detail_files: &FileMap,
        project_path: &Path,
    ) -> Result<Vec<PathBuf>, GenerateError>;
}

/// Run the full master-detail generation sequence against a backend.
///
/// Master pages land under `<module>/` with fixed names; detail paths are
/// backend-chosen.
pub fn dispatch_master_detail(
    generator: &mut dyn Generator,
    bundle: &MappingBundle,
    inspector: &mut dyn SchemaInspect,
    project_path: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    let mapping = &bundle.mapping;
    let module = &mapping.module_name;

    let mut master_files = FileMap::new();
    master_files.insert(
        format!("{}/index.php", module),
        generator.generate_master_index(mapping, &bundle.master_cols)?,
    );
    master_files.insert(
        format!("{}/add.php", module),
        generator.generate_master_add(mapping, &bundle.master_cols, inspector)?,
    );
    master_files.insert(
        format!("{}/edit.php", module),
        generator.generate_master_edit(mapping, &bundle.master_cols)?,
    );
    master_files.insert(
        format!("{}/delete.php", module),
        generator.generate_master_delete(mapping)?,
    );

    let detail_files = generator.generate_detail_files(bundle, inspector)?;

    generator.save_generated_files(module, &master_files, &detail_files, project_path)
}

/// Run the single-table CRUD generation sequence against a backend.
pub fn dispatch_crud(
    generator: &mut dyn Generator,
    table: &str,
    cols: &[Column],
    inspector: &mut dyn SchemaInspect,
    project_path: &Path,
) -> Result<Vec<PathBuf>, GenerateError> {
    let files = generator.generate_crud_files(table, cols, inspector)?;
    generator.save_generated_files(table, &files, &FileMap::new(), project_path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::{RecordingGenerator, library_bundle, library_inspector};

    #[test]
    fn test_dispatch_master_detail_call_order() {
        let bundle = library_bundle();
        let mut inspector = library_inspector();
        let mut generator = RecordingGenerator::default();

        dispatch_master_detail(&mut generator, &bundle, &mut inspector, Path::new("out")).unwrap();

        assert_eq!(
            generator.calls,
            vec![
                "master_index",
                "master_add",
                "master_edit",
                "master_delete",
                "detail_files",
                "save",
            ]
        );
    }

    #[test]
    fn test_dispatch_master_detail_page_paths() {
        let bundle = library_bundle();
        let mut inspector = library_inspector();
        let mut generator = RecordingGenerator::default();

        dispatch_master_detail(&mut generator, &bundle, &mut inspector, Path::new("out")).unwrap();

        let paths: Vec<&str> = generator.saved_master.keys().map(String::as_str).collect();
        assert_eq!(
            paths,
            vec![
                "library/add.php",
                "library/delete.php",
                "library/edit.php",
                "library/index.php",
            ]
        );
    }

    #[test]
    fn test_dispatch_crud_saves_under_table_module() {
        let mut inspector = library_inspector();
        let cols = inspector.describe_columns("books").unwrap();
        let mut generator = RecordingGenerator::default();

        dispatch_crud(
            &mut generator,
            "books",
            &cols,
            &mut inspector,
            Path::new("out"),
        )
        .unwrap();

        assert_eq!(generator.calls, vec!["crud_files", "save"]);
        assert_eq!(generator.saved_module.as_deref(), Some("books"));
        assert!(generator.saved_detail.is_empty());
    }
}
