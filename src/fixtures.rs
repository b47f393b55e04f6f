//! Shared test fixtures: an in-memory schema source and a recording
//! generation backend.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::db::{DbError, SchemaInspect};
use crate::generate::{FileMap, GenerateError, Generator};
use crate::types::{Column, ColumnMeta, MappingBundle, RelationshipMapping};

/// Column literal helper for fixture tables.
pub fn meta(
    name: &str,
    sql_type: &str,
    nullable: bool,
    default: Option<&str>,
    extra: &str,
) -> ColumnMeta {
    ColumnMeta {
        name: name.to_string(),
        sql_type: sql_type.to_string(),
        nullable,
        default: default.map(str::to_string),
        extra: extra.to_string(),
    }
}

/// In-memory catalog standing in for a live database.
///
/// Tables without a registered column list behave like dropped tables: the
/// rich describe reports "not found". `fail_describe_after` makes rich
/// describes fail once the given number of calls has succeeded, simulating
/// a table dropped mid-session.
pub struct FakeInspector {
    tables: Vec<String>,
    columns: BTreeMap<String, Vec<ColumnMeta>>,
    defaults: BTreeMap<(String, String), String>,
    fail_describe_after: Option<usize>,
    describe_calls: usize,
}

impl FakeInspector {
    pub fn new(tables: &[&str]) -> Self {
        Self {
            tables: tables.iter().map(|t| t.to_string()).collect(),
            columns: BTreeMap::new(),
            defaults: BTreeMap::new(),
            fail_describe_after: None,
            describe_calls: 0,
        }
    }

    pub fn with_columns(mut self, table: &str, cols: Vec<ColumnMeta>) -> Self {
        for col in &cols {
            if let Some(default) = &col.default {
                self.defaults
                    .insert((table.to_string(), col.name.clone()), default.clone());
            }
        }
        self.columns.insert(table.to_string(), cols);
        self
    }

    pub fn fail_describe_after(mut self, calls: usize) -> Self {
        self.fail_describe_after = Some(calls);
        self
    }
}

impl SchemaInspect for FakeInspector {
    fn list_tables(&mut self) -> Result<Vec<String>, DbError> {
        Ok(self.tables.clone())
    }

    fn describe_columns(&mut self, table: &str) -> Result<Vec<Column>, DbError> {
        let cols = self.columns.get(table).cloned().ok_or(DbError::QueryFailed {
            message: format!("table '{}' doesn't exist", table),
        })?;
        Ok(cols
            .into_iter()
            .map(|c| Column {
                name: c.name,
                sql_type: c.sql_type.to_lowercase(),
                nullable: c.nullable,
                default: c.default,
            })
            .collect())
    }

    fn describe_columns_rich(&mut self, table: &str) -> Result<Option<Vec<ColumnMeta>>, DbError> {
        self.describe_calls += 1;
        if let Some(limit) = self.fail_describe_after {
            if self.describe_calls > limit {
                return Err(DbError::QueryFailed {
                    message: "table dropped mid-session".to_string(),
                });
            }
        }
        Ok(self.columns.get(table).cloned())
    }

    fn fetch_column_default(
        &mut self,
        table: &str,
        column: &str,
    ) -> Result<Option<String>, DbError> {
        Ok(self
            .defaults
            .get(&(table.to_string(), column.to_string()))
            .cloned())
    }
}

/// Two-table lending catalog used by the workflow tests.
pub fn library_inspector() -> FakeInspector {
    FakeInspector::new(&["books", "loans"])
        .with_columns(
            "books",
            vec![
                meta("id", "int(11)", false, None, "auto_increment"),
                meta("title", "VARCHAR(255)", false, None, ""),
                meta("status", "varchar(20)", true, Some("OPEN"), ""),
                meta("total", "decimal(10,2)", true, None, ""),
            ],
        )
        .with_columns(
            "loans",
            vec![
                meta("id", "int(11)", false, None, "auto_increment"),
                meta("book_id", "int(11)", false, None, ""),
                meta("qty", "int(11)", false, Some("1"), ""),
                meta("price", "decimal(10,2)", true, None, ""),
                meta("subtotal", "decimal(10,2)", true, None, ""),
            ],
        )
}

/// A books/loans bundle with all role fields unset.
pub fn library_bundle() -> MappingBundle {
    let mut inspector = library_inspector();
    let master_cols = inspector.describe_columns_rich("books").unwrap().unwrap();
    let detail_cols = inspector.describe_columns_rich("loans").unwrap().unwrap();
    MappingBundle {
        mapping: RelationshipMapping {
            master_table: "books".to_string(),
            detail_table: "loans".to_string(),
            module_name: "library".to_string(),
            ..Default::default()
        },
        master_cols,
        detail_cols,
    }
}

/// Backend that records the dispatch call order and writes nothing.
#[derive(Debug, Default)]
pub struct RecordingGenerator {
    pub calls: Vec<String>,
    pub saved_module: Option<String>,
    pub saved_master: FileMap,
    pub saved_detail: FileMap,
}

impl RecordingGenerator {
    fn record(&mut self, call: &str) {
        self.calls.push(call.to_string());
    }
}

impl Generator for RecordingGenerator {
    fn generate_master_index(
        &mut self,
        _mapping: &RelationshipMapping,
        _master_cols: &[ColumnMeta],
    ) -> Result<String, GenerateError> {
        self.record("master_index");
        Ok("master index content".to_string())
    }

    fn generate_master_add(
        &mut self,
        _mapping: &RelationshipMapping,
        _master_cols: &[ColumnMeta],
        _inspector: &mut dyn SchemaInspect,
    ) -> Result<String, GenerateError> {
        self.record("master_add");
        Ok("master add content".to_string())
    }

    fn generate_master_edit(
        &mut self,
        _mapping: &RelationshipMapping,
        _master_cols: &[ColumnMeta],
    ) -> Result<String, GenerateError> {
        self.record("master_edit");
        Ok("master edit content".to_string())
    }

    fn generate_master_delete(
        &mut self,
        _mapping: &RelationshipMapping,
    ) -> Result<String, GenerateError> {
        self.record("master_delete");
        Ok("master delete content".to_string())
    }

    fn generate_detail_files(
        &mut self,
        bundle: &MappingBundle,
        _inspector: &mut dyn SchemaInspect,
    ) -> Result<FileMap, GenerateError> {
        self.record("detail_files");
        let mut files = FileMap::new();
        files.insert(
            format!(
                "{}/{}/index.php",
                bundle.mapping.module_name, bundle.mapping.detail_table
            ),
            "detail index content".to_string(),
        );
        Ok(files)
    }

    fn generate_crud_files(
        &mut self,
        table: &str,
        _cols: &[Column],
        _inspector: &mut dyn SchemaInspect,
    ) -> Result<FileMap, GenerateError> {
        self.record("crud_files");
        let mut files = FileMap::new();
        for kind in ["index", "add", "edit", "delete"] {
            files.insert(format!("{}/{}.php", table, kind), format!("{} content", kind));
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
        self.record("save");
        self.saved_module = Some(module_name.to_string());
        self.saved_master = master_files.clone();
        self.saved_detail = detail_files.clone();
        Ok(master_files
            .keys()
            .chain(detail_files.keys())
            .map(|rel| project_path.join(rel))
            .collect())
    }
}
