//! Mapping from input headers to record fields.

use movie_ingest::{CsvTable, IngestError};
use movie_model::{ColumnKind, OutputColumn};

use crate::options::NormalizationOptions;

pub(crate) const RELEASE_YEAR_COLUMN: &str = "release_year";
pub(crate) const RETURN_COLUMN: &str = "return";

fn recognize(header: &str) -> Option<ColumnKind> {
    let kind = match header.to_ascii_lowercase().as_str() {
        "title" => ColumnKind::Title,
        "budget" => ColumnKind::Budget,
        "revenue" => ColumnKind::Revenue,
        "release_date" => ColumnKind::ReleaseDate,
        RELEASE_YEAR_COLUMN => ColumnKind::ReleaseYear,
        RETURN_COLUMN => ColumnKind::Return,
        "belongs_to_collection" | "name_collection" => ColumnKind::Collection,
        "production_countries" => ColumnKind::ProductionCountries,
        "production_companies" => ColumnKind::ProductionCompanies,
        _ => return None,
    };
    Some(kind)
}

/// Where each kept input column is read from and written to.
#[derive(Debug, Clone)]
pub(crate) struct InputLayout {
    /// Output columns in order: kept input columns, then derived ones.
    pub columns: Vec<OutputColumn>,
    /// Input index for every non-derived output column, aligned with `columns`.
    pub sources: Vec<Option<usize>>,
    pub discarded: Vec<String>,
}

impl InputLayout {
    pub fn build(table: &CsvTable, options: &NormalizationOptions) -> Result<Self, IngestError> {
        let mut columns = Vec::new();
        let mut sources = Vec::new();
        let mut discarded = Vec::new();
        let mut extra_count = 0usize;

        for (idx, header) in table.headers.iter().enumerate() {
            if options.drops(header) {
                discarded.push(header.clone());
                continue;
            }
            // A repeated recognized header is carried through as plain text.
            let kind = match recognize(header) {
                Some(kind) if !columns.iter().any(|c: &OutputColumn| c.kind == kind) => kind,
                _ => {
                    extra_count += 1;
                    ColumnKind::Extra(extra_count - 1)
                }
            };
            columns.push(OutputColumn::new(header.clone(), kind));
            sources.push(Some(idx));
        }

        for (name, kind) in [
            (RELEASE_YEAR_COLUMN, ColumnKind::ReleaseYear),
            (RETURN_COLUMN, ColumnKind::Return),
        ] {
            if !columns.iter().any(|c| c.kind == kind) {
                columns.push(OutputColumn::new(name, kind));
                sources.push(None);
            }
        }

        let layout = Self {
            columns,
            sources,
            discarded,
        };
        for (name, kind) in [
            ("release_date", ColumnKind::ReleaseDate),
            ("budget", ColumnKind::Budget),
        ] {
            if layout.source_of(kind).is_none() {
                return Err(IngestError::MissingColumn {
                    column: name.to_string(),
                    path: table.source.clone(),
                });
            }
        }
        Ok(layout)
    }

    /// Input index backing `kind`, if the input has that column.
    pub fn source_of(&self, kind: ColumnKind) -> Option<usize> {
        self.columns
            .iter()
            .zip(&self.sources)
            .find(|(column, _)| column.kind == kind)
            .and_then(|(_, source)| *source)
    }

    /// Input indices of the passthrough columns, in `Extra` slot order.
    pub fn extra_sources(&self) -> Vec<usize> {
        self.columns
            .iter()
            .zip(&self.sources)
            .filter(|(column, _)| matches!(column.kind, ColumnKind::Extra(_)))
            .filter_map(|(_, source)| *source)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(headers: &[&str]) -> CsvTable {
        CsvTable::new(
            "inline.csv",
            headers.iter().map(ToString::to_string).collect(),
            Vec::new(),
        )
    }

    #[test]
    fn drops_admin_columns_and_appends_derived() {
        let layout = InputLayout::build(
            &table(&["adult", "budget", "imdb_id", "genres", "release_date"]),
            &NormalizationOptions::default(),
        )
        .unwrap();
        let names: Vec<&str> = layout.columns.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["budget", "genres", "release_date", "release_year", "return"]
        );
        assert_eq!(layout.discarded, vec!["adult", "imdb_id"]);
        assert_eq!(layout.source_of(ColumnKind::ReleaseDate), Some(4));
        assert_eq!(layout.source_of(ColumnKind::Return), None);
        assert_eq!(layout.extra_sources(), vec![3]);
    }

    #[test]
    fn derived_columns_are_not_duplicated() {
        let layout = InputLayout::build(
            &table(&["budget", "release_date", "release_year", "return"]),
            &NormalizationOptions::default(),
        )
        .unwrap();
        assert_eq!(layout.columns.len(), 4);
    }

    #[test]
    fn missing_required_column_is_fatal() {
        let error = InputLayout::build(
            &table(&["title", "budget"]),
            &NormalizationOptions::default(),
        )
        .unwrap_err();
        assert!(matches!(
            error,
            IngestError::MissingColumn { ref column, .. } if column == "release_date"
        ));
    }
}
