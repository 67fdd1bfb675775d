//! Tags column codec
//!
//! `generations.tags` is stored either as a native `TEXT[]` or as a JSON
//! array inside a `TEXT` column. Both layouts sit behind [`TagsCodec`] so the
//! repositories never branch on the storage type.

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::Query;
use sqlx::{PgPool, Postgres, Row};

use super::DbError;

/// Query type the codec binds parameters into
pub type PgQuery<'q> = Query<'q, Postgres, PgArguments>;

/// Converts tag lists to and from the `tags` column.
pub trait TagsCodec: Send + Sync + fmt::Debug {
    /// Which layout this codec reads and writes
    fn storage(&self) -> TagsStorage;

    /// SQL column type used when creating the table
    fn column_type(&self) -> &'static str;

    /// Bind tags as the next query parameter. `None` binds SQL NULL.
    fn bind<'q>(&self, query: PgQuery<'q>, tags: Option<&[String]>)
        -> Result<PgQuery<'q>, DbError>;

    /// Read the tags column from a row, preserving order.
    fn decode(&self, row: &PgRow, column: &str) -> Result<Vec<String>, sqlx::Error>;
}

/// Native Postgres array column
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayTags;

impl TagsCodec for ArrayTags {
    fn storage(&self) -> TagsStorage {
        TagsStorage::Array
    }

    fn column_type(&self) -> &'static str {
        "TEXT[]"
    }

    fn bind<'q>(
        &self,
        query: PgQuery<'q>,
        tags: Option<&[String]>,
    ) -> Result<PgQuery<'q>, DbError> {
        Ok(query.bind(tags.map(|t| t.to_vec())))
    }

    fn decode(&self, row: &PgRow, column: &str) -> Result<Vec<String>, sqlx::Error> {
        row.try_get::<Vec<String>, _>(column)
    }
}

/// JSON array serialized into a text column
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTextTags;

impl JsonTextTags {
    pub fn encode(tags: &[String]) -> Result<String, serde_json::Error> {
        serde_json::to_string(tags)
    }

    pub fn parse(raw: &str) -> Result<Vec<String>, serde_json::Error> {
        serde_json::from_str(raw)
    }
}

impl TagsCodec for JsonTextTags {
    fn storage(&self) -> TagsStorage {
        TagsStorage::JsonText
    }

    fn column_type(&self) -> &'static str {
        "TEXT"
    }

    fn bind<'q>(
        &self,
        query: PgQuery<'q>,
        tags: Option<&[String]>,
    ) -> Result<PgQuery<'q>, DbError> {
        let encoded = tags.map(Self::encode).transpose()?;
        Ok(query.bind(encoded))
    }

    fn decode(&self, row: &PgRow, column: &str) -> Result<Vec<String>, sqlx::Error> {
        let raw: String = row.try_get(column)?;
        Self::parse(&raw).map_err(|e| sqlx::Error::ColumnDecode {
            index: column.to_string(),
            source: Box::new(e),
        })
    }
}

/// Tags column layout
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TagsStorage {
    /// `TEXT[]`
    #[default]
    Array,
    /// `TEXT` holding a JSON array
    JsonText,
}

impl TagsStorage {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::JsonText => "json",
        }
    }

    /// Codec implementing this layout
    pub fn codec(self) -> Arc<dyn TagsCodec> {
        match self {
            Self::Array => Arc::new(ArrayTags),
            Self::JsonText => Arc::new(JsonTextTags),
        }
    }

    /// Map an `information_schema.columns.data_type` value to a layout.
    pub fn from_column_type(data_type: &str) -> Option<Self> {
        match data_type {
            "ARRAY" => Some(Self::Array),
            "text" | "character varying" => Some(Self::JsonText),
            _ => None,
        }
    }

    /// Pick the layout supported by the store.
    ///
    /// An existing `generations.tags` column decides; otherwise `preferred`
    /// is used for the table about to be created.
    pub async fn detect(pool: &PgPool, preferred: TagsStorage) -> Result<Self, DbError> {
        let existing: Option<(String,)> = sqlx::query_as(
            r#"
            SELECT data_type
            FROM information_schema.columns
            WHERE table_schema = current_schema()
              AND table_name = 'generations'
              AND column_name = 'tags'
            "#,
        )
        .fetch_optional(pool)
        .await?;

        let Some((data_type,)) = existing else {
            tracing::debug!(
                storage = preferred.as_str(),
                "no tags column yet, using preference"
            );
            return Ok(preferred);
        };

        match Self::from_column_type(&data_type) {
            Some(storage) => {
                if storage != preferred {
                    tracing::info!(
                        existing = storage.as_str(),
                        preferred = preferred.as_str(),
                        "existing tags column overrides configured storage"
                    );
                }
                Ok(storage)
            }
            None => Err(DbError::UnsupportedTagsColumn(data_type)),
        }
    }
}

impl fmt::Display for TagsStorage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagsStorage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "array" => Ok(Self::Array),
            "json" | "json-text" | "text" => Ok(Self::JsonText),
            other => Err(format!("unknown tags storage '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_text_preserves_order() {
        let tags = vec!["cat".to_string(), "pet".to_string(), "sofa".to_string()];
        let encoded = JsonTextTags::encode(&tags).unwrap();
        assert_eq!(encoded, r#"["cat","pet","sofa"]"#);
        assert_eq!(JsonTextTags::parse(&encoded).unwrap(), tags);
    }

    #[test]
    fn json_text_empty_list() {
        assert_eq!(JsonTextTags::encode(&[]).unwrap(), "[]");
        assert!(JsonTextTags::parse("[]").unwrap().is_empty());
    }

    #[test]
    fn json_text_rejects_non_array() {
        assert!(JsonTextTags::parse(r#"{"tags": []}"#).is_err());
    }

    #[test]
    fn column_types() {
        assert_eq!(ArrayTags.column_type(), "TEXT[]");
        assert_eq!(JsonTextTags.column_type(), "TEXT");
        assert_eq!(TagsStorage::Array.codec().storage(), TagsStorage::Array);
        assert_eq!(
            TagsStorage::JsonText.codec().storage(),
            TagsStorage::JsonText
        );
    }

    #[test]
    fn parse_storage() {
        assert_eq!("array".parse::<TagsStorage>().unwrap(), TagsStorage::Array);
        let storage: TagsStorage = "JSON".parse().unwrap();
        assert_eq!(storage, TagsStorage::JsonText);
        assert!("hstore".parse::<TagsStorage>().is_err());
    }

    #[test]
    fn storage_from_information_schema() {
        let array = TagsStorage::from_column_type("ARRAY");
        assert_eq!(array, Some(TagsStorage::Array));
        let text = TagsStorage::from_column_type("text");
        assert_eq!(text, Some(TagsStorage::JsonText));
        assert_eq!(TagsStorage::from_column_type("jsonb"), None);
    }

    #[test]
    fn unsupported_column_error_names_the_type() {
        let err = DbError::UnsupportedTagsColumn("jsonb".into());
        assert_eq!(
            err.to_string(),
            "unsupported generations.tags column type 'jsonb'"
        );
    }
}
