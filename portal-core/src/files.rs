//! Download file records and the filter engine for the downloads section.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A downloadable file offered to parents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadFile {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub file_type: FileType,
    /// Human-readable size as reported by the API ("2.4 MB"), not parsed
    pub size: String,
    pub upload_date: NaiveDate,
    pub category: String,
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preview_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_count: Option<u64>,
}

/// Closed set of file kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    Pdf,
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Other,
}

/// A file category as reported by the API.
///
/// `file_count` is the upstream's declared total, not the length of whatever
/// filtered list is currently displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileCategory {
    pub id: String,
    pub name: String,
    pub description: String,
    pub file_count: u64,
}

/// Category predicate: the wire value "all" means no restriction
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Category(String),
}

impl CategoryFilter {
    pub fn from_param(param: &str) -> Self {
        match param {
            "all" => CategoryFilter::All,
            id => CategoryFilter::Category(id.to_string()),
        }
    }

    fn matches(&self, file: &DownloadFile) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(id) => file.category == *id,
        }
    }
}

/// File-type predicate with the same "all" sentinel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TypeFilter {
    #[default]
    All,
    Type(FileType),
}

impl TypeFilter {
    /// Parse the dropdown value; unknown strings fall back to `All`
    pub fn from_param(param: &str) -> Self {
        match param {
            "pdf" => TypeFilter::Type(FileType::Pdf),
            "image" => TypeFilter::Type(FileType::Image),
            "video" => TypeFilter::Type(FileType::Video),
            "audio" => TypeFilter::Type(FileType::Audio),
            "document" => TypeFilter::Type(FileType::Document),
            "archive" => TypeFilter::Type(FileType::Archive),
            "other" => TypeFilter::Type(FileType::Other),
            _ => TypeFilter::All,
        }
    }

    fn matches(&self, file: &DownloadFile) -> bool {
        match self {
            TypeFilter::All => true,
            TypeFilter::Type(t) => file.file_type == *t,
        }
    }
}

/// The three conjunctive predicates of the downloads section.
///
/// Re-evaluated whenever the file list or any selection changes; an empty
/// result is a legitimate outcome, distinct from "still loading".
#[derive(Debug, Clone, Default)]
pub struct FileFilter {
    pub search: String,
    pub category: CategoryFilter,
    pub file_type: TypeFilter,
}

impl FileFilter {
    fn search_matches(&self, file: &DownloadFile) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        file.name.to_lowercase().contains(&needle)
            || file
                .description
                .as_ref()
                .is_some_and(|d| d.to_lowercase().contains(&needle))
    }

    pub fn matches(&self, file: &DownloadFile) -> bool {
        self.search_matches(file)
            && self.category.matches(file)
            && self.file_type.matches(file)
    }
}

/// Apply `filter` to `files`, preserving input order (stable filter, no sort).
pub fn filter_files(files: &[DownloadFile], filter: &FileFilter) -> Vec<DownloadFile> {
    files
        .iter()
        .filter(|f| filter.matches(f))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file(id: &str, name: &str, description: Option<&str>, t: FileType, cat: &str) -> DownloadFile {
        DownloadFile {
            id: id.to_string(),
            name: name.to_string(),
            description: description.map(str::to_string),
            file_type: t,
            size: "1.0 MB".to_string(),
            upload_date: NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
            category: cat.to_string(),
            url: "/placeholder.pdf".to_string(),
            preview_url: None,
            download_count: None,
        }
    }

    fn fixture() -> Vec<DownloadFile> {
        vec![
            file("1", "Parent Handbook", Some("Policies and procedures"), FileType::Pdf, "handbook"),
            file("2", "Field Trip Permission Form", None, FileType::Pdf, "forms"),
            file("3", "October Newsletter", Some("Monthly updates"), FileType::Pdf, "newsletters"),
            file("4", "Recital Recording", Some("From the fall NEWSLETTER issue"), FileType::Video, "videos"),
            file("5", "Emergency Contact Form", None, FileType::Document, "forms"),
            file("6", "Allergy Notice Form", Some("Updated for 2024"), FileType::Pdf, "forms"),
        ]
    }

    #[test]
    fn test_empty_filter_matches_everything() {
        let files = fixture();
        let result = filter_files(&files, &FileFilter::default());
        assert_eq!(result.len(), files.len());
    }

    #[test]
    fn test_search_is_case_insensitive_over_name_and_description() {
        let files = fixture();
        let filter = FileFilter {
            search: "newsletter".to_string(),
            ..Default::default()
        };
        let result = filter_files(&files, &filter);
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        // "3" matches by name, "4" by (uppercased) description
        assert_eq!(ids, vec!["3", "4"]);
    }

    #[test]
    fn test_category_and_type_conjunction_preserves_order() {
        let files = fixture();
        let filter = FileFilter {
            search: String::new(),
            category: CategoryFilter::from_param("forms"),
            file_type: TypeFilter::from_param("pdf"),
        };
        let result = filter_files(&files, &filter);
        let ids: Vec<&str> = result.iter().map(|f| f.id.as_str()).collect();
        // "5" is in forms but is a Document, so only 2 and 6, in input order
        assert_eq!(ids, vec!["2", "6"]);
    }

    #[test]
    fn test_all_sentinel_parses_to_no_restriction() {
        assert_eq!(CategoryFilter::from_param("all"), CategoryFilter::All);
        assert_eq!(TypeFilter::from_param("all"), TypeFilter::All);
        assert_eq!(
            TypeFilter::from_param("archive"),
            TypeFilter::Type(FileType::Archive)
        );
    }

    #[test]
    fn test_no_match_yields_empty_result() {
        let files = fixture();
        let filter = FileFilter {
            search: "does-not-exist".to_string(),
            ..Default::default()
        };
        assert!(filter_files(&files, &filter).is_empty());
    }
}
