//! Content Plan CSV Export
//!
//! コンテンツ計画のCSVファイル出力

use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::entities::content_plan::ContentIdea;
use crate::domain::error::{PlatformError, PlatformResult};

const CSV_HEADERS: [&str; 7] = [
    "Dzien", "Typ", "Pomysl", "Caption", "Odbiorcy", "Godzina", "Hashtagi",
];

/// CSVフィールドをエスケープする
///
/// カンマ・引用符・改行を含むフィールドは引用符で包み、内部の引用符は二重にする
fn escape_csv_field(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// アイデア1件をCSV行にする
fn idea_to_row(idea: &ContentIdea) -> String {
    [
        idea.day.to_string(),
        idea.kind.clone(),
        idea.idea.clone(),
        idea.caption_draft.clone(),
        idea.audience.clone(),
        idea.best_time.clone(),
        idea.hashtags.clone(),
    ]
    .iter()
    .map(|field| escape_csv_field(field))
    .collect::<Vec<_>>()
    .join(",")
}

/// コンテンツ計画をCSVファイルへ書き出す
///
/// 出力はUTF-8 BOM付き。Excelで文字化けせずに開けるようにするため
///
/// # Arguments
///
/// * `ideas` - 書き出すアイデアのリスト
/// * `export_dir` - 出力先ディレクトリ（なければ作成）
///
/// # Returns
///
/// 作成されたファイルのパス
///
/// # Errors
///
/// リストが空の場合は `Validation`、書き込みに失敗した場合は `Filesystem` を返す
pub fn export_content_plan_csv(
    ideas: &[ContentIdea],
    export_dir: &str,
) -> PlatformResult<PathBuf> {
    if ideas.is_empty() {
        return Err(PlatformError::Validation(
            "no content ideas to export".to_string(),
        ));
    }

    let dir = Path::new(export_dir);
    fs::create_dir_all(dir)
        .map_err(|e| PlatformError::filesystem("creating directory", dir, e))?;

    let timestamp = Local::now().format("%Y%m%d_%H%M%S");
    let filepath = dir.join(format!("content_plan_{timestamp}.csv"));

    let mut content = String::from("\u{feff}");
    content.push_str(&CSV_HEADERS.join(","));
    content.push('\n');
    for idea in ideas {
        content.push_str(&idea_to_row(idea));
        content.push('\n');
    }

    fs::write(&filepath, content)
        .map_err(|e| PlatformError::filesystem("writing", filepath.clone(), e))?;

    Ok(filepath)
}
