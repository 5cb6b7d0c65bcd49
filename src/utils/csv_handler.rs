//! CSV 导出共享逻辑
//!
//! 提供统一的 CSV 写出功能，将提取结果压平成一行一篇文章

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

use chrono::Utc;
use csv::WriterBuilder;
use serde::Serialize;

use crate::errors::DisasterScanError;
use crate::report::DisasterReport;

/// CSV 行数据结构（仅用于序列化）
///
/// List-valued fields are joined with `; ` so one article stays one row.
#[derive(Debug, Clone, Serialize)]
pub struct CsvReportRow {
    pub article: String,
    pub disaster_type: String,
    pub event_date: String,
    pub districts: String,
    pub upazilas: String,
    pub uncertain_locations: String,
    pub deaths: String,
    pub injured: String,
    pub affected: String,
}

impl From<&DisasterReport> for CsvReportRow {
    fn from(report: &DisasterReport) -> Self {
        Self {
            article: report.article.clone(),
            disaster_type: report.disaster_type.to_string(),
            event_date: report.event_date.to_string(),
            districts: join_list(&report.locations.districts),
            upazilas: join_list(&report.locations.upazilas),
            uncertain_locations: join_list(&report.locations.uncertain),
            deaths: report.casualties.deaths_display(),
            injured: report.casualties.injured_display(),
            affected: report.casualties.affected_display(),
        }
    }
}

fn join_list(values: &[String]) -> String {
    values.join("; ")
}

/// 导出报告到 CSV 文件
pub fn export_to_csv<P: AsRef<Path>>(
    reports: &[DisasterReport],
    path: P,
) -> Result<(), DisasterScanError> {
    let file = File::create(path.as_ref())
        .map_err(|e| DisasterScanError::file_operation(format!("Failed to create file: {}", e)))?;
    let writer = BufWriter::new(file);
    let mut csv_writer = WriterBuilder::new().from_writer(writer);

    for report in reports {
        let row = CsvReportRow::from(report);
        csv_writer.serialize(&row).map_err(|e| {
            DisasterScanError::serialization(format!("Failed to write CSV row: {}", e))
        })?;
    }

    csv_writer
        .flush()
        .map_err(|e| DisasterScanError::file_operation(format!("Failed to flush CSV: {}", e)))?;

    Ok(())
}

/// 生成默认导出文件名（带时间戳）
pub fn generate_export_filename() -> String {
    format!(
        "disaster_reports_{}.csv",
        Utc::now().format("%Y%m%d_%H%M%S")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::{CasualtyFigures, DisasterType, EventDate, Locations};
    use std::fs;
    use tempfile::NamedTempFile;

    fn sample_report() -> DisasterReport {
        DisasterReport {
            article: "flood.txt".to_string(),
            disaster_type: DisasterType::Flood,
            event_date: EventDate::Explicit("August 21, 2017".to_string()),
            locations: Locations {
                districts: vec!["Kurigram".to_string(), "Sylhet".to_string()],
                upazilas: vec!["Chilmari".to_string()],
                uncertain: vec![],
            },
            casualties: CasualtyFigures {
                deaths: vec!["12".to_string()],
                injured: vec![],
                affected: vec!["50,000".to_string()],
            },
        }
    }

    #[test]
    fn test_csv_row_from_report() {
        let row = CsvReportRow::from(&sample_report());
        assert_eq!(row.article, "flood.txt");
        assert_eq!(row.disaster_type, "flood");
        assert_eq!(row.event_date, "August 21, 2017");
        assert_eq!(row.districts, "Kurigram; Sylhet");
        assert_eq!(row.upazilas, "Chilmari");
        assert_eq!(row.uncertain_locations, "");
        assert_eq!(row.deaths, "12");
        assert_eq!(row.injured, "not mentioned");
        assert_eq!(row.affected, "50,000");
    }

    #[test]
    fn test_export_to_csv() {
        let temp_file = NamedTempFile::new().unwrap();
        export_to_csv(&[sample_report()], temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        let mut lines = content.lines();
        let header = lines.next().unwrap();
        assert!(header.starts_with("article,disaster_type,event_date"));
        let row = lines.next().unwrap();
        assert!(row.contains("flood.txt"));
        assert!(row.contains("Kurigram; Sylhet"));
    }

    #[test]
    fn test_export_empty_batch_writes_nothing() {
        let temp_file = NamedTempFile::new().unwrap();
        export_to_csv(&[], temp_file.path()).unwrap();

        let content = fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.trim().is_empty());
    }

    #[test]
    fn test_generate_export_filename() {
        let filename = generate_export_filename();
        assert!(filename.starts_with("disaster_reports_"));
        assert!(filename.ends_with(".csv"));
    }
}
