//! End-to-end: directory of exports in, relationship report out.

use fieldlink_engine::analyze;
use fieldlink_ingest::{CsvDirectoryProvider, XmlDirectoryProvider};
use fieldlink_model::{AnalysisOptions, ScanError};

#[test]
fn csv_directory_scan_finds_relationship() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("item.csv"),
        "id,name\n1,Sword of Fire\n2,sword of fire\n3,Shield\n4,\n",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("drop.csv"),
        "item_name,rate\nSword of Fire,0.1\nShield,0.5\nPotion,0.9\n",
    )
    .unwrap();

    let provider = CsvDirectoryProvider::new(dir.path());
    let report = analyze(&provider, AnalysisOptions::default()).unwrap();

    assert_eq!(report.len(), 1);
    let snapshot = &report.snapshots()[0];
    assert_eq!(snapshot.match_count, 2);
    assert_eq!(snapshot.source_file, "drop");
    assert_eq!(snapshot.target_file, "item");
    assert_eq!(report.metadata().sources_scanned, 2);
}

#[test]
fn unreadable_csv_is_skipped_not_fatal() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("item.csv"), "name\nSword\nShield\n").unwrap();
    std::fs::write(dir.path().join("drop.csv"), "item_name\nSword\nShield\n").unwrap();
    std::fs::write(dir.path().join("broken.csv"), b"name\n\xff\xfe\n").unwrap();

    let provider = CsvDirectoryProvider::new(dir.path());
    let report = analyze(&provider, AnalysisOptions::default()).unwrap();

    assert_eq!(report.metadata().sources_scanned, 2);
    assert_eq!(report.metadata().skipped_sources.len(), 1);
    assert_eq!(report.metadata().skipped_sources[0].source, "broken");
    assert_eq!(report.len(), 1);
}

#[test]
fn missing_directory_is_provider_unavailable() {
    let provider = CsvDirectoryProvider::new("/nonexistent/fieldlink-scan");
    let result = analyze(&provider, AnalysisOptions::default());
    assert!(matches!(result, Err(ScanError::ProviderUnavailable(_))));
}

#[test]
fn xml_directory_scan_finds_relationship() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("item.xml"),
        "<item>\
           <record><id>1</id><name>Sword</name></record>\
           <record><id>2</id><name>Shield</name></record>\
         </item>",
    )
    .unwrap();
    std::fs::write(
        dir.path().join("drop.xml"),
        "<drop>\
           <record><item_name>sword</item_name></record>\
           <record><item_name>SHIELD</item_name></record>\
         </drop>",
    )
    .unwrap();

    let provider = XmlDirectoryProvider::new(dir.path());
    let report = analyze(&provider, AnalysisOptions::default()).unwrap();

    assert_eq!(report.len(), 1);
    let snapshot = &report.snapshots()[0];
    assert_eq!(snapshot.match_count, 2);
    assert!((snapshot.source_coverage - 1.0).abs() < 1e-9);
    assert!((snapshot.target_coverage - 1.0).abs() < 1e-9);
}
