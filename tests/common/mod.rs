#![allow(dead_code)]

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

pub fn write_csv(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

/// Read one XML part out of an `.xlsx` package.
pub fn xlsx_part(path: &Path, part: &str) -> String {
    let mut archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    let mut entry = archive.by_name(part).unwrap();
    let mut xml = String::new();
    entry.read_to_string(&mut xml).unwrap();
    xml
}

pub fn sheet_xml(path: &Path) -> String {
    xlsx_part(path, "xl/worksheets/sheet1.xml")
}

pub fn shared_strings(path: &Path) -> String {
    xlsx_part(path, "xl/sharedStrings.xml")
}

pub fn sheet_count(path: &Path) -> usize {
    let archive = zip::ZipArchive::new(File::open(path).unwrap()).unwrap();
    archive
        .file_names()
        .filter(|n| n.starts_with("xl/worksheets/sheet") && n.ends_with(".xml"))
        .count()
}
