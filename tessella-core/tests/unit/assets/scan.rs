use super::*;

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn scan_filters_extension_case_insensitively_and_sorts() {
    let dir = fresh_dir("scan_unit_png");
    std::fs::create_dir_all(dir.join("nested")).unwrap();
    for name in ["b.PNG", "a.png", "c.Png", "d.tga", "notes.txt", "bare"] {
        std::fs::write(dir.join(name), b"stub").unwrap();
    }
    std::fs::write(dir.join("nested").join("e.png"), b"stub").unwrap();

    let found = scan_dir(&dir, SourceFormat::Png).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, ["a.png", "b.PNG", "c.Png"]);
}

#[test]
fn scan_finds_targa_sources() {
    let dir = fresh_dir("scan_unit_tga");
    for name in ["y.tga", "x.TGA", "z.png"] {
        std::fs::write(dir.join(name), b"stub").unwrap();
    }

    let found = scan_dir(&dir, SourceFormat::Tga).unwrap();
    let names: Vec<_> = found
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap())
        .collect();
    assert_eq!(names, ["x.TGA", "y.tga"]);
}

#[test]
fn scan_of_missing_directory_is_an_error() {
    let dir = PathBuf::from("target").join("scan_unit_missing");
    let _ = std::fs::remove_dir_all(&dir);
    assert!(scan_dir(&dir, SourceFormat::Png).is_err());
}

#[test]
fn scan_of_empty_directory_returns_empty_set() {
    let dir = fresh_dir("scan_unit_empty");
    assert!(scan_dir(&dir, SourceFormat::Png).unwrap().is_empty());
}
