use super::*;

fn fresh_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from("target").join(name);
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_tga(path: &Path, width: u32, height: u32) {
    image::RgbaImage::from_pixel(width, height, image::Rgba([200, 100, 50, 255]))
        .save_with_format(path, image::ImageFormat::Tga)
        .unwrap();
}

#[test]
fn convert_writes_png_intermediates() {
    let dir = fresh_dir("targa_unit_ok");
    let scratch = dir.join("scratch");
    write_tga(&dir.join("t1.tga"), 4, 6);

    let (converted, skipped) = convert_all(&[dir.join("t1.tga")], &scratch).unwrap();

    assert!(skipped.is_empty());
    assert_eq!(converted, vec![scratch.join("t1.png")]);
    assert_eq!(image::image_dimensions(&converted[0]).unwrap(), (4, 6));
}

#[test]
fn unconvertible_file_is_isolated() {
    let dir = fresh_dir("targa_unit_isolated");
    let scratch = dir.join("scratch");
    write_tga(&dir.join("good.tga"), 2, 2);
    std::fs::write(dir.join("bad.tga"), b"garbage").unwrap();

    let sources = vec![dir.join("bad.tga"), dir.join("good.tga")];
    let (converted, skipped) = convert_all(&sources, &scratch).unwrap();

    assert_eq!(converted, vec![scratch.join("good.png")]);
    assert_eq!(skipped.len(), 1);
    assert!(skipped[0].path.ends_with("bad.tga"));
}

#[test]
fn scratch_directory_is_created_if_absent() {
    let dir = fresh_dir("targa_unit_scratch");
    let scratch = dir.join("deep").join("scratch");
    write_tga(&dir.join("t1.tga"), 2, 3);

    convert_all(&[dir.join("t1.tga")], &scratch).unwrap();
    assert!(scratch.is_dir());
    assert!(scratch.join("t1.png").is_file());
}
