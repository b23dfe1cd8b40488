use rtw_io::color::to_rgb8;
use rtw_io::{read, write, Format, IoError, RgbImage};
use rtw_math::Color;
use tempfile::tempdir;

fn ramp(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        to_rgb8(Color::new(
            x as f64 / (width - 1) as f64,
            y as f64 / (height - 1) as f64,
            0.5,
        ))
    })
    .expect("ramp")
}

#[test]
fn write_then_read_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("ramp.ppm");
    let image = ramp(17, 9);

    write(&path, &image).expect("write ppm");
    assert_eq!(Format::detect(&path).unwrap(), Format::Ppm);

    let loaded = read(&path).expect("read ppm");
    assert_eq!(loaded, image);
}

#[test]
fn written_file_layout() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("layout.ppm");
    write(&path, &ramp(3, 2)).unwrap();

    let text = std::fs::read_to_string(&path).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(&lines[..3], &["P3", "3 2", "255"]);
    assert_eq!(lines.len(), 3 + 6);
    assert_eq!(lines[3], "0 0 127");
    assert_eq!(lines[8], "255 255 127");
    assert!(text.ends_with('\n'));
}

#[test]
fn write_rejects_unknown_extension() {
    let dir = tempdir().unwrap();
    let err = write(dir.path().join("out.png"), &ramp(2, 2)).unwrap_err();
    assert!(matches!(err, IoError::UnsupportedFormat(ref e) if e == "png"));
}

#[test]
fn write_into_missing_directory_reports_io_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("no_such_dir").join("out.ppm");
    let err = write(&path, &ramp(2, 2)).unwrap_err();
    assert!(err.is_io_error());
}

#[test]
fn read_missing_file_reports_io_error() {
    let dir = tempdir().unwrap();
    assert!(read(dir.path().join("absent.ppm")).unwrap_err().is_io_error());
}

#[test]
fn read_binary_ppm_is_unsupported() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bin.ppm");
    std::fs::write(&path, b"P6\n1 1\n255\n\x00\x00\x00").unwrap();
    assert!(matches!(read(&path), Err(IoError::UnsupportedFormat(_))));
}
