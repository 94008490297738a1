use std::fs;
use std::path::PathBuf;

use labelsheet::rendering::text::embedded_font;
use labelsheet::{render_sheet, LabelRequest, SheetConfig};

fn golden_path(name: &str) -> PathBuf {
    let mut p = PathBuf::from("tests/goldens/expected");
    p.push(name);
    p
}

// A blank label leaves only the dashed grid, so the digest pins page size,
// box geometry and the dash pattern independently of glyph rasterization.
#[test]
fn golden_grid_matches_fixture() {
    let font = embedded_font().expect("bundled font");
    let sheet = render_sheet(&font, &LabelRequest::new("", 120), &SheetConfig::default())
        .expect("render");
    assert_eq!((sheet.width, sheet.height), (2551, 3301));
    let digest = sheet.digest();

    let expected_path = golden_path("grid_sheet.sha256");
    if std::env::var("UPDATE_GOLDENS").is_ok() {
        fs::create_dir_all("tests/goldens/expected").ok();
        fs::write(&expected_path, format!("{}\n", digest)).expect("write golden");
        println!("Updated golden: {:?}", expected_path);
        return;
    }

    let exp = fs::read_to_string(&expected_path)
        .unwrap_or_else(|e| panic!("missing golden {:?}: {}", expected_path, e));
    assert_eq!(digest, exp.trim(), "grid sheet no longer matches {:?}", expected_path);
}
