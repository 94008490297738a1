use image::Rgba;
use labelsheet::rendering::layout::box_grid;
use labelsheet::rendering::text::embedded_font;
use labelsheet::{render_sheet, LabelRequest, SheetConfig};

const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

#[test]
fn full_page_has_fixed_size_and_closed_bottom_row() {
    let cfg = SheetConfig::default();
    let font = embedded_font().unwrap();
    let sheet = render_sheet(&font, &LabelRequest::new("Ox", 120), &cfg).unwrap();

    assert_eq!((sheet.width, sheet.height), (2551, 3301));
    assert_eq!(sheet.image.dimensions(), (2551, 3301));

    let boxes = box_grid(&cfg);
    let first = boxes[0].rect;
    let last = boxes[22].rect;

    // top edge of the first row starts with a dash at its left corner
    assert_eq!(*sheet.image.get_pixel(first.x + 20, first.y), BLACK);
    // the closing edge is stroked from the right corner leftwards
    assert_eq!(*sheet.image.get_pixel(last.right() - 20, last.bottom()), BLACK);
    // and nothing is drawn below it
    let below = last.bottom() + 30;
    assert!((last.x..last.right()).all(|x| sheet.image.get_pixel(x, below)[0] == 255));
}
