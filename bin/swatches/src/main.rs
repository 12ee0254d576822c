//! This program renders the surfaces a color picker draws — the hue ring,
//! the saturation/value area for a chosen hue, and the channel slider
//! strips — to PNG files in samples/.

use huebox::{
    hue_from_position, hue_name_en, lerp, sv_from_position, Bounds, Component, Hsv, Point, Rgb,
    Rgba, Size,
};
use image::{Rgba as Px, RgbaImage};

const RING_SIZE: u32 = 360;
const RING_THICKNESS: Component = 48.0;
const AREA_SIZE: u32 = 256;
const STRIP_WIDTH: u32 = 360;
const STRIP_HEIGHT: u32 = 32;

const TRANSPARENT: Px<u8> = Px([0, 0, 0, 0]);

fn opaque(rgb: Rgb) -> Px<u8> {
    Px([rgb.r, rgb.g, rgb.b, 255])
}

fn write_hue_ring() {
    let center = Point::new(RING_SIZE as Component / 2.0, RING_SIZE as Component / 2.0);
    let outer = RING_SIZE as Component / 2.0;
    let inner = outer - RING_THICKNESS;

    let mut img = RgbaImage::new(RING_SIZE, RING_SIZE);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let position = Point::new(x as Component + 0.5, y as Component + 0.5);
        let radius = (position - center).length();

        *pixel = if radius >= inner && radius <= outer {
            let hue = hue_from_position(position, center);
            opaque(Hsv::new(hue, 100.0, 100.0).to_rgb())
        } else {
            TRANSPARENT
        };
    }

    img.save("samples/hue-ring.png")
        .expect("could not write samples/hue-ring.png");
}

fn write_sv_area(hue: Component) {
    let area = Bounds::new(
        Point::new(0.0, 0.0),
        Size::new(AREA_SIZE as Component, AREA_SIZE as Component),
    );

    let mut img = RgbaImage::new(AREA_SIZE, AREA_SIZE);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let position = Point::new(x as Component + 0.5, y as Component + 0.5);
        let (s, v) = sv_from_position(position, area);
        *pixel = opaque(Hsv::new(hue, s, v).to_rgb());
    }

    img.save("samples/sv-area.png")
        .expect("could not write samples/sv-area.png");
}

fn write_strip(name: &str, color_at: impl Fn(Component, u32, u32) -> Px<u8>) {
    let mut img = RgbaImage::new(STRIP_WIDTH, STRIP_HEIGHT);
    for (x, y, pixel) in img.enumerate_pixels_mut() {
        let t = x as Component / (STRIP_WIDTH - 1) as Component;
        *pixel = color_at(t, x, y);
    }

    let path = format!("samples/{name}.png");
    img.save(&path)
        .unwrap_or_else(|_| panic!("could not write {path}"));
}

fn main() {
    println!("Building samples");
    std::fs::create_dir_all("samples").expect("could not create samples/");

    write_hue_ring();

    // The area a picker shows for its default blue.
    write_sv_area(210.0);

    write_strip("hue-strip", |t, _, _| {
        opaque(Hsv::new(lerp(0.0, 360.0, t), 100.0, 100.0).to_rgb())
    });

    let chocolate = Rgb::from_bytes(210, 105, 30);

    write_strip("gamma-strip", move |t, _, _| {
        opaque(chocolate.with_gamma(lerp(0.2, 3.0, t)))
    });

    write_strip("alpha-strip", move |t, x, y| {
        let sample = Rgba::from_rgb(chocolate, t);
        // Composite over the usual checkerboard so the alpha ramp is
        // visible.
        let board = if (x / 8 + y / 8) % 2 == 0 { 192.0 } else { 255.0 };
        let over = |c: u8| lerp(board, c as Component, sample.a).round() as u8;
        Px([over(sample.r), over(sample.g), over(sample.b), 255])
    });

    for step in 0..12 {
        let hue = step as Component * 30.0;
        let swatch = Hsv::new(hue, 100.0, 100.0).to_rgb();
        println!(
            "{:>3}\u{b0} {:<12} {}  {}",
            hue,
            hue_name_en(hue),
            swatch.to_hex(),
            swatch.to_css()
        );
    }
}
