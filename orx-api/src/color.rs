#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde-serialization", derive(serde::Deserialize, serde::Serialize))]
pub struct ColorRGBa {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl ColorRGBa {
    pub const BLACK: ColorRGBa = ColorRGBa::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: ColorRGBa = ColorRGBa::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: ColorRGBa = ColorRGBa::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: ColorRGBa = ColorRGBa::new(0.0, 1.0, 0.0, 1.0);
    pub const BLUE: ColorRGBa = ColorRGBa::new(0.0, 0.0, 1.0, 1.0);
    pub const TRANSPARENT: ColorRGBa = ColorRGBa::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> ColorRGBa {
        ColorRGBa { r, g, b, a }
    }
}
