use egui::Color32;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb8 {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    pub fn to_color32(self) -> Color32 {
        Color32::from_rgb(self.r, self.g, self.b)
    }

    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb8 {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

impl From<image::Rgb<u8>> for Rgb8 {
    fn from(pixel: image::Rgb<u8>) -> Self {
        pixel.0.into()
    }
}

impl From<Rgb8> for image::Rgb<u8> {
    fn from(color: Rgb8) -> Self {
        image::Rgb(color.to_array())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_is_uppercase_and_padded() {
        assert_eq!(Rgb8::new(0, 10, 255).hex(), "#000AFF");
    }

    #[test]
    fn test_pixel_conversion() {
        let color: Rgb8 = image::Rgb([1, 2, 3]).into();
        assert_eq!(color, Rgb8::new(1, 2, 3));
        let pixel: image::Rgb<u8> = color.into();
        assert_eq!(pixel.0, [1, 2, 3]);
    }
}
