use ecolor::Color32;

pub const BACKGROUND: Color32 = Color32::from_rgb(0x1b, 0x1e, 0x22);
pub const SPOKE: Color32 = Color32::from_rgb(0x2a, 0x2f, 0x35);
pub const GREEN: Color32 = Color32::from_rgb(0x2f, 0x9e, 0x68);
pub const BLUE: Color32 = Color32::from_rgb(0x2b, 0x86, 0xd3);
pub const RED: Color32 = Color32::from_rgb(0xd6, 0x3a, 0x3a);
pub const YELLOW: Color32 = Color32::from_rgb(0xff, 0xcc, 0x33);
pub const IVORY: Color32 = Color32::from_rgb(0xff, 0xf7, 0xe6);
pub const DISC: Color32 = Color32::from_rgb(0xf1, 0xed, 0xdc);
pub const INK: Color32 = Color32::from_rgb(0x22, 0x22, 0x22);

pub fn translucent(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}
