use std::collections::HashMap;

use compact_str::CompactString;

/// The six fills the movie treemap has always used, in assignment order.
pub const DEFAULT_PALETTE: [&str; 6] = ["#FF5733", "#33FF57", "#5733FF", "#FF33D1", "#33D1FF", "#D1FF33"];

/// Our own color representation for easy manipulation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppColor {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl AppColor {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Parse `#RRGGBB` (leading `#` optional).
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.is_ascii() {
            return None;
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).ok();
        Some(Self::new(
            channel(0)? as f32 / 255.0,
            channel(2)? as f32 / 255.0,
            channel(4)? as f32 / 255.0,
        ))
    }

    /// `#RRGGBB`, alpha dropped.
    pub fn to_hex(self) -> String {
        let byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
    }

    /// Create a lighter version (hover highlight).
    pub fn lighten(self, amount: f32) -> Self {
        Self {
            r: (self.r + amount).min(1.0),
            g: (self.g + amount).min(1.0),
            b: (self.b + amount).min(1.0),
            a: self.a,
        }
    }
}

/// Fill for categories the palette was never told about.
pub const FALLBACK_COLOR: AppColor = AppColor::new(0.50, 0.50, 0.55);

/// Explicit category → color map, built once from the ordered category list.
/// The i-th distinct category gets `colors[i % colors.len()]`, so the same
/// dataset always yields the same colors.
#[derive(Debug, Clone)]
pub struct CategoryPalette {
    order: Vec<CompactString>,
    colors: HashMap<CompactString, AppColor>,
}

impl CategoryPalette {
    pub fn new(categories: &[CompactString], colors: &[AppColor]) -> Self {
        let mut order: Vec<CompactString> = Vec::with_capacity(categories.len());
        let mut map = HashMap::with_capacity(categories.len());
        for category in categories {
            if map.contains_key(category) {
                continue;
            }
            let color = if colors.is_empty() {
                FALLBACK_COLOR
            } else {
                colors[order.len() % colors.len()]
            };
            map.insert(category.clone(), color);
            order.push(category.clone());
        }
        Self { order, colors: map }
    }

    /// Palette over the default six colors.
    pub fn with_default_colors(categories: &[CompactString]) -> Self {
        Self::new(categories, &default_colors())
    }

    pub fn color(&self, category: &str) -> AppColor {
        self.colors.get(category).copied().unwrap_or(FALLBACK_COLOR)
    }

    /// Categories in assignment order.
    pub fn categories(&self) -> &[CompactString] {
        &self.order
    }
}

pub fn default_colors() -> Vec<AppColor> {
    DEFAULT_PALETTE.iter().filter_map(|hex| AppColor::from_hex(hex)).collect()
}
