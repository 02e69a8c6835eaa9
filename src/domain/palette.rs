use std::collections::HashMap;

use rand::Rng;
use serde::{Deserialize, Serialize};

use super::error::{WorldError, WorldResult};

/// Packed 0xRRGGBB display color. Opaque to the physics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BlockColor(pub u32);

impl BlockColor {
    pub fn hex(&self) -> String {
        format!("#{:06x}", self.0 & 0x00FF_FFFF)
    }

    /// Parse `#rrggbb` (leading `#` optional)
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#').unwrap_or(s);
        if digits.len() != 6 || !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        u32::from_str_radix(digits, 16).ok().map(BlockColor)
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PaletteEntry {
    pub key: String,
    pub color: BlockColor,
}

/// Named block colors. Unknown names resolve to the fallback entry.
#[derive(Clone, Debug)]
pub struct Palette {
    entries: Vec<PaletteEntry>,
    key_to_index: HashMap<String, usize>,
    fallback: usize,
}

#[derive(Deserialize)]
struct PaletteRoot {
    fallback: String,
    entries: Vec<PaletteEntryJson>,
}

#[derive(Deserialize)]
struct PaletteEntryJson {
    key: String,
    color: String,
}

#[derive(Serialize)]
struct PaletteManifest<'a> {
    format_version: u32,
    fallback: &'a str,
    entries: Vec<PaletteManifestEntry<'a>>,
}

#[derive(Serialize)]
struct PaletteManifestEntry<'a> {
    key: &'a str,
    color: String,
}

const BUILTIN: [(&str, u32); 9] = [
    ("blue", 0x3b82f6),
    ("red", 0xef4444),
    ("green", 0x22c55e),
    ("yellow", 0xeab308),
    ("purple", 0xa855f7),
    ("orange", 0xf97316),
    ("pink", 0xec4899),
    ("cyan", 0x06b6d4),
    ("white", 0xf8fafc),
];

impl Palette {
    pub fn builtin() -> Self {
        let entries = BUILTIN
            .iter()
            .map(|(key, rgb)| PaletteEntry { key: key.to_string(), color: BlockColor(*rgb) })
            .collect();
        Self::from_entries(entries, 0)
    }

    pub fn from_json(json: &str) -> WorldResult<Self> {
        let root: PaletteRoot =
            serde_json::from_str(json).map_err(|e| WorldError::InvalidPalette(e.to_string()))?;

        if root.entries.is_empty() {
            return Err(WorldError::InvalidPalette("palette has no entries".into()));
        }

        let mut entries = Vec::with_capacity(root.entries.len());
        for e in root.entries.into_iter() {
            let color = BlockColor::parse_hex(&e.color).ok_or_else(|| {
                WorldError::InvalidPalette(format!("entry {} has bad color {}", e.key, e.color))
            })?;
            entries.push(PaletteEntry { key: normalize_key(&e.key), color });
        }

        let fallback_key = normalize_key(&root.fallback);
        let fallback = entries
            .iter()
            .position(|e| e.key == fallback_key)
            .ok_or_else(|| WorldError::InvalidPalette(format!("fallback {} not in entries", root.fallback)))?;

        Ok(Self::from_entries(entries, fallback))
    }

    fn from_entries(entries: Vec<PaletteEntry>, fallback: usize) -> Self {
        let mut key_to_index = HashMap::with_capacity(entries.len());
        for (idx, e) in entries.iter().enumerate() {
            key_to_index.entry(e.key.clone()).or_insert(idx);
        }
        Self { entries, key_to_index, fallback }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn fallback(&self) -> &PaletteEntry {
        &self.entries[self.fallback]
    }

    pub fn get(&self, key: &str) -> Option<BlockColor> {
        self.key_to_index
            .get(&normalize_key(key))
            .map(|&idx| self.entries[idx].color)
    }

    /// Resolve a spoken/typed color. Named entries win, then `#rrggbb`,
    /// then the fallback entry.
    pub fn resolve(&self, key: &str) -> BlockColor {
        if let Some(color) = self.get(key) {
            return color;
        }
        if let Some(color) = BlockColor::parse_hex(key.trim()) {
            return color;
        }
        log::warn!("unknown color {:?}, using {}", key, self.fallback().key);
        self.fallback().color
    }

    pub fn random<R: Rng + ?Sized>(&self, rng: &mut R) -> &PaletteEntry {
        &self.entries[rng.gen_range(0..self.entries.len())]
    }

    pub fn manifest_json(&self) -> String {
        let out = PaletteManifest {
            format_version: 1,
            fallback: &self.fallback().key,
            entries: self
                .entries
                .iter()
                .map(|e| PaletteManifestEntry { key: &e.key, color: e.color.hex() })
                .collect(),
        };
        serde_json::to_string(&out).unwrap_or_else(|_| "{}".to_string())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::builtin()
    }
}

fn normalize_key(key: &str) -> String {
    key.trim().to_ascii_lowercase()
}
