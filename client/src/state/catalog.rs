//! Fixed in-memory asset collection with search and kind filtering.
//!
//! The collection is a seed, not a store: nothing registered on the Upload
//! page shows up here. Filtering preserves source order and is a pure function
//! of `(records, query, filter)`.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use time::OffsetDateTime;
use time::macros::datetime;

use crate::state::asset::AssetKind;

/// Delay between successive cards appearing in the list.
pub const REVEAL_STEP_MS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssetRecord {
    pub id: &'static str,
    pub kind: AssetKind,
    pub display_name: &'static str,
    pub content_hash: &'static str,
    pub registered_at: OffsetDateTime,
    pub preview_url: Option<&'static str>,
}

/// The six records shown on the assets page.
#[must_use]
pub fn seed_catalog() -> Vec<AssetRecord> {
    vec![
        AssetRecord {
            id: "1",
            kind: AssetKind::Image,
            display_name: "Logo_Design_Final.png",
            content_hash: "0x7c29fb9a6baf961564d28e2dde64c7d11be6c55b6c",
            registered_at: datetime!(2025-04-01 14:32:11 UTC),
            preview_url: Some(
                "https://images.unsplash.com/photo-1557180295-76eee20ae8aa?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
            ),
        },
        AssetRecord {
            id: "2",
            kind: AssetKind::Document,
            display_name: "Research_Paper_v2.pdf",
            content_hash: "0x3a24e9c0e4b01d70a649307fcebad98035c2fde9f8",
            registered_at: datetime!(2025-03-28 09:15:43 UTC),
            preview_url: None,
        },
        AssetRecord {
            id: "3",
            kind: AssetKind::Image,
            display_name: "Product_Photography.jpg",
            content_hash: "0x8e76c4d59cfed4ef1df168e2c5c11f8b87bc2da521",
            registered_at: datetime!(2025-03-25 16:08:22 UTC),
            preview_url: Some(
                "https://images.unsplash.com/photo-1618005198919-177e9dd3b6c0?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
            ),
        },
        AssetRecord {
            id: "4",
            kind: AssetKind::Audio,
            display_name: "Original_Composition_128bpm.mp3",
            content_hash: "0x4f1c6d8e2b3a9c7f0d5e8b1a2c3d4e5f6a7b8c9d0e",
            registered_at: datetime!(2025-03-22 11:42:17 UTC),
            preview_url: None,
        },
        AssetRecord {
            id: "5",
            kind: AssetKind::Image,
            display_name: "Project_Mockup_Final.png",
            content_hash: "0x1a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c",
            registered_at: datetime!(2025-03-20 15:27:36 UTC),
            preview_url: Some(
                "https://images.unsplash.com/photo-1579547621113-e4bb2a19bdd6?w=600&auto=format&fit=crop&q=60&ixlib=rb-4.0.3",
            ),
        },
        AssetRecord {
            id: "6",
            kind: AssetKind::Document,
            display_name: "Legal_Contract_Draft.pdf",
            content_hash: "0x9a8b7c6d5e4f3a2b1c0d9e8f7a6b5c4d3e2f1a0b9c",
            registered_at: datetime!(2025-03-15 10:12:49 UTC),
            preview_url: None,
        },
    ]
}

/// Kind filter from the assets page select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum KindFilter {
    #[default]
    All,
    Only(AssetKind),
}

impl KindFilter {
    /// Parse a select value; unknown values fall back to `All`.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        AssetKind::parse(raw).map_or(Self::All, Self::Only)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(kind) => kind.as_str(),
        }
    }

    #[must_use]
    pub fn admits(self, kind: AssetKind) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == kind,
        }
    }
}

/// Records matching `filter` whose name or hash contains `query`
/// (case-insensitive), in source order.
#[must_use]
pub fn filter_assets<'a>(records: &'a [AssetRecord], query: &str, filter: KindFilter) -> Vec<&'a AssetRecord> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|r| filter.admits(r.kind))
        .filter(|r| {
            needle.is_empty()
                || r.display_name.to_lowercase().contains(&needle)
                || r.content_hash.to_lowercase().contains(&needle)
        })
        .collect()
}

/// Body text for an empty result list.
#[must_use]
pub fn empty_state_message(query: &str, filter: KindFilter) -> &'static str {
    if query.is_empty() && filter == KindFilter::All {
        "You haven't protected any assets yet. Upload your first asset to get started."
    } else {
        "No assets match your search criteria. Try adjusting your filters."
    }
}
