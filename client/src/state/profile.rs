//! Local profile record with an edit/save/cancel draft, plus the static
//! activity log shown beside it.
//!
//! DESIGN
//! ======
//! The committed record and the draft are separate copies. Editing touches
//! only the draft; Save replaces the committed record, Cancel throws the draft
//! away. Nothing is persisted across page loads.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use time::Date;

/// Shown when no wallet account is connected.
pub const ZERO_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileRecord {
    pub display_name: String,
    pub email: String,
    pub member_since: Date,
    pub wallet_address: String,
    pub owned_asset_count: u32,
}

impl ProfileRecord {
    /// Fresh, unnamed record. `account` is the connected wallet, if any.
    #[must_use]
    pub fn new(member_since: Date, account: Option<&str>) -> Self {
        Self {
            display_name: String::new(),
            email: String::new(),
            member_since,
            wallet_address: account.unwrap_or(ZERO_ADDRESS).to_owned(),
            owned_asset_count: 0,
        }
    }

    #[must_use]
    pub fn name_or_placeholder(&self) -> &str {
        if self.display_name.is_empty() { "Unnamed Creator" } else { &self.display_name }
    }

    #[must_use]
    pub fn email_or_placeholder(&self) -> &str {
        if self.email.is_empty() { "No email added" } else { &self.email }
    }

    /// Uppercased first character of the name, or `U`.
    #[must_use]
    pub fn avatar_initial(&self) -> String {
        self.display_name
            .chars()
            .next()
            .map_or_else(|| "U".to_owned(), |c| c.to_uppercase().collect())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProfileState {
    committed: ProfileRecord,
    draft: ProfileRecord,
    editing: bool,
}

impl ProfileState {
    #[must_use]
    pub fn new(record: ProfileRecord) -> Self {
        Self { draft: record.clone(), committed: record, editing: false }
    }

    #[must_use]
    pub fn committed(&self) -> &ProfileRecord {
        &self.committed
    }

    #[must_use]
    pub fn draft(&self) -> &ProfileRecord {
        &self.draft
    }

    #[must_use]
    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn begin_edit(&mut self) {
        self.draft = self.committed.clone();
        self.editing = true;
    }

    pub fn save(&mut self) {
        if self.editing {
            self.committed = self.draft.clone();
            self.editing = false;
        }
    }

    pub fn cancel(&mut self) {
        self.draft = self.committed.clone();
        self.editing = false;
    }

    /// The single Edit/Save button: saves while editing, otherwise starts.
    pub fn toggle(&mut self) {
        if self.editing {
            self.save();
        } else {
            self.begin_edit();
        }
    }

    /// Draft edits are ignored outside edit mode.
    pub fn set_draft_name(&mut self, value: String) {
        if self.editing {
            self.draft.display_name = value;
        }
    }

    pub fn set_draft_email(&mut self, value: String) {
        if self.editing {
            self.draft.email = value;
        }
    }

    /// Follow the connected wallet. Applies to both copies since the address
    /// is never user-editable.
    pub fn sync_wallet(&mut self, account: Option<&str>) {
        let address = account.unwrap_or(ZERO_ADDRESS).to_owned();
        self.committed.wallet_address.clone_from(&address);
        self.draft.wallet_address = address;
    }
}

// =============================================================
// Activity log
// =============================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityKind {
    Upload,
    Verify,
    Transfer,
}

impl ActivityKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Upload => "Upload",
            Self::Verify => "Verify",
            Self::Transfer => "Transfer",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ActivityStatus {
    Success,
    Pending,
    Failed,
}

impl ActivityStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Success => "Successful",
            Self::Pending => "Pending",
            Self::Failed => "Failed",
        }
    }

    /// BEM modifier for the status badge.
    #[must_use]
    pub fn css_modifier(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Pending => "pending",
            Self::Failed => "failed",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActivityEntry {
    pub id: u32,
    pub kind: ActivityKind,
    pub asset: &'static str,
    pub occurred_at: &'static str,
    /// Only set for transfers.
    pub recipient: Option<&'static str>,
    pub status: ActivityStatus,
}

#[must_use]
pub fn seed_activity() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry {
            id: 1,
            kind: ActivityKind::Upload,
            asset: "Logo Design.png",
            occurred_at: "15 Apr 2025, 14:30",
            recipient: None,
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            id: 2,
            kind: ActivityKind::Verify,
            asset: "Whitepaper.pdf",
            occurred_at: "12 Apr 2025, 09:15",
            recipient: None,
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            id: 3,
            kind: ActivityKind::Transfer,
            asset: "Music Track",
            occurred_at: "08 Apr 2025, 16:45",
            recipient: Some("0x71C...93bA"),
            status: ActivityStatus::Success,
        },
        ActivityEntry {
            id: 4,
            kind: ActivityKind::Upload,
            asset: "Artwork.jpg",
            occurred_at: "02 Apr 2025, 11:20",
            recipient: None,
            status: ActivityStatus::Success,
        },
    ]
}
