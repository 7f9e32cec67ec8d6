use serde::{Deserialize, Serialize};

/// Court-ordered vs. bank/private sale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionType {
    Judicial,
    Extrajudicial,
}

impl AuctionType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionType::Judicial => "judicial",
            AuctionType::Extrajudicial => "extrajudicial",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "judicial" => Some(AuctionType::Judicial),
            "extrajudicial" => Some(AuctionType::Extrajudicial),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuctionType::Judicial => "Judicial",
            AuctionType::Extrajudicial => "Extrajudicial",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuctionStatus {
    Active,
    Ended,
    Cancelled,
}

impl AuctionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuctionStatus::Active => "active",
            AuctionStatus::Ended => "ended",
            AuctionStatus::Cancelled => "cancelled",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "active" => Some(AuctionStatus::Active),
            "ended" => Some(AuctionStatus::Ended),
            "cancelled" => Some(AuctionStatus::Cancelled),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AuctionStatus::Active => "Active",
            AuctionStatus::Ended => "Ended",
            AuctionStatus::Cancelled => "Cancelled",
        }
    }
}

/// One auctionable property record. Owned and mutated by the store;
/// the app only reads it and flips `is_favorite`.
///
/// Timestamps are unix seconds, matching the rest of the schema.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Auction {
    pub id: i64,
    pub title: String,
    pub description: String,
    #[serde(rename = "type")]
    pub auction_type: AuctionType,
    pub status: AuctionStatus,

    pub starting_price: f64,
    pub current_price: f64,
    pub first_auction_date: i64,
    pub second_auction_date: i64,
    pub end_date: i64,

    pub location: String,
    pub category: String,
    pub address: Option<String>,
    pub image_url: Option<String>,

    pub area: Option<f64>,
    pub bedrooms: Option<i64>,
    pub bathrooms: Option<i64>,
    pub parking_spots: Option<i64>,

    pub is_favorite: bool,
    pub created_at: i64,
}

impl Auction {
    /// Discount badge is only shown for active listings whose second-round
    /// price dropped below the first.
    pub fn has_discount(&self) -> bool {
        self.status == AuctionStatus::Active && self.current_price < self.starting_price
    }
}
