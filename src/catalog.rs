//! Hand-authored page data for each product category.
//!
//! The luggage page ships with a static product list; the washing-machines
//! page starts empty and fetches its products from the recommendation
//! endpoint when loaded.

use serde::{Deserialize, Serialize};

use crate::models::Product;

/// A buying-guide card shown above the product grid
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KeyFactor {
    pub title: String,
    pub description: String,
    pub icon: String,
    pub hover_text: String,
}

/// One entry of the facts banner
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InterestingFact {
    pub text: String,
    pub image: String,
}

/// Choices offered by the filter sidebar
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FilterOptions {
    pub brands: Vec<String>,
    pub features: Vec<String>,
}

/// Where a page's authoritative product list comes from
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    /// Products ship with the page definition
    Static,
    /// Products are fetched from the recommendation endpoint
    Remote { product_type: String },
}

/// Everything needed to compose one category page
#[derive(Debug, Clone)]
pub struct PageSpec {
    pub title: String,
    pub key_factors: Vec<KeyFactor>,
    pub products: Vec<Product>,
    pub interesting_facts: Vec<InterestingFact>,
    pub filter_options: FilterOptions,
    pub data_source: DataSource,
}

fn factor(title: &str, description: &str, icon: &str, hover_text: &str) -> KeyFactor {
    KeyFactor {
        title: title.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        hover_text: hover_text.to_string(),
    }
}

fn fact(text: &str, image: &str) -> InterestingFact {
    InterestingFact {
        text: text.to_string(),
        image: image.to_string(),
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn product(id: u32, name: &str, brand: &str, price: f64, rating: f64, features: &[&str], image: &str) -> Product {
    Product {
        id,
        name: name.to_string(),
        brand: brand.to_string(),
        price,
        rating,
        features: strings(features),
        image: Some(image.to_string()),
    }
}

const UNSPLASH_SUFFIX: &str =
    "?ixlib=rb-4.0.3&auto=format&fit=crop&w=300&h=200&q=80";

fn unsplash(photo_id: &str) -> String {
    format!("https://images.unsplash.com/{photo_id}{UNSPLASH_SUFFIX}")
}

/// The luggage category page, backed by a static product list
pub fn luggage() -> PageSpec {
    let products = vec![
        product(
            1,
            "TravelPro Maxlite 5",
            "TravelPro",
            159.0,
            4.5,
            &["Lightweight", "Expandable", "Spinner wheels"],
            &unsplash("photo-1581553680321-4fffae59fccd"),
        ),
        product(
            2,
            "Samsonite Omni PC",
            "Samsonite",
            129.0,
            4.3,
            &["Hardside", "TSA lock", "Scratch-resistant"],
            &unsplash("photo-1565026057447-bc90a3dceb87"),
        ),
        product(
            3,
            "Delsey Paris Helium Aero",
            "Delsey",
            149.0,
            4.4,
            &["Double spinner wheels", "Expandable", "Glossy finish"],
            &unsplash("photo-1550089479-fe0e48e7d788"),
        ),
        product(
            4,
            "American Tourister Moonlight",
            "American Tourister",
            89.0,
            4.2,
            &["Affordable", "Colorful designs", "Expandable"],
            &unsplash("photo-1572584642822-6f8de0243c93"),
        ),
        product(
            5,
            "Briggs & Riley Baseline",
            "Briggs & Riley",
            299.0,
            4.7,
            &["Lifetime warranty", "Expandable", "High-quality build"],
            &unsplash("photo-1596394516093-501ba68a0ba6"),
        ),
    ];

    PageSpec {
        title: "Luggage Recommendations".to_string(),
        key_factors: vec![
            factor(
                "Size",
                "Choose based on your travel needs",
                "Scale",
                "Consider carry-on restrictions and trip duration when selecting size.",
            ),
            factor(
                "Durability",
                "Look for sturdy materials",
                "Shield",
                "Durable luggage can withstand the rigors of travel and last longer.",
            ),
            factor(
                "Mobility",
                "Consider wheel types",
                "Move",
                "Spinner wheels offer better maneuverability, while two-wheel designs are more stable on uneven surfaces.",
            ),
            factor(
                "Security",
                "Check for locking mechanisms",
                "Lock",
                "TSA-approved locks provide security while allowing necessary inspections.",
            ),
        ],
        products,
        interesting_facts: vec![
            fact(
                "The first wheeled suitcase was invented in 1970 by Bernard Sadow.",
                &unsplash("photo-1581553680321-4fffae59fccd"),
            ),
            fact(
                "The global luggage market is expected to reach $79 billion by 2027.",
                &unsplash("photo-1565026057447-bc90a3dceb87"),
            ),
            fact(
                "The heaviest piece of luggage allowed on most airlines is 32 kg (70 lbs).",
                &unsplash("photo-1550089479-fe0e48e7d788"),
            ),
        ],
        filter_options: FilterOptions {
            brands: strings(&[
                "TravelPro",
                "Samsonite",
                "Delsey",
                "American Tourister",
                "Briggs & Riley",
            ]),
            features: strings(&[
                "Expandable",
                "TSA Lock",
                "Spinner Wheels",
                "Hardside",
                "Lightweight",
            ]),
        },
        data_source: DataSource::Static,
    }
}

/// The washing-machines category page, which fetches its products
pub fn washing_machines() -> PageSpec {
    PageSpec {
        title: "Washing Machine Recommendations".to_string(),
        key_factors: vec![
            factor(
                "Capacity",
                "Choose based on your laundry needs",
                "Scale",
                "Consider the size of your typical laundry loads when selecting capacity.",
            ),
            factor(
                "Energy Efficiency",
                "Look for energy-saving features",
                "Zap",
                "Energy-efficient models can help reduce your electricity bills and environmental impact.",
            ),
            factor(
                "Wash Cycles",
                "Various cycles for different fabrics",
                "Repeat",
                "More wash cycles provide greater flexibility for handling different types of clothing.",
            ),
            factor(
                "Noise Level",
                "Consider quieter models",
                "Volume2",
                "Lower noise levels are important if your laundry area is near living spaces.",
            ),
        ],
        products: Vec::new(),
        interesting_facts: vec![
            fact(
                "The first electric-powered washing machine was invented in 1908.",
                &unsplash("photo-1626806787461-102c1bfaaea1"),
            ),
            fact(
                "An average washing machine uses about 41 gallons of water per load.",
                &unsplash("photo-1582735689369-4fe89db7114c"),
            ),
            fact(
                "Some modern washing machines can be controlled via smartphone apps.",
                &unsplash("photo-1610557892470-55d9e80c0bce"),
            ),
        ],
        filter_options: FilterOptions {
            brands: strings(&["Samsung", "LG", "Whirlpool", "Maytag", "GE"]),
            features: strings(&[
                "Steam Clean",
                "Smart Connectivity",
                "Energy Star Certified",
                "Large Capacity",
                "Quiet Operation",
            ]),
        },
        data_source: DataSource::Remote {
            product_type: "washing-machines".to_string(),
        },
    }
}
