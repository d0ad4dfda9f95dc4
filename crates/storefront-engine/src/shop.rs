//! Shop Info
//!
//! Static store content shown around the catalog: hero, about, contacts, footer.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShopInfo {
    pub name: String,
    pub tagline: String,
    pub currency_symbol: String,
    pub hero: HeroInfo,
    pub about: AboutInfo,
    pub contacts: Vec<ContactEntry>,
    #[serde(default)]
    pub socials: Vec<SocialLink>,
    pub copyright: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroInfo {
    pub title: String,
    pub subtitle: String,
    pub call_to_action: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutInfo {
    /// Markdown
    pub body: String,
    #[serde(default)]
    pub features: Vec<FeatureCard>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureCard {
    pub icon: String,
    pub title: String,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactEntry {
    pub icon: String,
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub icon: String,
    pub label: String,
}
