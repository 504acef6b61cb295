//! Static geographic index of Indian states.
//!
//! `match_region` is a first-match-wins substring scan in fixed
//! collection order. A region whose lowercased name happens to appear
//! inside unrelated text will still match (e.g. "Goalpara" contains
//! "goa"); that limitation is intentional and pinned by a test.

pub struct RegionRecord {
    pub name: &'static str,
    pub slug: &'static str,
    pub intro: &'static str,
}

pub const REGIONS: &[RegionRecord] = &[
    RegionRecord {
        name: "Andhra Pradesh",
        slug: "andhra-pradesh",
        intro: "Known for its rich Telugu culture, classical dance Kuchipudi, and the Tirupati Temple.",
    },
    RegionRecord {
        name: "Arunachal Pradesh",
        slug: "arunachal-pradesh",
        intro: "Land of the rising sun with diverse tribal cultures and Tawang Monastery.",
    },
    RegionRecord {
        name: "Assam",
        slug: "assam",
        intro: "Famous for Assam tea, Bihu festivals, and Kaziranga's one-horned rhinoceros.",
    },
    RegionRecord {
        name: "Bihar",
        slug: "bihar",
        intro: "Birthplace of Buddhism; home to Nalanda and the sacred Bodh Gaya.",
    },
    RegionRecord {
        name: "Chhattisgarh",
        slug: "chhattisgarh",
        intro: "Tribal heritage, Chitrakote Falls, and traditional Bastar art forms.",
    },
    RegionRecord {
        name: "Goa",
        slug: "goa",
        intro: "Beaches, Portuguese-era churches, and Indo-Portuguese cuisine.",
    },
    RegionRecord {
        name: "Gujarat",
        slug: "gujarat",
        intro: "Land of Gandhi, Navratri Garba, and the white sands of Kutch.",
    },
    RegionRecord {
        name: "Haryana",
        slug: "haryana",
        intro: "Agricultural strength, wrestling traditions, and Kurukshetra.",
    },
    RegionRecord {
        name: "Himachal Pradesh",
        slug: "himachal-pradesh",
        intro: "Snow-capped mountains, apple orchards, and serene temples.",
    },
    RegionRecord {
        name: "Jharkhand",
        slug: "jharkhand",
        intro: "Mineral-rich land, tribal culture, and Parasnath Hill.",
    },
    RegionRecord {
        name: "Karnataka",
        slug: "karnataka",
        intro: "Carnatic music, Mysore silk, and Hampi ruins.",
    },
    RegionRecord {
        name: "Kerala",
        slug: "kerala",
        intro: "God's Own Country with backwaters, Ayurveda, and Kathakali.",
    },
    RegionRecord {
        name: "Madhya Pradesh",
        slug: "madhya-pradesh",
        intro: "Khajuraho temples, Bandhavgarh tigers, and Gond art.",
    },
    RegionRecord {
        name: "Maharashtra",
        slug: "maharashtra",
        intro: "Maratha forts, Mumbai cinema, and Ajanta-Ellora caves.",
    },
    RegionRecord {
        name: "Manipur",
        slug: "manipur",
        intro: "Manipuri dance, Loktak Lake, and rich tribal traditions.",
    },
    RegionRecord {
        name: "Meghalaya",
        slug: "meghalaya",
        intro: "Living root bridges, caves, and Khasi culture.",
    },
    RegionRecord {
        name: "Mizoram",
        slug: "mizoram",
        intro: "Bamboo dance Cheraw, weaving, and hill vistas.",
    },
    RegionRecord {
        name: "Nagaland",
        slug: "nagaland",
        intro: "Hornbill Festival and Naga tribal customs.",
    },
    RegionRecord {
        name: "Odisha",
        slug: "odisha",
        intro: "Konark Sun Temple and Odissi dance.",
    },
    RegionRecord {
        name: "Punjab",
        slug: "punjab",
        intro: "Bhangra, Golden Temple, and vibrant farms.",
    },
    RegionRecord {
        name: "Rajasthan",
        slug: "rajasthan",
        intro: "Forts, palaces, and colorful attire of the Thar.",
    },
    RegionRecord {
        name: "Sikkim",
        slug: "sikkim",
        intro: "Buddhist monasteries and organic farming.",
    },
    RegionRecord {
        name: "Tamil Nadu",
        slug: "tamil-nadu",
        intro: "Dravidian temples, Bharatanatyam, and silk.",
    },
    RegionRecord {
        name: "Telangana",
        slug: "telangana",
        intro: "Hyderabadi biryani, Charminar, and tech hubs.",
    },
    RegionRecord {
        name: "Tripura",
        slug: "tripura",
        intro: "Bamboo crafts, palaces, and temples.",
    },
    RegionRecord {
        name: "Uttar Pradesh",
        slug: "uttar-pradesh",
        intro: "Ganga ghats, Taj Mahal, and Awadhi culture.",
    },
    RegionRecord {
        name: "Uttarakhand",
        slug: "uttarakhand",
        intro: "Char Dham, Garhwal, and Kumaon Himalayas.",
    },
    RegionRecord {
        name: "West Bengal",
        slug: "west-bengal",
        intro: "Durga Puja, literature, and Howrah Bridge.",
    },
];

/// First region whose lowercased name appears in the query.
pub fn match_region(query: &str) -> Option<&'static RegionRecord> {
    let normalized = query.to_lowercase();
    REGIONS
        .iter()
        .find(|region| normalized.contains(&region.name.to_lowercase()))
}

pub fn region_by_slug(slug: &str) -> Option<&'static RegionRecord> {
    REGIONS.iter().find(|region| region.slug == slug)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_names_and_slugs_are_unique() {
        let mut names: Vec<&str> = REGIONS.iter().map(|region| region.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), REGIONS.len());

        let mut slugs: Vec<&str> = REGIONS.iter().map(|region| region.slug).collect();
        slugs.sort_unstable();
        slugs.dedup();
        assert_eq!(slugs.len(), REGIONS.len());
    }

    #[test]
    fn query_mentioning_a_region_matches_it() {
        let region = match_region("tell me about kerala").expect("kerala should match");
        assert_eq!(region.name, "Kerala");
    }

    #[test]
    fn matching_is_case_insensitive() {
        let region = match_region("What should I see in TAMIL NADU?").expect("match");
        assert_eq!(region.name, "Tamil Nadu");
    }

    #[test]
    fn unrelated_query_matches_nothing() {
        assert!(match_region("how do I bake sourdough bread").is_none());
    }

    #[test]
    fn short_names_shadow_longer_words() {
        // Known limitation of the substring scan: "Goalpara" contains "goa".
        let region = match_region("visiting goalpara district").expect("substring match");
        assert_eq!(region.name, "Goa");
    }

    #[test]
    fn slug_lookup_finds_records() {
        let region = region_by_slug("west-bengal").expect("known slug");
        assert_eq!(region.name, "West Bengal");
        assert!(region_by_slug("atlantis").is_none());
    }
}
