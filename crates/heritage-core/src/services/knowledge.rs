//! Curated cultural-heritage fact dataset and its fuzzy lookup.
//!
//! Records are scanned in insertion order through three matching stages:
//! exact question equality, keyword overlap, then partial containment.
//! Absence of a match is a normal `None` result, never an error.

use rand::seq::SliceRandom;
use rand::thread_rng;

pub struct FactRecord {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
    pub keywords: &'static [&'static str],
}

pub const FACTS: &[FactRecord] = &[
    // Traditional Arts
    FactRecord {
        question: "What is Kathakali?",
        answer: "Kathakali is a classical dance-drama from Kerala, known for its elaborate costumes, makeup, and expressive movements. It combines dance, music, and acting to tell stories from Hindu epics like the Mahabharata and Ramayana.",
        category: "Traditional Arts",
        keywords: &["kathakali", "kerala", "dance", "drama", "classical"],
    },
    FactRecord {
        question: "What is Bharatanatyam?",
        answer: "Bharatanatyam is one of the oldest classical dance forms of India, originating from Tamil Nadu. It's characterized by precise footwork, expressive hand gestures (mudras), and intricate facial expressions.",
        category: "Traditional Arts",
        keywords: &["bharatanatyam", "tamil nadu", "classical dance", "mudras"],
    },
    FactRecord {
        question: "What is Madhubani painting?",
        answer: "Madhubani painting is a traditional folk art from Bihar, characterized by geometric patterns, bright colors, and depictions of nature, mythology, and daily life. It's typically done on walls, floors, or paper.",
        category: "Traditional Arts",
        keywords: &["madhubani", "bihar", "painting", "folk art"],
    },
    FactRecord {
        question: "Which state is famous for Madhubani art?",
        answer: "Bihar is famous for Madhubani art. This traditional folk painting originated in the Mithila region of Bihar and is known for its intricate geometric patterns and vibrant colors.",
        category: "Traditional Arts",
        keywords: &["madhubani", "bihar", "mithila", "painting", "folk art"],
    },
    // Crafts & Handicrafts
    FactRecord {
        question: "Which Indian state is famous for bamboo crafts?",
        answer: "Assam is famous for bamboo crafts. The state produces a wide variety of bamboo products including furniture, baskets, mats, and decorative items. Bamboo is an integral part of Assamese culture and daily life.",
        category: "Crafts & Handicrafts",
        keywords: &["bamboo", "assam", "crafts", "furniture", "baskets"],
    },
    FactRecord {
        question: "What are the traditional crafts of Rajasthan?",
        answer: "Rajasthan is famous for its traditional crafts including blue pottery, block printing, tie-dye (bandhani), miniature paintings, marble work, and jewelry. Each region has its own specialty.",
        category: "Crafts & Handicrafts",
        keywords: &["rajasthan", "blue pottery", "block printing", "bandhani", "miniature paintings"],
    },
    FactRecord {
        question: "What are the traditional crafts of Kashmir?",
        answer: "Kashmir is renowned for its traditional crafts including Pashmina shawls, Kashmiri carpets, papier-mâché, wood carving, and silver jewelry. These crafts reflect the rich cultural heritage of the region.",
        category: "Crafts & Handicrafts",
        keywords: &["kashmir", "pashmina", "carpets", "papier-mâché", "wood carving"],
    },
    // Historical Monuments
    FactRecord {
        question: "What is the story of Konark Sun Temple?",
        answer: "The Konark Sun Temple in Odisha was built in the 13th century by King Narasimhadeva I. It's designed as a massive chariot with 12 pairs of wheels pulled by seven horses, dedicated to the Sun God Surya. The temple is a UNESCO World Heritage Site.",
        category: "Historical Monuments",
        keywords: &["konark", "sun temple", "odisha", "surya", "unesco", "chariot"],
    },
    FactRecord {
        question: "Tell me about the Taj Mahal",
        answer: "The Taj Mahal is a white marble mausoleum in Agra, built by Mughal Emperor Shah Jahan in memory of his wife Mumtaz Mahal. Completed in 1653, it's considered one of the Seven Wonders of the World and a UNESCO World Heritage Site.",
        category: "Historical Monuments",
        keywords: &["taj mahal", "agra", "shah jahan", "mumtaz mahal", "marble", "unesco"],
    },
    FactRecord {
        question: "Tell me about Ajanta Caves",
        answer: "The Ajanta Caves in Maharashtra are a series of 30 Buddhist cave monuments dating from the 2nd century BCE to about 480 CE. They contain magnificent paintings and sculptures depicting the life of Buddha and Jataka tales.",
        category: "Historical Monuments",
        keywords: &["ajanta", "caves", "maharashtra", "buddhist", "paintings", "sculptures"],
    },
    FactRecord {
        question: "Explain the architecture of Hampi",
        answer: "Hampi in Karnataka was the capital of the Vijayanagara Empire. Its architecture features massive stone temples, intricate carvings, and unique structures like the Vitthala Temple with its musical pillars and the iconic stone chariot.",
        category: "Historical Monuments",
        keywords: &["hampi", "karnataka", "vijayanagara", "vitthala temple", "musical pillars", "stone chariot"],
    },
    // Festivals
    FactRecord {
        question: "What is the significance of Diwali?",
        answer: "Diwali, the Festival of Lights, celebrates the victory of light over darkness and good over evil. It commemorates Lord Rama's return to Ayodhya after defeating Ravana. People light diyas, exchange sweets, and celebrate with fireworks.",
        category: "Festivals",
        keywords: &["diwali", "festival of lights", "rama", "ayodhya", "ravana", "diyas"],
    },
    FactRecord {
        question: "Tell me about Holi festival",
        answer: "Holi is the Festival of Colors, celebrating the arrival of spring and the victory of good over evil. It commemorates the story of Prahlada and Holika. People throw colored powders, dance, and celebrate with music and sweets.",
        category: "Festivals",
        keywords: &["holi", "festival of colors", "spring", "prahlada", "holika", "colors"],
    },
    FactRecord {
        question: "What is Navratri about?",
        answer: "Navratri is a nine-night festival dedicated to the worship of Goddess Durga in her various forms. It celebrates the victory of good over evil and includes fasting, dancing (especially Garba and Dandiya), and elaborate rituals.",
        category: "Festivals",
        keywords: &["navratri", "durga", "nine nights", "garba", "dandiya", "goddess"],
    },
    // Regional Cuisines
    FactRecord {
        question: "What are the famous dishes of Kerala?",
        answer: "Kerala is famous for its coconut-based cuisine including appam, puttu, fish curry, beef fry, and traditional sadya (feast). The state's cuisine is known for its use of coconut, curry leaves, and spices.",
        category: "Regional Cuisines",
        keywords: &["kerala", "coconut", "appam", "puttu", "fish curry", "sadya"],
    },
    FactRecord {
        question: "Tell me about Rajasthani cuisine",
        answer: "Rajasthani cuisine is known for its rich, spicy flavors and includes dishes like dal baati churma, gatte ki sabzi, ker sangri, and various sweets like ghewar and malpua. It's designed to withstand the desert climate.",
        category: "Regional Cuisines",
        keywords: &["rajasthan", "dal baati churma", "gatte", "ker sangri", "ghewar", "desert"],
    },
    FactRecord {
        question: "What is the specialty of Bengali food?",
        answer: "Bengali cuisine is famous for its fish dishes, especially hilsa fish, sweets like rasgulla and sandesh, and rice-based meals. The cuisine emphasizes the balance of sweet, sour, and spicy flavors.",
        category: "Regional Cuisines",
        keywords: &["bengali", "fish", "hilsa", "rasgulla", "sandesh", "rice"],
    },
    // Traditional Attire
    FactRecord {
        question: "What is the traditional attire of Rajasthan?",
        answer: "Rajasthan's traditional attire includes colorful ghagra-choli for women with intricate mirror work and embroidery, and dhoti-kurta or angarkha for men. Turbans (pagri) are an important part of men's traditional dress.",
        category: "Traditional Attire",
        keywords: &["rajasthan", "ghagra-choli", "dhoti-kurta", "angarkha", "turban", "pagri"],
    },
    FactRecord {
        question: "What is the traditional dress of Kerala?",
        answer: "Kerala's traditional attire includes the white mundu (dhoti) and shirt for men, and the white saree with golden border (kasavu saree) for women. These are commonly worn during festivals and special occasions.",
        category: "Traditional Attire",
        keywords: &["kerala", "mundu", "kasavu saree", "white", "golden border", "traditional"],
    },
    // States and Geography
    FactRecord {
        question: "Which state is Kerala in?",
        answer: "Kerala itself is a state in South India, located on the Malabar Coast. It's bordered by Karnataka to the north, Tamil Nadu to the east, and the Arabian Sea to the west.",
        category: "Geography",
        keywords: &["kerala", "south india", "malabar coast", "karnataka", "tamil nadu", "arabian sea"],
    },
    FactRecord {
        question: "What is the capital of Rajasthan?",
        answer: "Jaipur is the capital of Rajasthan. It's known as the 'Pink City' due to the pink-colored buildings in its old city, and is famous for its palaces, forts, and vibrant culture.",
        category: "Geography",
        keywords: &["rajasthan", "jaipur", "pink city", "capital", "palaces", "forts"],
    },
    // Northeast India
    FactRecord {
        question: "What is the Hornbill Festival?",
        answer: "The Hornbill Festival is a major cultural event held in Nagaland every December, celebrating the heritage of the Naga tribes with traditional music, dance, crafts, and food.",
        category: "Festivals",
        keywords: &["hornbill", "nagaland", "naga tribes", "festival", "dance", "music"],
    },
    FactRecord {
        question: "Tell me about Assam's Bihu festival",
        answer: "Bihu is the most important festival of Assam, marking the Assamese New Year and the change of seasons. It is celebrated with folk dances, songs, and feasts.",
        category: "Festivals",
        keywords: &["bihu", "assam", "new year", "folk dance", "festival"],
    },
    // South India
    FactRecord {
        question: "What is the significance of Pongal?",
        answer: "Pongal is a harvest festival celebrated in Tamil Nadu, dedicated to the Sun God. People prepare a special dish called 'Pongal' and thank nature for a good harvest.",
        category: "Festivals",
        keywords: &["pongal", "tamil nadu", "harvest", "sun god", "festival"],
    },
    FactRecord {
        question: "Describe the Meenakshi Temple",
        answer: "The Meenakshi Temple in Madurai, Tamil Nadu, is a historic Hindu temple dedicated to Goddess Meenakshi and Lord Sundareswarar. It is renowned for its towering gopurams (gateway towers) and intricate sculptures.",
        category: "Historical Monuments",
        keywords: &["meenakshi", "madurai", "tamil nadu", "temple", "gopuram", "sculpture"],
    },
    // Tribal Culture
    FactRecord {
        question: "What is Warli art?",
        answer: "Warli art is a tribal art form from Maharashtra, characterized by simple white patterns on mud walls, depicting daily life, nature, and rituals.",
        category: "Traditional Arts",
        keywords: &["warli", "maharashtra", "tribal", "art", "mud walls"],
    },
    // Unique Monuments
    FactRecord {
        question: "Tell me about Sanchi Stupa",
        answer: "The Sanchi Stupa in Madhya Pradesh is one of the oldest stone structures in India, built by Emperor Ashoka in the 3rd century BCE. It is a UNESCO World Heritage Site and an important Buddhist monument.",
        category: "Historical Monuments",
        keywords: &["sanchi", "stupa", "madhya pradesh", "ashoka", "buddhist", "unesco"],
    },
    FactRecord {
        question: "What is the Gateway of India?",
        answer: "The Gateway of India is an iconic arch monument in Mumbai, Maharashtra, built in 1924 to commemorate the visit of King George V and Queen Mary. It overlooks the Arabian Sea.",
        category: "Historical Monuments",
        keywords: &["gateway of india", "mumbai", "maharashtra", "monument", "arabian sea"],
    },
    // Unique Attire
    FactRecord {
        question: "What is the traditional dress of Nagaland?",
        answer: "Traditional Naga attire includes colorful shawls, headgear adorned with feathers, and jewelry made from beads and brass. Each tribe has its own distinctive patterns and styles.",
        category: "Traditional Attire",
        keywords: &["nagaland", "naga", "shawl", "headgear", "tribe", "attire"],
    },
    // Unique Cuisine
    FactRecord {
        question: "What is the specialty of Goan cuisine?",
        answer: "Goan cuisine is known for its seafood, coconut, rice, and spices. Popular dishes include fish curry rice, vindaloo, and bebinca (a traditional dessert).",
        category: "Regional Cuisines",
        keywords: &["goa", "goan", "cuisine", "seafood", "vindaloo", "bebinca"],
    },
    // State-specific expansion
    FactRecord {
        question: "What is unique about Chhattisgarh's Bastar art?",
        answer: "Bastar art from Chhattisgarh is famous for its intricate metalwork, especially Dhokra art, and vibrant tribal crafts made by the local communities.",
        category: "Traditional Arts",
        keywords: &["chhattisgarh", "bastar", "dhokra", "tribal", "metalwork"],
    },
    FactRecord {
        question: "Tell me about Assam's tea culture.",
        answer: "Assam is world-renowned for its tea gardens. Assam Tea is known for its bold flavor and is a major export, with tea festivals and estate tours being popular cultural experiences.",
        category: "Regional Cuisines",
        keywords: &["assam", "tea", "tea gardens", "festival", "estate"],
    },
    FactRecord {
        question: "What is the Hornbill Festival of Nagaland?",
        answer: "The Hornbill Festival, held in Nagaland, is a vibrant celebration of Naga tribal culture, featuring traditional dances, music, crafts, and indigenous games.",
        category: "Festivals",
        keywords: &["nagaland", "hornbill", "festival", "naga", "tribal"],
    },
    FactRecord {
        question: "What is special about Gujarat's Navratri?",
        answer: "Navratri in Gujarat is celebrated with nine nights of Garba and Dandiya Raas dances, colorful attire, and devotion to Goddess Durga. It is one of the largest dance festivals in the world.",
        category: "Festivals",
        keywords: &["gujarat", "navratri", "garba", "dandiya", "durga"],
    },
    FactRecord {
        question: "Describe the living root bridges of Meghalaya.",
        answer: "Meghalaya is famous for its living root bridges, ingeniously grown from the roots of rubber trees by the Khasi and Jaintia tribes. These bridges are unique to the region and symbolize harmony with nature.",
        category: "Historical Monuments",
        keywords: &["meghalaya", "living root bridges", "khasi", "jaintia", "nature"],
    },
    FactRecord {
        question: "What is the traditional dance of Manipur?",
        answer: "Manipuri dance is a classical dance form from Manipur, known for its graceful movements and themes based on the love story of Radha and Krishna.",
        category: "Traditional Arts",
        keywords: &["manipur", "manipuri dance", "radha", "krishna", "classical"],
    },
    FactRecord {
        question: "What is unique about Sikkim's monasteries?",
        answer: "Sikkim is home to ancient Buddhist monasteries like Rumtek and Pemayangtse, which are centers of spiritual learning and vibrant festivals like Losar and Pang Lhabsol.",
        category: "Historical Monuments",
        keywords: &["sikkim", "monastery", "rumtek", "pemayangtse", "buddhist"],
    },
    FactRecord {
        question: "What is the famous craft of Tripura?",
        answer: "Tripura is known for its exquisite bamboo and cane crafts, including baskets, mats, and furniture, reflecting the skill of its tribal artisans.",
        category: "Crafts & Handicrafts",
        keywords: &["tripura", "bamboo", "cane", "craft", "tribal"],
    },
    FactRecord {
        question: "What is the significance of Punjab's Baisakhi festival?",
        answer: "Baisakhi is a major harvest festival in Punjab, marking the Punjabi New Year and the founding of the Khalsa. It is celebrated with energetic Bhangra and Gidda dances.",
        category: "Festivals",
        keywords: &["punjab", "baisakhi", "harvest", "khalsa", "bhangra"],
    },
    FactRecord {
        question: "What is the traditional attire of Himachal Pradesh?",
        answer: "Himachal Pradesh's traditional attire includes colorful woolen caps (topi), cholas, and shawls, reflecting the region's cold climate and vibrant culture.",
        category: "Traditional Attire",
        keywords: &["himachal pradesh", "topi", "shawl", "chola", "woolen"],
    },
    FactRecord {
        question: "What is the famous art of Madhya Pradesh?",
        answer: "Madhya Pradesh is known for Gond art, a tribal painting style featuring intricate patterns and vibrant colors, often depicting nature and folklore.",
        category: "Traditional Arts",
        keywords: &["madhya pradesh", "gond art", "tribal", "painting", "folklore"],
    },
    FactRecord {
        question: "What is the main festival of Odisha?",
        answer: "Rath Yatra is Odisha's grand chariot festival, celebrated at the Jagannath Temple in Puri, where massive chariots carry the deities through the streets.",
        category: "Festivals",
        keywords: &["odisha", "rath yatra", "jagannath", "puri", "chariot"],
    },
    FactRecord {
        question: "What is the famous cuisine of Telangana?",
        answer: "Telangana is known for its spicy Hyderabadi biryani, a fragrant rice dish with marinated meat, saffron, and aromatic spices, as well as tangy tamarind-based curries.",
        category: "Regional Cuisines",
        keywords: &["telangana", "hyderabadi biryani", "cuisine", "spicy", "tamarind"],
    },
    FactRecord {
        question: "What is the traditional dance of Andhra Pradesh?",
        answer: "Kuchipudi is the classical dance form of Andhra Pradesh, known for its expressive storytelling, fast rhythms, and dramatic characterizations.",
        category: "Traditional Arts",
        keywords: &["andhra pradesh", "kuchipudi", "dance", "classical", "storytelling"],
    },
    FactRecord {
        question: "What is the famous festival of West Bengal?",
        answer: "Durga Puja is West Bengal's most celebrated festival, marked by elaborate pandals, artistic idols, and cultural performances honoring Goddess Durga.",
        category: "Festivals",
        keywords: &["west bengal", "durga puja", "festival", "goddess", "pandal"],
    },
    FactRecord {
        question: "What is the unique craft of Jharkhand?",
        answer: "Jharkhand is known for its tribal Sohrai and Khovar paintings, which decorate village walls with natural colors and motifs inspired by nature.",
        category: "Crafts & Handicrafts",
        keywords: &["jharkhand", "sohrai", "khovar", "tribal", "painting"],
    },
    FactRecord {
        question: "What is the famous monument of Uttar Pradesh?",
        answer: "The Taj Mahal in Agra, Uttar Pradesh, is a UNESCO World Heritage Site and one of the Seven Wonders of the World, renowned for its white marble beauty and Mughal architecture.",
        category: "Historical Monuments",
        keywords: &["uttar pradesh", "taj mahal", "agra", "unesco", "mughal"],
    },
    FactRecord {
        question: "What is the traditional music of Rajasthan?",
        answer: "Rajasthan is famous for its folk music, especially the soulful tunes of the Manganiyar and Langha communities, using instruments like the sarangi and dholak.",
        category: "Traditional Arts",
        keywords: &["rajasthan", "folk music", "manganiyar", "langha", "sarangi"],
    },
    FactRecord {
        question: "What is the famous festival of Tamil Nadu?",
        answer: "Pongal is the most important festival of Tamil Nadu, celebrated as a harvest festival with the preparation of the sweet dish 'Pongal' and traditional rituals.",
        category: "Festivals",
        keywords: &["tamil nadu", "pongal", "harvest", "festival", "sweet dish"],
    },
    FactRecord {
        question: "What is the unique tradition of Uttarakhand?",
        answer: "Uttarakhand is known for its Nanda Devi Raj Jat Yatra, a grand pilgrimage and festival that takes place once every 12 years, celebrating the region's spiritual heritage.",
        category: "Festivals",
        keywords: &["uttarakhand", "nanda devi", "raj jat", "yatra", "pilgrimage"],
    },
];

/// Find the best-matching fact for a free-text query, or `None`.
pub fn find_fact(query: &str) -> Option<&'static FactRecord> {
    let normalized = query.trim().to_lowercase();

    FACTS
        .iter()
        .find(|fact| fact.question.to_lowercase() == normalized)
        .or_else(|| {
            let tokens: Vec<&str> = normalized.split_whitespace().collect();
            FACTS.iter().find(|fact| keyword_match(fact.keywords, &tokens))
        })
        .or_else(|| {
            FACTS.iter().find(|fact| {
                let question = fact.question.to_lowercase();
                question.contains(&normalized) || normalized.contains(&question)
            })
        })
}

/// A record matches when at least half of its keywords (rounded up)
/// overlap the query tokens in either containment direction. A record
/// with no keywords never matches this stage.
fn keyword_match(keywords: &[&str], tokens: &[&str]) -> bool {
    if keywords.is_empty() {
        return false;
    }
    let hits = keywords
        .iter()
        .filter(|keyword| {
            tokens
                .iter()
                .any(|token| token.contains(**keyword) || keyword.contains(*token))
        })
        .count();
    hits >= keywords.len().div_ceil(2)
}

/// A fresh uniform shuffle per call, truncated to `count` records.
pub fn random_facts(count: usize) -> Vec<&'static FactRecord> {
    let mut pool: Vec<&'static FactRecord> = FACTS.iter().collect();
    pool.shuffle(&mut thread_rng());
    pool.truncate(count);
    pool
}

/// All records in a category, preserving insertion order. Unknown
/// categories yield an empty vec.
pub fn facts_by_category(category: &str) -> Vec<&'static FactRecord> {
    FACTS
        .iter()
        .filter(|fact| fact.category == category)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_record_is_found_by_its_own_question() {
        for fact in FACTS {
            let found = find_fact(fact.question).expect("record should match itself");
            assert_eq!(found.question, fact.question);
        }
    }

    #[test]
    fn exact_match_ignores_case_and_whitespace() {
        let found = find_fact("  what is kathakali?  ").expect("normalized exact match");
        assert_eq!(found.question, "What is Kathakali?");
    }

    #[test]
    fn nonsense_query_returns_none() {
        assert!(find_fact("quantum flux capacitor maintenance schedule").is_none());
    }

    #[test]
    fn keyword_stage_matches_at_half_threshold() {
        // Four keywords, so two bidirectional containments suffice.
        let found = find_fact("madhubani painting styles").expect("keyword match");
        assert_eq!(found.question, "What is Madhubani painting?");
    }

    #[test]
    fn empty_keyword_list_never_matches() {
        assert!(!keyword_match(&[], &["anything"]));
    }

    #[test]
    fn partial_stage_matches_question_fragment() {
        // Misses exact and keyword stages, but the normalized question
        // contains this query as a substring.
        let found = find_fact("story of Konark").expect("partial match");
        assert_eq!(found.question, "What is the story of Konark Sun Temple?");
    }

    #[test]
    fn random_facts_are_distinct_and_bounded() {
        let five = random_facts(5);
        assert_eq!(five.len(), 5);
        let mut questions: Vec<&str> = five.iter().map(|fact| fact.question).collect();
        questions.sort_unstable();
        questions.dedup();
        assert_eq!(questions.len(), 5);

        let all = random_facts(FACTS.len() + 100);
        assert_eq!(all.len(), FACTS.len());
    }

    #[test]
    fn unknown_category_yields_empty() {
        assert!(facts_by_category("Cryptozoology").is_empty());
    }

    #[test]
    fn category_filter_preserves_insertion_order() {
        let monuments = facts_by_category("Historical Monuments");
        assert!(!monuments.is_empty());
        assert_eq!(monuments[0].question, "What is the story of Konark Sun Temple?");
    }
}
