//! アーカイブ分類
//!
//! 商品名と画像ラベルのキーワード一致からアーカイブ展示カテゴリを決める。
//! テキスト一致は1件20点（上限60）、画像ラベル一致は1件10点（上限40）。

use serde::Serialize;

const TEXT_HIT_SCORE: u32 = 20;
const TEXT_SCORE_CAP: u32 = 60;
const VISION_HIT_SCORE: u32 = 10;
const VISION_SCORE_CAP: u32 = 40;

/// アーカイブカテゴリ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchiveCategory {
    MilitaryArchive,
    WorkwearArchive,
    OutdoorArchive,
    JapaneseArchive,
    HeritageEurope,
    BritishArchive,
    UnisexArchive,
    Uncategorized,
}

impl ArchiveCategory {
    pub fn label(&self) -> &'static str {
        match self {
            ArchiveCategory::MilitaryArchive => "MILITARY ARCHIVE",
            ArchiveCategory::WorkwearArchive => "WORKWEAR ARCHIVE",
            ArchiveCategory::OutdoorArchive => "OUTDOOR ARCHIVE",
            ArchiveCategory::JapaneseArchive => "JAPANESE ARCHIVE",
            ArchiveCategory::HeritageEurope => "HERITAGE EUROPE",
            ArchiveCategory::BritishArchive => "BRITISH ARCHIVE",
            ArchiveCategory::UnisexArchive => "UNISEX ARCHIVE",
            ArchiveCategory::Uncategorized => "UNCATEGORIZED",
        }
    }
}

/// 確信度の段階
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
}

impl ConfidenceLevel {
    fn from_score(score: u32) -> Self {
        if score > 70 {
            ConfidenceLevel::High
        } else if score > 40 {
            ConfidenceLevel::Medium
        } else {
            ConfidenceLevel::Low
        }
    }
}

/// 得点の内訳
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveBreakdown {
    pub text_score: u32,
    pub vision_score: u32,
    pub text_matches: Vec<&'static str>,
    pub vision_labels: Vec<&'static str>,
}

/// アーカイブ分類結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveClassification {
    pub category: ArchiveCategory,
    pub score: u32,
    pub confidence: ConfidenceLevel,
    pub breakdown: ArchiveBreakdown,
}

static ARCHIVE_KEYWORDS: &[(ArchiveCategory, &[&str])] = &[
    (ArchiveCategory::MilitaryArchive, &[
        "M-65", "MA-1", "N-3B", "N-2B", "N-1", "BDU",
        "Army", "Navy", "Air Force", "Military",
        "Combat", "Field Jacket", "Cargo", "Fatigue", "Deck Jacket",
        "Alpha Industries", "Rothco", "Propper", "Buzz Rickson", "Real McCoy",
        "USMC", "USAF", "CWU", "Camo", "Camouflage",
        "Liner", "Parka", "Tanker", "Deck",
        "미군", "군용", "개파카", "밀리터리", "군복", "야상", "카모", "카고",
    ]),
    (ArchiveCategory::WorkwearArchive, &[
        "Carhartt", "Dickies", "Pointer", "Roundhouse", "Round House", "Ben Davis",
        "Red Kap", "Stan Ray", "Key Imperial", "Filson",
        "Work", "Chore", "Overall", "Coverall", "Logger",
        "Denim", "Canvas", "Duck", "Hickory", "Double Knee",
        "Bib", "Painter", "Dungaree",
        "워크웨어", "칼하트", "디키즈", "작업복", "초어", "커버올", "오버올", "더블니", "히코리",
    ]),
    (ArchiveCategory::OutdoorArchive, &[
        "Patagonia", "The North Face", "North Face", "Arc'teryx", "Arcteryx",
        "Columbia", "Mammut", "Helly Hansen", "Marmot", "Salomon",
        "L.L.Bean", "LL Bean", "Eddie Bauer", "Sierra Designs",
        "Pendleton", "Woolrich", "Mont-bell", "Montbell",
        "Outdoor", "Gore-Tex", "Goretex", "Fleece", "Hiking", "Climbing",
        "Anorak", "Nuptse", "Retro X", "Shell", "Pertex", "DWR",
        "파타고니아", "노스페이스", "아크테릭스", "아웃도어", "고어텍스",
        "플리스", "아노락", "눕시", "윈드브레이커",
    ]),
    (ArchiveCategory::JapaneseArchive, &[
        "Visvim", "Kapital", "45rpm", "Evisu", "Porter", "Needles",
        "Beams", "United Arrows", "Nanamica", "Ships", "Journal Standard",
        "Yohji Yamamoto", "Comme des Garcons", "CDG", "Issey Miyake",
        "Sacai", "Undercover", "WTAPS", "Neighborhood", "Human Made",
        "Wacko Maria", "Engineered Garments",
        "Japanese", "Japan", "Selvedge", "Indigo", "Sashiko", "Boro",
        "일본", "빔즈", "니들스", "아메카지", "캐피탈", "비스빔",
        "셀비지", "인디고", "사시코", "보로", "꼼데가르송",
    ]),
    (ArchiveCategory::HeritageEurope, &[
        "Gucci", "Prada", "Louis Vuitton", "Hermes", "Dior", "Chanel",
        "Valentino", "Fendi", "Bottega Veneta", "Versace", "Armani",
        "A.P.C.", "Acne Studios", "COS", "Our Legacy", "Lemaire", "AMI",
        "French", "German", "Swedish", "Italian", "Euro",
        "Heritage", "Vintage", "Classic", "Elegant",
        "유럽", "프랑스", "독일", "이탈리아", "명품", "하이엔드", "디자이너",
        "구찌", "프라다", "루이비통", "에르메스", "샤넬",
    ]),
    (ArchiveCategory::BritishArchive, &[
        "Burberry", "Aquascutum", "Grenfell", "Barbour", "Belstaff",
        "Mackintosh", "Fred Perry", "Baracuta", "Gloverall",
        "Paul Smith", "Vivienne Westwood", "Ted Baker", "Nigel Cabourn",
        "Dunhill", "Dr. Martens", "Clarks",
        "British", "UK", "England", "London", "Scottish",
        "Trench Coat", "Waxed Cotton", "Waxed", "Tweed", "Harris Tweed",
        "Tartan", "Duffle", "Harrington",
        "영국", "바버", "버버리", "브리티시", "왁스", "타탄", "트위드", "트렌치", "더플",
    ]),
    (ArchiveCategory::UnisexArchive, &[
        "Ralph Lauren", "Polo", "Brooks Brothers", "Tommy Hilfiger",
        "Lacoste", "Gant", "J.Crew", "J.Press",
        "Levi's", "Champion", "Nike", "Adidas", "Stussy", "Supreme", "Gap",
        "Unisex", "남녀공용", "유니섹스", "남녀", "공용",
        "프리사이즈", "Free Size", "Freesize", "One Size",
        "오버사이즈", "Oversize", "Oversized", "오버핏",
        "박시핏", "Boxy", "젠더리스", "Genderless", "무지", "Basic",
        "랄프로렌", "폴로", "타미힐피거", "라코스테", "나이키", "아디다스", "리바이스", "갭",
    ]),
];

/// 商品名と画像ラベルからアーカイブカテゴリを判定
///
/// 最高得点のカテゴリを採用し、同点なら表の先頭側を優先する。
/// 全カテゴリ0点なら UNCATEGORIZED。
pub fn classify_archive(product_name: &str, vision_labels: &[String]) -> ArchiveClassification {
    let lower_name = product_name.to_lowercase();
    let lower_labels: Vec<String> = vision_labels.iter().map(|l| l.to_lowercase()).collect();

    let mut best: Option<(ArchiveCategory, u32, ArchiveBreakdown)> = None;

    for &(category, keywords) in ARCHIVE_KEYWORDS {
        let mut breakdown = ArchiveBreakdown::default();

        for &keyword in keywords {
            let low = keyword.to_lowercase();
            if lower_name.contains(&low) {
                breakdown.text_matches.push(keyword);
            }
            if lower_labels.iter().any(|l| *l == low) {
                breakdown.vision_labels.push(keyword);
            }
        }

        breakdown.text_score =
            (breakdown.text_matches.len() as u32 * TEXT_HIT_SCORE).min(TEXT_SCORE_CAP);
        breakdown.vision_score =
            (breakdown.vision_labels.len() as u32 * VISION_HIT_SCORE).min(VISION_SCORE_CAP);
        let score = (breakdown.text_score + breakdown.vision_score).min(100);

        if best.as_ref().map_or(true, |(_, top, _)| score > *top) {
            best = Some((category, score, breakdown));
        }
    }

    match best {
        Some((category, score, breakdown)) if score > 0 => ArchiveClassification {
            category,
            score,
            confidence: ConfidenceLevel::from_score(score),
            breakdown,
        },
        _ => ArchiveClassification {
            category: ArchiveCategory::Uncategorized,
            score: 0,
            confidence: ConfidenceLevel::Low,
            breakdown: ArchiveBreakdown::default(),
        },
    }
}
