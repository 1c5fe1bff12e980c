//! 商品名パーサー
//!
//! マーケットプレイスの商品名からブランド・性別・サイズ・説明を抽出する。
//!
//! 商品名の典型形: `<英字ブランド> <韓国語ブランド> <説明> <GENDER>-<SIZE>`
//! 例: `CARHARTT 칼하트 워크 자켓 MAN-L`

use crate::types::{Gender, ParsedName};
use regex::Regex;

lazy_static::lazy_static! {
    /// 末尾の GENDER-SIZE
    static ref GENDER_SIZE_RE: Regex =
        Regex::new(r"(?i)\s+(MAN|WOMAN|KIDS|UNISEX)\s*[-\s]\s*(\S+)$").unwrap();
    /// 先頭の英字ブランド（韓国語が現れる直前まで）
    static ref LATIN_BRAND_RE: Regex =
        Regex::new(r"(?i)^([A-Z0-9&.'/\-\s]+?)\s+[가-힣]").unwrap();
}

/// 韓国語ブランドとして採用する最大単語数
const MAX_KOREAN_BRAND_WORDS: usize = 3;

/// 韓国語ブランド1単語の最大文字数
const MAX_KOREAN_BRAND_WORD_CHARS: usize = 7;

/// サイズ末尾の「インチ」表記
const INCH_SUFFIX: &str = "인치";

/// 衣類の説明語（ブランド名と区別するための除外リスト）
const DESCRIPTIVE_KEYWORDS: &[&str] = &[
    "아카이브", "빈티지", "클래식", "모던", "레트로", "그런지",
    "슬림", "오버사이즈", "릴렉스드", "와이드", "테이퍼드",
    "다크블루", "블랙", "화이트", "네이비", "그레이", "카키", "베이지",
    "워싱", "데님", "코튼", "울", "린넨", "실크", "캐시미어", "폴리",
    "스트라이프", "체크", "플로럴", "솔리드", "카모", "도트",
    "티셔츠", "셔츠", "블라우스", "니트", "스웨터", "후디", "후드", "후드티", "맨투맨", "스웻", "스웻셔츠",
    "팬츠", "스커트", "쇼츠", "슬랙스",
    "자켓", "코트", "점퍼", "블레이저", "가디건", "베스트", "야상",
    "윈드브레이커", "패딩", "트렌치", "원피스", "드레스",
    "노티컬", "마린", "보트넥", "크루넥", "라운드넥", "V넥",
    "반팔", "긴팔", "롱", "숏", "미니", "미디", "맥시",
    "테크니컬", "유틸리티", "밀리터리", "케이블", "플레어",
    "어반", "스포티", "캐주얼", "포멀", "비즈니스",
    "헤리티지", "에센셜", "시그니처", "프리미엄",
    "사토리얼", "퓨어", "싱글", "더블", "하프", "풀",
    "오버핏", "레귤러핏", "슬림핏", "루즈핏",
    "보태니컬", "에스닉", "부클", "텍스처", "덤블", "퍼",
    "메쉬", "네트", "크롭", "롱슬리브", "숏슬리브",
    "플리츠", "패널", "배색", "컬러블록", "파이핑",
    "노카라", "셀비지", "인디고", "로우", "하이",
    "스트레이트", "부츠컷", "카고", "조거", "큐롯",
    "자수", "태슬", "프린지", "아트워크", "그래픽",
    "헤비", "라이트", "미디엄",
    "더티", "컨투어", "센터", "심", "스티치",
    "사이드", "프론트", "백",
    "볼륨", "터치",
    "멜톤", "미니멀", "맥시멀",
    "어슬렌틱", "팝", "아트",
];

/// ハングル音節を含むか
pub fn has_korean(text: &str) -> bool {
    text.chars().any(|c| ('가'..='힣').contains(&c))
}

/// 説明語を含む単語か（部分一致）
pub fn is_descriptive_keyword(word: &str) -> bool {
    DESCRIPTIVE_KEYWORDS.iter().any(|k| word.contains(k))
}

/// 商品名をパースする
///
/// 純粋関数。入力がどのような形でもエラーにはならず、
/// 抽出できなかった項目は空文字または `UNKNOWN` になる。
///
/// # Examples
/// ```
/// use fusion_common::{parse_product_name, Gender};
///
/// let parsed = parse_product_name("CARHARTT 워크 자켓 WOMAN-M");
/// assert_eq!(parsed.brand, "CARHARTT");
/// assert_eq!(parsed.gender, Gender::Woman);
/// assert_eq!(parsed.size, "M");
/// ```
pub fn parse_product_name(name: &str) -> ParsedName {
    let mut remaining = name.trim().to_string();
    let mut gender = Gender::Unknown;
    let mut size = String::new();

    // 1. 末尾の GENDER-SIZE
    if let Some(caps) = GENDER_SIZE_RE.captures(&remaining) {
        gender = Gender::parse(&caps[1]);
        let raw_size = &caps[2];
        size = raw_size.strip_suffix(INCH_SUFFIX).unwrap_or(raw_size).to_string();
        let start = caps.get(0).map(|m| m.start()).unwrap_or(remaining.len());
        remaining = remaining[..start].trim().to_string();
    }

    // 2. 英字ブランド
    let (brand, rest) = split_latin_brand(&remaining);
    remaining = rest;

    // 3. 韓国語ブランドと説明
    let (brand_korean, description) = split_korean_brand(&remaining);

    ParsedName {
        brand,
        brand_korean,
        description,
        gender,
        size,
    }
}

/// 先頭の英字ブランドを切り出す
fn split_latin_brand(text: &str) -> (String, String) {
    if let Some(caps) = LATIN_BRAND_RE.captures(text) {
        let brand = caps[1].trim().to_string();
        let rest = text[brand.len()..].trim().to_string();
        return (brand, rest);
    }

    let mut words = text.split_whitespace();
    match words.next() {
        // 全部英字、または最初の単語が英字ならそれをブランドとする
        Some(first) if !has_korean(text) || !has_korean(first) => {
            (first.to_string(), words.collect::<Vec<_>>().join(" "))
        }
        _ => (String::new(), text.to_string()),
    }
}

/// 韓国語ブランドと説明に分割する
fn split_korean_brand(text: &str) -> (String, String) {
    if text.is_empty() || !has_korean(text) {
        return (String::new(), text.to_string());
    }

    let words: Vec<&str> = text.split_whitespace().collect();
    let accepted = words
        .iter()
        .take(MAX_KOREAN_BRAND_WORDS)
        .take_while(|w| {
            has_korean(w)
                && w.chars().count() <= MAX_KOREAN_BRAND_WORD_CHARS
                && !is_descriptive_keyword(w)
        })
        .count();

    if accepted == 0 {
        return (String::new(), text.to_string());
    }

    (words[..accepted].join(" "), words[accepted..].join(" "))
}
