//! 衣類タイプ判定
//!
//! 商品説明に含まれる韓国語キーワードから衣類タイプ・サブタイプを判定する。
//! テーブルは具体的なものから順に並べており、最初に一致した行を採用する。

use crate::types::UNCLASSIFIED;
use serde::Serialize;

/// 衣類タイプの判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClothingMatch {
    pub clothing_type: &'static str,
    pub sub_type: &'static str,
    pub matched_keyword: &'static str,
}

impl ClothingMatch {
    pub fn unclassified() -> Self {
        Self {
            clothing_type: UNCLASSIFIED,
            sub_type: UNCLASSIFIED,
            matched_keyword: "",
        }
    }

    pub fn is_classified(&self) -> bool {
        self.clothing_type != UNCLASSIFIED
    }
}

struct KeywordEntry {
    clothing_type: &'static str,
    sub_type: &'static str,
    keywords: &'static [&'static str],
}

const fn entry(
    clothing_type: &'static str,
    sub_type: &'static str,
    keywords: &'static [&'static str],
) -> KeywordEntry {
    KeywordEntry { clothing_type, sub_type, keywords }
}

const OUTER: &str = "아우터";
const DRESS: &str = "원피스";
const BOTTOM: &str = "하의";
const TOP: &str = "상의";

static KEYWORD_ENTRIES: &[KeywordEntry] = &[
    // アウター
    entry(OUTER, "트렌치코트", &["트렌치코트", "트렌치 코트", "트렌치"]),
    entry(OUTER, "필드자켓", &["필드자켓", "필드 자켓", "M-65", "M65", "개파카"]),
    entry(OUTER, "사파리자켓", &["사파리자켓", "사파리 자켓", "사파리"]),
    entry(OUTER, "윈드브레이커", &["윈드브레이커", "바람막이", "윈드자켓"]),
    entry(OUTER, "라이더", &["라이더자켓", "라이더 자켓", "라이더", "바이커자켓", "바이커"]),
    entry(OUTER, "패딩", &["패딩", "다운자켓", "다운 자켓", "구스다운", "패딩자켓", "패딩점퍼", "다운"]),
    entry(OUTER, "블레이저", &["블레이저", "정장자켓", "싱글 블레이저", "더블 블레이저"]),
    entry(OUTER, "가디건", &["가디건", "카디건", "가디간"]),
    entry(OUTER, "베스트", &["베스트", "조끼", "질레"]),
    entry(OUTER, "야상", &["야상", "밀리터리자켓"]),
    entry(OUTER, "점퍼", &["점퍼", "잠바", "점바", "윈터자켓", "윈터 자켓"]),
    entry(OUTER, "코트", &["코트", "오버코트", "더플코트", "피코트", "울코트"]),
    entry(OUTER, "자켓", &["자켓", "재킷", "져킷", "JKT"]),
    // ワンピース
    entry(DRESS, "점프수트", &["점프수트", "올인원"]),
    entry(DRESS, "원피스", &["원피스", "셔츠 원피스", "셔츠원피스"]),
    entry(DRESS, "드레스", &["드레스"]),
    // ボトムス
    entry(BOTTOM, "카고팬츠", &["카고팬츠", "카고 팬츠", "카고"]),
    entry(BOTTOM, "와이드팬츠", &["와이드팬츠", "와이드 팬츠", "와이드"]),
    entry(BOTTOM, "부츠컷", &["부츠컷", "부츠 컷", "플레어팬츠", "플레어 팬츠"]),
    entry(BOTTOM, "큐롯", &["큐롯", "큐롯팬츠"]),
    entry(BOTTOM, "슬랙스", &["슬랙스", "드레스 팬츠", "드레스팬츠", "정장바지"]),
    entry(BOTTOM, "조거", &["조거", "조거팬츠", "트레이닝팬츠"]),
    entry(BOTTOM, "치노", &["치노", "치노팬츠", "면바지"]),
    entry(BOTTOM, "데님", &["데님", "청바지", "진", "진팬츠", "워싱 데님"]),
    entry(BOTTOM, "쇼츠", &["쇼츠", "숏팬츠", "반바지", "숏츠"]),
    entry(BOTTOM, "스커트", &["스커트", "치마", "롱스커트", "미니스커트", "미디스커트", "플레어"]),
    entry(BOTTOM, "팬츠", &["팬츠", "바지", "팬트"]),
    // トップス
    entry(TOP, "롱슬리브", &["롱슬리브", "롱 슬리브", "긴팔티"]),
    entry(TOP, "반팔", &["반팔", "숏슬리브", "숏 슬리브", "반팔티"]),
    entry(TOP, "후디", &["후디", "후드", "후드티", "후디드"]),
    entry(TOP, "맨투맨", &["맨투맨", "스웻셔츠", "스웨트셔츠", "스웻"]),
    entry(TOP, "터틀넥", &["터틀넥", "목폴라", "폴라", "하이넥"]),
    entry(TOP, "폴로", &["폴로", "카라티", "PK셔츠"]),
    entry(TOP, "탱크탑", &["탱크탑", "나시", "민소매", "슬리브리스"]),
    entry(TOP, "블라우스", &["블라우스"]),
    entry(TOP, "니트", &["니트", "니트웨어", "케이블 니트", "케이블니트"]),
    entry(TOP, "스웨터", &["스웨터", "풀오버", "크루넥 스웨터"]),
    entry(TOP, "카라티", &["카라 티", "카라 티셔츠"]),
    entry(TOP, "셔츠", &["셔츠", "옥스포드", "드레스셔츠"]),
    entry(TOP, "티셔츠", &["티셔츠", "티", "T셔츠", "TEE"]),
    // 雑貨
    entry(UNCLASSIFIED, "가방", &["가방", "백", "토트백", "크로스백", "숄더백", "백팩"]),
    entry(UNCLASSIFIED, "모자", &["모자", "캡", "비니", "버킷햇", "페도라"]),
    entry(UNCLASSIFIED, "신발", &["신발", "부츠", "스니커즈", "로퍼", "샌들"]),
    entry(UNCLASSIFIED, "머플러", &["머플러", "목도리", "숄", "스카프"]),
    entry(UNCLASSIFIED, "벨트", &["벨트"]),
    entry(UNCLASSIFIED, "액세서리", &["액세서리", "넥타이", "브로치", "뱃지"]),
];

/// 説明文から衣類タイプを判定
///
/// 大文字小文字を区別せず、空白を除去した形でも照合する（"롱 슬리브" と "롱슬리브"）。
pub fn match_clothing_type(description: &str) -> ClothingMatch {
    let normalized = description.to_lowercase();
    let no_space: String = normalized.split_whitespace().collect();

    for entry in KEYWORD_ENTRIES {
        for &keyword in entry.keywords {
            let kw = keyword.to_lowercase();
            let kw_no_space: String = kw.split_whitespace().collect();

            if normalized.contains(&kw) || no_space.contains(&kw_no_space) {
                return ClothingMatch {
                    clothing_type: entry.clothing_type,
                    sub_type: entry.sub_type,
                    matched_keyword: keyword,
                };
            }
        }
    }

    ClothingMatch::unclassified()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_outer_specific_first() {
        let result = match_clothing_type("울 트렌치 코트");
        assert_eq!(result.clothing_type, "아우터");
        assert_eq!(result.sub_type, "트렌치코트");
    }

    #[test]
    fn test_match_ignores_spaces() {
        let result = match_clothing_type("코튼 롱 슬리브");
        assert_eq!(result.clothing_type, "상의");
        assert_eq!(result.sub_type, "롱슬리브");
    }

    #[test]
    fn test_match_latin_keyword_case_insensitive() {
        let result = match_clothing_type("logo tee");
        assert_eq!(result.sub_type, "티셔츠");
        assert_eq!(result.matched_keyword, "TEE");
    }

    #[test]
    fn test_match_hoodie() {
        let result = match_clothing_type("후드티");
        assert_eq!(result.clothing_type, "상의");
        assert_eq!(result.sub_type, "후디");
    }

    #[test]
    fn test_match_bottoms() {
        assert_eq!(match_clothing_type("워크 카고 팬츠").sub_type, "카고팬츠");
        assert_eq!(match_clothing_type("셀비지 청바지").sub_type, "데님");
    }

    #[test]
    fn test_match_accessory_is_unclassified_type() {
        let result = match_clothing_type("레더 벨트");
        assert_eq!(result.clothing_type, "기타");
        assert_eq!(result.sub_type, "벨트");
        assert!(!result.is_classified());
    }

    #[test]
    fn test_no_match() {
        let result = match_clothing_type("");
        assert_eq!(result, ClothingMatch::unclassified());
    }
}
